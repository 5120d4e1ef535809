//! Auth Endpoints
//!
//! Cookie-session login/signup/logout. Firebase specifics live server-side;
//! the client only sees the session cookie and the responses' messages.

use serde::Serialize;

use super::client::{self, Auth};
use super::error::ApiError;
use crate::models::Profile;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Sign in. On success the backend sets the session cookie.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    let _: serde_json::Value =
        client::post("/auth/login", Auth::Cookie, &Credentials { email, password }).await?;
    Ok(())
}

/// Create an account and sign in.
pub async fn signup(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let _: serde_json::Value =
        client::post("/auth/signup", Auth::Cookie, &SignupRequest { name, email, password })
            .await?;
    Ok(())
}

/// End the session server-side.
pub async fn logout() -> Result<(), ApiError> {
    let _: serde_json::Value = client::post_empty("/auth/logout", Auth::Cookie).await?;
    Ok(())
}

/// Fetch the signed-in user's profile.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    client::get("/users/me", Auth::Cookie).await
}
