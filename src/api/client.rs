//! HTTP Client Core
//!
//! One generic request function over browser fetch. Every endpoint wrapper in
//! this module tree goes through [`request`] or [`upload`]; nothing else in
//! the crate touches the network.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{error_message, ApiError};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

const API_URL_KEY: &str = "vital_api_url";
const API_TOKEN_KEY: &str = "vital_api_token";

/// How a call site authenticates against the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Auth {
    /// Same-origin session cookie (`credentials: include`).
    Cookie,
    /// `Authorization: Bearer <token>` from local storage (admin surface).
    Bearer,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, url);
    }
}

/// Bearer token for the admin surface, if one has been saved.
pub fn get_api_token() -> Option<String> {
    local_storage()
        .and_then(|s| s.get_item(API_TOKEN_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

/// Save the admin bearer token.
pub fn set_api_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_TOKEN_KEY, token);
    }
}

/// Forget the admin bearer token.
pub fn clear_api_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(API_TOKEN_KEY);
    }
}

fn authenticate(builder: RequestBuilder, auth: Auth) -> RequestBuilder {
    match auth {
        Auth::Cookie => builder.credentials(web_sys::RequestCredentials::Include),
        Auth::Bearer => match get_api_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        },
    }
}

async fn into_result<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.json::<serde_json::Value>().await.ok();
        return Err(ApiError::Api {
            status: response.status(),
            message: error_message(body),
        });
    }
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one JSON request. A 2xx response resolves to its parsed body; a
/// non-2xx response rejects with the backend's `message`; a transport failure
/// rejects with the fetch error unchanged.
pub async fn request<T, B>(
    method: Method,
    path: &str,
    auth: Auth,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", get_api_base(), path);
    let builder = authenticate(RequestBuilder::new(&url).method(method), auth);

    let request = match body {
        Some(b) => builder.json(b),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    into_result(response).await
}

pub async fn get<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    request::<T, ()>(Method::GET, path, auth, None).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(
    path: &str,
    auth: Auth,
    body: &B,
) -> Result<T, ApiError> {
    request(Method::POST, path, auth, Some(body)).await
}

/// POST with no body (logout, triggers).
pub async fn post_empty<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    request::<T, ()>(Method::POST, path, auth, None).await
}

pub async fn put<T: DeserializeOwned, B: Serialize>(
    path: &str,
    auth: Auth,
    body: &B,
) -> Result<T, ApiError> {
    request(Method::PUT, path, auth, Some(body)).await
}

pub async fn patch<T: DeserializeOwned, B: Serialize>(
    path: &str,
    auth: Auth,
    body: &B,
) -> Result<T, ApiError> {
    request(Method::PATCH, path, auth, Some(body)).await
}

pub async fn delete<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    request::<T, ()>(Method::DELETE, path, auth, None).await
}

/// Upload one file as `multipart/form-data` under `field`, with cookie
/// credentials. No `Content-Type` header is set: the browser owns the
/// multipart boundary.
pub async fn upload<T: DeserializeOwned>(
    path: &str,
    field: &str,
    file: &web_sys::File,
) -> Result<T, ApiError> {
    let url = format!("{}{}", get_api_base(), path);

    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob_and_filename(field, file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

    let request = RequestBuilder::new(&url)
        .method(Method::POST)
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    into_result(response).await
}
