//! Session Flag
//!
//! The only client-side persisted auth state: a `verifiedUser` flag in
//! sessionStorage that gates the protected routes. The real session lives in
//! the backend cookie; this flag just tells the router whether to bother.

const VERIFIED_KEY: &str = "verifiedUser";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Whether this tab has a verified session.
pub fn is_verified() -> bool {
    session_storage()
        .and_then(|s| s.get_item(VERIFIED_KEY).ok().flatten())
        .as_deref()
        == Some("true")
}

/// Mark this tab as verified after a successful login/signup.
pub fn set_verified() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(VERIFIED_KEY, "true");
    }
}

/// Drop the flag on logout.
pub fn clear_verified() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(VERIFIED_KEY);
    }
}
