//! Global Application State
//!
//! Reactive state shared across pages: toast messages and the auth flag.
//! Everything else is component-local by design.

use leptos::*;

use crate::api::ApiError;
use crate::state::session;

/// App-wide signals provided via context
#[derive(Clone)]
pub struct GlobalState {
    /// Whether the current tab holds a verified session.
    pub verified: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        verified: create_rw_signal(session::is_verified()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

fn browser_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show an API failure as a toast, classified for the user: offline vs
    /// unreachable for transport errors, canned text for 429/5xx, the
    /// backend's own message otherwise.
    pub fn show_api_error(&self, err: &ApiError) {
        self.show_error(&err.user_message(browser_online()));
    }

    /// Record a verified session (login/signup succeeded).
    pub fn mark_verified(&self) {
        session::set_verified();
        self.verified.set(true);
    }

    /// Forget the session (logout).
    pub fn mark_logged_out(&self) {
        session::clear_verified();
        self.verified.set(false);
    }
}
