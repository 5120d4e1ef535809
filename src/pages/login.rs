//! Login Page
//!
//! Sign-in and sign-up forms. On success the session flag is set and the
//! router moves to the dashboard.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{self, ApiError};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Login / signup page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (mode, set_mode) = create_signal(AuthMode::SignIn);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current_mode = mode.get();
        let n = name.get();
        let e = email.get();
        let p = password.get();

        // Shallow presence checks only; the backend validates for real.
        if e.is_empty() || p.is_empty() || (current_mode == AuthMode::SignUp && n.is_empty()) {
            set_error.set(Some("Please fill in all fields.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match current_mode {
                AuthMode::SignIn => api::auth::login(&e, &p).await,
                AuthMode::SignUp => api::auth::signup(&n, &e, &p).await,
            };

            match result {
                Ok(()) => {
                    state_clone.mark_verified();
                    navigate("/", Default::default());
                }
                Err(err @ ApiError::Network(_)) => {
                    state_clone.show_api_error(&err);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md border border-gray-700">
                <div class="text-center mb-6">
                    <div class="text-4xl mb-2">"💚"</div>
                    <h1 class="text-2xl font-bold">"Welcome to Vital"</h1>
                    <p class="text-gray-400 text-sm mt-1">"Your health companion"</p>
                </div>

                // Mode toggle
                <div class="flex space-x-2 mb-6">
                    <ModeButton
                        label="Sign In"
                        current=mode
                        target=AuthMode::SignIn
                        on_click=move |_| { set_mode.set(AuthMode::SignIn); set_error.set(None); }
                    />
                    <ModeButton
                        label="Sign Up"
                        current=mode
                        target=AuthMode::SignUp
                        on_click=move |_| { set_mode.set(AuthMode::SignUp); set_error.set(None); }
                    />
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Name (signup only)
                    {move || {
                        if mode.get() == AuthMode::SignUp {
                            view! {
                                <input
                                    type="text"
                                    placeholder="Name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    // Inline error banner
                    {move || error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                            {msg}
                        </div>
                    })}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors"
                    >
                        {move || {
                            if submitting.get() {
                                "Please wait..."
                            } else if mode.get() == AuthMode::SignIn {
                                "Sign In"
                            } else {
                                "Create Account"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<AuthMode>,
    target: AuthMode,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "flex-1 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
