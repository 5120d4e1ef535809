//! Navigation Component
//!
//! Header navigation bar with brand, links and logout.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let navigate = use_navigate();
    let logout_state = state.clone();
    let on_logout = move |_| {
        let state = logout_state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            // Best effort server-side; the local flag is cleared regardless.
            if let Err(e) = api::auth::logout().await {
                web_sys::console::error_1(&format!("Logout request failed: {}", e).into());
            }
            state.mark_logged_out();
            navigate("/login", Default::default());
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💚"</span>
                        <span class="text-xl font-bold text-white">"Vital"</span>
                    </A>

                    // Navigation links (only with a verified session)
                    {move || {
                        if state.verified.get() {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/" label="Dashboard" />
                                    <NavLink href="/biomarkers" label="Biomarkers" />
                                    <NavLink href="/nutrition" label="Nutrition" />
                                    <NavLink href="/workouts" label="Workouts" />
                                    <NavLink href="/interventions" label="Interventions" />
                                    <NavLink href="/admin/memories" label="Memories" />
                                    <button
                                        on:click=on_logout.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/login" label="Sign in" />
                                </div>
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
