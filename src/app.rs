//! App Root Component
//!
//! Main application component with routing, the auth gate, and global
//! providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{AdminMemories, Biomarkers, Dashboard, Interventions, Login, Nutrition, Workouts};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/login" view=Login />
                        <Route path="/" view=|| view! {
                            <RequireAuth><Dashboard /></RequireAuth>
                        } />
                        <Route path="/biomarkers" view=|| view! {
                            <RequireAuth><Biomarkers /></RequireAuth>
                        } />
                        <Route path="/nutrition" view=|| view! {
                            <RequireAuth><Nutrition /></RequireAuth>
                        } />
                        <Route path="/workouts" view=|| view! {
                            <RequireAuth><Workouts /></RequireAuth>
                        } />
                        <Route path="/interventions" view=|| view! {
                            <RequireAuth><Interventions /></RequireAuth>
                        } />
                        <Route path="/admin/memories" view=|| view! {
                            <RequireAuth><AdminMemories /></RequireAuth>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Renders children only with a verified session; otherwise bounces to login.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.verified.get() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Footer showing which backend this client talks to
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"Vital · your health companion"</span>
                <span>{format!("API: {}", api::get_api_base())}</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
