//! Admin Memories Page
//!
//! Inspector for backend-stored user facts ("memories") that personalize the
//! AI-generated plans. This surface authenticates with a bearer token rather
//! than the session cookie.

use leptos::*;

use crate::api::{self, client, ApiError};
use crate::components::{ConfirmModal, ListSkeleton};
use crate::models::Memory;
use crate::state::global::GlobalState;

/// Admin memory inspector page component
#[component]
pub fn AdminMemories() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (memories, set_memories) = create_signal(Vec::<Memory>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (search, set_search) = create_signal(String::new());
    let (reload_trigger, set_reload_trigger) = create_signal(0u32);
    // id pending delete confirmation
    let (confirming, set_confirming) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = reload_trigger.get();
        let state = state_for_effect.clone();

        set_loading.set(true);
        spawn_local(async move {
            match api::memories::list_memories().await {
                Ok(list) => {
                    set_memories.set(list);
                    set_error.set(None);
                }
                Err(e @ ApiError::Network(_)) => state.show_api_error(&e),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    // Client-side substring search over memory text.
    let filtered = create_memo(move |_| {
        let needle = search.get().to_lowercase();
        memories
            .get()
            .into_iter()
            .filter(|m| needle.is_empty() || m.memory.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });

    let state_for_delete = state.clone();
    let confirm_delete = move |_| {
        let Some(id) = confirming.get() else { return };
        set_confirming.set(None);

        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::memories::delete_memory(&id).await {
                Ok(()) => {
                    state.show_success("Memory deleted");
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(e) => state.show_api_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Memory Inspector"</h1>
                <p class="text-gray-400 mt-1">"Facts the assistant has stored about this user"</p>
            </div>

            <ConnectionSettings on_saved=move || set_reload_trigger.update(|v| *v += 1) />

            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Memories"</h2>
                    <span class="text-sm text-gray-400">
                        {move || format!("{} shown", filtered.get().len())}
                    </span>
                </div>

                // Search
                <input
                    type="text"
                    placeholder="Search memories..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 mb-4
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                {move || error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3 mb-4">
                        {msg}
                    </div>
                })}

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if filtered.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No memories match."</p>
                        }.into_view()
                    } else {
                        filtered.get().into_iter().map(|memory| view! {
                            <MemoryRow
                                memory=memory
                                on_delete=move |id| set_confirming.set(Some(id))
                            />
                        }).collect_view().into_view()
                    }
                }}
            </section>

            <ConfirmModal
                title="Delete this memory?"
                message="The assistant will no longer use it to personalize plans."
                visible=Signal::derive(move || confirming.get().is_some())
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_confirming.set(None)
            />
        </div>
    }
}

#[component]
fn MemoryRow(
    memory: Memory,
    on_delete: impl Fn(String) + 'static,
) -> impl IntoView {
    let id = memory.id.clone();
    let created = memory
        .created_at
        .clone()
        .map(|ts| format!("stored {}", ts))
        .unwrap_or_default();

    let metadata = (!memory.metadata.is_null())
        .then(|| serde_json::to_string(&memory.metadata).unwrap_or_default())
        .filter(|s| !s.is_empty() && s != "{}");

    view! {
        <div class="flex items-start justify-between bg-gray-700 rounded-lg px-4 py-3 mb-2">
            <div class="pr-4">
                <p class="text-gray-200">{memory.memory.clone()}</p>
                <div class="text-xs text-gray-400 mt-1 space-x-3">
                    <span>{format!("id: {}", memory.id)}</span>
                    {(!created.is_empty()).then(|| view! { <span>{created.clone()}</span> })}
                    {metadata.map(|m| view! { <span class="font-mono">{m}</span> })}
                </div>
            </div>

            <button
                on:click=move |_| on_delete(id.clone())
                class="px-2 py-1 bg-gray-600 hover:bg-red-700 rounded text-xs transition-colors shrink-0"
            >
                "Delete"
            </button>
        </div>
    }
}

/// API base URL and bearer token settings
#[component]
fn ConnectionSettings(on_saved: impl Fn() + Clone + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (token, set_token) = create_signal(client::get_api_token().unwrap_or_default());

    let state_for_save = state.clone();
    let on_saved_url = on_saved.clone();
    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state_for_save.show_success("API URL saved");
        on_saved_url();
    };

    let state_for_token = state.clone();
    let save_token = move |_| {
        let value = token.get();
        if value.trim().is_empty() {
            client::clear_api_token();
            state_for_token.show_success("Admin token cleared");
        } else {
            client::set_api_token(value.trim());
            state_for_token.show_success("Admin token saved");
        }
        on_saved();
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"API base URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Admin bearer token"</label>
                    <div class="flex space-x-2">
                        <input
                            type="password"
                            placeholder="Paste token (empty to clear)"
                            prop:value=move || token.get()
                            on:input=move |ev| set_token.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=save_token
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
