//! Interventions Page
//!
//! Tracker for user health protocols: list, create, and move between
//! statuses. Abandoning asks for confirmation.

use leptos::*;

use crate::api::{self, ApiError};
use crate::api::interventions::NewIntervention;
use crate::components::{ConfirmModal, ListSkeleton};
use crate::models::Intervention;
use crate::state::global::GlobalState;

const TYPES: &[(&str, &str, &str)] = &[
    ("supplement", "💊", "Supplement"),
    ("diet", "🥗", "Diet"),
    ("fitness", "🏃", "Fitness"),
    ("meditation", "🧘", "Meditation"),
];

fn type_icon(intervention_type: &str) -> &'static str {
    TYPES
        .iter()
        .find(|(value, _, _)| *value == intervention_type)
        .map(|(_, icon, _)| *icon)
        .unwrap_or("📌")
}

fn status_badge(status: &str) -> (&'static str, &'static str) {
    match status {
        "active" => ("Active", "bg-green-900 text-green-300"),
        "completed" => ("Completed", "bg-blue-900 text-blue-300"),
        "abandoned" => ("Abandoned", "bg-gray-600 text-gray-300"),
        _ => ("Unknown", "bg-gray-600 text-gray-300"),
    }
}

/// Interventions page component
#[component]
pub fn Interventions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (interventions, set_interventions) = create_signal(Vec::<Intervention>::new());
    let (loading, set_loading) = create_signal(true);
    let (reload_trigger, set_reload_trigger) = create_signal(0u32);
    // id pending abandon confirmation
    let (confirming, set_confirming) = create_signal(None::<String>);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = reload_trigger.get();
        let state = state_for_effect.clone();

        spawn_local(async move {
            match api::interventions::list_interventions().await {
                Ok(list) => set_interventions.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch interventions: {}", e).into());
                    if let ApiError::Network(_) = e {
                        state.show_api_error(&e);
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let state_for_status = state.clone();
    let change_status = move |id: String, status: &'static str| {
        let state = state_for_status.clone();
        spawn_local(async move {
            match api::interventions::update_status(&id, status).await {
                Ok(_) => {
                    state.show_success(&format!("Marked {}", status));
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(e) => state.show_api_error(&e),
            }
        });
    };

    let abandon_status = change_status.clone();
    let confirm_abandon = move |_| {
        if let Some(id) = confirming.get() {
            abandon_status(id, "abandoned");
        }
        set_confirming.set(None);
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Interventions"</h1>
                <p class="text-gray-400 mt-1">"Protocols you're running and how they're going"</p>
            </div>

            <NewInterventionForm on_created=reload />

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Your Protocols"</h2>

                {
                    let change_status = change_status.clone();
                    move || {
                        if loading.get() {
                            view! { <ListSkeleton count=4 /> }.into_view()
                        } else if interventions.get().is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm">"Nothing tracked yet. Add your first protocol above."</p>
                            }.into_view()
                        } else {
                            let change_status = change_status.clone();
                            interventions.get().into_iter().map(|item| {
                                let change_status = change_status.clone();
                                view! {
                                    <InterventionRow
                                        item=item
                                        on_status=change_status
                                        on_abandon=move |id| set_confirming.set(Some(id))
                                    />
                                }
                            }).collect_view().into_view()
                        }
                    }
                }
            </section>

            <ConfirmModal
                title="Abandon this protocol?"
                message="It stays in your history but stops counting as active."
                visible=Signal::derive(move || confirming.get().is_some())
                confirm_label="Abandon"
                on_confirm=confirm_abandon
                on_cancel=move |_: ()| set_confirming.set(None)
            />
        </div>
    }
}

#[component]
fn InterventionRow(
    item: Intervention,
    on_status: impl Fn(String, &'static str) + 'static,
    on_abandon: impl Fn(String) + 'static,
) -> impl IntoView {
    let id = item.id.clone();
    let (badge_text, badge_class) = status_badge(&item.status);
    let is_active = item.status == "active";

    let dates = match (item.start_date.clone(), item.end_date.clone()) {
        (Some(start), Some(end)) => format!("{} → {}", start, end),
        (Some(start), None) => format!("since {}", start),
        _ => String::new(),
    };

    let target = item.target_metric.clone().map(|metric| {
        match item.target_value.clone() {
            Some(value) => format!("target: {} {}", metric, value),
            None => format!("target: {}", metric),
        }
    });

    let id_complete = id.clone();
    let id_abandon = id.clone();
    let id_reactivate = id;

    view! {
        <div class="flex items-start justify-between bg-gray-700 rounded-lg px-4 py-3 mb-2">
            <div class="flex items-start space-x-3">
                <span class="text-2xl">{type_icon(&item.intervention_type)}</span>
                <div>
                    <div class="font-medium">{item.recommendation.clone()}</div>
                    <div class="text-xs text-gray-400 space-x-2">
                        {(!dates.is_empty()).then(|| view! { <span>{dates.clone()}</span> })}
                        {target.clone().map(|t| view! { <span>{t}</span> })}
                    </div>
                </div>
            </div>

            <div class="flex items-center space-x-2">
                <span class=format!("text-xs px-2 py-1 rounded-full {}", badge_class)>
                    {badge_text}
                </span>

                {is_active.then(|| {
                    let complete_id = id_complete.clone();
                    let abandon_id = id_abandon.clone();
                    view! {
                        <button
                            on:click=move |_| {
                                if let Some(id) = complete_id.clone() {
                                    on_status(id, "completed");
                                }
                            }
                            class="px-2 py-1 bg-gray-600 hover:bg-gray-500 rounded text-xs transition-colors"
                        >
                            "Complete"
                        </button>
                        <button
                            on:click=move |_| {
                                if let Some(id) = abandon_id.clone() {
                                    on_abandon(id);
                                }
                            }
                            class="px-2 py-1 bg-gray-600 hover:bg-red-700 rounded text-xs transition-colors"
                        >
                            "Abandon"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// Form for starting a new protocol
#[component]
fn NewInterventionForm(on_created: impl Fn() + Clone + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (intervention_type, set_intervention_type) = create_signal("supplement".to_string());
    let (recommendation, set_recommendation) = create_signal(String::new());
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (target_metric, set_target_metric) = create_signal(String::new());
    let (target_value, set_target_value) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = recommendation.get();
        if text.trim().is_empty() {
            set_error.set(Some("Describe the protocol first.".to_string()));
            return;
        }

        let opt = |value: String| if value.trim().is_empty() { None } else { Some(value) };
        let new = NewIntervention {
            intervention_type: intervention_type.get(),
            recommendation: text,
            start_date: opt(start_date.get()),
            end_date: opt(end_date.get()),
            target_metric: opt(target_metric.get()),
            target_value: opt(target_value.get()),
        };

        set_submitting.set(true);
        set_error.set(None);

        let state_clone = state.clone();
        let on_created = on_created.clone();
        spawn_local(async move {
            match api::interventions::create_intervention(&new).await {
                Ok(_) => {
                    state_clone.show_success("Protocol added");
                    set_recommendation.set(String::new());
                    set_target_metric.set(String::new());
                    set_target_value.set(String::new());
                    on_created();
                }
                Err(e @ ApiError::Network(_)) => state_clone.show_api_error(&e),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Start a Protocol"</h2>

            <form on:submit=on_submit class="space-y-4">
                // Type selector
                <div class="flex flex-wrap gap-2">
                    {TYPES.iter().map(|(value, icon, label)| {
                        let value = value.to_string();
                        let value_check = value.clone();
                        view! {
                            <button
                                type="button"
                                on:click=move |_| set_intervention_type.set(value.clone())
                                class=move || {
                                    let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                    if intervention_type.get() == value_check {
                                        format!("{} bg-primary-600 text-white", base)
                                    } else {
                                        format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                                    }
                                }
                            >
                                {format!("{} {}", icon, label)}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="text"
                    placeholder="What are you trying? e.g. Magnesium 400mg before bed"
                    prop:value=move || recommendation.get()
                    on:input=move |ev| set_recommendation.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <div class="grid md:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Start date"</label>
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"End date (optional)"</label>
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                <div class="grid md:grid-cols-2 gap-4">
                    <input
                        type="text"
                        placeholder="Target metric (e.g. Ferritin)"
                        prop:value=move || target_metric.get()
                        on:input=move |ev| set_target_metric.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="text"
                        placeholder="Target value (e.g. > 50 ng/mL)"
                        prop:value=move || target_value.get()
                        on:input=move |ev| set_target_value.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                        {msg}
                    </div>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg px-6 py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add Protocol" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badges_cover_known_states() {
        assert_eq!(status_badge("active").0, "Active");
        assert_eq!(status_badge("completed").0, "Completed");
        assert_eq!(status_badge("abandoned").0, "Abandoned");
        assert_eq!(status_badge("???").0, "Unknown");
    }

    #[test]
    fn type_icons_fall_back_for_unknown_types() {
        assert_eq!(type_icon("supplement"), "💊");
        assert_eq!(type_icon("unheard-of"), "📌");
    }
}
