//! Workouts Page
//!
//! Seven-step linear wizard collecting plan preferences, a single generate
//! POST at the end, and a list of previously generated plans.

use leptos::*;

use crate::api::{self, ApiError};
use crate::api::workouts::WorkoutRequest;
use crate::components::ListSkeleton;
use crate::models::WorkoutPlan;
use crate::state::global::GlobalState;

const STEP_TITLES: [&str; 7] = [
    "Goal",
    "Experience",
    "Days per week",
    "Session length",
    "Equipment",
    "Focus areas",
    "Notes & review",
];

const GOALS: &[(&str, &str)] = &[
    ("general_fitness", "General fitness"),
    ("build_muscle", "Build muscle"),
    ("lose_fat", "Lose fat"),
    ("endurance", "Endurance"),
    ("mobility", "Mobility"),
];

const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

const EQUIPMENT_OPTIONS: &[&str] = &[
    "bodyweight", "dumbbells", "barbell", "kettlebell", "resistance bands", "pull-up bar", "gym machines",
];

const FOCUS_OPTIONS: &[&str] = &[
    "upper body", "lower body", "core", "back", "cardio", "flexibility",
];

/// Toggle membership of `value` in a multi-select list.
fn toggle_selection(list: &mut Vec<String>, value: &str) {
    if list.iter().any(|v| v == value) {
        list.retain(|v| v != value);
    } else {
        list.push(value.to_string());
    }
}

/// Workouts page component
#[component]
pub fn Workouts() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Workouts"</h1>
                <p class="text-gray-400 mt-1">"Generate a plan built around your answers"</p>
            </div>

            <GeneratorWizard />

            <SavedPlans />
        </div>
    }
}

/// The seven-step wizard
#[component]
fn GeneratorWizard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (step, set_step) = create_signal(0usize);
    let (request, set_request) = create_signal(WorkoutRequest::default());
    let (generating, set_generating) = create_signal(false);
    let (plan, set_plan) = create_signal(None::<WorkoutPlan>);
    let (error, set_error) = create_signal(None::<String>);

    let last_step = STEP_TITLES.len() - 1;

    let generate = move |_| {
        let current = request.get();

        set_generating.set(true);
        set_error.set(None);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::workouts::generate_workout(&current).await {
                Ok(p) => {
                    set_plan.set(Some(p));
                    state_clone.show_success("Workout plan ready");
                }
                Err(e @ ApiError::Network(_)) => state_clone.show_api_error(&e),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_generating.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            // Step header
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold">
                    {move || format!("Step {} of {}: {}", step.get() + 1, STEP_TITLES.len(), STEP_TITLES[step.get()])}
                </h2>
                <div class="flex space-x-1">
                    {(0..STEP_TITLES.len()).map(|i| view! {
                        <div class=move || {
                            if i <= step.get() {
                                "w-6 h-1.5 rounded bg-primary-500"
                            } else {
                                "w-6 h-1.5 rounded bg-gray-600"
                            }
                        } />
                    }).collect_view()}
                </div>
            </div>

            // Step body
            {move || match step.get() {
                0 => view! {
                    <ChoiceGrid
                        options=GOALS
                        selected=Signal::derive(move || request.get().goal)
                        on_pick=move |value: String| set_request.update(|r| r.goal = value)
                    />
                }.into_view(),
                1 => view! {
                    <ChoiceGrid
                        options=EXPERIENCE_LEVELS
                        selected=Signal::derive(move || request.get().experience)
                        on_pick=move |value: String| set_request.update(|r| r.experience = value)
                    />
                }.into_view(),
                2 => view! {
                    <SliderStep
                        label="Training days per week"
                        min=1 max=7
                        value=Signal::derive(move || request.get().days_per_week)
                        on_change=move |v| set_request.update(|r| r.days_per_week = v)
                        format=|v| format!("{} days", v)
                    />
                }.into_view(),
                3 => view! {
                    <SliderStep
                        label="Minutes per session"
                        min=15 max=120
                        value=Signal::derive(move || request.get().session_minutes)
                        on_change=move |v| set_request.update(|r| r.session_minutes = v)
                        format=|v| format!("{} min", v)
                    />
                }.into_view(),
                4 => view! {
                    <TogglePills
                        options=EQUIPMENT_OPTIONS
                        selected=Signal::derive(move || request.get().equipment)
                        on_toggle=move |value: String| {
                            set_request.update(|r| toggle_selection(&mut r.equipment, &value))
                        }
                    />
                }.into_view(),
                5 => view! {
                    <TogglePills
                        options=FOCUS_OPTIONS
                        selected=Signal::derive(move || request.get().focus_areas)
                        on_toggle=move |value: String| {
                            set_request.update(|r| toggle_selection(&mut r.focus_areas, &value))
                        }
                    />
                }.into_view(),
                _ => view! {
                    <ReviewStep
                        request=request
                        on_notes=move |notes: String| set_request.update(|r| r.notes = notes)
                    />
                }.into_view(),
            }}

            {move || error.get().map(|msg| view! {
                <div class="mt-4 bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                    {msg}
                </div>
            })}

            // Navigation
            <div class="flex justify-between mt-6">
                <button
                    on:click=move |_| set_step.update(|s| *s = s.saturating_sub(1))
                    disabled=move || step.get() == 0
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50
                           rounded-lg font-medium transition-colors"
                >
                    "← Back"
                </button>

                {move || {
                    if step.get() < last_step {
                        view! {
                            <button
                                on:click=move |_| set_step.update(|s| *s += 1)
                                class="px-6 py-2 bg-primary-600 hover:bg-primary-700
                                       rounded-lg font-medium transition-colors"
                            >
                                "Next →"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                on:click=generate.clone()
                                disabled=move || generating.get()
                                class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                {move || if generating.get() { "Generating..." } else { "Generate Plan" }}
                            </button>
                        }.into_view()
                    }
                }}
            </div>

            // Result
            {move || plan.get().map(|p| view! { <PlanView plan=p /> })}
        </section>
    }
}

/// Single-choice option grid
#[component]
fn ChoiceGrid(
    options: &'static [(&'static str, &'static str)],
    #[prop(into)]
    selected: Signal<String>,
    on_pick: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-2">
            {options.iter().map(|(value, label)| {
                let value = value.to_string();
                let value_check = value.clone();
                let on_pick = on_pick.clone();
                view! {
                    <button
                        type="button"
                        on:click=move |_| on_pick(value.clone())
                        class=move || {
                            let base = "px-4 py-3 rounded-lg text-sm font-medium transition-colors";
                            if selected.get() == value_check {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                            }
                        }
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Numeric slider step
#[component]
fn SliderStep(
    label: &'static str,
    min: u32,
    max: u32,
    #[prop(into)]
    value: Signal<u32>,
    on_change: impl Fn(u32) + 'static,
    format: fn(u32) -> String,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">
                {label}
                ": "
                <span class="text-white font-medium">{move || format(value.get())}</span>
            </label>
            <input
                type="range"
                min=min.to_string()
                max=max.to_string()
                step="1"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse() {
                        on_change(v);
                    }
                }
                class="w-full"
            />
        </div>
    }
}

/// Multi-select pill buttons (array-membership toggling)
#[component]
fn TogglePills(
    options: &'static [&'static str],
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_toggle: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {options.iter().map(|option| {
                let value = option.to_string();
                let value_check = value.clone();
                let on_toggle = on_toggle.clone();
                view! {
                    <button
                        type="button"
                        on:click=move |_| on_toggle(value.clone())
                        class=move || {
                            let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors capitalize";
                            if selected.get().contains(&value_check) {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-400 hover:bg-gray-600", base)
                            }
                        }
                    >
                        {*option}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Final step: notes plus a summary of every answer
#[component]
fn ReviewStep(
    request: ReadSignal<WorkoutRequest>,
    on_notes: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Injuries or notes (optional)"</label>
                <textarea
                    placeholder="e.g. left knee pain, prefer morning sessions"
                    prop:value=move || request.get().notes
                    on:input=move |ev| on_notes(event_target_value(&ev))
                    rows="3"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none"
                />
            </div>

            <div class="bg-gray-700 rounded-lg p-4 text-sm space-y-1">
                {move || {
                    let r = request.get();
                    let list = |items: &[String]| {
                        if items.is_empty() { "none".to_string() } else { items.join(", ") }
                    };
                    view! {
                        <p><span class="text-gray-400">"Goal: "</span>{r.goal.replace('_', " ")}</p>
                        <p><span class="text-gray-400">"Experience: "</span>{r.experience.clone()}</p>
                        <p><span class="text-gray-400">"Schedule: "</span>
                            {format!("{} days/week, {} min", r.days_per_week, r.session_minutes)}</p>
                        <p><span class="text-gray-400">"Equipment: "</span>{list(&r.equipment)}</p>
                        <p><span class="text-gray-400">"Focus: "</span>{list(&r.focus_areas)}</p>
                    }
                }}
            </div>
        </div>
    }
}

/// Render one generated plan
#[component]
fn PlanView(plan: WorkoutPlan) -> impl IntoView {
    let title = if plan.title.is_empty() { "Your Plan".to_string() } else { plan.title.clone() };
    let subtitle = match (plan.duration.clone(), plan.focus.clone()) {
        (Some(d), Some(f)) => format!("{} · {}", d, f),
        (Some(d), None) => d,
        (None, Some(f)) => f,
        (None, None) => String::new(),
    };

    view! {
        <div class="mt-6 space-y-4">
            <div>
                <h3 class="text-lg font-semibold">{title}</h3>
                {(!subtitle.is_empty()).then(|| view! {
                    <p class="text-sm text-gray-400">{subtitle}</p>
                })}
            </div>

            {(!plan.warmup.is_empty()).then(|| view! {
                <PlanSection heading="Warmup" items=plan.warmup.clone() />
            })}

            {(!plan.exercises.is_empty()).then(|| view! {
                <div class="bg-gray-700 rounded-lg p-4">
                    <h4 class="text-sm uppercase tracking-wide text-gray-400 mb-2">"Exercises"</h4>
                    <div class="space-y-2">
                        {plan.exercises.iter().map(|ex| {
                            let detail = [
                                ex.sets.map(|s| format!("{} sets", s)),
                                ex.reps.clone().map(|r| format!("{} reps", r)),
                                ex.rest.clone().map(|r| format!("rest {}", r)),
                            ]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" · ");

                            view! {
                                <div class="flex items-center justify-between py-1 border-b border-gray-600 last:border-0">
                                    <div>
                                        <span>{ex.name.clone()}</span>
                                        {ex.notes.clone().map(|n| view! {
                                            <span class="text-gray-400 text-xs ml-2">{n}</span>
                                        })}
                                    </div>
                                    <span class="text-sm text-gray-300">{detail}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            })}

            {(!plan.cooldown.is_empty()).then(|| view! {
                <PlanSection heading="Cooldown" items=plan.cooldown.clone() />
            })}
        </div>
    }
}

#[component]
fn PlanSection(heading: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <h4 class="text-sm uppercase tracking-wide text-gray-400 mb-2">{heading}</h4>
            <ul class="text-sm text-gray-300 space-y-1">
                {items.into_iter().map(|item| view! {
                    <li>{format!("• {}", item)}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Previously generated plans
#[component]
fn SavedPlans() -> impl IntoView {
    let (plans, set_plans) = create_signal(Vec::<WorkoutPlan>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::workouts::list_plans().await {
                Ok(list) => set_plans.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch plans: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Saved Plans"</h2>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton /> }.into_view()
                } else if plans.get().is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No plans yet. Generate your first one above."</p>
                    }.into_view()
                } else {
                    plans.get().into_iter().map(|p| view! {
                        <PlanView plan=p />
                    }).collect_view().into_view()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Vec::new();
        toggle_selection(&mut list, "dumbbells");
        assert_eq!(list, vec!["dumbbells"]);
        toggle_selection(&mut list, "barbell");
        assert_eq!(list, vec!["dumbbells", "barbell"]);
        toggle_selection(&mut list, "dumbbells");
        assert_eq!(list, vec!["barbell"]);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut list = vec!["core".to_string()];
        toggle_selection(&mut list, "cardio");
        toggle_selection(&mut list, "cardio");
        assert_eq!(list, vec!["core"]);
    }

    #[test]
    fn default_request_matches_first_wizard_state() {
        let r = WorkoutRequest::default();
        assert_eq!(r.goal, "general_fitness");
        assert_eq!(r.days_per_week, 3);
        assert!(r.equipment.is_empty());
        assert!(r.focus_areas.is_empty());
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let r = WorkoutRequest {
            equipment: vec!["dumbbells".to_string()],
            ..WorkoutRequest::default()
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["daysPerWeek"], 3);
        assert_eq!(json["sessionMinutes"], 45);
        assert_eq!(json["equipment"][0], "dumbbells");
    }
}
