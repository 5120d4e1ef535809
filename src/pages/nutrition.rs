//! Nutrition Page
//!
//! Meal-plan generator and food photo analysis.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::api::nutrition::MealPlanRequest;
use crate::models::{FoodAnalysis, Macros, MealPlan};
use crate::state::global::GlobalState;

const DIETS: &[(&str, &str)] = &[
    ("balanced", "Balanced"),
    ("mediterranean", "Mediterranean"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("keto", "Keto"),
];

/// Nutrition page component
#[component]
pub fn Nutrition() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Nutrition"</h1>
                <p class="text-gray-400 mt-1">"Personalized meal plans and food analysis"</p>
            </div>

            // Two column layout
            <div class="grid lg:grid-cols-2 gap-8">
                <PlanGenerator />
                <FoodPhotoAnalysis />
            </div>
        </div>
    }
}

/// Meal plan generation form and result
#[component]
fn PlanGenerator() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (diet, set_diet) = create_signal("balanced".to_string());
    let (calorie_target, set_calorie_target) = create_signal(String::new());
    let (meals_per_day, set_meals_per_day) = create_signal(3u32);
    let (exclusions, set_exclusions) = create_signal(String::new());
    let (plan, set_plan) = create_signal(None::<MealPlan>);
    let (generating, set_generating) = create_signal(false);
    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let state_for_generate = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = MealPlanRequest {
            diet: diet.get(),
            calorie_target: calorie_target.get().trim().parse().ok(),
            meals_per_day: meals_per_day.get(),
            exclusions: exclusions
                .get()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        set_generating.set(true);
        set_error.set(None);

        let state_clone = state_for_generate.clone();
        spawn_local(async move {
            match api::nutrition::generate_meal_plan(&request).await {
                Ok(p) => set_plan.set(Some(p)),
                Err(e @ ApiError::Network(_)) => state_clone.show_api_error(&e),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_generating.set(false);
        });
    };

    let state_for_save = state;
    let save_plan = move |_| {
        let Some(current) = plan.get() else { return };

        set_saving.set(true);
        let state_clone = state_for_save.clone();
        spawn_local(async move {
            match api::nutrition::save_meal_plan(&current).await {
                Ok(()) => state_clone.show_success("Meal plan saved"),
                Err(e) => state_clone.show_api_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Generate Meal Plan"</h2>

            <form on:submit=on_submit class="space-y-4">
                // Diet selector
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Diet"</label>
                    <select
                        on:change=move |ev| set_diet.set(event_target_value(&ev))
                        prop:value=move || diet.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {DIETS.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>

                // Calorie target
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Calorie target (optional)"</label>
                    <input
                        type="number"
                        placeholder="e.g. 2200"
                        prop:value=move || calorie_target.get()
                        on:input=move |ev| set_calorie_target.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Meals per day
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Meals per day: "
                        <span class="text-white font-medium">{move || meals_per_day.get()}</span>
                    </label>
                    <input
                        type="range"
                        min="2"
                        max="6"
                        step="1"
                        prop:value=move || meals_per_day.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_meals_per_day.set(v);
                            }
                        }
                        class="w-full"
                    />
                </div>

                // Exclusions
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Exclude (comma-separated)"</label>
                    <input
                        type="text"
                        placeholder="e.g. dairy, peanuts"
                        prop:value=move || exclusions.get()
                        on:input=move |ev| set_exclusions.set(event_target_value(&ev))
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
                    disabled=move || generating.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Plan" }}
                </button>
            </form>

            // Generated plan
            {move || plan.get().map(|p| {
                let plan_title = if p.title.is_empty() { "Your Plan".to_string() } else { p.title.clone() };
                view! {
                    <div class="mt-6 space-y-4">
                        <div class="flex items-center justify-between">
                            <h3 class="text-lg font-semibold">{plan_title}</h3>
                            <button
                                on:click=save_plan.clone()
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                       rounded-lg text-sm font-medium transition-colors"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save as Active" }}
                            </button>
                        </div>

                        {p.meals.iter().map(|meal| view! {
                            <div class="bg-gray-700 rounded-lg p-4">
                                <div class="flex items-center justify-between mb-2">
                                    <span class="font-medium">{meal.name.clone()}</span>
                                    {meal.macros.clone().map(|m| view! {
                                        <span class="text-xs text-gray-400">{macros_line(&m)}</span>
                                    })}
                                </div>
                                <ul class="text-sm text-gray-300 space-y-1">
                                    {meal.items.iter().map(|item| view! {
                                        <li>{format!("• {}", item)}</li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}

                        {p.daily_totals.clone().map(|m| view! {
                            <div class="text-sm text-gray-400">
                                {format!("Daily totals: {}", macros_line(&m))}
                            </div>
                        })}

                        {p.notes.clone().map(|notes| view! {
                            <p class="text-sm text-gray-400">{notes}</p>
                        })}
                    </div>
                }
            })}
        </section>
    }
}

/// Food photo upload and macro breakdown
#[component]
fn FoodPhotoAnalysis() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (analyzing, set_analyzing) = create_signal(false);
    let (analysis, set_analysis) = create_signal(None::<FoodAnalysis>);

    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = input.files().and_then(|files| files.get(0));
        let Some(file) = file else { return };

        set_analyzing.set(true);
        set_analysis.set(None);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::nutrition::analyze_food_photo(&file).await {
                Ok(result) => set_analysis.set(Some(result)),
                Err(e) => state_clone.show_api_error(&e),
            }
            set_analyzing.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Analyze a Meal Photo"</h2>

            <label
                class="flex items-center justify-center px-4 py-6 bg-gray-700
                       hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                       border-2 border-dashed border-gray-500 hover:border-primary-500"
            >
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    on:change=handle_file_upload
                    disabled=move || analyzing.get()
                />
                <span class="flex items-center gap-2">
                    {move || if analyzing.get() {
                        view! { <span class="loading-spinner w-4 h-4"></span> }.into_view()
                    } else {
                        view! { <span>"📷"</span> }.into_view()
                    }}
                    {move || if analyzing.get() { "Analyzing..." } else { "Choose a food photo" }}
                </span>
            </label>

            {move || analysis.get().map(|a| view! {
                <div class="mt-4 bg-gray-700 rounded-lg p-4 space-y-2">
                    <div class="font-medium">
                        {if a.name.is_empty() { "Unidentified meal".to_string() } else { a.name.clone() }}
                    </div>
                    {a.macros.clone().map(|m| view! {
                        <div class="text-sm text-gray-300">{macros_line(&m)}</div>
                    })}
                    {a.notes.clone().map(|notes| view! {
                        <p class="text-sm text-gray-400">{notes}</p>
                    })}
                </div>
            })}
        </section>
    }
}

/// One-line macro summary, skipping anything the backend left out.
fn macros_line(macros: &Macros) -> String {
    let mut parts = Vec::new();
    if let Some(calories) = macros.calories {
        parts.push(format!("{:.0} kcal", calories));
    }
    if let Some(protein) = macros.protein {
        parts.push(format!("{:.0}g protein", protein));
    }
    if let Some(carbs) = macros.carbs {
        parts.push(format!("{:.0}g carbs", carbs));
    }
    if let Some(fat) = macros.fat {
        parts.push(format!("{:.0}g fat", fat));
    }
    if parts.is_empty() {
        "no macro data".to_string()
    } else {
        parts.join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_line_skips_missing_fields() {
        let m = Macros { calories: Some(520.0), protein: Some(32.0), carbs: None, fat: None };
        assert_eq!(macros_line(&m), "520 kcal · 32g protein");
    }

    #[test]
    fn macros_line_handles_empty_macros() {
        let m = Macros { calories: None, protein: None, carbs: None, fat: None };
        assert_eq!(macros_line(&m), "no macro data");
    }
}
