//! Water Tracker Widget
//!
//! Intentionally local-only placeholder: hydration tracking has no backend
//! endpoint yet, so this widget keeps component state and makes no network
//! calls.

use leptos::*;

const DAILY_TARGET: u32 = 8;

/// Daily water glasses tracker
#[component]
pub fn WaterTracker() -> impl IntoView {
    let (glasses, set_glasses) = create_signal(0u32);

    let percent = move || (glasses.get().min(DAILY_TARGET) * 100 / DAILY_TARGET) as i32;

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">"💧 Water today"</span>
                <span class="font-semibold">
                    {move || format!("{} / {} glasses", glasses.get(), DAILY_TARGET)}
                </span>
            </div>

            // Progress bar
            <div class="w-full bg-gray-700 rounded-full h-2">
                <div
                    class="bg-blue-500 rounded-full h-2 transition-all"
                    style=move || format!("width: {}%", percent())
                />
            </div>

            <div class="flex space-x-2">
                <button
                    on:click=move |_| set_glasses.update(|g| *g += 1)
                    class="flex-1 px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "+ Glass"
                </button>
                <button
                    on:click=move |_| set_glasses.update(|g| *g = g.saturating_sub(1))
                    disabled=move || glasses.get() == 0
                    class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded-lg text-sm transition-colors"
                >
                    "−"
                </button>
            </div>
        </div>
    }
}
