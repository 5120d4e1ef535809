//! Dashboard Page
//!
//! Overview: health score ring over the latest report, snapshot cards, score
//! trend, and the water tracker. Profile, report, and trend fetches are fired
//! independently on mount; whichever resolves first renders first.

use leptos::*;

use crate::api::{self, ApiError};
use crate::api::biomarkers::health_score;
use crate::components::{CardSkeleton, ScoreRing, WaterTracker};
use crate::models::{BiomarkerReport, Profile, TrendPoint};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (profile, set_profile) = create_signal(None::<Profile>);
    let (report, set_report) = create_signal(None::<BiomarkerReport>);
    let (trends, set_trends) = create_signal(Vec::<TrendPoint>::new());
    let (loading_report, set_loading_report) = create_signal(true);

    // Independent fetches on mount; no ordering between them.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();

        spawn_local(async move {
            match api::biomarkers::fetch_latest_report().await {
                Ok(r) => set_report.set(Some(r)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch report: {}", e).into());
                    if let ApiError::Network(_) = e {
                        state.show_api_error(&e);
                    }
                }
            }
            set_loading_report.set(false);
        });

        spawn_local(async move {
            match api::biomarkers::fetch_trends().await {
                Ok(t) => set_trends.set(t),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch trends: {}", e).into());
                }
            }
        });

        spawn_local(async move {
            match api::auth::fetch_profile().await {
                Ok(p) => set_profile.set(Some(p)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                }
            }
        });
    });

    let score = create_memo(move |_| {
        report.get().map(|r| health_score(&r.biomarkers)).flatten()
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || {
                            profile.get()
                                .filter(|p| !p.name.is_empty())
                                .map(|p| format!("Welcome back, {}", p.name))
                                .unwrap_or_else(|| "Your health at a glance".to_string())
                        }}
                    </p>
                </div>

                // Today's date
                <div class="text-sm text-gray-400">
                    {chrono::Local::now().format("%A, %B %-d").to_string()}
                </div>
            </div>

            // Score + snapshot row
            <div class="grid md:grid-cols-3 gap-4">
                <section class="bg-gray-800 rounded-xl p-6 flex items-center justify-center">
                    {move || {
                        if loading_report.get() {
                            view! { <CardSkeleton /> }.into_view()
                        } else {
                            view! { <ScoreRing score=Signal::derive(move || score.get()) /> }.into_view()
                        }
                    }}
                </section>

                <SnapshotCard
                    label="Biomarkers analyzed"
                    value=Signal::derive(move || {
                        report.get()
                            .map(|r| r.biomarkers.iter().filter(|b| b.is_available).count().to_string())
                            .unwrap_or_else(|| "--".to_string())
                    })
                />

                <SnapshotCard
                    label="Markers in range"
                    value=Signal::derive(move || {
                        report.get()
                            .map(|r| {
                                r.biomarkers.iter()
                                    .filter(|b| b.is_available && b.status == "good")
                                    .count()
                                    .to_string()
                            })
                            .unwrap_or_else(|| "--".to_string())
                    })
                />
            </div>

            // Two column layout: trend history and water tracker
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Score Trend"</h2>
                    <TrendList trends=trends />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Hydration"</h2>
                    <WaterTracker />
                </section>
            </div>

            // Report summary, when the backend provided one
            {move || {
                report.get().and_then(|r| r.summary).map(|summary| view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Latest Analysis"</h2>
                        <p class="text-gray-300 leading-relaxed whitespace-pre-wrap">{summary}</p>
                    </section>
                })
            }}
        </div>
    }
}

#[component]
fn SnapshotCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || value.get()}</div>
        </section>
    }
}

/// Recent score history as a simple list
#[component]
fn TrendList(trends: ReadSignal<Vec<TrendPoint>>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {move || {
                let recent: Vec<_> = trends.get().into_iter().rev().take(6).collect();

                if recent.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No reports yet. Upload one to start your trend."</p>
                    }.into_view()
                } else {
                    recent.into_iter().map(|point| {
                        view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                <span class="text-gray-400 text-sm">{point.date}</span>
                                <div class="flex items-center space-x-3">
                                    <div class="w-32 bg-gray-700 rounded-full h-2">
                                        <div
                                            class="bg-primary-500 rounded-full h-2"
                                            style=format!("width: {}%", point.score.min(100))
                                        />
                                    </div>
                                    <span class="font-semibold w-8 text-right">{point.score}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
