//! Biomarkers Page
//!
//! Latest blood report grouped by category, derived score, and PDF upload.

use leptos::*;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::api::biomarkers::health_score;
use crate::components::{ListSkeleton, ScoreRing};
use crate::models::{Biomarker, BiomarkerReport};
use crate::state::global::GlobalState;

/// Biomarkers page component
#[component]
pub fn Biomarkers() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (report, set_report) = create_signal(None::<BiomarkerReport>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload_trigger, set_reload_trigger) = create_signal(0u32);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let _ = reload_trigger.get();
        let state = state_for_effect.clone();

        set_loading.set(true);
        spawn_local(async move {
            match api::biomarkers::fetch_latest_report().await {
                Ok(r) => {
                    set_report.set(Some(r));
                    set_error.set(None);
                }
                Err(e @ ApiError::Network(_)) => {
                    state.show_api_error(&e);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let score = create_memo(move |_| {
        report.get().and_then(|r| health_score(&r.biomarkers))
    });

    view! {
        <div class="space-y-8">
            // Header with score
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Biomarkers"</h1>
                    <p class="text-gray-400 mt-1">"Your latest blood report, analyzed"</p>
                </div>

                <ScoreRing score=Signal::derive(move || score.get()) />
            </div>

            // Inline error banner
            {move || error.get().map(|msg| view! {
                <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                    {msg}
                </div>
            })}

            // Upload section
            <UploadSection on_uploaded=move || set_reload_trigger.update(|v| *v += 1) />

            // Report body
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Results by Category"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=6 /> }.into_view()
                    } else {
                        match report.get() {
                            Some(r) if !r.biomarkers.is_empty() => {
                                view! { <CategoryGroups biomarkers=r.biomarkers /> }.into_view()
                            }
                            _ => view! {
                                <p class="text-gray-400 text-sm">
                                    "No report yet. Upload a PDF blood report to see your biomarkers."
                                </p>
                            }.into_view(),
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// PDF report upload with analysis status
#[component]
fn UploadSection(on_uploaded: impl Fn() + Clone + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (uploading, set_uploading) = create_signal(false);
    let (upload_status, set_upload_status) = create_signal(String::new());

    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = input.files().and_then(|files| files.get(0));
        let Some(file) = file else { return };

        set_uploading.set(true);
        set_upload_status.set("Uploading report...".to_string());

        let state_clone = state.clone();
        let on_uploaded = on_uploaded.clone();
        spawn_local(async move {
            match api::biomarkers::upload_report(&file).await {
                Ok(result) => {
                    let status = result
                        .message
                        .unwrap_or_else(|| format!("Analysis {}", result.status));
                    set_upload_status.set(status);
                    state_clone.show_success("Report uploaded");
                    on_uploaded();
                }
                Err(e) => {
                    set_upload_status.set(String::new());
                    state_clone.show_api_error(&e);
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Upload Blood Report"</h2>

            <div class="space-y-3">
                <label
                    class="flex items-center justify-center px-4 py-6 bg-gray-700
                           hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                           border-2 border-dashed border-gray-500 hover:border-primary-500"
                >
                    <input
                        type="file"
                        accept=".pdf"
                        class="hidden"
                        on:change=handle_file_upload
                        disabled=move || uploading.get()
                    />
                    <span class="flex items-center gap-2">
                        {move || if uploading.get() {
                            view! { <span class="loading-spinner w-4 h-4"></span> }.into_view()
                        } else {
                            view! { <span>"📄"</span> }.into_view()
                        }}
                        {move || if uploading.get() {
                            "Analyzing..."
                        } else {
                            "Choose a PDF report"
                        }}
                    </span>
                </label>

                {move || {
                    let status = upload_status.get();
                    if !status.is_empty() {
                        view! {
                            <div class="text-sm p-2 bg-gray-900 rounded">{status}</div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Biomarkers grouped by category
#[component]
fn CategoryGroups(biomarkers: Vec<Biomarker>) -> impl IntoView {
    let mut groups: BTreeMap<String, Vec<Biomarker>> = BTreeMap::new();
    for marker in biomarkers {
        let category = marker
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "Other".to_string());
        groups.entry(category).or_default().push(marker);
    }

    view! {
        <div class="space-y-6">
            {groups.into_iter().map(|(category, markers)| view! {
                <div>
                    <h3 class="text-sm uppercase tracking-wide text-gray-400 mb-2">{category}</h3>
                    <div class="space-y-2">
                        {markers.into_iter().map(|marker| view! {
                            <BiomarkerRow marker=marker />
                        }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn BiomarkerRow(marker: Biomarker) -> impl IntoView {
    let value_text = match (marker.value, marker.unit.as_deref()) {
        (Some(v), Some(u)) => format!("{} {}", v, u),
        (Some(v), None) => v.to_string(),
        _ => "--".to_string(),
    };

    let (badge_text, badge_class) = if !marker.is_available {
        ("not in report", "bg-gray-600 text-gray-300")
    } else if marker.status == "good" {
        ("good", "bg-green-900 text-green-300")
    } else {
        ("out of range", "bg-red-900 text-red-300")
    };

    view! {
        <div class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-3">
            <div>
                <span class="font-medium">{marker.name}</span>
                {marker.normal_range.map(|range| view! {
                    <span class="text-gray-400 text-xs ml-2">{format!("normal: {}", range)}</span>
                })}
            </div>
            <div class="flex items-center space-x-3">
                <span class="font-semibold">{value_text}</span>
                <span class=format!("text-xs px-2 py-1 rounded-full {}", badge_class)>
                    {badge_text}
                </span>
            </div>
        </div>
    }
}
