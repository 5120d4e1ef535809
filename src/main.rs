//! Vital Companion
//!
//! Client-side fitness/health companion built with Leptos (WASM).
//!
//! # Features
//!
//! - Blood report upload and biomarker review
//! - AI-generated workout and meal plans
//! - Intervention tracking
//! - Admin memory inspector
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All substantive computation happens in the Vital backend,
//! reached over HTTP; this crate is presentation, routing, and thin typed
//! fetch wrappers.

use leptos::*;

mod api;
mod app;
mod components;
mod models;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
