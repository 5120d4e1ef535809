//! API Client
//!
//! Thin typed wrappers over the Vital backend, organized by feature area.
//! Transport and error surfacing live in [`client`] and [`error`].

pub mod auth;
pub mod biomarkers;
pub mod client;
pub mod error;
pub mod interventions;
pub mod memories;
pub mod nutrition;
pub mod workouts;

pub use client::{get_api_base, set_api_base, Auth};
pub use error::ApiError;
