//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod loading;
pub mod modal;
pub mod nav;
pub mod score_ring;
pub mod toast;
pub mod water_tracker;

pub use loading::{CardSkeleton, ListSkeleton};
pub use modal::ConfirmModal;
pub use nav::Nav;
pub use score_ring::ScoreRing;
pub use toast::Toast;
pub use water_tracker::WaterTracker;
