//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod biomarkers;
pub mod dashboard;
pub mod interventions;
pub mod login;
pub mod nutrition;
pub mod workouts;

pub use admin::AdminMemories;
pub use biomarkers::Biomarkers;
pub use dashboard::Dashboard;
pub use interventions::Interventions;
pub use login::Login;
pub use nutrition::Nutrition;
pub use workouts::Workouts;
