//! Profile domain module.
//!
//! This module contains the user profile domain model, the repository
//! interface toward the backend `profiles` table, and the request types used
//! for onboarding and self-edit.
//!
//! # Module Structure
//!
//! - `model`: Core profile domain models (`UserProfile`, `Gender`, `SeekingPreference`)
//! - `repository`: Repository trait for profile persistence and candidate queries
//! - `request`: Validated onboarding / edit request models

mod model;
mod repository;
pub mod request;

// Re-export public API
pub use model::{age_on, Gender, SeekingPreference, UserProfile};
pub use repository::{CandidateFilter, NewProfile, ProfileRepository, ProfileUpdate};
pub use request::{ProfileEdit, ProfileForm};
