//! Decision domain module.
//!
//! A decision is the directed like/dislike edge recorded when the user swipes
//! on a candidate. This module holds the model, the repository interface
//! toward the backend `likes` table, and the recorder that persists a swipe
//! and classifies its outcome.

mod model;
mod recorder;
mod repository;

// Re-export public API
pub use model::Decision;
pub use recorder::{DecisionOutcome, DecisionRecorder};
pub use repository::DecisionRepository;
