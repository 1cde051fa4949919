//! Match domain module.
//!
//! A match is the undirected pairing created once both directions of a like
//! exist. This module holds the model, the repository interface toward the
//! backend `matches` table, and the coordinator that materializes a match
//! when the recorder observes the second like.

mod coordinator;
mod model;
mod repository;

// Re-export public API
pub use coordinator::MatchCoordinator;
pub use model::{Match, MatchWithProfiles};
pub use repository::MatchRepository;
