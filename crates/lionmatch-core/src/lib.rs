//! Domain core of the LionMatch client.
//!
//! Holds the typed models for profiles, swipe decisions, matches, and
//! messages, the repository traits that form the boundary toward the remote
//! backend, and the discovery workflow (candidate queue, decision recorder,
//! match coordinator, discovery controller). Concrete backend implementations
//! live in `lionmatch-infrastructure`; screen-level services live in
//! `lionmatch-application`.

pub mod auth;
pub mod decision;
pub mod discovery;
pub mod error;
pub mod matching;
pub mod message;
pub mod profile;

// Re-export common error type
pub use error::MatchError;
