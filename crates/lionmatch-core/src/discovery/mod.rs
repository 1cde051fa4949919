//! Discovery workflow module.
//!
//! Orchestrates the swipe screen: fetching a filtered candidate batch,
//! walking the queue, recording decisions, and materializing matches.
//!
//! # Module Structure
//!
//! - `queue`: Ordered candidate queue with a monotone cursor
//! - `event`: Events emitted toward the presentation layer
//! - `controller`: The orchestrator tying queue, recorder, and coordinator
//!   together

mod controller;
mod event;
mod queue;

// Re-export public API
pub use controller::{
    DiscoveryController, DiscoverySettings, SwipeAction, DEFAULT_BATCH_SIZE, DEFAULT_SETTLE_DELAY,
};
pub use event::{DiscoveryEvent, DiscoveryPresenter, LoggingPresenter, NoticeLevel, SwipeDirection};
pub use queue::CandidateQueue;
