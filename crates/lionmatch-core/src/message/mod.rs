//! Message domain module.
//!
//! Direct messages between matched users. Conversation grouping and the chat
//! screen live in the application layer; this module holds the models and the
//! repository interface toward the backend `messages` table.

mod model;
mod repository;

// Re-export public API
pub use model::{Message, MessageWithProfiles, NewMessage};
pub use repository::MessageRepository;
