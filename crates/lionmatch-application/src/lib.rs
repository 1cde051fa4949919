//! Screen-level services of the LionMatch client.
//!
//! Everything here takes an explicit [`AppSession`](session::AppSession)
//! instead of process-global state: account lifecycle, onboarding and
//! profile edits, and the messages screen. The discovery screen itself is
//! driven by `lionmatch_core::discovery::DiscoveryController`, constructed
//! with the session's profile on screen entry.

pub mod account_service;
pub mod messaging_service;
pub mod onboarding_service;
pub mod session;
pub mod timefmt;

pub use account_service::AccountService;
pub use messaging_service::{ConversationSummary, MatchSummary, MessagingService};
pub use onboarding_service::OnboardingService;
pub use session::AppSession;
