//! Backend integrations for the LionMatch client.
//!
//! Implements the repository and gateway traits from `lionmatch-core`
//! against the Supabase REST surfaces (PostgREST tables, GoTrue auth), and
//! loads configuration from the user config directory.

pub mod config;
pub mod dto;
pub mod rest_auth_gateway;
pub mod rest_decision_repository;
pub mod rest_match_repository;
pub mod rest_message_repository;
pub mod rest_profile_repository;
pub mod supabase;

pub use config::{AppConfig, BackendSecrets};
pub use rest_auth_gateway::RestAuthGateway;
pub use rest_decision_repository::RestDecisionRepository;
pub use rest_match_repository::RestMatchRepository;
pub use rest_message_repository::RestMessageRepository;
pub use rest_profile_repository::RestProfileRepository;
pub use supabase::SupabaseClient;
