//! Events emitted toward the presentation layer.
//!
//! The discovery workflow never touches the screen directly; it publishes
//! [`DiscoveryEvent`]s through a [`DiscoveryPresenter`], and the hosting UI
//! decides how to render them.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// Direction of the card exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Dislike: card leaves to the left
    Left,
    /// Like: card leaves to the right
    Right,
}

/// Severity of a transient notice (rendered as a toast by the original UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// High-level events the discovery workflow publishes to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscoveryEvent {
    /// A candidate should be rendered at the top of the card stack.
    CandidatePresented { profile: UserProfile },
    /// No candidates remain; render the empty state.
    QueueExhausted,
    /// Play the card exit animation. Fire-and-forget; persistence does not
    /// wait for it.
    ExitAnimation { direction: SwipeDirection },
    /// A mutual like was materialized; show the match modal for `profile`.
    MatchFound { profile: UserProfile },
    /// Short-lived toast-style message.
    Notice {
        level: NoticeLevel,
        message: String,
    },
}

/// Presentation-layer hook consumed by the discovery workflow.
#[async_trait::async_trait]
pub trait DiscoveryPresenter: Send + Sync {
    async fn present(&self, event: DiscoveryEvent);
}

/// Headless presenter that logs every event.
///
/// Useful as a default wiring for tools and smoke tests; real UIs forward
/// events to their rendering layer instead.
#[derive(Debug, Default)]
pub struct LoggingPresenter;

#[async_trait::async_trait]
impl DiscoveryPresenter for LoggingPresenter {
    async fn present(&self, event: DiscoveryEvent) {
        match &event {
            DiscoveryEvent::Notice { level, message } => {
                tracing::info!(?level, message, "discovery notice");
            }
            other => {
                tracing::debug!(event = ?other, "discovery event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_value(&DiscoveryEvent::ExitAnimation {
            direction: SwipeDirection::Right,
        })
        .unwrap();
        assert_eq!(json["type"], "exit_animation");
        assert_eq!(json["direction"], "right");
    }

    #[test]
    fn test_notice_roundtrip() {
        let event = DiscoveryEvent::Notice {
            level: NoticeLevel::Error,
            message: "failed to load profiles".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: DiscoveryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
