//! Discovery screen orchestration.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::event::{DiscoveryEvent, DiscoveryPresenter, NoticeLevel, SwipeDirection};
use super::queue::CandidateQueue;
use crate::decision::{DecisionOutcome, DecisionRecorder, DecisionRepository};
use crate::error::Result;
use crate::matching::{MatchCoordinator, MatchRepository};
use crate::profile::{CandidateFilter, ProfileRepository, UserProfile};

/// Default candidate batch size requested from the backend.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Default pause between triggering the exit animation and advancing the
/// queue, matching the card transition duration.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Tunables for the discovery workflow.
#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Location label candidates are restricted to
    pub home_location: String,
    /// Maximum candidates fetched per refresh
    pub batch_size: usize,
    /// Delay between the exit animation and the queue advance
    pub settle_delay: Duration,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            home_location: "León, Guanajuato".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// A like or dislike issued for the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Like,
    Dislike,
}

impl SwipeAction {
    pub fn is_like(&self) -> bool {
        matches!(self, SwipeAction::Like)
    }

    pub fn direction(&self) -> SwipeDirection {
        match self {
            SwipeAction::Like => SwipeDirection::Right,
            SwipeAction::Dislike => SwipeDirection::Left,
        }
    }
}

/// Orchestrates the discovery screen: candidate fetch, queue walking, swipe
/// handling, and match signaling.
///
/// Holds the signed-in user's profile for the lifetime of the screen —
/// constructed on screen entry, dropped on navigation away. The queue is only
/// ever mutated here, from the single workflow task; the decision task spawned
/// per swipe touches the backend and the presenter but never the queue.
pub struct DiscoveryController {
    self_profile: UserProfile,
    queue: RwLock<CandidateQueue>,
    profiles: Arc<dyn ProfileRepository>,
    decisions: Arc<dyn DecisionRepository>,
    recorder: Arc<DecisionRecorder>,
    coordinator: Arc<MatchCoordinator>,
    presenter: Arc<dyn DiscoveryPresenter>,
    settings: DiscoverySettings,
}

impl DiscoveryController {
    /// Creates a controller for `self_profile`'s discovery session.
    ///
    /// The recorder and coordinator are built from the given repositories.
    pub fn new(
        self_profile: UserProfile,
        profiles: Arc<dyn ProfileRepository>,
        decisions: Arc<dyn DecisionRepository>,
        matches: Arc<dyn MatchRepository>,
        presenter: Arc<dyn DiscoveryPresenter>,
        settings: DiscoverySettings,
    ) -> Self {
        Self {
            self_profile,
            queue: RwLock::new(CandidateQueue::new()),
            profiles,
            decisions: decisions.clone(),
            recorder: Arc::new(DecisionRecorder::new(decisions)),
            coordinator: Arc::new(MatchCoordinator::new(matches)),
            presenter,
            settings,
        }
    }

    /// The profile this discovery session belongs to.
    pub fn self_profile(&self) -> &UserProfile {
        &self.self_profile
    }

    /// A clone of the candidate at the cursor, if any.
    pub async fn current(&self) -> Option<UserProfile> {
        self.queue.read().await.current().cloned()
    }

    /// Replaces the queue with a fresh candidate batch.
    ///
    /// The exclusion set is the ids the user has already decided on plus the
    /// user's own id. The backend applies location, seeking, exclusion, and
    /// batch limit; the exclusion is enforced again client-side so a stale or
    /// lenient backend cannot re-offer a decided candidate.
    ///
    /// On failure an error notice is presented and the queue is left as it
    /// was.
    pub async fn refresh(&self) -> Result<Vec<UserProfile>> {
        match self.fetch_candidates().await {
            Ok(candidates) => {
                self.queue.write().await.load(candidates.clone());
                self.present_current().await;
                Ok(candidates)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load candidate batch");
                self.notify(NoticeLevel::Error, "Could not load profiles")
                    .await;
                Err(err)
            }
        }
    }

    async fn fetch_candidates(&self) -> Result<Vec<UserProfile>> {
        let me = &self.self_profile.user_id;
        let mut exclude = self.decisions.decided_target_ids(me).await?;
        exclude.push(me.clone());

        let filter = CandidateFilter {
            location: self.settings.home_location.clone(),
            gender: self.self_profile.seeking.target_gender(),
            exclude,
            limit: self.settings.batch_size,
        };
        let mut candidates = self.profiles.find_candidates(&filter).await?;

        let excluded: HashSet<&str> = filter.exclude.iter().map(String::as_str).collect();
        candidates.retain(|p| !excluded.contains(p.user_id.as_str()));
        Ok(candidates)
    }

    /// Handles a swipe on the current candidate.
    ///
    /// Returns `None` when the queue is exhausted (the empty state is already
    /// rendered; nothing to decide on). Otherwise the decision is dispatched
    /// on a detached task — the UI advance never waits for the network — and
    /// its handle is returned so callers that care (tests, shutdown hooks)
    /// can await the outcome. Dropping the handle leaves the task running.
    pub async fn swipe(&self, action: SwipeAction) -> Option<JoinHandle<DecisionOutcome>> {
        let candidate = self.queue.read().await.current().cloned()?;

        let handle = self.spawn_decision_task(action, candidate);

        self.presenter
            .present(DiscoveryEvent::ExitAnimation {
                direction: action.direction(),
            })
            .await;
        tokio::time::sleep(self.settings.settle_delay).await;

        self.queue.write().await.advance();
        self.present_current().await;

        Some(handle)
    }

    /// Records the decision and, on a mutual like, materializes the match.
    ///
    /// Runs detached from the swipe that spawned it. Failures are logged and
    /// surfaced as notices; they never roll back the already-issued UI
    /// advance.
    fn spawn_decision_task(
        &self,
        action: SwipeAction,
        candidate: UserProfile,
    ) -> JoinHandle<DecisionOutcome> {
        let recorder = Arc::clone(&self.recorder);
        let coordinator = Arc::clone(&self.coordinator);
        let presenter = Arc::clone(&self.presenter);
        let actor = self.self_profile.user_id.clone();

        tokio::spawn(async move {
            let outcome = recorder
                .record(&actor, &candidate.user_id, action.is_like())
                .await;

            match &outcome {
                DecisionOutcome::Matched(other) => {
                    match coordinator.create_match(&actor, other).await {
                        Ok(_) => {
                            presenter
                                .present(DiscoveryEvent::Notice {
                                    level: NoticeLevel::Success,
                                    message: "It's a match!".to_string(),
                                })
                                .await;
                            presenter
                                .present(DiscoveryEvent::MatchFound { profile: candidate })
                                .await;
                        }
                        Err(err) => {
                            // The mutual likes stay valid but unmaterialized;
                            // the candidate is already excluded from future
                            // batches, so there is no retry path.
                            tracing::error!(%err, other = %other, "failed to create match");
                            presenter
                                .present(DiscoveryEvent::Notice {
                                    level: NoticeLevel::Error,
                                    message: "Could not save the match".to_string(),
                                })
                                .await;
                        }
                    }
                }
                DecisionOutcome::RecordFailed(err) => {
                    presenter
                        .present(DiscoveryEvent::Notice {
                            level: NoticeLevel::Error,
                            message: format!("Could not save your swipe: {}", err),
                        })
                        .await;
                }
                DecisionOutcome::NoMatch => {}
            }

            outcome
        })
    }

    async fn present_current(&self) {
        let current = self.queue.read().await.current().cloned();
        let event = match current {
            Some(profile) => DiscoveryEvent::CandidatePresented { profile },
            None => DiscoveryEvent::QueueExhausted,
        };
        self.presenter.present(event).await;
    }

    async fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        self.presenter
            .present(DiscoveryEvent::Notice {
                level,
                message: message.into(),
            })
            .await;
    }
}
