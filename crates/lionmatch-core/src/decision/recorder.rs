//! Swipe-decision recording and outcome classification.

use std::sync::Arc;

use chrono::Utc;

use super::model::Decision;
use super::repository::DecisionRepository;
use crate::error::MatchError;

/// What a recorded swipe amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionOutcome {
    /// Decision persisted; no mutual like exists (always the case for
    /// dislikes).
    NoMatch,
    /// Decision persisted and the target had already liked the actor.
    Matched(String),
    /// The decision itself could not be persisted. Match logic must not run
    /// on this outcome.
    RecordFailed(MatchError),
}

/// Persists a swipe decision and determines whether it completes a mutual
/// match.
///
/// The reciprocal-like check only runs after the actor's own like has been
/// durably recorded. Two users liking each other within the same round-trip
/// window can therefore both miss the match; that race is accepted and left
/// to a backend-side constraint to close.
pub struct DecisionRecorder {
    decisions: Arc<dyn DecisionRepository>,
}

impl DecisionRecorder {
    pub fn new(decisions: Arc<dyn DecisionRepository>) -> Self {
        Self { decisions }
    }

    /// Records `actor`'s decision about `target` and classifies the outcome.
    ///
    /// - Persistence failure → [`DecisionOutcome::RecordFailed`]; the
    ///   reciprocal query is never issued.
    /// - Dislike → [`DecisionOutcome::NoMatch`]; no reciprocal query.
    /// - Like → the backend is asked for a Decision(target → actor,
    ///   is_like=true). A failing reciprocal query degrades to `NoMatch`:
    ///   the like is already durable, and losing a match notification is
    ///   preferable to blocking the swipe flow.
    pub async fn record(&self, actor: &str, target: &str, is_like: bool) -> DecisionOutcome {
        let decision = Decision::new(actor, target, is_like, Utc::now());
        if let Err(err) = self.decisions.record(&decision).await {
            tracing::warn!(actor, target, %err, "failed to record swipe decision");
            return DecisionOutcome::RecordFailed(err);
        }

        if !is_like {
            return DecisionOutcome::NoMatch;
        }

        match self.decisions.reciprocal_like_exists(target, actor).await {
            Ok(true) => DecisionOutcome::Matched(target.to_string()),
            Ok(false) => DecisionOutcome::NoMatch,
            Err(err) => {
                tracing::warn!(actor, target, %err, "reciprocal-like check failed; treating as no match");
                DecisionOutcome::NoMatch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::sync::Mutex;

    /// In-memory decision store with switchable failure modes.
    struct MockDecisionRepository {
        recorded: Mutex<Vec<Decision>>,
        reciprocal_queries: Mutex<Vec<(String, String)>>,
        fail_record: bool,
        fail_reciprocal: bool,
        reciprocal_like: bool,
    }

    impl MockDecisionRepository {
        fn new() -> Self {
            Self {
                recorded: Mutex::new(Vec::new()),
                reciprocal_queries: Mutex::new(Vec::new()),
                fail_record: false,
                fail_reciprocal: false,
                reciprocal_like: false,
            }
        }

        fn with_reciprocal_like(mut self) -> Self {
            self.reciprocal_like = true;
            self
        }

        fn with_record_failure(mut self) -> Self {
            self.fail_record = true;
            self
        }

        fn with_reciprocal_failure(mut self) -> Self {
            self.fail_reciprocal = true;
            self
        }
    }

    #[async_trait::async_trait]
    impl DecisionRepository for MockDecisionRepository {
        async fn record(&self, decision: &Decision) -> Result<()> {
            if self.fail_record {
                return Err(MatchError::network("backend unreachable"));
            }
            self.recorded.lock().unwrap().push(decision.clone());
            Ok(())
        }

        async fn decided_target_ids(&self, _user_id: &str) -> Result<Vec<String>> {
            Ok(self
                .recorded
                .lock()
                .unwrap()
                .iter()
                .map(|d| d.liked_user_id.clone())
                .collect())
        }

        async fn reciprocal_like_exists(&self, from: &str, toward: &str) -> Result<bool> {
            self.reciprocal_queries
                .lock()
                .unwrap()
                .push((from.to_string(), toward.to_string()));
            if self.fail_reciprocal {
                return Err(MatchError::network("backend unreachable"));
            }
            Ok(self.reciprocal_like)
        }

        async fn delete_involving(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_dislike_never_queries_reciprocal() {
        let repo = Arc::new(MockDecisionRepository::new());
        let recorder = DecisionRecorder::new(repo.clone());

        let outcome = recorder.record("u1", "u2", false).await;

        assert_eq!(outcome, DecisionOutcome::NoMatch);
        let recorded = repo.recorded.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(!recorded[0].is_like);
        assert!(repo.reciprocal_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_like_without_reciprocal_is_no_match() {
        let repo = Arc::new(MockDecisionRepository::new());
        let recorder = DecisionRecorder::new(repo.clone());

        let outcome = recorder.record("u1", "u2", true).await;

        assert_eq!(outcome, DecisionOutcome::NoMatch);
        assert_eq!(
            repo.reciprocal_queries.lock().unwrap().as_slice(),
            &[("u2".to_string(), "u1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_like_with_reciprocal_is_matched() {
        let repo = Arc::new(MockDecisionRepository::new().with_reciprocal_like());
        let recorder = DecisionRecorder::new(repo.clone());

        let outcome = recorder.record("u1", "u2", true).await;

        assert_eq!(outcome, DecisionOutcome::Matched("u2".to_string()));
    }

    #[tokio::test]
    async fn test_record_failure_skips_match_logic() {
        let repo = Arc::new(MockDecisionRepository::new().with_record_failure());
        let recorder = DecisionRecorder::new(repo.clone());

        let outcome = recorder.record("u1", "u2", true).await;

        assert!(matches!(outcome, DecisionOutcome::RecordFailed(_)));
        assert!(repo.reciprocal_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reciprocal_failure_degrades_to_no_match() {
        let repo = Arc::new(
            MockDecisionRepository::new()
                .with_reciprocal_like()
                .with_reciprocal_failure(),
        );
        let recorder = DecisionRecorder::new(repo.clone());

        let outcome = recorder.record("u1", "u2", true).await;

        // The like itself was durably recorded.
        assert_eq!(outcome, DecisionOutcome::NoMatch);
        assert_eq!(repo.recorded.lock().unwrap().len(), 1);
    }
}
