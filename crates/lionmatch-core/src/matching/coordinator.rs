//! Match materialization.

use std::sync::Arc;

use chrono::Utc;

use super::model::Match;
use super::repository::MatchRepository;
use crate::error::Result;

/// Creates the match record once a mutual like has been observed.
///
/// Creation does not read before writing; idempotency comes from the
/// repository upsert on the canonical pair. When creation fails the mutual
/// likes remain valid but unmaterialized, and no retry is attempted — the
/// candidate is already in the exclusion set, so the pair will not be
/// re-offered (accepted limitation).
pub struct MatchCoordinator {
    matches: Arc<dyn MatchRepository>,
}

impl MatchCoordinator {
    pub fn new(matches: Arc<dyn MatchRepository>) -> Self {
        Self { matches }
    }

    /// Persists the match between two mutually-liked users and returns the
    /// stored record. The argument order does not matter.
    pub async fn create_match(&self, one: &str, other: &str) -> Result<Match> {
        let record = Match::between(one, other, Utc::now());
        self.matches.create(&record).await?;
        tracing::info!(user_a = %record.user_a, user_b = %record.user_b, "match created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::matching::model::MatchWithProfiles;
    use std::sync::Mutex;

    struct MockMatchRepository {
        created: Mutex<Vec<Match>>,
        fail: bool,
    }

    impl MockMatchRepository {
        fn new(fail: bool) -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait::async_trait]
    impl MatchRepository for MockMatchRepository {
        async fn create(&self, record: &Match) -> Result<()> {
            if self.fail {
                return Err(MatchError::network("backend unreachable"));
            }
            self.created.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn list_for_user(&self, _user_id: &str) -> Result<Vec<MatchWithProfiles>> {
            Ok(Vec::new())
        }

        async fn delete_involving(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_create_match_is_order_insensitive() {
        let repo = Arc::new(MockMatchRepository::new(false));
        let coordinator = MatchCoordinator::new(repo.clone());

        coordinator.create_match("u2", "u1").await.unwrap();
        coordinator.create_match("u1", "u2").await.unwrap();

        let created = repo.created.lock().unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].user_a, "u1");
        assert_eq!(created[0].user_b, "u2");
        assert_eq!(created[1].user_a, "u1");
        assert_eq!(created[1].user_b, "u2");
    }

    #[tokio::test]
    async fn test_create_match_surfaces_failure() {
        let repo = Arc::new(MockMatchRepository::new(true));
        let coordinator = MatchCoordinator::new(repo);

        let err = coordinator.create_match("u1", "u2").await.unwrap_err();
        assert!(err.is_network());
    }
}
