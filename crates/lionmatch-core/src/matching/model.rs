//! Match domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

/// An undirected mutual-like pairing.
///
/// The pair is stored in canonical (lexicographic) order so that
/// `between(a, b)` and `between(b, a)` denote the same row, and creation can
/// be an idempotent upsert keyed on (user_a, user_b).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub user_a: String,
    pub user_b: String,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Builds the match for an unordered pair, canonicalizing the order.
    pub fn between(
        one: impl Into<String>,
        other: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let (one, other) = (one.into(), other.into());
        let (user_a, user_b) = if one <= other {
            (one, other)
        } else {
            (other, one)
        };
        Self {
            user_a,
            user_b,
            created_at,
        }
    }

    /// Returns the id of the matched user that is not `user_id`, or `None`
    /// when `user_id` is not part of this match.
    pub fn peer_of(&self, user_id: &str) -> Option<&str> {
        if self.user_a == user_id {
            Some(&self.user_b)
        } else if self.user_b == user_id {
            Some(&self.user_a)
        } else {
            None
        }
    }
}

/// A match row with both member profiles joined in, as returned by the
/// match-list query on the messages screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWithProfiles {
    pub record: Match,
    pub profile_a: UserProfile,
    pub profile_b: UserProfile,
}

impl MatchWithProfiles {
    /// The profile of the matched user that is not `user_id`.
    pub fn peer_profile(&self, user_id: &str) -> Option<&UserProfile> {
        if self.record.user_a == user_id {
            Some(&self.profile_b)
        } else if self.record.user_b == user_id {
            Some(&self.profile_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_canonicalizes_order() {
        let now = Utc::now();
        let ab = Match::between("b", "a", now);
        assert_eq!(ab.user_a, "a");
        assert_eq!(ab.user_b, "b");
        assert_eq!(ab, Match::between("a", "b", now));
    }

    #[test]
    fn test_peer_of() {
        let m = Match::between("a", "b", Utc::now());
        assert_eq!(m.peer_of("a"), Some("b"));
        assert_eq!(m.peer_of("b"), Some("a"));
        assert_eq!(m.peer_of("c"), None);
    }
}
