//! Candidate queue for the discovery screen.

use crate::profile::UserProfile;

/// An ordered candidate batch plus a cursor into it.
///
/// The cursor is monotonically non-decreasing within a queue's lifetime; once
/// it reaches the queue length the queue is exhausted and stays exhausted
/// until the next [`load`](CandidateQueue::load). A fresh queue is loaded on
/// every discovery-screen entry and discarded on navigation away.
#[derive(Debug, Default)]
pub struct CandidateQueue {
    candidates: Vec<UserProfile>,
    cursor: usize,
}

impl CandidateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the queue contents and resets the cursor to the front.
    pub fn load(&mut self, candidates: Vec<UserProfile>) {
        self.candidates = candidates;
        self.cursor = 0;
    }

    /// The candidate at the cursor, or `None` when the queue is exhausted.
    pub fn current(&self) -> Option<&UserProfile> {
        self.candidates.get(self.cursor)
    }

    /// Moves the cursor one step forward. A no-op once the queue is
    /// exhausted; callers must re-check [`current`](CandidateQueue::current)
    /// afterward.
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
