//! Wire-format rows for the backend tables.
//!
//! Backend responses are not trusted to have the right shape: every field is
//! optional at the wire, and conversion into domain types validates required
//! fields explicitly. A row that cannot be converted surfaces as a validation
//! error instead of a panic or a silently wrong value.

pub mod decision_row;
pub mod match_row;
pub mod message_row;
pub mod profile_row;

pub use decision_row::DecisionRow;
pub use match_row::{MatchInsertRow, MatchRow};
pub use message_row::MessageRow;
pub use profile_row::ProfileRow;

use lionmatch_core::error::MatchError;

/// Maps a missing required field to a validation error.
pub(crate) fn require<T>(
    table: &'static str,
    field: &'static str,
    value: Option<T>,
) -> lionmatch_core::error::Result<T> {
    value.ok_or_else(|| {
        MatchError::validation(format!("{} row missing required field `{}`", table, field))
    })
}
