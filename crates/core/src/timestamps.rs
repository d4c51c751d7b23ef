//! Record timestamps, set by the store and never client-supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation/mutation timestamps carried by every persisted record.
///
/// Invariant: `created_at <= updated_at` at all times. Both are set on
/// creation; every mutation advances `updated_at`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Timestamps for a freshly created record: both fields equal `at`.
    pub fn now(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
        }
    }

    /// Record a mutation at `at`.
    ///
    /// Clamped so `updated_at` never precedes `created_at`, even if the caller's
    /// clock stepped backwards between calls.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at.max(self.created_at);
    }
}
