//! Persisted history entries
//!
//! The JSON shape of [`DatabaseEntry`] is the persisted contract; stores must
//! round-trip it exactly.

use serde::{Deserialize, Serialize};

use super::progression::{Progression, StreakInformation};

/// One persisted day's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    /// Calendar-day key, `YYYY/MM/DD`. Unique within a history.
    pub date: String,
    pub progression: Progression,
    /// Streak known when this day was first recorded.
    pub streak_information: StreakInformation,
    /// Wall-clock `HH:MM:SS` of first capture. Never rewritten.
    pub time: String,
}

/// Ordered collection of entries. Stores hand it out newest first; the
/// reconciler produces it oldest first.
pub type History = Vec<DatabaseEntry>;
