//! Remote activity summaries
//!
//! The wire format is camelCase, newest first. [`crate::schema`] decodes it
//! with the error reporting the API layer expects.

use serde::{Deserialize, Serialize};

use super::progression::StreakInformation;

/// One day's raw activity record as reported by the remote source.
///
/// Serializes back to the wire spelling so fixtures can be built from typed
/// values. Deserializing also accepts the snake_case field names; unknown
/// fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Unix seconds identifying the calendar day
    pub date: i64,
    #[serde(alias = "daily_goal_xp")]
    pub daily_goal_xp: u64,
    #[serde(alias = "gained_xp")]
    pub gained_xp: u64,
    #[serde(alias = "num_sessions")]
    pub num_sessions: u64,
    /// Seconds
    #[serde(alias = "total_session_time")]
    pub total_session_time: u64,
}

/// Everything one fetch from the remote source yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSnapshot {
    /// Newest first, as received
    pub summaries: Vec<Summary>,
    /// Current streak from the user-state endpoint
    pub streak: StreakInformation,
}
