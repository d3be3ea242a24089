//! Derived activity payloads
//!
//! A [`Progression`] is everything we know about one day's activity. It is
//! derived 1:1 from a [`Summary`]. [`StreakInformation`] is separate because
//! the summaries endpoint carries no streak data.

use serde::{Deserialize, Serialize};

use super::summary::Summary;

/// Target vs. achieved experience for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Experience {
    pub xp_goal: u64,
    pub xp_today: u64,
}

/// Lesson count and time spent for a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionInformation {
    pub number_of_sessions: u64,
    /// Seconds
    pub session_time: u64,
}

/// Aggregate of a day's experience and session figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progression {
    pub experience: Experience,
    pub session_information: SessionInformation,
}

impl From<&Summary> for Progression {
    fn from(summary: &Summary) -> Self {
        Self {
            experience: Experience {
                xp_goal: summary.daily_goal_xp,
                xp_today: summary.gained_xp,
            },
            session_information: SessionInformation {
                number_of_sessions: summary.num_sessions,
                session_time: summary.total_session_time,
            },
        }
    }
}

/// Running streak count at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreakInformation {
    pub site_streak: u64,
}

impl StreakInformation {
    pub fn new(site_streak: u64) -> Self {
        Self { site_streak }
    }
}
