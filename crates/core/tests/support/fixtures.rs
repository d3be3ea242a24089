use duosync_domain::{
    DatabaseEntry, Experience, Progression, SessionInformation, StreakInformation, Summary,
};

/// 2024-04-23T00:00:00Z
pub const APRIL_23: i64 = 1_713_830_400;
pub const DAY: i64 = 86_400;

pub fn summary(date: i64, gained_xp: u64) -> Summary {
    Summary { date, daily_goal_xp: 20, gained_xp, num_sessions: 4, total_session_time: 0 }
}

pub fn entry(date: &str, time: &str, streak: u64, xp_today: u64) -> DatabaseEntry {
    DatabaseEntry {
        date: date.to_string(),
        progression: Progression {
            experience: Experience { xp_goal: 20, xp_today },
            session_information: SessionInformation { number_of_sessions: 4, session_time: 0 },
        },
        streak_information: StreakInformation::new(streak),
        time: time.to_string(),
    }
}

/// `days` consecutive UTC days starting at April 23, newest first, with
/// gained XP equal to the day index.
pub fn week_of_summaries(days: i64) -> Vec<Summary> {
    (0..days).rev().map(|offset| summary(APRIL_23 + offset * DAY, offset as u64)).collect()
}
