//! First capture of a day and the wall clock it is stamped from

use chrono::{Local, NaiveDateTime};
use duosync_domain::{DatabaseEntry, Progression, StreakInformation};

use crate::reconcile::{wall_clock_day_key, wall_clock_time};

/// Source of the local wall-clock reading used for new entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Create today's entry, stamping `date` and `time` from one clock reading.
///
/// This is the only place a capture `time` is minted; reconciliation only
/// ever copies existing ones.
pub fn create_entry(
    clock: &dyn Clock,
    progression: Progression,
    streak_information: StreakInformation,
) -> DatabaseEntry {
    let now = clock.now();
    DatabaseEntry {
        date: wall_clock_day_key(now),
        progression,
        streak_information,
        time: wall_clock_time(now),
    }
}

/// Date key of "today" according to `clock`.
pub fn today_key(clock: &dyn Clock) -> String {
    wall_clock_day_key(clock.now())
}
