//! Merge freshly fetched summaries into an existing history
//!
//! Capture time and streak are pinned per calendar day: once a day has been
//! recorded, later passes only refresh its activity numbers. Days the history
//! has never seen cannot be reconciled here and are reported back instead.

use std::collections::{BTreeMap, HashMap};

use chrono::{Local, TimeZone};
use duosync_domain::{
    DatabaseEntry, DuoSyncError, History, Progression, Result, StreakInformation, Summary,
};
use tracing::debug;

use super::day_key::day_key;
use super::diff::content_changed;

/// Capture metadata recorded the first time a day was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorMeta<'a> {
    pub time: &'a str,
    pub streak: StreakInformation,
}

/// Date key -> first-capture metadata, built from a stored history.
#[derive(Debug, Default)]
pub struct PriorIndex<'a> {
    by_date: HashMap<&'a str, PriorMeta<'a>>,
}

impl<'a> PriorIndex<'a> {
    /// Index `history`. If a date repeats, its first occurrence wins.
    pub fn build(history: &'a [DatabaseEntry]) -> Self {
        let mut by_date = HashMap::with_capacity(history.len());
        for entry in history {
            by_date.entry(entry.date.as_str()).or_insert(PriorMeta {
                time: entry.time.as_str(),
                streak: entry.streak_information,
            });
        }
        Self { by_date }
    }

    pub fn lookup_prior_meta(&self, date: &str) -> Option<PriorMeta<'a>> {
        self.by_date.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// A fetched day that had no prior capture metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDay {
    /// `None` when the timestamp has no representable calendar day.
    pub date: Option<String>,
    pub summary: Summary,
}

impl UnresolvedDay {
    /// Date key, or the raw timestamp prefixed with `@`.
    pub fn label(&self) -> String {
        self.date.clone().unwrap_or_else(|| format!("@{}", self.summary.date))
    }
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Chronological (oldest first), one entry per date.
    pub history: History,
    /// Whether the progression or streak payload sets differ from the input.
    pub changed: bool,
    /// Days skipped for lack of prior metadata, in processing order.
    pub unresolved: Vec<UnresolvedDay>,
}

impl Reconciliation {
    pub fn into_parts(self) -> (History, bool) {
        (self.history, self.changed)
    }

    /// Fail with [`DuoSyncError::UnresolvedDate`] if any day was skipped.
    pub fn require_resolved(self) -> Result<Self> {
        match self.unresolved.first() {
            Some(day) => Err(DuoSyncError::UnresolvedDate(day.label())),
            None => Ok(self),
        }
    }

    /// The history newest first, the order stores persist.
    pub fn storage_order(&self) -> History {
        self.history.iter().rev().cloned().collect()
    }
}

/// Reconciliation engine parameterised by the timezone used for day keys.
#[derive(Debug, Clone)]
pub struct Reconciler<Tz: TimeZone> {
    tz: Tz,
}

impl Reconciler<Local> {
    /// Day keys in the system's local time.
    pub fn local() -> Self {
        Self { tz: Local }
    }
}

impl Default for Reconciler<Local> {
    fn default() -> Self {
        Self::local()
    }
}

impl<Tz: TimeZone> Reconciler<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn day_key(&self, timestamp: i64) -> Option<String> {
        day_key(timestamp, &self.tz)
    }

    /// Merge `fresh` (newest first, as fetched) into `current`.
    ///
    /// Summaries are processed oldest first. A known day gets the fresh
    /// progression with its recorded time and streak; an unknown day is
    /// reported in [`Reconciliation::unresolved`]. Stored days absent from
    /// `fresh` are carried over untouched. Neither input is modified.
    pub fn reconcile(&self, current: &[DatabaseEntry], fresh: &[Summary]) -> Reconciliation {
        let prior = PriorIndex::build(current);
        let mut merged: BTreeMap<String, DatabaseEntry> = BTreeMap::new();
        let mut unresolved: Vec<UnresolvedDay> = Vec::new();

        for summary in fresh.iter().rev() {
            let Some(date) = self.day_key(summary.date) else {
                debug!(timestamp = summary.date, "summary timestamp out of range");
                unresolved.push(UnresolvedDay { date: None, summary: *summary });
                continue;
            };

            match prior.lookup_prior_meta(&date) {
                Some(meta) => {
                    let entry = DatabaseEntry {
                        date: date.clone(),
                        progression: Progression::from(summary),
                        streak_information: meta.streak,
                        time: meta.time.to_owned(),
                    };
                    merged.insert(date, entry);
                }
                None => {
                    debug!(date = %date, "no recorded capture for day");
                    unresolved.retain(|day| day.date.as_deref() != Some(date.as_str()));
                    unresolved.push(UnresolvedDay { date: Some(date), summary: *summary });
                }
            }
        }

        for entry in current {
            merged.entry(entry.date.clone()).or_insert_with(|| entry.clone());
        }

        let history: History = merged.into_values().collect();
        let changed = content_changed(current, &history);

        Reconciliation { history, changed, unresolved }
    }
}

/// Reconcile with day keys in local time; returns the chronological history
/// and the change flag.
pub fn reconcile(current: &[DatabaseEntry], fresh: &[Summary]) -> (History, bool) {
    Reconciler::local().reconcile(current, fresh).into_parts()
}
