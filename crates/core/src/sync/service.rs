//! Sync service - one fetch, reconcile, write-back pass

use std::sync::Arc;

use chrono::{Local, TimeZone};
use duosync_domain::{History, Progression, Result};
use tracing::{debug, info, warn};

use super::ports::{HistoryStore, SummarySource};
use crate::capture::{create_entry, today_key, Clock, SystemClock};
use crate::reconcile::Reconciler;

/// Options for a single sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Compute everything but never write to the store
    pub dry_run: bool,
}

/// What a sync run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Reconciliation changed stored activity content
    pub changed: bool,
    /// Today had no entry and one was created
    pub created_today: bool,
    /// The store was rewritten
    pub written: bool,
    /// Date labels of days that could not be reconciled
    pub skipped: Vec<String>,
    /// Resulting history, newest first
    pub entries: History,
}

/// Sync service
pub struct SyncService<Tz: TimeZone = Local> {
    source: Arc<dyn SummarySource>,
    store: Arc<dyn HistoryStore>,
    clock: Arc<dyn Clock>,
    reconciler: Reconciler<Tz>,
}

impl SyncService<Local> {
    /// Create a new sync service using local time and the system clock
    pub fn new(source: Arc<dyn SummarySource>, store: Arc<dyn HistoryStore>) -> Self {
        Self { source, store, clock: Arc::new(SystemClock), reconciler: Reconciler::local() }
    }
}

impl<Tz: TimeZone> SyncService<Tz> {
    /// Replace the clock used for today's key and new capture stamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Compute day keys in another timezone. The clock should read the same
    /// zone's wall time.
    pub fn with_reconciler<Tz2: TimeZone>(self, reconciler: Reconciler<Tz2>) -> SyncService<Tz2> {
        SyncService { source: self.source, store: self.store, clock: self.clock, reconciler }
    }

    /// Run one pass: load, fetch, reconcile, create today if needed, write
    pub async fn run(&self, options: SyncOptions) -> Result<SyncReport> {
        let current = self.store.load().await?;
        let snapshot = self.source.fetch().await?;
        debug!(
            stored = current.len(),
            fetched = snapshot.summaries.len(),
            streak = snapshot.streak.site_streak,
            "sync inputs loaded"
        );

        let outcome = self.reconciler.reconcile(&current, &snapshot.summaries);
        let mut history = outcome.history;

        let today = today_key(self.clock.as_ref());
        let mut created_today = false;
        let mut skipped = Vec::new();

        for day in outcome.unresolved {
            if day.date.as_deref() == Some(today.as_str()) && !created_today {
                let progression = Progression::from(&day.summary);
                let entry = create_entry(self.clock.as_ref(), progression, snapshot.streak);
                info!(date = %entry.date, time = %entry.time, "recording first capture of today");
                history.push(entry);
                created_today = true;
                continue;
            }

            let label = day.label();
            warn!(date = %label, "no prior capture for day; skipping");
            skipped.push(label);
        }

        history.sort_by(|a, b| b.date.cmp(&a.date));

        let should_write = outcome.changed || created_today;
        let written = should_write && !options.dry_run;
        if written {
            self.store.save(&history).await?;
        }

        info!(
            changed = outcome.changed,
            created_today,
            written,
            dry_run = options.dry_run,
            skipped = skipped.len(),
            entries = history.len(),
            "sync finished"
        );

        Ok(SyncReport { changed: outcome.changed, created_today, written, skipped, entries: history })
    }
}
