//! # DuoSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - History reconciliation (day keys, merge, change detection)
//! - First-capture entry creation against an injectable clock
//! - Port interfaces for the remote source and the history store
//! - The sync service that drives one pass through those ports
//!
//! ## Architecture Principles
//! - Only depends on `duosync-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod capture;
pub mod reconcile;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use capture::{create_entry, today_key, Clock, FixedClock, SystemClock};
pub use reconcile::{reconcile, Reconciler, Reconciliation, UnresolvedDay};
pub use sync::ports::{HistoryStore, SummarySource};
pub use sync::{SyncOptions, SyncReport, SyncService};
