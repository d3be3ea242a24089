//! History reconciliation: day keys, merge engine, change detection

pub mod day_key;
pub mod diff;
pub mod engine;

pub use day_key::{day_key, wall_clock_day_key, wall_clock_time};
pub use diff::content_changed;
pub use engine::{reconcile, PriorIndex, PriorMeta, Reconciler, Reconciliation, UnresolvedDay};
