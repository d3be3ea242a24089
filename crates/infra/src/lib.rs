//! # DuoSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The retrying HTTP client and the Duolingo API client
//! - `SummarySource` and `HistoryStore` adapters (JSON file, SQLite)
//! - Configuration loading and logging initialisation
//!
//! ## Architecture
//! - Implements traits defined in `duosync-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod duolingo;
pub mod errors;
pub mod http;
pub mod observability;
pub mod store;

// Re-export commonly used items
pub use duolingo::{DuolingoClient, DuolingoSummarySource};
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::{init_tracing, LogFormat};
pub use store::{open_store, JsonHistoryStore, SqliteHistoryStore};
