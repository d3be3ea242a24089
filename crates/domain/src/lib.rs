//! # DuoSync Domain
//!
//! Business domain types and models for DuoSync.
//!
//! This crate contains:
//! - The typed entities (Summary, Progression, StreakInformation,
//!   DatabaseEntry)
//! - Strict validation of raw API payloads into those entities
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other DuoSync crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod schema;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
