//! Duolingo API integration

pub mod client;
pub mod errors;
pub mod source;

pub use client::DuolingoClient;
pub use errors::ApiError;
pub use source::DuolingoSummarySource;
