//! Shared test helpers for `duosync-core` integration tests.
//!
//! In-memory port implementations plus builders for the entities the
//! reconciliation tests keep constructing.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;
