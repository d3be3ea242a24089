//! Domain types and models

pub mod auth;
pub mod entry;
pub mod progression;
pub mod summary;

pub use auth::{LoginMethod, Session};
pub use entry::{DatabaseEntry, History};
pub use progression::{Experience, Progression, SessionInformation, StreakInformation};
pub use summary::{RemoteSnapshot, Summary};
