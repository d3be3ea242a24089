//! Strict decoding of raw API payloads into typed entities
//!
//! Payloads are decoded through serde. Any violation becomes
//! [`DuoSyncError::SchemaMismatch`] prefixed with the path of the offending
//! object (`summaries[3]: missing field `gainedXp``). Integer fields reject
//! negatives, floats, strings and nulls. Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{DuoSyncError, Result};
use crate::types::{StreakInformation, Summary};

#[derive(Deserialize)]
struct SummariesPayload {
    summaries: Vec<Value>,
}

#[derive(Deserialize)]
struct UserState {
    #[serde(alias = "siteStreak")]
    site_streak: u64,
}

#[derive(Deserialize)]
struct UserId {
    id: u64,
}

impl TryFrom<&Value> for Summary {
    type Error = DuoSyncError;

    fn try_from(value: &Value) -> Result<Self> {
        decode(value, "summary")
    }
}

impl TryFrom<&Value> for StreakInformation {
    type Error = DuoSyncError;

    /// Builds the streak from a user-state payload (`{"site_streak": n, ...}`).
    fn try_from(value: &Value) -> Result<Self> {
        parse_user_state(value)
    }
}

/// Validate an `xp_summaries` response body.
///
/// The `summaries` array keeps its received order (newest first).
pub fn parse_summaries(payload: &Value) -> Result<Vec<Summary>> {
    let payload: SummariesPayload = decode(payload, "$")?;

    payload
        .summaries
        .iter()
        .enumerate()
        .map(|(index, item)| decode(item, &format!("summaries[{index}]")))
        .collect()
}

/// Validate a user-state payload into the current streak.
pub fn parse_user_state(payload: &Value) -> Result<StreakInformation> {
    let state: UserState = decode(payload, "$")?;
    Ok(StreakInformation { site_streak: state.site_streak })
}

/// Extract the numeric user id needed for the summaries endpoint.
pub fn parse_user_id(payload: &Value) -> Result<u64> {
    let user: UserId = decode(payload, "$")?;
    Ok(user.id)
}

/// Parse raw text before validating it, so malformed JSON reports the same
/// error kind as a shape change.
pub fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|err| DuoSyncError::schema("$", format!("invalid JSON: {err}")))
}

// serde would also accept a struct spelled as a positional array
fn decode<'de, T: Deserialize<'de>>(value: &'de Value, path: &str) -> Result<T> {
    if !value.is_object() {
        return Err(DuoSyncError::schema(path, "expected an object"));
    }
    T::deserialize(value).map_err(|err| DuoSyncError::schema(path, err.to_string()))
}
