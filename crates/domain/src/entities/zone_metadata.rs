//! Zone metadata entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::Timezone;

/// Offset and DST state of a zone on a given calendar day
///
/// Evaluated strictly at local noon of the reference date to sidestep
/// transition-boundary ambiguity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneMetadata {
    /// The zone this metadata describes
    pub zone: Timezone,
    /// Calendar day the metadata was computed for
    pub reference_date: NaiveDate,
    /// UTC offset in minutes at local noon
    pub utc_offset_minutes: i32,
    /// Offset rendered as `+HH:MM` / `-HH:MM`
    pub offset_string: String,
    /// Short zone abbreviation (e.g. `CET`)
    pub abbreviation: String,
    /// Whether daylight saving time is in effect at local noon
    pub is_dst: bool,
    /// Display name (e.g. "Central European Time")
    pub long_name: String,
}

/// Render an offset in minutes as `+HH:MM` / `-HH:MM`
#[must_use]
pub fn offset_string(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}
