//! Conversion result entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Timezone;

/// Audit trail of how a conversion input instant was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SourceInterpretation {
    /// The offset embedded in the string defined the instant
    ExplicitOffset {
        /// True when a source zone was also supplied and ignored
        source_zone_ignored: bool,
    },
    /// A floating wall-clock time was anchored inside a zone
    FloatingInZone {
        /// The zone the wall-clock time was interpreted in
        zone: Timezone,
    },
}

impl fmt::Display for SourceInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitOffset {
                source_zone_ignored: true,
            } => write!(
                f,
                "Offset provided in the string defined the moment; the supplied source zone was ignored"
            ),
            Self::ExplicitOffset {
                source_zone_ignored: false,
            } => write!(f, "Offset in the string defined the moment"),
            Self::FloatingInZone { zone } => {
                write!(f, "Floating time interpreted as originating in {zone}")
            },
        }
    }
}

/// A resolved instant projected into a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonedView {
    /// The zone the instant was projected into
    pub zone: Timezone,
    /// Full ISO-8601 representation with offset
    pub iso: String,
    /// Short wall-clock string (e.g. "02:30 PM")
    pub local_wall_time: String,
    /// Long-form string (e.g. "March 9, 2025 at 2:30 PM EDT")
    pub full_format: String,
    /// UTC offset in minutes at the instant
    pub offset_minutes: i32,
    /// Offset rendered as `+HH:MM` / `-HH:MM`
    pub offset_string: String,
    /// Short zone abbreviation
    pub abbreviation: String,
    /// Whether daylight saving time is in effect at the instant
    pub is_dst: bool,
}

/// The result of converting a date/time string between zones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// The resolved absolute instant
    pub utc: DateTime<Utc>,
    /// The instant as unix milliseconds
    pub unix_timestamp_ms: i64,
    /// Zone used to anchor a floating input, when one was
    pub source_zone_used: Option<Timezone>,
    /// How the instant was derived from the input
    pub interpretation: SourceInterpretation,
    /// Non-fatal caveats accumulated while resolving the input
    pub warnings: Vec<String>,
    /// The instant projected into the target zone
    pub converted: ZonedView,
}

/// The result of formatting a date/time string in a display zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTime {
    /// The rendered output
    pub formatted: String,
    /// The preset token or pattern that was requested
    pub requested_format: String,
    /// Zone the instant was rendered in
    pub zone: Timezone,
    /// Locale actually applied (falls back to `en-US`)
    pub applied_locale: String,
    /// The instant as unix milliseconds
    pub unix_timestamp_ms: i64,
    /// The parsed instant in the display zone, ISO-8601
    pub parsed_iso: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpretation_display_override() {
        let interp = SourceInterpretation::ExplicitOffset {
            source_zone_ignored: true,
        };
        assert!(interp.to_string().contains("ignored"));
    }

    #[test]
    fn test_interpretation_display_floating() {
        let interp = SourceInterpretation::FloatingInZone {
            zone: Timezone::parse("Europe/Paris").expect("valid"),
        };
        assert!(interp.to_string().contains("Europe/Paris"));
    }

    #[test]
    fn test_interpretation_serde_tagged() {
        let interp = SourceInterpretation::ExplicitOffset {
            source_zone_ignored: false,
        };
        let json = serde_json::to_string(&interp).expect("serialize");
        assert!(json.contains("explicit_offset"));
    }
}
