//! Time conversion and formatting
//!
//! Converts date/time strings between zones and renders them with preset
//! or free-form patterns. The input classification follows one rule: an
//! explicit offset in the string always wins over a supplied source zone,
//! and a floating time without any zone at all is a fatal ambiguity.

use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, Offset, Utc};
use chrono_tz::OffsetComponents;
use chrono_tz::Tz;
use domain::ZoneCatalog;
use domain::entities::{
    ConversionOutcome, FormattedTime, SourceInterpretation, ZonedView, offset_string,
};
use domain::value_objects::Timezone;
use tracing::{debug, instrument};

use crate::datetime_parser::{self, DateTimeInput, WallClockResolution};
use crate::error::ApplicationError;

const FALLBACK_LOCALE: &str = "en-US";

/// Named rendering presets, mapped to strftime patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPreset {
    DateShort,
    DateMed,
    DateMedWithWeekday,
    DateFull,
    DateHuge,
    TimeSimple,
    TimeWithSeconds,
    TimeWithShortOffset,
    TimeWithLongOffset,
    Time24Simple,
    Time24WithSeconds,
    Time24WithShortOffset,
    Time24WithLongOffset,
    DateTimeShort,
    DateTimeMed,
    DateTimeMedWithWeekday,
    DateTimeFull,
    DateTimeHuge,
    DateTimeShortWithSeconds,
    DateTimeMedWithSeconds,
    DateTimeFullWithSeconds,
    DateTimeHugeWithSeconds,
}

impl FormatPreset {
    /// Look up a preset by its token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DATE_SHORT" => Some(Self::DateShort),
            "DATE_MED" => Some(Self::DateMed),
            "DATE_MED_WITH_WEEKDAY" => Some(Self::DateMedWithWeekday),
            "DATE_FULL" => Some(Self::DateFull),
            "DATE_HUGE" => Some(Self::DateHuge),
            "TIME_SIMPLE" => Some(Self::TimeSimple),
            "TIME_WITH_SECONDS" => Some(Self::TimeWithSeconds),
            "TIME_WITH_SHORT_OFFSET" => Some(Self::TimeWithShortOffset),
            "TIME_WITH_LONG_OFFSET" => Some(Self::TimeWithLongOffset),
            "TIME_24_SIMPLE" => Some(Self::Time24Simple),
            "TIME_24_WITH_SECONDS" => Some(Self::Time24WithSeconds),
            "TIME_24_WITH_SHORT_OFFSET" => Some(Self::Time24WithShortOffset),
            "TIME_24_WITH_LONG_OFFSET" => Some(Self::Time24WithLongOffset),
            "DATETIME_SHORT" => Some(Self::DateTimeShort),
            "DATETIME_MED" => Some(Self::DateTimeMed),
            "DATETIME_MED_WITH_WEEKDAY" => Some(Self::DateTimeMedWithWeekday),
            "DATETIME_FULL" => Some(Self::DateTimeFull),
            "DATETIME_HUGE" => Some(Self::DateTimeHuge),
            "DATETIME_SHORT_WITH_SECONDS" => Some(Self::DateTimeShortWithSeconds),
            "DATETIME_MED_WITH_SECONDS" => Some(Self::DateTimeMedWithSeconds),
            "DATETIME_FULL_WITH_SECONDS" => Some(Self::DateTimeFullWithSeconds),
            "DATETIME_HUGE_WITH_SECONDS" => Some(Self::DateTimeHugeWithSeconds),
            _ => None,
        }
    }

    /// The strftime pattern the preset renders with
    ///
    /// Short offsets render as the zone abbreviation, long offsets as a
    /// numeric `+HH:MM`.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DateShort => "%-m/%-d/%Y",
            Self::DateMed => "%b %-d, %Y",
            Self::DateMedWithWeekday => "%a, %b %-d, %Y",
            Self::DateFull => "%B %-d, %Y",
            Self::DateHuge => "%A, %B %-d, %Y",
            Self::TimeSimple => "%-I:%M %p",
            Self::TimeWithSeconds => "%-I:%M:%S %p",
            Self::TimeWithShortOffset => "%-I:%M:%S %p %Z",
            Self::TimeWithLongOffset => "%-I:%M:%S %p %:z",
            Self::Time24Simple => "%H:%M",
            Self::Time24WithSeconds => "%H:%M:%S",
            Self::Time24WithShortOffset => "%H:%M:%S %Z",
            Self::Time24WithLongOffset => "%H:%M:%S %:z",
            Self::DateTimeShort => "%-m/%-d/%Y, %-I:%M %p",
            Self::DateTimeMed => "%b %-d, %Y, %-I:%M %p",
            Self::DateTimeMedWithWeekday => "%a, %b %-d, %Y, %-I:%M %p",
            Self::DateTimeFull => "%B %-d, %Y at %-I:%M %p %Z",
            Self::DateTimeHuge => "%A, %B %-d, %Y at %-I:%M %p %Z",
            Self::DateTimeShortWithSeconds => "%-m/%-d/%Y, %-I:%M:%S %p",
            Self::DateTimeMedWithSeconds => "%b %-d, %Y, %-I:%M:%S %p",
            Self::DateTimeFullWithSeconds => "%B %-d, %Y at %-I:%M:%S %p %Z",
            Self::DateTimeHugeWithSeconds => "%A, %B %-d, %Y at %-I:%M:%S %p %Z",
        }
    }
}

/// Converts and formats date/time strings between zones
#[derive(Debug, Clone)]
pub struct TimeConverter {
    catalog: Arc<ZoneCatalog>,
}

impl TimeConverter {
    /// Create a converter over the given catalog
    #[must_use]
    pub const fn new(catalog: Arc<ZoneCatalog>) -> Self {
        Self { catalog }
    }

    /// Convert a date/time string into a target zone
    ///
    /// # Errors
    ///
    /// Fails with `InvalidZone` for unknown zone identifiers,
    /// `InvalidDateTime` for unparseable input, and `AmbiguousDateTime`
    /// when the input has neither an offset nor a source zone.
    #[instrument(skip(self))]
    pub fn convert(
        &self,
        date_time: &str,
        source_zone: Option<&str>,
        target_zone: &str,
    ) -> Result<ConversionOutcome, ApplicationError> {
        let target = self.validate_zone(target_zone)?;
        let source = source_zone.map(|id| self.validate_zone(id)).transpose()?;

        let mut warnings = Vec::new();
        let input = datetime_parser::parse(date_time)?;
        if !input.has_time() {
            warnings.push("No time of day provided; midnight was assumed".to_string());
        }

        let (utc, source_zone_used, interpretation) = match (input, source) {
            (DateTimeInput::Anchored { instant, .. }, supplied) => {
                if let Some(ignored) = supplied {
                    warnings.push(format!(
                        "The input carries its own UTC offset, which takes precedence; \
                         source zone {ignored} was ignored"
                    ));
                }
                (
                    instant.with_timezone(&Utc),
                    None,
                    SourceInterpretation::ExplicitOffset {
                        source_zone_ignored: supplied.is_some(),
                    },
                )
            },
            (DateTimeInput::Floating { wall, .. }, Some(zone)) => {
                let (local, resolution) = datetime_parser::resolve_wall_clock(zone.tz(), wall);
                match resolution {
                    WallClockResolution::Exact => {},
                    WallClockResolution::FallBackEarlier => warnings.push(format!(
                        "{wall} occurs twice in {zone} because clocks fall back; \
                         the earlier occurrence was used"
                    )),
                    WallClockResolution::GapShifted {
                        requested,
                        resolved,
                    } => warnings.push(format!(
                        "{wall} does not exist in {zone} because clocks spring forward; \
                         adjusted from {requested} to {resolved}"
                    )),
                }
                (
                    local.with_timezone(&Utc),
                    Some(zone),
                    SourceInterpretation::FloatingInZone { zone },
                )
            },
            (DateTimeInput::Floating { .. }, None) => {
                return Err(ApplicationError::AmbiguousDateTime(format!(
                    "'{date_time}' carries no UTC offset and no source zone was given"
                )));
            },
        };

        debug!(%utc, target = %target, "converted instant");
        Ok(ConversionOutcome {
            utc,
            unix_timestamp_ms: utc.timestamp_millis(),
            source_zone_used,
            interpretation,
            warnings,
            converted: self.zoned_view(utc, target),
        })
    }

    /// Render a date/time string in a display zone
    ///
    /// # Errors
    ///
    /// Fails with `InvalidZone`, `InvalidDateTime`, or `InvalidFormat`.
    #[instrument(skip(self))]
    pub fn format(
        &self,
        date_time: &str,
        display_zone: &str,
        format_spec: &str,
        locale: Option<&str>,
    ) -> Result<FormattedTime, ApplicationError> {
        let zone = self.validate_zone(display_zone)?;
        let pattern = resolve_pattern(format_spec)?;
        let (applied_locale, chrono_locale) = resolve_locale(locale);

        let input = datetime_parser::parse(date_time)?;
        let local: DateTime<Tz> = match input {
            DateTimeInput::Anchored { instant, .. } => instant.with_timezone(&zone.tz()),
            DateTimeInput::Floating { wall, .. } => {
                datetime_parser::resolve_wall_clock(zone.tz(), wall).0
            },
        };

        Ok(FormattedTime {
            formatted: local.format_localized(&pattern, chrono_locale).to_string(),
            requested_format: format_spec.to_string(),
            zone,
            applied_locale,
            unix_timestamp_ms: local.timestamp_millis(),
            parsed_iso: local.to_rfc3339(),
        })
    }

    /// Project an instant into a zone with display metadata
    #[must_use]
    pub fn zoned_view(&self, instant: DateTime<Utc>, zone: Timezone) -> ZonedView {
        let local = instant.with_timezone(&zone.tz());
        let offset = local.offset();
        let offset_minutes = offset.fix().local_minus_utc() / 60;

        ZonedView {
            zone,
            iso: local.to_rfc3339(),
            local_wall_time: local.format("%I:%M %p").to_string(),
            full_format: local.format("%B %-d, %Y at %-I:%M %p %Z").to_string(),
            offset_minutes,
            offset_string: offset_string(offset_minutes),
            abbreviation: local.format("%Z").to_string(),
            is_dst: !offset.dst_offset().is_zero(),
        }
    }

    fn validate_zone(&self, id: &str) -> Result<Timezone, ApplicationError> {
        self.catalog
            .validate(id)
            .ok_or_else(|| ApplicationError::InvalidZone(id.to_string()))
    }
}

/// Map a format spec to the strftime pattern it stands for
fn resolve_pattern(format_spec: &str) -> Result<String, ApplicationError> {
    if let Some(preset) = FormatPreset::from_token(format_spec) {
        return Ok(preset.pattern().to_string());
    }
    // Preset-shaped tokens that match nothing are typos, not patterns
    if !format_spec.is_empty()
        && format_spec
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ApplicationError::InvalidFormat(format!(
            "unknown format preset '{format_spec}'"
        )));
    }

    let has_errors = StrftimeItems::new(format_spec).any(|item| matches!(item, Item::Error));
    if has_errors || format_spec.is_empty() {
        return Err(ApplicationError::InvalidFormat(format!(
            "invalid strftime pattern '{format_spec}'"
        )));
    }
    Ok(format_spec.to_string())
}

/// Map a BCP 47-ish locale tag to a chrono locale, falling back to en-US
fn resolve_locale(locale: Option<&str>) -> (String, Locale) {
    let Some(requested) = locale else {
        return (FALLBACK_LOCALE.to_string(), Locale::en_US);
    };
    let candidate = requested.replace('-', "_");
    Locale::try_from(candidate.as_str()).map_or_else(
        |_| (FALLBACK_LOCALE.to_string(), Locale::en_US),
        |locale| (requested.to_string(), locale),
    )
}
