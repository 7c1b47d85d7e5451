//! Date/time input parsing and wall-clock resolution
//!
//! Shared by the conversion and formatting services. Classifies an input
//! string as either anchored (carrying an explicit UTC offset) or floating
//! (zone-less wall-clock time), and resolves floating times inside a zone
//! while detecting DST fall-back and spring-forward edge cases.

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use chrono_tz::Tz;

use crate::error::ApplicationError;

/// A classified date/time input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeInput {
    /// The string carried an explicit offset and defines an instant on its own
    Anchored {
        /// The instant the offset pinned down
        instant: DateTime<FixedOffset>,
        /// False when the string had no time-of-day component
        has_time: bool,
    },
    /// A zone-less wall-clock time, ambiguous until anchored to a zone
    Floating {
        /// The wall-clock date and time
        wall: NaiveDateTime,
        /// False when the string had no time-of-day component
        has_time: bool,
    },
}

impl DateTimeInput {
    /// Whether the original string carried a time-of-day component
    #[must_use]
    pub const fn has_time(&self) -> bool {
        match self {
            Self::Anchored { has_time, .. } | Self::Floating { has_time, .. } => *has_time,
        }
    }
}

/// How a floating wall-clock time mapped onto a zone's timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallClockResolution {
    /// The wall time exists exactly once
    Exact,
    /// Fall-back ambiguity: the wall time occurred twice, the earlier
    /// instant was selected
    FallBackEarlier,
    /// Spring-forward gap: the wall time never existed, the nearest later
    /// valid instant was selected
    GapShifted {
        /// Time-of-day the caller asked for
        requested: NaiveTime,
        /// Time-of-day of the instant actually produced
        resolved: NaiveTime,
    },
}

/// Restore an offset whose `+` was URL-decoded into a space
///
/// `"2025-03-09T14:30:00 05:30"` becomes `"2025-03-09T14:30:00+05:30"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let s = raw.trim();
    let b = s.as_bytes();
    if b.len() >= 6 {
        let tail = &b[b.len() - 6..];
        if tail[0] == b' '
            && tail[1].is_ascii_digit()
            && tail[2].is_ascii_digit()
            && tail[3] == b':'
            && tail[4].is_ascii_digit()
            && tail[5].is_ascii_digit()
        {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..s.len() - 6]);
            out.push('+');
            out.push_str(&s[s.len() - 5..]);
            return out;
        }
    }
    s.to_string()
}

/// Whether the string carries an explicit UTC offset (`Z` or `±HH:MM`)
#[must_use]
pub fn has_explicit_offset(s: &str) -> bool {
    if s.ends_with('Z') || s.ends_with('z') {
        return true;
    }
    // Only the part after 'T' can hold an offset sign; the date part is
    // full of hyphens.
    s.find('T')
        .is_some_and(|t| s[t + 1..].contains('+') || s[t + 1..].contains('-'))
}

/// Whether the string carries a time-of-day component
#[must_use]
pub fn has_time_component(s: &str) -> bool {
    s.find('T')
        .is_some_and(|t| s.as_bytes().get(t + 1).is_some_and(u8::is_ascii_digit))
}

/// Classify and parse a date/time string
///
/// # Errors
///
/// Returns `ApplicationError::InvalidDateTime` when the string matches no
/// supported shape.
pub fn parse(raw: &str) -> Result<DateTimeInput, ApplicationError> {
    let s = normalize(raw);
    if has_explicit_offset(&s) {
        parse_anchored(&s)
    } else {
        let (wall, has_time) = parse_naive(&s)?;
        Ok(DateTimeInput::Floating { wall, has_time })
    }
}

fn parse_anchored(s: &str) -> Result<DateTimeInput, ApplicationError> {
    // 'Z' means UTC; strip it and reuse the floating parser so minute
    // precision and date-only forms work the same in both branches.
    if let Some(stripped) = s.strip_suffix(['Z', 'z']) {
        let (wall, has_time) = parse_naive(stripped)?;
        return Ok(DateTimeInput::Anchored {
            instant: Utc.from_utc_datetime(&wall).fixed_offset(),
            has_time,
        });
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateTimeInput::Anchored {
            instant,
            has_time: true,
        });
    }
    if let Ok(instant) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Ok(DateTimeInput::Anchored {
            instant,
            has_time: true,
        });
    }

    Err(ApplicationError::InvalidDateTime(format!(
        "unrecognized date/time shape: {s}"
    )))
}

fn parse_naive(s: &str) -> Result<(NaiveDateTime, bool), ApplicationError> {
    const WITH_TIME: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

    for fmt in WITH_TIME {
        if let Ok(wall) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok((wall, true));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok((date.and_time(NaiveTime::MIN), false));
    }

    Err(ApplicationError::InvalidDateTime(format!(
        "unrecognized date/time shape: {s}"
    )))
}

/// Anchor a floating wall-clock time inside a zone
///
/// Fall-back ambiguities deterministically select the earlier instant.
/// Spring-forward gaps step forward in 15-minute increments (DST shifts
/// are multiples of 15 minutes) until the clock becomes valid again.
#[must_use]
pub fn resolve_wall_clock(tz: Tz, wall: NaiveDateTime) -> (DateTime<Tz>, WallClockResolution) {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => (dt, WallClockResolution::Exact),
        LocalResult::Ambiguous(earlier, _later) => (earlier, WallClockResolution::FallBackEarlier),
        LocalResult::None => {
            let mut probe = wall;
            // Worst known gap is a full skipped calendar day; 15-minute
            // steps across 28 hours cover it.
            for _ in 0..112 {
                probe += Duration::minutes(15);
                let resolved = match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => dt,
                    LocalResult::Ambiguous(earlier, _) => earlier,
                    LocalResult::None => continue,
                };
                return (
                    resolved,
                    WallClockResolution::GapShifted {
                        requested: wall.time(),
                        resolved: probe.time(),
                    },
                );
            }
            // Degenerate zone data; interpret the wall time as UTC.
            (
                tz.from_utc_datetime(&wall),
                WallClockResolution::GapShifted {
                    requested: wall.time(),
                    resolved: tz.from_utc_datetime(&wall).time(),
                },
            )
        },
    }
}
