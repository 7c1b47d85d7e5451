//! Property-based tests for the date/time parsing helpers

use application::datetime_parser::{self, DateTimeInput};
use chrono_tz::Tz;
use proptest::prelude::*;

proptest! {
    /// Parsing arbitrary input never panics, it either classifies or errors
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = datetime_parser::parse(&input);
    }

    /// A decoded-plus tail always normalizes back to an offset
    #[test]
    fn normalize_restores_offset(h in 0u8..24, m in 0u8..60) {
        let raw = format!("2025-06-15T10:00:00 {h:02}:{m:02}");
        let normalized = datetime_parser::normalize(&raw);
        let restored = normalized.ends_with(&format!("+{h:02}:{m:02}"));
        prop_assert!(restored, "normalized to {}", normalized);
        prop_assert!(datetime_parser::has_explicit_offset(&normalized));
    }

    /// Valid offset-bearing strings always classify as anchored
    #[test]
    fn offset_strings_are_anchored(
        h in 0u32..24, m in 0u32..60, oh in 0i32..15, om in prop::sample::select(vec![0i32, 15, 30, 45])
    ) {
        let raw = format!("2025-06-15T{h:02}:{m:02}:00+{oh:02}:{om:02}");
        let parsed = datetime_parser::parse(&raw).expect("well-formed input");
        let anchored = matches!(parsed, DateTimeInput::Anchored { .. });
        prop_assert!(anchored, "input {} classified as floating", raw);
    }

    /// Every wall-clock minute of a transition day resolves to an instant
    /// whose offset is one of the zone's two offsets for that day
    #[test]
    fn every_wall_minute_resolves(h in 0u32..24, m in 0u32..60) {
        use chrono::Offset;

        let tz: Tz = "America/New_York".parse().expect("valid zone");
        let wall = chrono::NaiveDate::from_ymd_opt(2025, 3, 9)
            .expect("valid date")
            .and_hms_opt(h, m, 0)
            .expect("valid time");
        let (resolved, _) = datetime_parser::resolve_wall_clock(tz, wall);
        let offset = resolved.offset().fix().local_minus_utc();
        prop_assert!(offset == -5 * 3600 || offset == -4 * 3600);
    }
}
