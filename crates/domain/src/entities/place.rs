//! Candidate place entity

use serde::{Deserialize, Serialize};

/// A place returned by the gazetteer search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlace {
    /// Place name as reported by the gazetteer
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Population, zero when the gazetteer reports none
    #[serde(default)]
    pub population: u64,
    /// Administrative classification (e.g. `PPLC` for a capital)
    pub feature_code: String,
    /// Provider-supplied relevance score, zero when absent
    #[serde(default)]
    pub external_relevance: f64,
    /// IANA zone identifier the gazetteer resolved for this place
    pub timezone: Option<String>,
}

impl CandidatePlace {
    /// Feature-code priority weights, keyed by administrative level
    ///
    /// Capital > first-level admin division > lower divisions > generic
    /// populated place > sub-place section. Unknown codes rank zero.
    const FEATURE_RANKS: &'static [(&'static str, f64)] = &[
        ("PPLC", 100.0),
        ("PPLA", 80.0),
        ("PPLA2", 70.0),
        ("PPLA3", 60.0),
        ("PPLA4", 50.0),
        ("PPL", 40.0),
        ("PPLX", 30.0),
    ];

    /// Heuristic weight for this place's administrative classification
    #[must_use]
    pub fn feature_rank(&self) -> f64 {
        Self::FEATURE_RANKS
            .iter()
            .find(|(code, _)| *code == self.feature_code)
            .map_or(0.0, |(_, rank)| *rank)
    }

    /// Weighted combination of population, feature rank and provider
    /// relevance used to disambiguate place-name matches
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn composite_score(&self) -> f64 {
        (self.population as f64)
            .mul_add(0.6, self.feature_rank().mul_add(0.3, self.external_relevance * 0.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(population: u64, feature_code: &str, external_relevance: f64) -> CandidatePlace {
        CandidatePlace {
            name: "Somewhere".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            population,
            feature_code: feature_code.to_string(),
            external_relevance,
            timezone: Some("UTC".to_string()),
        }
    }

    #[test]
    fn test_feature_rank_table() {
        assert!((place(0, "PPLC", 0.0).feature_rank() - 100.0).abs() < f64::EPSILON);
        assert!((place(0, "PPLA", 0.0).feature_rank() - 80.0).abs() < f64::EPSILON);
        assert!((place(0, "PPLX", 0.0).feature_rank() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_feature_rank_unknown_code() {
        assert!(place(0, "ISL", 0.0).feature_rank().abs() < f64::EPSILON);
        assert!(place(0, "", 0.0).feature_rank().abs() < f64::EPSILON);
    }

    #[test]
    fn test_composite_score_weights() {
        let p = place(1000, "PPLC", 50.0);
        // 1000 * 0.6 + 100 * 0.3 + 50 * 0.1
        assert!((p.composite_score() - 635.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_capital_outranks_small_generic() {
        let capital = place(500_000, "PPLC", 0.0);
        let generic = place(100, "PPL", 0.0);
        assert!(capital.composite_score() > generic.composite_score());
    }

    #[test]
    fn test_composite_score_monotonic_in_population() {
        let small = place(100, "PPL", 0.0);
        let large = place(500, "PPL", 0.0);
        assert!(large.composite_score() > small.composite_score());
    }
}
