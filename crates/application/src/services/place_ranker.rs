//! Candidate place ranking
//!
//! Orders gazetteer matches by a composite of population, feature class,
//! and provider relevance so the chain can pick a deterministic best
//! candidate.

use domain::entities::CandidatePlace;
use tracing::debug;

/// Ranks candidate places by composite score
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceRanker;

impl PlaceRanker {
    /// Create a new ranker
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sort candidates by composite score, best first
    ///
    /// The sort is stable, so provider order breaks exact ties.
    #[must_use]
    pub fn rank(&self, mut candidates: Vec<CandidatePlace>) -> Vec<CandidatePlace> {
        candidates.sort_by(|a, b| {
            b.composite_score()
                .partial_cmp(&a.composite_score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(top) = candidates.first() {
            debug!(
                name = %top.name,
                score = top.composite_score(),
                candidates = candidates.len(),
                "ranked place candidates"
            );
        }
        candidates
    }

    /// The best candidate that carries a timezone, if any
    #[must_use]
    pub fn best(&self, candidates: Vec<CandidatePlace>) -> Option<CandidatePlace> {
        self.rank(candidates)
            .into_iter()
            .find(|c| c.timezone.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, population: u64, feature_code: &str, relevance: f64) -> CandidatePlace {
        CandidatePlace {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            population,
            feature_code: feature_code.to_string(),
            external_relevance: relevance,
            timezone: Some("Etc/UTC".to_string()),
        }
    }

    #[test]
    fn test_population_dominates() {
        let ranker = PlaceRanker::new();
        let ranked = ranker.rank(vec![
            place("small", 10_000, "PPL", 1.0),
            place("big", 5_000_000, "PPL", 1.0),
        ]);
        assert_eq!(ranked[0].name, "big");
    }

    #[test]
    fn test_feature_rank_breaks_population_tie() {
        let ranker = PlaceRanker::new();
        let ranked = ranker.rank(vec![
            place("suburb", 100_000, "PPLX", 1.0),
            place("capital", 100_000, "PPLC", 1.0),
        ]);
        assert_eq!(ranked[0].name, "capital");
    }

    #[test]
    fn test_stable_on_exact_ties() {
        let ranker = PlaceRanker::new();
        let ranked = ranker.rank(vec![
            place("first", 100_000, "PPL", 1.0),
            place("second", 100_000, "PPL", 1.0),
        ]);
        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
    }

    #[test]
    fn test_best_skips_candidates_without_zone() {
        let ranker = PlaceRanker::new();
        let mut no_zone = place("big", 5_000_000, "PPLC", 1.0);
        no_zone.timezone = None;
        let best = ranker
            .best(vec![no_zone, place("small", 10_000, "PPL", 1.0)])
            .expect("one candidate has a zone");
        assert_eq!(best.name, "small");
    }

    #[test]
    fn test_best_of_empty_is_none() {
        assert!(PlaceRanker::new().best(vec![]).is_none());
    }
}
