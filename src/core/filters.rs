use crate::models::{Compatibility, MatchResult};

/// Caller-side filtering of a ranked list
///
/// The matcher itself never drops candidates. Callers narrow the ranked
/// output by minimum score, minimum tier and a pagination window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankingFilter {
    pub min_score: Option<f64>,
    pub min_compatibility: Option<Compatibility>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl RankingFilter {
    /// Check if a result passes the score and tier thresholds
    #[inline]
    pub fn accepts<C>(&self, result: &MatchResult<C>) -> bool {
        if let Some(min_score) = self.min_score {
            if result.match_score.score < min_score {
                return false;
            }
        }

        if let Some(min_tier) = self.min_compatibility {
            if result.compatibility < min_tier {
                return false;
            }
        }

        true
    }

    /// Apply thresholds, then the offset/limit window. Order is preserved.
    pub fn apply<C>(&self, results: Vec<MatchResult<C>>) -> Vec<MatchResult<C>> {
        let limit = self.limit.unwrap_or(usize::MAX);

        results
            .into_iter()
            .filter(|r| self.accepts(r))
            .skip(self.offset)
            .take(limit)
            .collect()
    }
}
