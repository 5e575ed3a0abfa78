use std::sync::Arc;

use crate::core::{
    scoring::calculate_match_score,
    taxonomy::{SectorTaxonomy, StageLadder},
};
use crate::models::{
    Candidate, Compatibility, InvestorRecord, MatchResult, MatchScore, ScoreBreakdown,
    ScoringWeights, StartupRecord,
};

/// Industry, stage and funding sentences are only added above this score
const FACTOR_DISCLOSURE_THRESHOLD: f64 = 0.7;

/// Keyword sentence threshold
const KEYWORD_DISCLOSURE_THRESHOLD: f64 = 0.6;

/// Main matching orchestrator - scores every candidate and ranks them
///
/// # Pipeline
/// 1. Four factor scores per startup/investor pair
/// 2. Weighted composite and compatibility tier
/// 3. Reasoning sentences phrased for the subject
/// 4. Sort by score (descending), then candidate id
///
/// The matcher is stateless between calls and never drops a candidate.
/// Cloning is cheap; the taxonomy is shared.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    taxonomy: Arc<SectorTaxonomy>,
    ladder: StageLadder,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            taxonomy: Arc::new(SectorTaxonomy::builtin()),
            ladder: StageLadder::default(),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_taxonomy(mut self, taxonomy: SectorTaxonomy) -> Self {
        self.taxonomy = Arc::new(taxonomy);
        self
    }

    pub fn with_stage_ladder(mut self, ladder: StageLadder) -> Self {
        self.ladder = ladder;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn taxonomy(&self) -> &SectorTaxonomy {
        &self.taxonomy
    }

    pub fn stage_ladder(&self) -> &StageLadder {
        &self.ladder
    }

    /// Composite score and breakdown for one pair
    pub fn score(&self, startup: &StartupRecord, investor: &InvestorRecord) -> (f64, ScoreBreakdown) {
        calculate_match_score(startup, investor, &self.weights, &self.taxonomy, &self.ladder)
    }

    /// Rank startups for an investor
    ///
    /// # Arguments
    /// * `investor` - The subject of the ranking
    /// * `startups` - Candidate startups, left untouched
    ///
    /// # Returns
    /// One result per startup, best first. Reasoning is addressed to the
    /// investor.
    pub fn rank_startups_for_investor(
        &self,
        investor: &InvestorRecord,
        startups: &[StartupRecord],
    ) -> Vec<MatchResult<StartupRecord>> {
        let mut results: Vec<MatchResult<StartupRecord>> = startups
            .iter()
            .map(|startup| {
                let (score, breakdown) = self.score(startup, investor);
                let reasoning = investor_reasoning(startup, &breakdown);
                build_result(startup.clone(), score, breakdown, reasoning)
            })
            .collect();

        sort_ranked(&mut results);

        tracing::debug!(
            "Ranked {} startups for investor {} (top score: {:.3})",
            results.len(),
            investor.id,
            results.first().map(|r| r.match_score.score).unwrap_or(0.0)
        );

        results
    }

    /// Rank investors for a startup
    ///
    /// Mirror of [`Matcher::rank_startups_for_investor`]: identical factor
    /// computation, reasoning addressed to the startup.
    pub fn rank_investors_for_startup(
        &self,
        startup: &StartupRecord,
        investors: &[InvestorRecord],
    ) -> Vec<MatchResult<InvestorRecord>> {
        let mut results: Vec<MatchResult<InvestorRecord>> = investors
            .iter()
            .map(|investor| {
                let (score, breakdown) = self.score(startup, investor);
                let reasoning = startup_reasoning(startup, &breakdown);
                build_result(investor.clone(), score, breakdown, reasoning)
            })
            .collect();

        sort_ranked(&mut results);

        tracing::debug!(
            "Ranked {} investors for startup {} (top score: {:.3})",
            results.len(),
            startup.id,
            results.first().map(|r| r.match_score.score).unwrap_or(0.0)
        );

        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank startups for an investor with the default weights and vocabularies
pub fn rank_startups_for_investor(
    investor: &InvestorRecord,
    startups: &[StartupRecord],
) -> Vec<MatchResult<StartupRecord>> {
    Matcher::default().rank_startups_for_investor(investor, startups)
}

/// Rank investors for a startup with the default weights and vocabularies
pub fn rank_investors_for_startup(
    startup: &StartupRecord,
    investors: &[InvestorRecord],
) -> Vec<MatchResult<InvestorRecord>> {
    Matcher::default().rank_investors_for_startup(startup, investors)
}

fn build_result<C>(
    candidate: C,
    score: f64,
    breakdown: ScoreBreakdown,
    reasoning: Vec<String>,
) -> MatchResult<C> {
    MatchResult {
        candidate,
        match_score: MatchScore {
            score,
            breakdown,
            reasoning,
        },
        compatibility: Compatibility::from_score(score),
    }
}

/// Reasoning shown to an investor looking at a startup
fn investor_reasoning(startup: &StartupRecord, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut reasoning = Vec::new();

    if breakdown.industry_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push(format!("Strong industry alignment in {}", startup.industry));
    }
    if breakdown.stage_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push(format!("Perfect stage match for {} companies", startup.stage));
    }
    if breakdown.funding_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push("Funding requirement fits your investment range".to_string());
    }
    if breakdown.keyword_match > KEYWORD_DISCLOSURE_THRESHOLD {
        reasoning.push("Business description matches your investment thesis".to_string());
    }

    reasoning
}

/// Reasoning shown to a startup looking at an investor
fn startup_reasoning(startup: &StartupRecord, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut reasoning = Vec::new();

    if breakdown.industry_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push(format!("Invests in the {} sector", startup.industry));
    }
    if breakdown.stage_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push(format!("Actively invests in {} stage companies", startup.stage));
    }
    if breakdown.funding_match > FACTOR_DISCLOSURE_THRESHOLD {
        reasoning.push("Investment range covers your funding needs".to_string());
    }
    if breakdown.keyword_match > KEYWORD_DISCLOSURE_THRESHOLD {
        reasoning.push("Investment focus aligns with your business".to_string());
    }

    reasoning
}

/// Sort by score (descending) and then by candidate id (ascending).
/// The sort is stable, so equal ids keep input order.
fn sort_ranked<C: Candidate>(results: &mut [MatchResult<C>]) {
    results.sort_by(|a, b| {
        b.match_score
            .score
            .partial_cmp(&a.match_score.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate.candidate_id().cmp(b.candidate.candidate_id()))
    });
}
