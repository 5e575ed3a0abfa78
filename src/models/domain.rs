use serde::{Deserialize, Serialize};

/// Startup profile as loaded by the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    /// Free stage label, usually one of `Idea`, `MVP` or `Revenue`
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated tags
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(rename = "fundingNeeded", alias = "funding_needed", default)]
    pub funding_needed: String,
    #[serde(rename = "userId", alias = "user_id", default)]
    pub user_id: String,
}

/// Investor profile as loaded by the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "sectorsInterested", alias = "sectors_interested", default)]
    pub sectors_interested: Option<String>,
    #[serde(rename = "preferredStages", alias = "preferred_stages", default)]
    pub preferred_stages: Option<Vec<String>>,
    #[serde(rename = "investmentRangeMin", alias = "investment_range_min", default)]
    pub investment_range_min: String,
    #[serde(rename = "investmentRangeMax", alias = "investment_range_max", default)]
    pub investment_range_max: String,
    #[serde(rename = "userId", alias = "user_id", default)]
    pub user_id: String,
}

impl InvestorRecord {
    /// Sectors text, `None` when absent or blank
    pub fn sectors(&self) -> Option<&str> {
        self.sectors_interested
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Preferred stages, empty when absent
    pub fn stages(&self) -> &[String] {
        self.preferred_stages.as_deref().unwrap_or(&[])
    }
}

/// Anything that can be ranked as a candidate
pub trait Candidate {
    fn candidate_id(&self) -> &str;
}

impl Candidate for StartupRecord {
    fn candidate_id(&self) -> &str {
        &self.id
    }
}

impl Candidate for InvestorRecord {
    fn candidate_id(&self) -> &str {
        &self.id
    }
}

/// Per-factor scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "industryMatch")]
    pub industry_match: f64,
    #[serde(rename = "stageMatch")]
    pub stage_match: f64,
    #[serde(rename = "fundingMatch")]
    pub funding_match: f64,
    #[serde(rename = "keywordMatch")]
    pub keyword_match: f64,
}

/// Composite score with its breakdown and reasoning sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub reasoning: Vec<String>,
}

/// Compatibility tier derived from the composite score.
///
/// Variants are ordered from worst to best so tiers can be compared
/// with `>=` when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Compatibility {
    /// Classify a composite score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Compatibility::Excellent
        } else if score >= 0.6 {
            Compatibility::Good
        } else if score >= 0.4 {
            Compatibility::Fair
        } else {
            Compatibility::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compatibility::Poor => "poor",
            Compatibility::Fair => "fair",
            Compatibility::Good => "good",
            Compatibility::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult<C> {
    pub candidate: C,
    #[serde(rename = "matchScore")]
    pub match_score: MatchScore,
    pub compatibility: Compatibility,
}

/// Factor weights for the composite score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub industry: f64,
    pub stage: f64,
    pub funding: f64,
    pub keyword: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.industry + self.stage + self.funding + self.keyword
    }

    /// Weighted sum of a breakdown, clamped to [0, 1]
    #[inline]
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> f64 {
        let score = breakdown.industry_match * self.industry
            + breakdown.stage_match * self.stage
            + breakdown.funding_match * self.funding
            + breakdown.keyword_match * self.keyword;

        score.clamp(0.0, 1.0)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry: 0.30,
            stage: 0.25,
            funding: 0.25,
            keyword: 0.20,
        }
    }
}
