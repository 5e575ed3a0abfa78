use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::RankingFilter;
use crate::models::domain::{Compatibility, InvestorRecord, StartupRecord};

/// Request to rank startups for an investor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankStartupsRequest {
    pub investor: InvestorRecord,
    /// `null` and missing are both treated as an empty list
    #[serde(default)]
    pub startups: Option<Vec<StartupRecord>>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "minScore", alias = "min_score", default)]
    pub min_score: Option<f64>,
    #[serde(rename = "minCompatibility", alias = "min_compatibility", default)]
    pub min_compatibility: Option<Compatibility>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl RankStartupsRequest {
    pub fn candidates(&self) -> &[StartupRecord] {
        self.startups.as_deref().unwrap_or(&[])
    }

    pub fn filter(&self, default_limit: u16, max_limit: u16) -> RankingFilter {
        build_filter(
            self.min_score,
            self.min_compatibility,
            self.limit,
            self.offset,
            default_limit,
            max_limit,
        )
    }
}

/// Request to rank investors for a startup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankInvestorsRequest {
    pub startup: StartupRecord,
    /// `null` and missing are both treated as an empty list
    #[serde(default)]
    pub investors: Option<Vec<InvestorRecord>>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "minScore", alias = "min_score", default)]
    pub min_score: Option<f64>,
    #[serde(rename = "minCompatibility", alias = "min_compatibility", default)]
    pub min_compatibility: Option<Compatibility>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl RankInvestorsRequest {
    pub fn candidates(&self) -> &[InvestorRecord] {
        self.investors.as_deref().unwrap_or(&[])
    }

    pub fn filter(&self, default_limit: u16, max_limit: u16) -> RankingFilter {
        build_filter(
            self.min_score,
            self.min_compatibility,
            self.limit,
            self.offset,
            default_limit,
            max_limit,
        )
    }
}

fn build_filter(
    min_score: Option<f64>,
    min_compatibility: Option<Compatibility>,
    limit: Option<u16>,
    offset: Option<u32>,
    default_limit: u16,
    max_limit: u16,
) -> RankingFilter {
    let limit = limit.unwrap_or(default_limit).min(max_limit);

    RankingFilter {
        min_score,
        min_compatibility,
        offset: offset.unwrap_or(0) as usize,
        limit: Some(limit as usize),
    }
}
