//! Venture Match - match-scoring service for startups and investors
//!
//! This library provides the scoring engine that ranks startups for an
//! investor (and investors for a startup) by industry, stage, funding and
//! keyword fit, plus the thin HTTP layer that exposes it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    parse_funding, rank_investors_for_startup, rank_startups_for_investor, Matcher, RankingFilter,
};
pub use crate::models::{
    Compatibility, InvestorRecord, MatchResult, MatchScore, ScoreBreakdown, ScoringWeights,
    StartupRecord,
};
