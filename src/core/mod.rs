// Core algorithm exports
pub mod filters;
pub mod funding;
pub mod matcher;
pub mod scoring;
pub mod taxonomy;

pub use filters::RankingFilter;
pub use funding::parse_funding;
pub use matcher::{rank_investors_for_startup, rank_startups_for_investor, Matcher};
pub use scoring::{
    calculate_match_score, funding_match, industry_match, keyword_match, stage_match, NEUTRAL_SCORE,
};
pub use taxonomy::{normalize_stage, SectorCategory, SectorTaxonomy, StageLadder};
