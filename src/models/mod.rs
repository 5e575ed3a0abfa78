// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Compatibility, InvestorRecord, MatchResult, MatchScore, ScoreBreakdown,
    ScoringWeights, StartupRecord,
};
pub use requests::{RankInvestorsRequest, RankStartupsRequest};
pub use responses::{ErrorResponse, HealthResponse, RankingResponse};
