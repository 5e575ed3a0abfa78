use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use thiserror::Error;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, RankInvestorsRequest, RankStartupsRequest, RankingResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
    pub offload_threshold: usize,
}

impl AppState {
    pub fn new(matcher: Matcher, matching: &MatchingSettings) -> Self {
        Self {
            matcher,
            default_limit: matching.default_limit,
            max_limit: matching.max_limit,
            offload_threshold: matching.offload_threshold,
        }
    }
}

/// Errors returned by the ranking handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Ranking task failed: {0}")]
    Ranking(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::Ranking(_) => "Ranking failed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Ranking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/startups", web::post().to(rank_startups))
        .route("/matches/investors", web::post().to(rank_investors));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank startups for an investor
///
/// POST /api/v1/matches/startups
///
/// Request body:
/// ```json
/// {
///   "investor": { "id": "string", "name": "string", "sectorsInterested": "string" },
///   "startups": [{ "id": "string", "name": "string", "industry": "string" }],
///   "minScore": 0.4,
///   "minCompatibility": "fair",
///   "limit": 20,
///   "offset": 0
/// }
/// ```
async fn rank_startups(
    state: web::Data<AppState>,
    req: web::Json<RankStartupsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_startups request: {:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let filter = req.filter(state.default_limit, state.max_limit);
    let total_candidates = req.candidates().len();

    tracing::info!(
        "Ranking {} startups for investor {}",
        total_candidates,
        req.investor.id
    );

    let ranked = if total_candidates > state.offload_threshold {
        let matcher = state.matcher.clone();
        tokio::task::spawn_blocking(move || {
            matcher.rank_startups_for_investor(&req.investor, req.candidates())
        })
        .await?
    } else {
        state
            .matcher
            .rank_startups_for_investor(&req.investor, req.candidates())
    };

    let response = RankingResponse {
        matches: filter.apply(ranked),
        total_candidates,
    };

    tracing::info!(
        "Returning {} startups (from {} candidates)",
        response.matches.len(),
        total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Rank investors for a startup
///
/// POST /api/v1/matches/investors
///
/// Request body mirrors `/matches/startups` with `startup` and `investors`.
async fn rank_investors(
    state: web::Data<AppState>,
    req: web::Json<RankInvestorsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_investors request: {:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let filter = req.filter(state.default_limit, state.max_limit);
    let total_candidates = req.candidates().len();

    tracing::info!(
        "Ranking {} investors for startup {}",
        total_candidates,
        req.startup.id
    );

    let ranked = if total_candidates > state.offload_threshold {
        let matcher = state.matcher.clone();
        tokio::task::spawn_blocking(move || {
            matcher.rank_investors_for_startup(&req.startup, req.candidates())
        })
        .await?
    } else {
        state
            .matcher
            .rank_investors_for_startup(&req.startup, req.candidates())
    };

    let response = RankingResponse {
        matches: filter.apply(ranked),
        total_candidates,
    };

    tracing::info!(
        "Returning {} investors (from {} candidates)",
        response.matches.len(),
        total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}
