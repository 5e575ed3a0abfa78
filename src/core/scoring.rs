use crate::core::funding::parse_funding;
use crate::core::taxonomy::{normalize_stage, SectorTaxonomy, StageLadder};
use crate::models::{InvestorRecord, ScoreBreakdown, ScoringWeights, StartupRecord};

/// Score used when the investor left a field empty. Missing data is
/// uncertainty, not a mismatch.
pub const NEUTRAL_SCORE: f64 = 0.3;

/// Minimum token length kept by the keyword factor
const MIN_TOKEN_CHARS: usize = 4;

/// Calculate the composite score (0-1) and factor breakdown for a
/// startup/investor pair
///
/// Scoring formula:
/// score = (
///     industry_match * 0.30 +      # Industry vs sectors of interest
///     stage_match * 0.25 +         # Stage vs preferred stages
///     funding_match * 0.25 +       # Amount needed vs investment range
///     keyword_match * 0.20         # Description/tags vs sectors text
/// )
///
/// Every factor is symmetric in the sense that it reads the same two fields
/// whichever side is the subject of the ranking.
pub fn calculate_match_score(
    startup: &StartupRecord,
    investor: &InvestorRecord,
    weights: &ScoringWeights,
    taxonomy: &SectorTaxonomy,
    ladder: &StageLadder,
) -> (f64, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        industry_match: industry_match(&startup.industry, investor.sectors(), taxonomy),
        stage_match: stage_match(&startup.stage, investor.stages(), ladder),
        funding_match: funding_match(
            &startup.funding_needed,
            &investor.investment_range_min,
            &investor.investment_range_max,
        ),
        keyword_match: keyword_match(
            &startup.description,
            startup.tags.as_deref(),
            investor.sectors(),
        ),
    };

    (weights.combine(&breakdown), breakdown)
}

/// Industry factor (0-1)
///
/// 1.0 when the sectors text contains the industry, 0.8 when a taxonomy
/// category links the two texts, 0.2 otherwise.
/// A blank industry counts as missing data and scores the neutral 0.3.
pub fn industry_match(industry: &str, sectors: Option<&str>, taxonomy: &SectorTaxonomy) -> f64 {
    let Some(sectors) = non_blank(sectors) else {
        return NEUTRAL_SCORE;
    };

    let industry = industry.trim().to_lowercase();
    if industry.is_empty() {
        return NEUTRAL_SCORE;
    }

    let sectors = sectors.to_lowercase();
    if sectors.contains(industry.as_str()) {
        return 1.0;
    }

    let related = taxonomy.categories().iter().any(|category| {
        (category.names_keyword(&industry) || category.names_keyword(&sectors))
            && (category.names_key(&industry) || category.names_key(&sectors))
    });

    if related {
        0.8
    } else {
        0.2
    }
}

/// Stage factor (0-1)
///
/// 1.0 when a preferred label names the same stage (ignoring case, `-`/`_`
/// and spacing, but not aliases), 0.7 when a preferred stage is one rung away
/// on the ladder, 0.1 otherwise.
pub fn stage_match(stage: &str, preferred: &[String], ladder: &StageLadder) -> f64 {
    let preferred: Vec<String> = preferred
        .iter()
        .map(|p| normalize_stage(p))
        .filter(|p| !p.is_empty())
        .collect();

    if preferred.is_empty() {
        return NEUTRAL_SCORE;
    }

    let stage = normalize_stage(stage);
    if preferred.iter().any(|p| *p == stage) {
        return 1.0;
    }

    if let Some(position) = ladder.position(&stage) {
        let adjacent = preferred
            .iter()
            .filter_map(|p| ladder.position(p))
            .any(|p| p.abs_diff(position) <= 1);

        if adjacent {
            return 0.7;
        }
    }

    0.1
}

/// Funding factor (0-1)
///
/// 1.0 inside the inclusive range, then 0.7 / 0.4 / 0.1 as the distance to
/// the nearest bound grows past half and then one full range width.
pub fn funding_match(needed: &str, range_min: &str, range_max: &str) -> f64 {
    let amount = parse_funding(needed);
    let a = parse_funding(range_min);
    let b = parse_funding(range_max);
    let (min, max) = if a <= b { (a, b) } else { (b, a) };

    if amount >= min && amount <= max {
        return 1.0;
    }

    let deviation = (amount - min).abs().min((amount - max).abs());
    let range_size = max - min;

    // A zero-width range only accepts exact hits, handled above
    if deviation <= range_size * 0.5 {
        0.7
    } else if deviation <= range_size {
        0.4
    } else {
        0.1
    }
}

/// Keyword factor (0-1)
///
/// Share of startup tokens that overlap (substring either way) with an
/// investor token, doubled and capped at 1.0.
pub fn keyword_match(description: &str, tags: Option<&str>, sectors: Option<&str>) -> f64 {
    let Some(sectors) = non_blank(sectors) else {
        return NEUTRAL_SCORE;
    };

    let mut startup_text = description.to_string();
    if let Some(tags) = tags {
        startup_text.push(' ');
        startup_text.push_str(tags);
    }

    let startup_tokens = tokenize(&startup_text);
    let investor_tokens = tokenize(sectors);

    let matches = startup_tokens
        .iter()
        .filter(|token| {
            investor_tokens
                .iter()
                .any(|other| token.contains(other.as_str()) || other.contains(token.as_str()))
        })
        .count();

    let ratio = matches as f64 / startup_tokens.len().max(1) as f64;
    (ratio * 2.0).min(1.0)
}

/// Lower-cased tokens split on whitespace and commas, edge punctuation
/// trimmed, short tokens dropped
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

#[inline]
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}
