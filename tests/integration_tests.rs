// Integration tests for Venture Match

use venture_match::core::{Matcher, RankingFilter, StageLadder};
use venture_match::models::{Compatibility, InvestorRecord, MatchResult, StartupRecord};

const INDUSTRIES: &[&str] = &["fintech", "healthtech", "edtech", "gaming", "payments", "solar energy"];
const STAGES: &[&str] = &["Idea", "MVP", "Revenue", "Seed", "Series A", "Growth"];
const AMOUNTS: &[&str] = &["50k", "500k", "1m", "2.5M", "10m", "50 lakhs", "undisclosed"];

fn create_test_startup(i: usize) -> StartupRecord {
    let industry = INDUSTRIES[i % INDUSTRIES.len()];
    StartupRecord {
        id: format!("startup-{:03}", i),
        name: format!("Startup {}", i),
        industry: industry.to_string(),
        stage: STAGES[i % STAGES.len()].to_string(),
        description: format!("We build {} tools for small businesses", industry),
        tags: if i % 2 == 0 { Some("saas, b2b".to_string()) } else { None },
        funding_needed: AMOUNTS[i % AMOUNTS.len()].to_string(),
        user_id: format!("user-{}", i),
    }
}

fn create_test_investor(i: usize) -> InvestorRecord {
    InvestorRecord {
        id: format!("investor-{:03}", i),
        name: format!("Fund {}", i),
        sectors_interested: match i % 3 {
            0 => Some("fintech, saas".to_string()),
            1 => Some("healthcare and biotech".to_string()),
            _ => None,
        },
        preferred_stages: if i % 4 == 3 {
            None
        } else {
            Some(vec![STAGES[i % STAGES.len()].to_string()])
        },
        investment_range_min: AMOUNTS[i % 3].to_string(),
        investment_range_max: AMOUNTS[(i % 3) + 2].to_string(),
        user_id: format!("user-i{}", i),
    }
}

fn assert_invariants<C>(results: &[MatchResult<C>]) {
    for (i, r) in results.iter().enumerate() {
        let score = r.match_score.score;
        let b = r.match_score.breakdown;

        for factor in [b.industry_match, b.stage_match, b.funding_match, b.keyword_match, score] {
            assert!((0.0..=1.0).contains(&factor), "value {} out of [0, 1]", factor);
        }

        let expected = 0.30 * b.industry_match
            + 0.25 * b.stage_match
            + 0.25 * b.funding_match
            + 0.20 * b.keyword_match;
        assert!((score - expected).abs() < 1e-9, "composite {} != {}", score, expected);

        let tier = if score >= 0.8 {
            Compatibility::Excellent
        } else if score >= 0.6 {
            Compatibility::Good
        } else if score >= 0.4 {
            Compatibility::Fair
        } else {
            Compatibility::Poor
        };
        assert_eq!(r.compatibility, tier);

        if i > 0 {
            assert!(
                results[i - 1].match_score.score >= score,
                "Results not sorted by score"
            );
        }
    }
}

#[test]
fn test_integration_rank_startups_invariants() {
    let matcher = Matcher::with_default_weights();
    let startups: Vec<StartupRecord> = (0..60).map(create_test_startup).collect();

    for i in 0..12 {
        let investor = create_test_investor(i);
        let results = matcher.rank_startups_for_investor(&investor, &startups);

        assert_eq!(results.len(), startups.len(), "No candidate may be dropped");
        assert_invariants(&results);
    }
}

#[test]
fn test_integration_rank_investors_invariants() {
    let matcher = Matcher::with_default_weights();
    let investors: Vec<InvestorRecord> = (0..40).map(create_test_investor).collect();

    for i in 0..18 {
        let startup = create_test_startup(i);
        let results = matcher.rank_investors_for_startup(&startup, &investors);

        assert_eq!(results.len(), investors.len());
        assert_invariants(&results);
    }
}

#[test]
fn test_reasoning_disclosure_thresholds() {
    let matcher = Matcher::with_default_weights();
    let startups: Vec<StartupRecord> = (0..60).map(create_test_startup).collect();
    let investor = create_test_investor(0);

    for r in matcher.rank_startups_for_investor(&investor, &startups) {
        let b = r.match_score.breakdown;
        let reasons = &r.match_score.reasoning;
        let has = |prefix: &str| reasons.iter().any(|s| s.starts_with(prefix));

        assert_eq!(has("Strong industry alignment"), b.industry_match > 0.7);
        assert_eq!(has("Perfect stage match"), b.stage_match > 0.7);
        assert_eq!(has("Funding requirement fits"), b.funding_match > 0.7);
        assert_eq!(has("Business description matches"), b.keyword_match > 0.6);
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let matcher = Matcher::with_default_weights();
    let investor = create_test_investor(0);
    let startups: Vec<StartupRecord> = (0..60).map(create_test_startup).collect();
    let mut reversed = startups.clone();
    reversed.reverse();

    let first = matcher.rank_startups_for_investor(&investor, &startups);
    let second = matcher.rank_startups_for_investor(&investor, &reversed);

    let ids = |rs: &[MatchResult<StartupRecord>]| -> Vec<String> {
        rs.iter().map(|r| r.candidate.id.clone()).collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_empty_candidate_list() {
    let matcher = Matcher::with_default_weights();
    assert!(matcher
        .rank_startups_for_investor(&create_test_investor(0), &[])
        .is_empty());
}

#[test]
fn test_strict_stage_ladder_floors_profile_stages() {
    let investor = InvestorRecord {
        preferred_stages: Some(vec!["Seed".to_string()]),
        ..create_test_investor(0)
    };
    let startup = StartupRecord {
        stage: "MVP".to_string(),
        ..create_test_startup(0)
    };

    let aliased = Matcher::with_default_weights();
    let strict = Matcher::with_default_weights().with_stage_ladder(StageLadder::strict());

    let (_, with_aliases) = aliased.score(&startup, &investor);
    let (_, without_aliases) = strict.score(&startup, &investor);

    assert_eq!(with_aliases.stage_match, 0.7);
    assert_eq!(without_aliases.stage_match, 0.1);
}

#[test]
fn test_caller_side_filtering() {
    let matcher = Matcher::with_default_weights();
    let startups: Vec<StartupRecord> = (0..60).map(create_test_startup).collect();
    let ranked = matcher.rank_startups_for_investor(&create_test_investor(0), &startups);

    let filter = RankingFilter {
        min_compatibility: Some(Compatibility::Fair),
        limit: Some(5),
        ..Default::default()
    };
    let filtered = filter.apply(ranked.clone());

    assert!(filtered.len() <= 5);
    for (kept, original) in filtered.iter().zip(ranked.iter()) {
        assert!(kept.compatibility >= Compatibility::Fair);
        assert_eq!(kept.candidate.id, original.candidate.id);
    }
}
