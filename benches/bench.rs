// Criterion benchmarks for Venture Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use venture_match::core::{parse_funding, Matcher};
use venture_match::models::{InvestorRecord, StartupRecord};

const INDUSTRIES: &[&str] = &["fintech", "healthtech", "edtech", "proptech", "gaming"];
const STAGES: &[&str] = &["Idea", "MVP", "Revenue", "Seed", "Series A"];
const AMOUNTS: &[&str] = &["250k", "$1,000,000", "2.5M", "50 lakhs", "10m"];

fn create_startup(id: usize) -> StartupRecord {
    let industry = INDUSTRIES[id % INDUSTRIES.len()];
    StartupRecord {
        id: format!("startup-{}", id),
        name: format!("Startup {}", id),
        industry: industry.to_string(),
        stage: STAGES[id % STAGES.len()].to_string(),
        description: format!(
            "An early {} company building workflow software for mid-market customers",
            industry
        ),
        tags: Some("saas, b2b, analytics".to_string()),
        funding_needed: AMOUNTS[id % AMOUNTS.len()].to_string(),
        user_id: format!("user-{}", id),
    }
}

fn create_investor(id: usize) -> InvestorRecord {
    InvestorRecord {
        id: format!("investor-{}", id),
        name: format!("Fund {}", id),
        sectors_interested: Some("fintech, saas, banking infrastructure".to_string()),
        preferred_stages: Some(vec!["Seed".to_string(), "Series A".to_string()]),
        investment_range_min: "500k".to_string(),
        investment_range_max: "3m".to_string(),
        user_id: format!("user-i{}", id),
    }
}

fn bench_parse_funding(c: &mut Criterion) {
    c.bench_function("parse_funding", |b| {
        b.iter(|| {
            for amount in AMOUNTS {
                black_box(parse_funding(black_box(amount)));
            }
        });
    });
}

fn bench_rank_startups(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let investor = create_investor(0);

    let mut group = c.benchmark_group("rank_startups");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let startups: Vec<StartupRecord> = (0..*candidate_count).map(create_startup).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_startups_for_investor", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_startups_for_investor(
                        black_box(&investor),
                        black_box(&startups),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_rank_investors(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let startup = create_startup(0);
    let investors: Vec<InvestorRecord> = (0..100).map(create_investor).collect();

    c.bench_function("rank_investors_100_candidates", |b| {
        b.iter(|| {
            matcher.rank_investors_for_startup(black_box(&startup), black_box(&investors))
        });
    });
}

criterion_group!(
    benches,
    bench_parse_funding,
    bench_rank_startups,
    bench_rank_investors
);

criterion_main!(benches);
