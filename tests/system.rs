use std::collections::HashSet;

use claimdash::json_faker::{fake_raw_claim, write_fake_claims_jsonl};
use claimdash::metrics::calculate_metrics;
use claimdash::reader::load_claims;
use claimdash::schema::RawClaim;
use fake::Fake;
use fake::faker::boolean::en::Boolean;

fn generated_claims(n: usize) -> Vec<RawClaim> {
    let mut claims: Vec<RawClaim> = Vec::with_capacity(n);
    for i in 0..n {
        let mut claim = fake_raw_claim();
        claim.claim_id = i as i64 + 1;
        // Fold some rows into the previous visit so dedup has work to do
        if i > 0 && Boolean(20).fake() {
            claim.visit_number = claims[i - 1].visit_number.clone();
        }
        claims.push(claim);
    }
    claims
}

/// Summation is conservative across dedup: nothing gained, nothing lost.
#[test]
fn test_conservation_of_requested_amounts() {
    let claims = generated_claims(300);
    let metrics = calculate_metrics(&claims);

    let raw_sum: f64 = claims.iter().map(|c| c.total_request_amt).sum();
    let visit_sum: f64 = metrics
        .deduplicated
        .iter()
        .map(|v| v.total_request_amt)
        .sum();
    assert!((raw_sum - visit_sum).abs() < 1e-6);
    assert!((metrics.totals.total_requested - raw_sum).abs() < 1e-6);
}

/// One consolidated record per distinct visit number, and the duplicate
/// count is exactly the rows folded away.
#[test]
fn test_dedup_counts() {
    let claims = generated_claims(300);
    let metrics = calculate_metrics(&claims);

    let distinct: HashSet<&str> = claims.iter().map(|c| c.visit_number.as_str()).collect();
    assert_eq!(metrics.visit_count, distinct.len());
    assert_eq!(
        metrics.duplicate_visits,
        claims.len() - metrics.visit_count
    );
}

/// Every visit lands in exactly one savings bucket.
#[test]
fn test_bucket_counts_sum_to_visit_count() {
    let claims = generated_claims(300);
    let metrics = calculate_metrics(&claims);
    assert_eq!(metrics.distribution.total(), metrics.visit_count);
}

/// Rates stay inside [0, 100] whatever the feed looks like.
#[test]
fn test_rate_bounds() {
    for n in [0, 1, 50, 200] {
        let metrics = calculate_metrics(&generated_claims(n));
        assert!((0.0..=100.0).contains(&metrics.extraction_rate));
        assert!((0.0..=100.0).contains(&metrics.adjudication_rate));
        assert!((0.0..=100.0).contains(&metrics.rejection_rate));
        for stat in &metrics.provider_stats {
            assert!((0.0..=100.0).contains(&stat.extraction_success_rate));
            assert!((0.0..=100.0).contains(&stat.adjudication_rate));
            assert!((0.0..=100.0).contains(&stat.rejection_rate));
        }
    }
}

/// Same input, same output, down to deep equality.
#[test]
fn test_idempotence() {
    let claims = generated_claims(120);
    assert_eq!(calculate_metrics(&claims), calculate_metrics(&claims));
}

/// Provider invoice counts tie back to the raw rows that carry a code.
#[test]
fn test_provider_invoice_counts_cover_coded_claims() {
    let claims = generated_claims(300);
    let metrics = calculate_metrics(&claims);

    let coded_invoices: usize = metrics.provider_stats.iter().map(|s| s.invoice_count).sum();
    let claim_rows: usize = metrics.provider_stats.iter().map(|s| s.claim_count).sum();
    // The faker always emits provider-coded invoice numbers
    assert_eq!(coded_invoices, claims.len());
    assert_eq!(claim_rows, claims.len());
}

/// End to end through the filesystem: generated feed file -> reader ->
/// metrics, matching the in-memory result.
#[tokio::test]
async fn test_generated_feed_roundtrip() {
    let tmpdir = tempfile::tempdir().unwrap();
    let path = tmpdir.path().join("fake_claims.jsonl");
    let path = path.to_str().unwrap();

    write_fake_claims_jsonl(path, 100).unwrap();
    let loaded = load_claims(path).await.unwrap();
    assert_eq!(loaded.len(), 100);

    let metrics = calculate_metrics(&loaded);
    assert_eq!(metrics.claim_count, 100);
    assert_eq!(metrics, calculate_metrics(&loaded));
}
