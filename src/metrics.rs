use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dedup::deduplicate_by_visit;
use crate::enhance::enhance_claims;
use crate::schema::{ConsolidatedVisit, EnhancedClaim, RawClaim};

/// Savings-distribution bucket boundaries, percent, half-open `[lower, upper)`.
pub const SAVINGS_BUCKET_LOW_PCT: f64 = 10.0;
pub const SAVINGS_BUCKET_MEDIUM_PCT: f64 = 20.0;
pub const SAVINGS_BUCKET_HIGH_PCT: f64 = 50.0;

/// Portfolio-level sums over consolidated visits, plus the two flag counts.
///
/// `fully_rejected` counts consolidated visits; `high_variance` counts raw
/// enhanced claims. The asymmetry is intentional: variance is a property of
/// a single extraction pass, rejection of the visit as billed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_requested: f64,
    pub total_extracted: f64,
    pub total_allowed: f64,
    pub total_savings: f64,
    pub fully_rejected: usize,
    pub high_variance: usize,
}

/// Fixed six-bucket histogram of consolidated visits by savings percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsDistribution {
    pub zero_savings: usize,
    pub rejected: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
}

impl SavingsDistribution {
    /// Exact-equality buckets are checked before the ranges so a visit at
    /// exactly 0% or 100% never lands in a range bucket. First match wins.
    fn record(&mut self, savings_percent: f64) {
        if savings_percent == 0.0 {
            self.zero_savings += 1;
        } else if savings_percent == 100.0 {
            self.rejected += 1;
        } else if savings_percent < SAVINGS_BUCKET_LOW_PCT {
            self.low += 1;
        } else if savings_percent < SAVINGS_BUCKET_MEDIUM_PCT {
            self.medium += 1;
        } else if savings_percent < SAVINGS_BUCKET_HIGH_PCT {
            self.high += 1;
        } else {
            self.very_high += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.zero_savings + self.rejected + self.low + self.medium + self.high + self.very_high
    }
}

/// Per-provider rollup. Financial fields and visit/invoice counts come from
/// consolidated visits; `claim_count` and the extraction/adjudication rates
/// come from the provider's raw enhanced claims. Keeping the two
/// granularities separate is deliberate: folding them together silently
/// changes the percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStat {
    pub provider_code: String,
    pub provider_name: String,
    pub visit_count: usize,
    pub invoice_count: usize,
    pub total_requested: f64,
    pub total_allowed: f64,
    pub total_savings: f64,
    pub fully_rejected_count: usize,
    pub claim_count: usize,
    pub avg_savings_percent: f64,
    pub extraction_success_rate: f64,
    pub adjudication_rate: f64,
    pub rejection_rate: f64,
}

/// Everything the dashboard renders, derived in one pass from the raw rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub claim_count: usize,
    pub visit_count: usize,
    /// Raw claims minus consolidated visits.
    pub duplicate_visits: usize,
    pub totals: PortfolioTotals,
    pub extraction_rate: f64,
    pub adjudication_rate: f64,
    /// Fully rejected visits as a share of all consolidated visits.
    pub rejection_rate: f64,
    pub successful_extractions: usize,
    pub failed_extractions: usize,
    pub pending_adjudication: usize,
    pub distribution: SavingsDistribution,
    pub provider_stats: Vec<ProviderStat>,
    /// One record per visit; the export and table surfaces read this directly.
    pub deduplicated: Vec<ConsolidatedVisit>,
}

/// Percentage with the degenerate-denominator case substituted by 0.
fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Entry point of the aggregation pipeline: enhance, deduplicate, then
/// compute every portfolio total, rate, bucket and provider rollup.
///
/// Pure and synchronous. No I/O, no domain errors; every division is
/// guarded, so the same input always yields the same `Metrics`.
pub fn calculate_metrics(raw: &[RawClaim]) -> Metrics {
    let enhanced = enhance_claims(raw);
    let deduplicated = deduplicate_by_visit(&enhanced);

    let mut totals = PortfolioTotals::default();
    let mut distribution = SavingsDistribution::default();
    for visit in &deduplicated {
        totals.total_requested += visit.total_request_amt;
        totals.total_extracted += visit.total_extracted_amt;
        totals.total_allowed += visit.total_allowed_by_vt;
        totals.total_savings += visit.total_savings;
        if visit.is_fully_rejected {
            totals.fully_rejected += 1;
        }
        distribution.record(visit.savings_percent);
    }
    totals.high_variance = enhanced.iter().filter(|c| c.is_high_variance).count();

    let successful_extractions = enhanced
        .iter()
        .filter(|c| c.claim.data_extracted.is_yes())
        .count();
    let adjudicated = enhanced
        .iter()
        .filter(|c| c.claim.data_extracted.is_yes() && c.claim.adjudicated.is_yes())
        .count();
    let pending_adjudication = enhanced
        .iter()
        .filter(|c| c.claim.data_extracted.is_yes() && !c.claim.adjudicated.is_yes())
        .count();

    let provider_stats = provider_stats(&enhanced, &deduplicated);

    Metrics {
        claim_count: enhanced.len(),
        visit_count: deduplicated.len(),
        duplicate_visits: enhanced.len() - deduplicated.len(),
        extraction_rate: pct(successful_extractions as f64, enhanced.len() as f64),
        adjudication_rate: pct(adjudicated as f64, successful_extractions as f64),
        rejection_rate: pct(totals.fully_rejected as f64, deduplicated.len() as f64),
        successful_extractions,
        failed_extractions: enhanced.len() - successful_extractions,
        pending_adjudication,
        totals,
        distribution,
        provider_stats,
        deduplicated,
    }
}

fn provider_stats(
    enhanced: &[EnhancedClaim],
    deduplicated: &[ConsolidatedVisit],
) -> Vec<ProviderStat> {
    let mut stats: Vec<ProviderStat> = Vec::new();
    let mut slot_by_code: HashMap<&str, usize> = HashMap::new();

    // Consolidated granularity: financial rollups and visit counts.
    // Visits without a resolvable code stay out of the table entirely.
    for visit in deduplicated {
        let Some(code) = visit.provider_code.as_deref() else {
            continue;
        };
        let slot = match slot_by_code.get(code) {
            Some(&slot) => slot,
            None => {
                slot_by_code.insert(code, stats.len());
                stats.push(ProviderStat {
                    provider_code: code.to_string(),
                    provider_name: visit.provider_name.clone(),
                    visit_count: 0,
                    invoice_count: 0,
                    total_requested: 0.0,
                    total_allowed: 0.0,
                    total_savings: 0.0,
                    fully_rejected_count: 0,
                    claim_count: 0,
                    avg_savings_percent: 0.0,
                    extraction_success_rate: 0.0,
                    adjudication_rate: 0.0,
                    rejection_rate: 0.0,
                });
                stats.len() - 1
            }
        };
        let stat = &mut stats[slot];
        stat.visit_count += 1;
        stat.invoice_count += visit.invoice_count;
        stat.total_requested += visit.total_request_amt;
        stat.total_allowed += visit.total_allowed_by_vt;
        stat.total_savings += visit.total_savings;
        if visit.is_fully_rejected {
            stat.fully_rejected_count += 1;
        }
    }

    // Raw granularity: per-invoice extraction and adjudication rates.
    for stat in &mut stats {
        let mut claim_count = 0usize;
        let mut extracted = 0usize;
        let mut adjudicated = 0usize;
        for claim in enhanced {
            if claim.provider_code.as_deref() != Some(stat.provider_code.as_str()) {
                continue;
            }
            claim_count += 1;
            if claim.claim.data_extracted.is_yes() {
                extracted += 1;
                if claim.claim.adjudicated.is_yes() {
                    adjudicated += 1;
                }
            }
        }
        stat.claim_count = claim_count;
        stat.extraction_success_rate = pct(extracted as f64, claim_count as f64);
        stat.adjudication_rate = pct(adjudicated as f64, extracted as f64);
        stat.avg_savings_percent = pct(stat.total_savings, stat.total_requested);
        stat.rejection_rate = pct(stat.fully_rejected_count as f64, stat.visit_count as f64);
    }

    stats
}
