use crate::provider::resolve_provider;
use crate::schema::{EnhancedClaim, RawClaim};

/// Extraction variance above this ratio flags a claim as high-variance.
pub const HIGH_VARIANCE_THRESHOLD: f64 = 0.1;

/// Augment each raw claim with its derived per-invoice fields.
///
/// Strictly 1:1 and order-preserving; records are never dropped or merged
/// here. Grouping by visit is the deduplicator's job, which keeps this
/// step replayable no matter how records are consolidated later.
pub fn enhance_claims(raw: &[RawClaim]) -> Vec<EnhancedClaim> {
    raw.iter().map(enhance_claim).collect()
}

fn enhance_claim(claim: &RawClaim) -> EnhancedClaim {
    let provider = resolve_provider(&claim.invoice_number, &claim.claim_number);
    let extraction_variance = if claim.total_request_amt > 0.0 {
        (claim.total_extracted_amt - claim.total_request_amt).abs() / claim.total_request_amt
    } else {
        0.0
    };

    EnhancedClaim {
        claim: claim.clone(),
        provider_code: provider.code,
        provider_name: provider.name,
        extraction_variance,
        // Exactly 100, not >= 100
        is_fully_rejected: claim.savings_percent == 100.0,
        is_high_variance: extraction_variance > HIGH_VARIANCE_THRESHOLD,
    }
}
