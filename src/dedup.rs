use std::collections::HashMap;

use crate::schema::{ConsolidatedVisit, EnhancedClaim};

/// Consolidate enhanced claims into one record per distinct visit number.
///
/// Groups are emitted in first-seen order. Singleton visits pass through
/// unchanged; multi-invoice visits sum the five financial fields, keep the
/// first member's non-financial fields, and recompute `savings_percent`
/// from the sums (0 when the summed request amount is 0, never NaN).
///
/// Every downstream total, rate and alert is computed over this output,
/// so the merge here must sum, not average.
pub fn deduplicate_by_visit(enhanced: &[EnhancedClaim]) -> Vec<ConsolidatedVisit> {
    let mut visits: Vec<ConsolidatedVisit> = Vec::new();
    let mut slot_by_visit: HashMap<&str, usize> = HashMap::new();

    for ec in enhanced {
        match slot_by_visit.get(ec.claim.visit_number.as_str()) {
            None => {
                slot_by_visit.insert(ec.claim.visit_number.as_str(), visits.len());
                visits.push(singleton_visit(ec));
            }
            Some(&slot) => merge_into(&mut visits[slot], ec),
        }
    }

    visits
}

/// A visit seen once so far: the claim itself, repackaged.
fn singleton_visit(ec: &EnhancedClaim) -> ConsolidatedVisit {
    let c = &ec.claim;
    ConsolidatedVisit {
        visit_number: c.visit_number.clone(),
        invoice_number: c.invoice_number.clone(),
        patient_name: c.patient_name.clone(),
        provider_code: ec.provider_code.clone(),
        provider_name: ec.provider_name.clone(),
        total_request_amt: c.total_request_amt,
        total_extracted_amt: c.total_extracted_amt,
        total_allowed_by_vt: c.total_allowed_by_vt,
        final_payable: c.final_payable,
        total_savings: c.total_savings,
        savings_percent: c.savings_percent,
        claim_id: c.claim_id,
        claim_number: c.claim_number.clone(),
        created_at: c.created_at.clone(),
        data_extracted: c.data_extracted,
        adjudicated: c.adjudicated,
        is_fully_rejected: ec.is_fully_rejected,
        is_high_variance: ec.is_high_variance,
        invoice_count: 1,
        original_invoices: if c.invoice_number.is_empty() {
            Vec::new()
        } else {
            vec![c.invoice_number.clone()]
        },
        is_consolidated: false,
    }
}

fn merge_into(visit: &mut ConsolidatedVisit, ec: &EnhancedClaim) {
    let c = &ec.claim;

    // First-claim-wins for non-financial fields; flag disagreements.
    if visit.patient_name != c.patient_name {
        eprintln!(
            "[dedup][visit:{}] patient name mismatch across invoices: '{}' vs '{}'",
            visit.visit_number, visit.patient_name, c.patient_name
        );
    }

    visit.total_request_amt += c.total_request_amt;
    visit.total_extracted_amt += c.total_extracted_amt;
    visit.total_allowed_by_vt += c.total_allowed_by_vt;
    visit.final_payable += c.final_payable;
    visit.total_savings += c.total_savings;
    visit.savings_percent = if visit.total_request_amt > 0.0 {
        visit.total_savings / visit.total_request_amt * 100.0
    } else {
        0.0
    };
    visit.is_fully_rejected = visit.savings_percent == 100.0;

    visit.invoice_count += 1;
    if !c.invoice_number.is_empty() {
        visit.original_invoices.push(c.invoice_number.clone());
    }
    visit.is_consolidated = true;
}
