use crate::schema::{RawClaim, YesNo};
use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::boolean::en::*;
use fake::faker::name::en::*;
use fake::faker::number::en::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Generate a realistic fake claim row for demos and testing
///
/// Covers the interesting shapes: provider-coded invoice numbers, fully
/// rejected rows, failed extractions, pending adjudications and the odd
/// high-variance extraction
pub fn fake_raw_claim() -> RawClaim {
    let mut rng = rand::rng();

    let provider = ["BILL", "MEDI", "APEX", "CURA", "NOVA", "ZETA"]
        .choose(&mut rng)
        .unwrap();
    let visit_number: String = NumberWithFormat("#######").fake();
    let invoice_serial: String = NumberWithFormat("###").fake();
    let invoice_number = format!("{}/2507/{}", provider, invoice_serial);
    let claim_number = format!(
        "D{}-{}{}",
        NumberWithFormat("#######").fake::<String>(),
        provider,
        NumberWithFormat("############").fake::<String>()
    );

    let total_request_amt: f64 = (500.0..50000.0).fake();

    // Roughly one row in ten is a full rejection
    let savings_ratio = if Boolean(10).fake() {
        1.0
    } else {
        *[0.0, 0.05, 0.15, 0.35, 0.6].choose(&mut rng).unwrap()
    };
    let total_savings = total_request_amt * savings_ratio;
    let total_allowed_by_vt = total_request_amt - total_savings;

    // Extraction usually lands close to the requested amount
    let mut total_extracted_amt = total_request_amt * (0.97..1.03).fake::<f64>();
    if Boolean(8).fake() {
        total_extracted_amt = total_request_amt * 1.25;
    }

    let data_extracted = if Boolean(85).fake() {
        YesNo::Yes
    } else {
        YesNo::No
    };
    let adjudicated = if data_extracted.is_yes() && Boolean(70).fake() {
        YesNo::Yes
    } else {
        YesNo::No
    };

    let created_at = (Utc::now() - Duration::days(rng.random_range(0..30))).to_rfc3339();

    RawClaim {
        visit_number,
        invoice_number,
        patient_name: Name().fake(),
        total_request_amt,
        total_extracted_amt,
        total_allowed_by_vt,
        final_payable: total_allowed_by_vt,
        total_savings,
        savings_percent: savings_ratio * 100.0,
        claim_id: rng.random_range(1..1_000_000),
        created_at,
        claim_number,
        data_extracted,
        adjudicated,
    }
}

/// Write n fake claims to a JSONL file
///
/// Occasionally reuses the previous visit number so the deduplicator has
/// multi-invoice visits to consolidate
pub fn write_fake_claims_jsonl(path: &str, n: usize) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut last_visit: Option<String> = None;

    for i in 0..n {
        let mut claim = fake_raw_claim();
        claim.claim_id = i as i64 + 1;
        if let Some(visit) = &last_visit {
            if Boolean(15).fake() {
                claim.visit_number = visit.clone();
            }
        }
        last_visit = Some(claim.visit_number.clone());
        writeln!(writer, "{}", serde_json::to_string(&claim)?)?;
    }
    Ok(())
}
