use serde::{Deserialize, Serialize};

/// "Yes"/"No" flags as they appear in the upstream claim feed.
///
/// `adjudicated` is only meaningful when `data_extracted` is `Yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// One raw claim row, one per invoice.
///
/// Multiple rows may share a `visit_number`; consolidation into one
/// record per visit happens downstream in `dedup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClaim {
    pub visit_number: String,
    /// May be empty, e.g. while documentation is pending.
    #[serde(default)]
    pub invoice_number: String,
    pub patient_name: String,
    pub total_request_amt: f64,
    pub total_extracted_amt: f64,
    #[serde(rename = "totalAllowedByVT")]
    pub total_allowed_by_vt: f64,
    pub final_payable: f64,
    pub total_savings: f64,
    pub savings_percent: f64,
    pub claim_id: i64,
    /// ISO-8601 timestamp; kept as a string here, parsed only by the date filter.
    pub created_at: String,
    pub claim_number: String,
    pub data_extracted: YesNo,
    pub adjudicated: YesNo,
}

/// A raw claim plus the per-invoice fields derived by the enhancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedClaim {
    #[serde(flatten)]
    pub claim: RawClaim,
    pub provider_code: Option<String>,
    /// Never empty; falls back to "Unknown Provider".
    pub provider_name: String,
    pub extraction_variance: f64,
    pub is_fully_rejected: bool,
    pub is_high_variance: bool,
}

/// One record per distinct visit, after same-visit invoices are merged.
///
/// For multi-invoice visits the five financial fields are sums over the
/// group and `savings_percent` is recomputed from those sums; the
/// remaining fields come from the first claim seen for the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedVisit {
    pub visit_number: String,
    pub invoice_number: String,
    pub patient_name: String,
    pub provider_code: Option<String>,
    pub provider_name: String,
    pub total_request_amt: f64,
    pub total_extracted_amt: f64,
    #[serde(rename = "totalAllowedByVT")]
    pub total_allowed_by_vt: f64,
    pub final_payable: f64,
    pub total_savings: f64,
    pub savings_percent: f64,
    pub claim_id: i64,
    pub claim_number: String,
    pub created_at: String,
    pub data_extracted: YesNo,
    pub adjudicated: YesNo,
    pub is_fully_rejected: bool,
    pub is_high_variance: bool,
    pub invoice_count: usize,
    /// All non-empty invoice numbers in the group.
    pub original_invoices: Vec<String>,
    pub is_consolidated: bool,
}

/// Mock claim for testing
#[cfg(test)]
pub fn mock_raw_claim() -> RawClaim {
    RawClaim {
        visit_number: "1437184".to_string(),
        invoice_number: "BILL/2507/001".to_string(),
        patient_name: "Jane Doe".to_string(),
        total_request_amt: 49200.0,
        total_extracted_amt: 49200.0,
        total_allowed_by_vt: 41820.0,
        final_payable: 41820.0,
        total_savings: 7380.0,
        savings_percent: 15.0,
        claim_id: 1,
        created_at: "2025-07-25T07:36:23Z".to_string(),
        claim_number: "D1423119-BILL250725073623".to_string(),
        data_extracted: YesNo::Yes,
        adjudicated: YesNo::Yes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::from_str;

    #[test]
    fn test_schema() {
        let json = r#"
        {
            "visitNumber": "1437184",
            "invoiceNumber": "BILL/2507/001",
            "patientName": "Jane Doe",
            "totalRequestAmt": 49200,
            "totalExtractedAmt": 49200,
            "totalAllowedByVT": 41820,
            "finalPayable": 41820,
            "totalSavings": 7380,
            "savingsPercent": 15.0,
            "claimId": 1,
            "createdAt": "2025-07-25T07:36:23Z",
            "claimNumber": "D1423119-BILL250725073623",
            "dataExtracted": "Yes",
            "adjudicated": "Yes"
        }
        "#;

        let claim: RawClaim = from_str(json).expect("Failed to parse JSON");
        assert_eq!(claim.visit_number, "1437184");
        assert_eq!(claim.invoice_number, "BILL/2507/001");
        assert_eq!(claim.patient_name, "Jane Doe");
        assert_eq!(claim.total_request_amt, 49200.0);
        assert_eq!(claim.total_extracted_amt, 49200.0);
        assert_eq!(claim.total_allowed_by_vt, 41820.0);
        assert_eq!(claim.final_payable, 41820.0);
        assert_eq!(claim.total_savings, 7380.0);
        assert_eq!(claim.savings_percent, 15.0);
        assert_eq!(claim.claim_id, 1);
        assert_eq!(claim.created_at, "2025-07-25T07:36:23Z");
        assert_eq!(claim.claim_number, "D1423119-BILL250725073623");
        assert_eq!(claim.data_extracted, YesNo::Yes);
        assert_eq!(claim.adjudicated, YesNo::Yes);
    }

    #[test]
    fn test_missing_invoice_number_defaults_to_empty() {
        let json = r#"
        {
            "visitNumber": "22001",
            "patientName": "John Roe",
            "totalRequestAmt": 1000,
            "totalExtractedAmt": 0,
            "totalAllowedByVT": 0,
            "finalPayable": 0,
            "totalSavings": 1000,
            "savingsPercent": 100,
            "claimId": 2,
            "createdAt": "2025-07-26T10:00:00Z",
            "claimNumber": "D9-MEDI123",
            "dataExtracted": "No",
            "adjudicated": "No"
        }
        "#;

        let claim: RawClaim = from_str(json).expect("Failed to parse JSON");
        assert_eq!(claim.invoice_number, "");
        assert_eq!(claim.data_extracted, YesNo::No);
        assert!(!claim.adjudicated.is_yes());
    }

    #[test]
    fn test_yes_no_roundtrip() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"Yes\"");
        assert_eq!(from_str::<YesNo>("\"No\"").unwrap(), YesNo::No);
    }
}
