use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;

/// Portfolio rejection rate above this percentage fires a high alert.
pub const REJECTION_RATE_ALERT_PCT: f64 = 30.0;
/// Extraction rate below this percentage fires an alert...
pub const EXTRACTION_RATE_WARN_PCT: f64 = 80.0;
/// ...escalated to high below this one.
pub const EXTRACTION_RATE_CRITICAL_PCT: f64 = 60.0;
/// Pending adjudications above this count escalate from low to medium.
pub const PENDING_ADJUDICATION_MEDIUM_COUNT: usize = 10;

pub const ALERT_DUPLICATE_VISITS: &str = "duplicate-visits";
pub const ALERT_HIGH_REJECTION_RATE: &str = "high-rejection-rate";
pub const ALERT_LOW_EXTRACTION_RATE: &str = "low-extraction-rate";
pub const ALERT_PENDING_ADJUDICATION: &str = "pending-adjudication";
pub const ALERT_EXTRACTION_VARIANCE: &str = "extraction-variance";
pub const ALERT_ALL_CLEAR: &str = "all-clear";
pub const ALERT_NO_DATA: &str = "no-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One operational alert. Stateless: recomputed fresh on every aggregation
/// pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    fn new(id: &str, severity: Severity, message: String) -> Self {
        Alert {
            id: id.to_string(),
            severity,
            message,
        }
    }

    /// Synthetic state shown when every rule passed. Callers must render
    /// this rather than an empty panel, so "empty = healthy" stays
    /// distinguishable from "empty = not yet computed".
    pub fn healthy() -> Self {
        Alert::new(
            ALERT_ALL_CLEAR,
            Severity::Low,
            "All metrics within normal thresholds".to_string(),
        )
    }

    /// Synthetic state for an empty input period.
    pub fn no_data() -> Self {
        Alert::new(
            ALERT_NO_DATA,
            Severity::Low,
            "No claims in the selected period".to_string(),
        )
    }
}

/// Evaluate the fixed rule set over aggregated metrics.
///
/// Rules are independent; one pass can fire several. Returns an empty list
/// when everything is healthy — see [`Alert::healthy`].
pub fn derive_alerts(metrics: &Metrics) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if metrics.duplicate_visits > 0 {
        alerts.push(Alert::new(
            ALERT_DUPLICATE_VISITS,
            Severity::Medium,
            format!(
                "{} duplicate invoice(s) consolidated into existing visits",
                metrics.duplicate_visits
            ),
        ));
    }

    if metrics.rejection_rate > REJECTION_RATE_ALERT_PCT {
        alerts.push(Alert::new(
            ALERT_HIGH_REJECTION_RATE,
            Severity::High,
            format!(
                "Rejection rate {:.1}% exceeds the {:.0}% threshold",
                metrics.rejection_rate, REJECTION_RATE_ALERT_PCT
            ),
        ));
    }

    if metrics.extraction_rate < EXTRACTION_RATE_WARN_PCT {
        let severity = if metrics.extraction_rate < EXTRACTION_RATE_CRITICAL_PCT {
            Severity::High
        } else {
            Severity::Medium
        };
        alerts.push(Alert::new(
            ALERT_LOW_EXTRACTION_RATE,
            severity,
            format!(
                "{} claim(s) failed data extraction ({:.1}% failure rate)",
                metrics.failed_extractions,
                100.0 - metrics.extraction_rate
            ),
        ));
    }

    if metrics.pending_adjudication > 0 {
        let severity = if metrics.pending_adjudication > PENDING_ADJUDICATION_MEDIUM_COUNT {
            Severity::Medium
        } else {
            Severity::Low
        };
        alerts.push(Alert::new(
            ALERT_PENDING_ADJUDICATION,
            severity,
            format!(
                "{} extracted claim(s) awaiting adjudication",
                metrics.pending_adjudication
            ),
        ));
    }

    if metrics.totals.high_variance > 0 {
        alerts.push(Alert::new(
            ALERT_EXTRACTION_VARIANCE,
            Severity::Medium,
            format!(
                "{} claim(s) with extraction variance above 10%",
                metrics.totals.high_variance
            ),
        ));
    }

    alerts
}
