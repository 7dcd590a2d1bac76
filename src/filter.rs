use chrono::{DateTime, NaiveDate};

use crate::schema::RawClaim;

/// Keep claims whose `created_at` day falls within the inclusive
/// `[from, to]` range. With no bounds set, everything passes without
/// parsing. When a bound is active, claims whose timestamp cannot be
/// parsed are excluded.
pub fn filter_by_period(
    claims: &[RawClaim],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<RawClaim> {
    if from.is_none() && to.is_none() {
        return claims.to_vec();
    }

    claims
        .iter()
        .filter(|claim| match claim_date(&claim.created_at) {
            Some(day) => {
                from.is_none_or(|lower| day >= lower) && to.is_none_or(|upper| day <= upper)
            }
            None => false,
        })
        .cloned()
        .collect()
}

/// Accepts full RFC 3339 timestamps or bare `YYYY-MM-DD` prefixes.
fn claim_date(created_at: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(created_at) {
        return Some(timestamp.date_naive());
    }
    created_at
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
