/// Display name used when no provider code can be resolved at all.
pub const UNKNOWN_PROVIDER: &str = "Unknown Provider";

/// Known provider codes and their display names. Codes outside this table
/// still resolve, with a synthesized "<code> Healthcare" name.
const PROVIDER_DIRECTORY: &[(&str, &str)] = &[
    ("BILL", "Bill Healthcare"),
    ("MEDI", "Medicare Direct"),
    ("APEX", "Apex Medical Group"),
    ("CURA", "Cura Clinics"),
    ("NOVA", "Nova Diagnostics"),
];

/// A resolved provider: code (when one could be extracted) plus a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub code: Option<String>,
    pub name: String,
}

/// Extract a provider code/name from free-text claim identifiers.
///
/// Prefers the invoice number, falls back to the claim number. The chosen
/// identifier is split on `/` and `-` and the tokens are scanned in order;
/// the first token whose digit-stripped, uppercased residue has at least
/// two letters becomes the code. A one-letter residue is a check character
/// (e.g. the leading `D` in `D1423119-BILL...`) and is skipped.
///
/// Always returns a value; never fails.
pub fn resolve_provider(invoice_number: &str, claim_number: &str) -> ResolvedProvider {
    let identifier = if !invoice_number.trim().is_empty() {
        invoice_number
    } else {
        claim_number
    };

    match extract_code(identifier) {
        Some(code) => {
            let name = PROVIDER_DIRECTORY
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, n)| (*n).to_string())
                // Unmapped code is still a code; "Unknown" is reserved for no code at all.
                .unwrap_or_else(|| format!("{} Healthcare", code));
            ResolvedProvider {
                code: Some(code),
                name,
            }
        }
        None => ResolvedProvider {
            code: None,
            name: UNKNOWN_PROVIDER.to_string(),
        },
    }
}

fn extract_code(identifier: &str) -> Option<String> {
    for token in identifier.split(['/', '-']) {
        let candidate: String = token
            .chars()
            .filter(|c| !c.is_ascii_digit())
            .collect::<String>()
            .trim()
            .to_uppercase();
        if candidate.chars().filter(|c| c.is_alphabetic()).count() >= 2 {
            return Some(candidate);
        }
    }
    None
}
