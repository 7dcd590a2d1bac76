use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::schema::RawClaim;

/// Load raw claims from a JSONL file, one claim object per line.
///
/// Malformed lines are skipped with a warning rather than aborting the
/// load; a partially-dirty feed should still produce a dashboard.
pub async fn load_claims(path: &str) -> anyhow::Result<Vec<RawClaim>> {
    let file = File::open(path).await?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let mut claims = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawClaim>(&line) {
            Ok(claim) => claims.push(claim),
            Err(err) => eprintln!("Invalid claim skipped: {}", err),
        }
    }

    Ok(claims)
}
