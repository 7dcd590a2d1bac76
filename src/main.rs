use clap::Parser;

use claimdash::alerts::derive_alerts;
use claimdash::config::Config;
use claimdash::filter::filter_by_period;
use claimdash::json_faker::write_fake_claims_jsonl;
use claimdash::logging::log_event;
use claimdash::metrics::calculate_metrics;
use claimdash::reader::load_claims;
use claimdash::reporter::print_report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if let Some(n) = config.fake {
        write_fake_claims_jsonl(&config.file_path, n)?;
        println!("Wrote {} fake claims to {}", n, config.file_path);
        return Ok(());
    }

    let claims = load_claims(&config.file_path).await?;
    if config.verbose {
        log_event(
            "reader",
            &config.file_path,
            "loaded",
            &format!("{} claims", claims.len()),
        );
    }

    let filtered = filter_by_period(&claims, config.from, config.to);
    if config.verbose && filtered.len() != claims.len() {
        log_event(
            "filter",
            &config.file_path,
            "filtered",
            &format!("{} of {} claims in period", filtered.len(), claims.len()),
        );
    }

    let metrics = calculate_metrics(&filtered);
    let alerts = derive_alerts(&metrics);
    print_report(&metrics, &alerts);

    Ok(())
}
