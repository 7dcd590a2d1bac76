use chrono::NaiveDate;
use clap::Parser;

/// Application configuration for the claims dashboard CLI
///
/// Args: [file_path] with optional date bounds
/// - file_path: JSONL file with claims (default: claims.jsonl)
/// - --from / --to: inclusive YYYY-MM-DD bounds on createdAt
/// - --fake N: write N generated claims to file_path and exit
/// - --verbose: enable detailed logging
#[derive(Parser, Debug, Clone)]
#[command(name = "claimdash", about = "Healthcare-claims tracking dashboard")]
pub struct Config {
    #[arg(default_value = "claims.jsonl")]
    pub file_path: String,

    /// Earliest claim date to include, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest claim date to include, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Generate this many fake claims into file_path and exit
    #[arg(long, value_name = "N")]
    pub fake: Option<usize>,

    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["claimdash"]);
        assert_eq!(config.file_path, "claims.jsonl");
        assert_eq!(config.from, None);
        assert_eq!(config.to, None);
        assert_eq!(config.fake, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_date_bounds_parse() {
        let config =
            Config::parse_from(["claimdash", "july.jsonl", "--from", "2025-07-01", "--to", "2025-07-31"]);
        assert_eq!(config.file_path, "july.jsonl");
        assert_eq!(
            config.from,
            Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        );
        assert_eq!(config.to, Some(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()));
    }

    #[test]
    fn test_fake_flag() {
        let config = Config::parse_from(["claimdash", "demo.jsonl", "--fake", "200", "-v"]);
        assert_eq!(config.fake, Some(200));
        assert!(config.verbose);
    }
}
