//! Command-line configuration.

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "namematch")]
#[command(about = "Score how closely two personal names match (0-100)")]
#[command(version)]
pub struct Args {
    /// Name being checked, e.g. as typed by a user
    pub input_name: String,

    /// Name on record to compare against
    pub given_name: String,

    /// Output format
    #[arg(short, long, value_enum, env = "NAMEMATCH_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Exit with status 2 when the percentage is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Log filter used when RUST_LOG is unset (e.g. debug, namematch_core=trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line: percentage, remark and both names
    Text,
    /// Compact JSON object
    Json,
    /// Indented JSON object
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["namematch", "Vikash Yadav", "V Y"]).unwrap();
        assert_eq!(args.input_name, "Vikash Yadav");
        assert_eq!(args.given_name, "V Y");
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.min_score, None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_format_and_threshold() {
        let args = Args::try_parse_from([
            "namematch",
            "--format",
            "pretty",
            "--min-score",
            "90",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Pretty);
        assert_eq!(args.min_score, Some(90));
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(Args::try_parse_from(["namematch", "--min-score", "101", "a", "b"]).is_err());
    }

    #[test]
    fn test_both_names_required() {
        assert!(Args::try_parse_from(["namematch", "only one"]).is_err());
    }

    #[test]
    fn test_empty_names_accepted() {
        let args = Args::try_parse_from(["namematch", "", ""]).unwrap();
        assert!(args.input_name.is_empty());
    }
}
