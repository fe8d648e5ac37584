//! CLI argument parsing and structure definitions

use clap::Parser;

use super::commands::ScoreArgs;

/// Approximate-match scorer for gene normalization annotations
#[derive(Parser, Debug)]
#[command(name = "bc2score")]
#[command(
    author,
    version,
    about = "Score gene normalization output against a gold standard",
    long_about = r#"
bc2score - approximate-match scorer for (document, gene, excerpt) annotations

Keys are matched exactly; excerpts are compared by edit distance:

  similarity = 1 - 2 * levenshtein(gold, test) / (len(gold) + len(test))

against every gold excerpt for the key, keeping the best. A matched key only
counts as a thresholded true positive when its similarity exceeds 0.55.

FILES (tab-separated, no header):
  gold:  documentId  entityId  excerpt1  [excerpt2 ...]
  test:  documentId  entityId  excerpt

REPORTS:
  recall     list misses (gold keys the system did not report)
  precision  list false positives (keys not in the gold standard)
  all        list every key, including matches

EXAMPLES:
  bc2score gold.tsv run1.tsv
  bc2score gold.tsv run1.tsv recall
  bc2score gold.tsv run1.tsv all --format json --threshold 0.6
"#
)]
pub struct Cli {
    /// Input files and scoring settings
    #[command(flatten)]
    pub score: ScoreArgs,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["bc2score", "gold.tsv", "test.tsv", "recall"]).unwrap();
        assert_eq!(cli.score.gold.to_str(), Some("gold.tsv"));
        assert_eq!(cli.score.test.to_str(), Some("test.tsv"));
        assert_eq!(cli.score.report.as_deref(), Some("recall"));
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_unknown_report_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["bc2score", "g", "t", "bogus"]).unwrap();
        assert_eq!(cli.score.report.as_deref(), Some("bogus"));
    }

    #[test]
    fn test_argument_count() {
        assert!(Cli::try_parse_from(["bc2score"]).is_err());
        assert!(Cli::try_parse_from(["bc2score", "gold.tsv"]).is_err());
        assert!(Cli::try_parse_from(["bc2score", "g", "t", "all", "extra"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "bc2score", "g", "t", "--format", "json", "--threshold", "0.7", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.score.format, Some(OutputFormat::Json));
        assert_eq!(cli.score.threshold, Some(0.7));
        assert_eq!(cli.log_filter(), "debug");

        assert!(Cli::try_parse_from(["bc2score", "g", "t", "-q", "-v"]).is_err());
    }
}
