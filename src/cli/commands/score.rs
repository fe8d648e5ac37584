//! Score command - compare a test file against a gold standard

use std::path::{Path, PathBuf};

use clap::Args;

use super::super::output::write_output;
use crate::eval::{evaluate, loader, report, OutputFormat, ReportMode};
use crate::config::user_config_path;
use crate::ScoringConfig;

/// Score a test file against a gold standard
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Gold-standard file (documentId, entityId, excerpt1 [, excerpt2 ...])
    #[arg(value_name = "GOLD")]
    pub gold: PathBuf,

    /// Test file (documentId, entityId, excerpt)
    #[arg(value_name = "TEST")]
    pub test: PathBuf,

    /// Detail rows after the summary: recall, precision or all
    #[arg(value_name = "REPORT")]
    pub report: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Similarity a matched excerpt must exceed [default: 0.55]
    #[arg(long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Read settings from this TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ScoreArgs {
    /// Layer command-line settings over the loaded configuration.
    pub fn resolve_config(&self) -> Result<ScoringConfig, String> {
        self.resolve_config_with(user_config_path().as_deref())
    }

    fn resolve_config_with(&self, user_file: Option<&Path>) -> Result<ScoringConfig, String> {
        let mut config = ScoringConfig::load_layered(user_file, self.config.as_deref())
            .map_err(|e| e.to_string())?;

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(requested) = self.report.as_deref() {
            config.report = parse_report_mode(requested);
        }

        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// An unrecognized mode only disables the detail report.
fn parse_report_mode(requested: &str) -> Option<ReportMode> {
    match requested.parse::<ReportMode>() {
        Ok(mode) => Some(mode),
        Err(_) => {
            log::warn!(
                "Unknown report '{}', not producing any extra reporting; should be one of [recall|precision|all]",
                requested
            );
            None
        }
    }
}

/// Load both files, score them and write the report.
pub fn run(args: ScoreArgs) -> Result<(), String> {
    let config = args.resolve_config()?;
    score_files(&args, config)
}

fn score_files(args: &ScoreArgs, config: ScoringConfig) -> Result<(), String> {
    let classifier = config.classifier().map_err(|e| e.to_string())?;

    let gold = loader::load_gold(&args.gold).map_err(|e| e.to_string())?;
    let test = loader::load_test(&args.test).map_err(|e| e.to_string())?;

    let evaluation = evaluate(&gold, &test, &classifier);
    let rows = config
        .report
        .map(|mode| evaluation.detail_rows(mode))
        .unwrap_or_default();

    let content = report::render(&evaluation.summary(), config.report, &rows, config.format)
        .map_err(|e| e.to_string())?;
    write_output(&content, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(report: Option<&str>) -> ScoreArgs {
        ScoreArgs {
            gold: PathBuf::from("gold.tsv"),
            test: PathBuf::from("test.tsv"),
            report: report.map(str::to_string),
            format: None,
            threshold: None,
            config: None,
            output: None,
        }
    }

    #[test]
    fn test_report_mode_resolution() {
        assert_eq!(parse_report_mode("all"), Some(ReportMode::All));
        assert_eq!(parse_report_mode("Recall"), Some(ReportMode::Recall));
        assert_eq!(parse_report_mode("everything"), None);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.toml");
        std::fs::write(&path, "threshold = 0.9\nreport = \"all\"\n").unwrap();

        let mut score = args(Some("precision"));
        score.config = Some(path);
        score.threshold = Some(0.6);

        let config = score.resolve_config_with(None).unwrap();
        assert_eq!(config.threshold, 0.6);
        assert_eq!(config.report, Some(ReportMode::Precision));
    }

    #[test]
    fn test_user_file_sits_under_explicit_file_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let explicit = dir.path().join("scoring.toml");
        std::fs::write(&user, "threshold = 0.3\nreport = \"all\"\nformat = \"json\"\n").unwrap();
        std::fs::write(&explicit, "threshold = 0.7\n").unwrap();

        let mut score = args(None);
        score.config = Some(explicit);
        let config = score.resolve_config_with(Some(&user)).unwrap();
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.report, Some(ReportMode::All));
        assert_eq!(config.format, OutputFormat::Json);

        score.report = Some("recall".to_string());
        score.format = Some(OutputFormat::Text);
        let config = score.resolve_config_with(Some(&user)).unwrap();
        assert_eq!(config.report, Some(ReportMode::Recall));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_threshold_flag_validated() {
        let mut score = args(None);
        score.threshold = Some(2.0);
        assert!(score.resolve_config_with(None).is_err());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = score_files(&args(None), ScoringConfig::default()).unwrap_err();
        assert!(err.contains("gold.tsv"), "{}", err);
    }
}
