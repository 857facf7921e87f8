// Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "templatefaker",
    version,
    about = "Draw read and fragment templates that resemble an input alignment set",
    long_about = None
)]
pub struct Cli {
    /// Alignments (SAM, SAM.gz or BAM) to extract templates from
    #[arg(short = 'i', long, value_name = "SAM/BAM")]
    pub input: PathBuf,

    /// Output TSV report of drawn templates (defaults to stdout)
    #[arg(short = 'o', long, value_name = "TSV")]
    pub output: Option<PathBuf>,

    /// Number of templates to draw
    #[arg(short = 'n', long, default_value = "1000")]
    pub num_draws: usize,

    /// Maximum templates kept per kind; the rest are subsampled away
    #[arg(short = 'm', long, value_parser = parse_max_templates)]
    pub max_templates: Option<usize>,

    /// Fraction of draws meant to be uniform (stored, not yet applied)
    #[arg(long)]
    pub fraction_even: Option<f32>,

    /// Bias toward low-scoring templates (stored, not yet applied)
    #[arg(long)]
    pub low_score_bias: Option<f32>,

    /// Random seed for reproducibility
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a template cap, rejecting 0 since it would leave nothing to draw from.
fn parse_max_templates(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(cap) => Ok(cap),
        Err(e) => Err(e.to_string()),
    }
}

/// Styled status lines for verbose output on stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(text: impl Display) -> String {
        style(format!("== {} ==", text)).bold().cyan().to_string()
    }

    /// Pads a parameter name so that values line up in a column.
    pub fn param_aligned(name: impl Display, width: usize) -> String {
        style(format!("{:<width$}", name.to_string(), width = width))
            .dim()
            .to_string()
    }

    pub fn progress(text: impl Display) -> String {
        format!("{} {}", style("→").yellow(), text)
    }

    pub fn success(text: impl Display) -> String {
        format!("{} {}", style("✓").green().bold(), text)
    }

    pub fn warning(text: impl Display) -> String {
        format!("{} {}", style("!").red().bold(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["templatefaker", "-i", "aln.bam"]).unwrap();
        assert_eq!(cli.num_draws, 1000);
        assert!(cli.output.is_none());
        assert!(cli.max_templates.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_max_templates_must_be_positive() {
        assert!(Cli::try_parse_from(["templatefaker", "-i", "aln.sam", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["templatefaker", "-i", "aln.sam", "-m", "x"]).is_err());

        let cli = Cli::try_parse_from(["templatefaker", "-i", "aln.sam", "-m", "25"]).unwrap();
        assert_eq!(cli.max_templates, Some(25));
    }

    #[test]
    fn test_param_aligned_pads() {
        console::set_colors_enabled(false);
        assert_eq!(fmt::param_aligned("Seed", 8), "Seed    ");
    }
}
