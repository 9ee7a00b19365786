use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::LayoutConfig;

/// Spring-embedding (Eades) layout for small labeled graphs.
#[derive(Parser, Debug)]
#[command(name = "eades")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out a graph document (.yaml, .yml, .json)
    Layout {
        /// Input graph document
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        tuning: TuningArgs,
    },
    /// Lay out the built-in six-vertex sample graph
    Demo {
        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format (json, svg); defaults to the output file extension
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Overrides applied on top of the config file
#[derive(Args, Debug, Default)]
pub struct TuningArgs {
    /// Layout config file (.yaml, .yml, .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of layout steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Seed for initial placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the placement region
    #[arg(long)]
    pub width: Option<f64>,

    /// Height of the placement region
    #[arg(long)]
    pub height: Option<f64>,
}

impl TuningArgs {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn resolve(&self) -> anyhow::Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => LayoutConfig::default(),
        };

        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(width) = self.width {
            config.bounds.width = width;
        }
        if let Some(height) = self.height {
            config.bounds.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_layout_subcommand() {
        let cli = Cli::try_parse_from([
            "eades", "layout", "--input", "graph.yaml", "--output", "out.svg", "--steps", "50",
            "--seed", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Layout {
                input,
                output,
                tuning,
            } => {
                assert_eq!(input, PathBuf::from("graph.yaml"));
                assert_eq!(output.output, PathBuf::from("out.svg"));
                assert!(output.format.is_none());
                assert_eq!(tuning.steps, Some(50));
                assert_eq!(tuning.seed, Some(3));
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn cli_parses_demo_subcommand() {
        let cli =
            Cli::try_parse_from(["eades", "demo", "-o", "demo.json", "--format", "json"]).unwrap();

        match cli.command {
            Commands::Demo { output, tuning } => {
                assert_eq!(output.output, PathBuf::from("demo.json"));
                assert_eq!(output.format.as_deref(), Some("json"));
                assert!(tuning.config.is_none());
            }
            _ => panic!("Expected Demo command"),
        }
    }

    #[test]
    fn cli_requires_input_for_layout() {
        assert!(Cli::try_parse_from(["eades", "layout", "--output", "out.svg"]).is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let tuning = TuningArgs {
            steps: Some(10),
            seed: Some(99),
            width: Some(400.0),
            ..TuningArgs::default()
        };

        let config = tuning.resolve().unwrap();
        assert_eq!(config.steps, 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.bounds.width, 400.0);
        assert_eq!(config.bounds.height, 700.0);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let tuning = TuningArgs {
            height: Some(0.0),
            ..TuningArgs::default()
        };

        assert!(tuning.resolve().is_err());
    }
}
