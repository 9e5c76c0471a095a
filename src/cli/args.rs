//! Top-level CLI argument surface

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::chart::ChartArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::other::OtherArgs;
use crate::cli::commands::ratio::RatioArgs;
use crate::cli::commands::summary::SummaryArgs;
use crate::cli::commands::toggle::ToggleArgs;
use crate::cli::commands::tree::TreeArgs;

#[derive(Parser, Debug)]
#[command(
    name = "est",
    version,
    about = "Hierarchical effort estimation over plain-text CSV data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a project from a CSV effort table
    Init(InitArgs),

    /// Show the estimation hierarchy with per-node state and totals
    Tree(TreeArgs),

    /// Print the effort rollup summary
    Summary(SummaryArgs),

    /// Enable or disable a subsystem, module, or task
    Toggle(ToggleArgs),

    /// Set a task's inclusion ratio
    Ratio(RatioArgs),

    /// Edit the manual effort entry on a subsystem's Other module
    Other(OtherArgs),

    /// Draw a terminal bar chart of subsystem efforts
    Chart(ChartArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for machine-readable commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Yaml,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
