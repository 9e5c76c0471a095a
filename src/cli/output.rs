//! Summary report building and rendering

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::args::OutputFormat;
use crate::cli::helpers::format_effort;
use crate::core::tree::EstimationTree;

/// The rollup exposed to machine-readable output formats
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub subsystems: Vec<SubsystemSummary>,
    pub total_effort: f64,
}

#[derive(Debug, Serialize)]
pub struct SubsystemSummary {
    pub name: String,
    pub enabled: bool,
    pub effort: f64,
    pub modules: Vec<ModuleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub enabled: bool,
    pub effort: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SummaryReport {
    /// Snapshot the current rollup of a tree
    pub fn from_tree(tree: &EstimationTree) -> Self {
        let subsystems = tree
            .subsystems()
            .iter()
            .map(|subsystem| SubsystemSummary {
                name: subsystem.name.clone(),
                enabled: subsystem.enabled,
                effort: subsystem.total_effort(),
                modules: subsystem
                    .modules
                    .iter()
                    .map(|module| ModuleSummary {
                        name: module.name.clone(),
                        enabled: module.enabled,
                        effort: module.total_effort(),
                        comment: (module.is_miscellaneous() && !module.manual_comment.is_empty())
                            .then(|| module.manual_comment.clone()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            subsystems,
            total_effort: tree.total_effort(),
        }
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "SUBSYSTEM")]
    subsystem: String,
    #[tabled(rename = "MODULE")]
    module: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "EFFORT")]
    effort: String,
}

/// Print the report in the requested format
pub fn print_summary(report: &SummaryReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut rows = Vec::new();
            for subsystem in &report.subsystems {
                rows.push(SummaryRow {
                    subsystem: subsystem.name.clone(),
                    module: String::new(),
                    state: state_label(subsystem.enabled),
                    effort: format_effort(subsystem.effort),
                });
                for module in &subsystem.modules {
                    rows.push(SummaryRow {
                        subsystem: String::new(),
                        module: module.name.clone(),
                        state: state_label(module.enabled),
                        effort: format_effort(module.effort),
                    });
                }
            }

            println!("{}", Table::new(rows).with(Style::sharp()));
            println!();
            println!("Total effort: {}", format_effort(report.total_effort));
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(report).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report).into_diagnostic()?);
        }
    }
    Ok(())
}

fn state_label(enabled: bool) -> String {
    if enabled { "on" } else { "off" }.to_string()
}
