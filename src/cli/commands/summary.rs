//! `est summary` command - effort rollup in table, YAML, or JSON form

use miette::Result;

use crate::cli::args::OutputFormat;
use crate::cli::helpers::load_context;
use crate::cli::output::{print_summary, SummaryReport};

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    let (_, session, _) = load_context()?;
    let report = SummaryReport::from_tree(&session.tree);
    print_summary(&report, args.format)
}
