//! `est init` command - create a project from a CSV effort table

use std::env;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::format_effort;
use crate::core::project::{Project, Session};
use crate::core::shortid::ShortIdIndex;
use crate::ingest::{build_tree, read_records};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// CSV file with subsystem,module,task,effort,description rows
    pub csv: PathBuf,
}

pub fn run(args: InitArgs) -> Result<()> {
    let cwd = env::current_dir().into_diagnostic()?;

    // Ingest before touching the filesystem so a bad CSV leaves no
    // half-initialized project behind.
    let records = read_records(&args.csv).map_err(|e| miette::miette!("{}", e))?;
    let tree = build_tree(&records).map_err(|e| miette::miette!("{}", e))?;

    let project = Project::init(&cwd).map_err(|e| miette::miette!("{}", e))?;

    let mut index = ShortIdIndex::new();
    index.rebuild(tree.node_ids());
    index.save(&project).into_diagnostic()?;

    let subsystem_count = tree.subsystems().len();
    let module_count: usize = tree
        .subsystems()
        .iter()
        .map(|s| s.modules.iter().filter(|m| !m.is_miscellaneous()).count())
        .sum();
    let task_count = records.len();
    let total = tree.total_effort();

    let session = Session::new(args.csv.clone(), tree);
    project
        .save_session(&session)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Initialized estimation project from {}",
        style("✓").green(),
        style(args.csv.display()).cyan()
    );
    println!(
        "  {} subsystem(s), {} module(s), {} task(s)",
        subsystem_count, module_count, task_count
    );
    println!("  Total effort: {}", style(format_effort(total)).bold());
    println!();
    println!("Inspect the hierarchy with: {}", style("est tree").yellow());

    Ok(())
}
