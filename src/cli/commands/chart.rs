//! `est chart` command - subsystem effort distribution in the terminal

use miette::Result;

use crate::cli::helpers::load_context;
use crate::cli::viz::render_effort_bars;

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Include disabled subsystems as zero-height bars
    #[arg(long)]
    pub all: bool,
}

pub fn run(args: ChartArgs) -> Result<()> {
    let (_, session, _) = load_context()?;

    let entries: Vec<(String, f64)> = session
        .tree
        .subsystems()
        .iter()
        .filter(|s| args.all || s.enabled)
        .map(|s| (s.name.clone(), s.total_effort()))
        .collect();

    println!("Subsystem effort distribution");
    println!();
    print!("{}", render_effort_bars(&entries));

    Ok(())
}
