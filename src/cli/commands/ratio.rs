//! `est ratio` command - set a task's inclusion ratio

use console::style;
use miette::Result;

use crate::cli::helpers::{format_effort, load_context, node_name, resolve_node, save_mutation};
use crate::core::identity::NodePrefix;

#[derive(clap::Args, Debug)]
pub struct RatioArgs {
    /// Task to re-weight: a short id like TSK@5, or a full id
    pub id: String,

    /// Ratio in [0, 1], or a percentage like 60%
    pub ratio: String,
}

pub fn run(args: RatioArgs) -> Result<()> {
    let (project, mut session, index) = load_context()?;
    let id = resolve_node(&index, &args.id)?;

    if id.prefix() != NodePrefix::Tsk {
        return Err(miette::miette!(
            "'{}' is not a task id; ratios apply to tasks only",
            args.id
        ));
    }

    let ratio = parse_ratio(&args.ratio)?;
    session
        .tree
        .set_task_ratio(&id, ratio)
        .map_err(|e| miette::miette!("{}", e))?;

    save_mutation(&project, &mut session)?;

    let name = node_name(&session.tree, &id).unwrap_or_default();
    let effective = session
        .tree
        .task_effort(&id)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Set {} {} to x{:.2}",
        style("✓").green(),
        style(&args.id).cyan(),
        name,
        ratio
    );
    println!("  Effective effort: {}", format_effort(effective));
    println!(
        "  Total effort: {}",
        style(format_effort(session.tree.total_effort())).bold()
    );

    Ok(())
}

/// Parse `0.6`, `.25`, or `60%` into a ratio
///
/// Range checking stays with the tree; this only converts the percent
/// shorthand.
fn parse_ratio(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if let Some(percent) = trimmed.strip_suffix('%') {
        let value: f64 = percent
            .trim()
            .parse()
            .map_err(|_| miette::miette!("'{}' is not a valid percentage", input))?;
        Ok(value / 100.0)
    } else {
        trimmed
            .parse()
            .map_err(|_| miette::miette!("'{}' is not a valid ratio", input))
    }
}
