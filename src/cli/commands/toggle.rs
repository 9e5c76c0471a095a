//! `est toggle` command - enable or disable any node by id

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::cli::helpers::{format_effort, load_context, node_name, resolve_node, save_mutation};
use crate::core::identity::NodePrefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleState {
    On,
    Off,
}

#[derive(clap::Args, Debug)]
pub struct ToggleArgs {
    /// Node to toggle: a short id like SUB@1, MOD@2, TSK@5, or a full id
    pub id: String,

    /// Target state
    #[arg(value_enum)]
    pub state: ToggleState,
}

pub fn run(args: ToggleArgs) -> Result<()> {
    let (project, mut session, index) = load_context()?;
    let id = resolve_node(&index, &args.id)?;
    let state = args.state == ToggleState::On;

    match id.prefix() {
        NodePrefix::Sub => session.tree.toggle_subsystem(&id, state),
        NodePrefix::Mod => session.tree.toggle_module(&id, state),
        NodePrefix::Tsk => session.tree.toggle_task(&id, state),
    }
    .map_err(|e| miette::miette!("{}", e))?;

    save_mutation(&project, &mut session)?;

    let name = node_name(&session.tree, &id).unwrap_or_default();
    let verb = if state { "Enabled" } else { "Disabled" };
    println!(
        "{} {} {} {}",
        style("✓").green(),
        verb,
        style(&args.id).cyan(),
        name
    );

    let scope_effort = match id.prefix() {
        NodePrefix::Sub => session.tree.subsystem_effort(&id),
        NodePrefix::Mod => session.tree.module_effort(&id),
        NodePrefix::Tsk => session.tree.task_effort(&id),
    }
    .map_err(|e| miette::miette!("{}", e))?;

    println!("  Scope effort: {}", format_effort(scope_effort));
    println!(
        "  Total effort: {}",
        style(format_effort(session.tree.total_effort())).bold()
    );

    Ok(())
}
