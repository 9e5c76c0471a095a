//! `est other` command - manual effort entry on a subsystem's Other module

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{format_effort, load_context, node_name, resolve_node, save_mutation};
use crate::core::identity::NodePrefix;

#[derive(clap::Args, Debug)]
pub struct OtherArgs {
    /// Subsystem whose Other module to edit: SUB@1 or a full id
    pub subsystem: String,

    /// Manual effort figure (prompted for when omitted)
    #[arg(long)]
    pub effort: Option<f64>,

    /// Comment, at most 50 characters (prompted for when omitted)
    #[arg(long)]
    pub comment: Option<String>,
}

pub fn run(args: OtherArgs) -> Result<()> {
    let (project, mut session, index) = load_context()?;
    let id = resolve_node(&index, &args.subsystem)?;

    if id.prefix() != NodePrefix::Sub {
        return Err(miette::miette!(
            "'{}' is not a subsystem id; manual entries live on a subsystem's Other module",
            args.subsystem
        ));
    }

    let current = session
        .tree
        .subsystems()
        .iter()
        .find(|s| s.id == id)
        .and_then(|s| s.misc_module())
        .map(|m| (m.manual_effort, m.manual_comment.clone()))
        .ok_or_else(|| miette::miette!("no node with id {}", id))?;

    let theme = ColorfulTheme::default();
    let effort = match args.effort {
        Some(effort) => effort,
        None => Input::with_theme(&theme)
            .with_prompt("Manual effort")
            .default(current.0)
            .interact_text()
            .into_diagnostic()?,
    };
    let comment = match args.comment {
        Some(comment) => comment,
        None => Input::with_theme(&theme)
            .with_prompt("Comment (max 50 characters)")
            .allow_empty(true)
            .default(current.1)
            .interact_text()
            .into_diagnostic()?,
    };

    session
        .tree
        .set_module_override(&id, effort, &comment)
        .map_err(|e| miette::miette!("{}", e))?;

    save_mutation(&project, &mut session)?;

    let name = node_name(&session.tree, &id).unwrap_or_default();
    println!(
        "{} Set manual effort on {} {} to {}",
        style("✓").green(),
        style(&args.subsystem).cyan(),
        name,
        format_effort(effort)
    );
    println!(
        "  Subsystem effort: {}",
        format_effort(
            session
                .tree
                .subsystem_effort(&id)
                .map_err(|e| miette::miette!("{}", e))?
        )
    );
    println!(
        "  Total effort: {}",
        style(format_effort(session.tree.total_effort())).bold()
    );

    Ok(())
}
