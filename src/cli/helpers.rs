//! Shared helpers for CLI commands

use miette::{IntoDiagnostic, Result};

use crate::core::identity::NodeId;
use crate::core::project::{Project, Session};
use crate::core::shortid::ShortIdIndex;
use crate::core::tree::EstimationTree;

/// Discover the project and load its session and short-id index
pub fn load_context() -> Result<(Project, Session, ShortIdIndex)> {
    let project = Project::discover().map_err(|e| miette::miette!("{}", e))?;
    let session = project
        .load_session()
        .map_err(|e| miette::miette!("{}", e))?;
    let index = ShortIdIndex::load(&project);
    Ok((project, session, index))
}

/// Persist a mutated session, stamping the modification time
pub fn save_mutation(project: &Project, session: &mut Session) -> Result<()> {
    session.touch();
    project
        .save_session(session)
        .map_err(|e| miette::miette!("{}", e))
}

/// Resolve a user-supplied reference (short id alias or full id) to a node id
pub fn resolve_node(index: &ShortIdIndex, reference: &str) -> Result<NodeId> {
    let full = index
        .resolve(reference)
        .ok_or_else(|| miette::miette!("unknown short id '{}'", reference))?;
    full.parse().into_diagnostic()
}

/// Display name of a node, looked up through the read-only structure
pub fn node_name(tree: &EstimationTree, id: &NodeId) -> Option<String> {
    for subsystem in tree.subsystems() {
        if &subsystem.id == id {
            return Some(subsystem.name.clone());
        }
        for module in &subsystem.modules {
            if &module.id == id {
                return Some(module.name.clone());
            }
            for task in &module.tasks {
                if &task.id == id {
                    return Some(task.name.clone());
                }
            }
        }
    }
    None
}

/// Render an effort figure with one decimal place
pub fn format_effort(effort: f64) -> String {
    format!("{:.1}", effort)
}
