//! `est tree` command - hierarchy view with state and totals

use miette::Result;

use crate::cli::helpers::{format_effort, load_context};
use crate::core::shortid::ShortIdIndex;
use crate::core::tree::EstimationTree;
use crate::entities::module::Module;

const ENABLED: char = '●';
const DISABLED: char = '○';

#[derive(clap::Args, Debug)]
pub struct TreeArgs {}

pub fn run(_args: TreeArgs) -> Result<()> {
    let (_, session, index) = load_context()?;
    print!("{}", render_tree(&session.tree, &index));
    println!("Total effort: {}", format_effort(session.tree.total_effort()));
    Ok(())
}

fn state_symbol(enabled: bool) -> char {
    if enabled {
        ENABLED
    } else {
        DISABLED
    }
}

/// Render the full hierarchy as an ASCII tree
///
/// Example output:
/// ```text
/// ● Flight Software  SUB@1  (35.0)
/// ├── ● Navigation  MOD@1  (30.0)
/// │   ├── ● Kalman filter  TSK@1  10.0 x1.00
/// │   └── ● Star tracker  TSK@2  20.0 x1.00
/// └── ● Other  MOD@2  (5.0)
/// ```
pub fn render_tree(tree: &EstimationTree, index: &ShortIdIndex) -> String {
    let mut output = String::new();

    for subsystem in tree.subsystems() {
        output.push_str(&format!(
            "{} {}  {}  ({})\n",
            state_symbol(subsystem.enabled),
            subsystem.name,
            index.alias_for(&subsystem.id).unwrap_or(""),
            format_effort(subsystem.total_effort()),
        ));

        let module_count = subsystem.modules.len();
        for (mi, module) in subsystem.modules.iter().enumerate() {
            let is_last = mi == module_count - 1;
            render_module(&mut output, module, index, is_last);
        }
    }

    output
}

fn render_module(output: &mut String, module: &Module, index: &ShortIdIndex, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    let mut line = format!(
        "{}{} {}  {}  ({})",
        branch,
        state_symbol(module.enabled),
        module.name,
        index.alias_for(&module.id).unwrap_or(""),
        format_effort(module.total_effort()),
    );
    if module.is_miscellaneous() && !module.manual_comment.is_empty() {
        line.push_str(&format!("  [{}]", module.manual_comment));
    }
    line.push('\n');
    output.push_str(&line);

    let continuation = if is_last { "    " } else { "│   " };
    let task_count = module.tasks.len();
    for (ti, task) in module.tasks.iter().enumerate() {
        let task_branch = if ti == task_count - 1 {
            "└── "
        } else {
            "├── "
        };
        output.push_str(&format!(
            "{}{}{} {}  {}  {} x{:.2}\n",
            continuation,
            task_branch,
            state_symbol(task.inclusion_ratio > 0.0),
            task.name,
            index.alias_for(&task.id).unwrap_or(""),
            format_effort(task.baseline_effort),
            task.inclusion_ratio,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (EstimationTree, ShortIdIndex) {
        let mut tree = EstimationTree::new();
        let sub = tree.add_subsystem("Flight Software");
        let module = tree.add_module(&sub, "Navigation").unwrap();
        tree.add_task(&module, "Kalman filter", 10.0, "").unwrap();
        tree.add_task(&module, "Star tracker", 20.0, "").unwrap();
        tree.set_module_override(&sub, 5.0, "rigging").unwrap();

        let mut index = ShortIdIndex::new();
        index.rebuild(tree.node_ids());
        (tree, index)
    }

    #[test]
    fn test_render_shows_all_levels_with_aliases() {
        let (tree, index) = sample();
        let output = render_tree(&tree, &index);

        assert!(output.contains("● Flight Software  SUB@1  (35.0)"));
        assert!(output.contains("├── ● Navigation  MOD@1  (30.0)"));
        assert!(output.contains("│   ├── ● Kalman filter  TSK@1  10.0 x1.00"));
        assert!(output.contains("└── ● Other  MOD@2  (5.0)  [rigging]"));
    }

    #[test]
    fn test_render_marks_disabled_nodes() {
        let (mut tree, index) = sample();
        let module_id = tree.subsystems()[0].modules[0].id.clone();
        tree.toggle_module(&module_id, false).unwrap();

        let output = render_tree(&tree, &index);
        assert!(output.contains("├── ○ Navigation  MOD@1  (0.0)"));
        assert!(output.contains("○ Kalman filter  TSK@1  10.0 x0.00"));
    }
}
