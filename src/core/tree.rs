//! Estimation tree - ownership, cascade rules, and rollup queries
//!
//! The tree owns all subsystems; enabled flags and inclusion ratios live
//! only on the entities themselves, never in a parallel lookup table.
//! Every mutation completes its full cascade (local update, upward check,
//! downward cascade where applicable) before returning, and validates its
//! inputs before touching any state, so a rejected mutation leaves the
//! tree exactly as it was.
//!
//! Cascade rules:
//! - Explicitly toggling a subsystem or module pushes the state down to
//!   every descendant; task ratios snap to 1.0 on enable and 0.0 on
//!   disable.
//! - Raising a task's ratio above zero enables its module and subsystem
//!   (flags only; sibling ratios are untouched).
//! - Dropping the last non-zero task ratio in a module disables the
//!   module, and disabling the last enabled module disables the
//!   subsystem. This derived disable is recomputed from the children on
//!   every mutation, never cached.
//! - There is no derived enable: a parent only turns on through an
//!   explicit toggle of itself or one of its descendants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::identity::NodeId;
use crate::entities::module::{Module, MAX_COMMENT_LEN};
use crate::entities::subsystem::Subsystem;
use crate::entities::task::Task;

/// Errors from tree mutations and queries
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid value: {message}")]
    InvalidValue { message: String },

    #[error("no node with id {id}")]
    UnknownId { id: NodeId },
}

impl TreeError {
    fn invalid(message: impl Into<String>) -> Self {
        TreeError::InvalidValue {
            message: message.into(),
        }
    }

    fn unknown(id: &NodeId) -> Self {
        TreeError::UnknownId { id: id.clone() }
    }
}

/// The effort estimation tree: Subsystem -> Module -> Task
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EstimationTree {
    subsystems: Vec<Subsystem>,
}

impl EstimationTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    // ---- structure building -------------------------------------------

    /// Append a subsystem (with its miscellaneous module) and return its id
    pub fn add_subsystem(&mut self, name: impl Into<String>) -> NodeId {
        let subsystem = Subsystem::new(name);
        let id = subsystem.id.clone();
        self.subsystems.push(subsystem);
        id
    }

    /// Append a standard module to a subsystem and return its id
    pub fn add_module(
        &mut self,
        subsystem_id: &NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        let si = self
            .subsystem_position(subsystem_id)
            .ok_or_else(|| TreeError::unknown(subsystem_id))?;
        let module = self.subsystems[si].add_module(name);
        Ok(module.id.clone())
    }

    /// Append a task to a module and return its id
    ///
    /// The task starts fully included (ratio 1.0). The baseline effort
    /// must be a non-negative finite number.
    pub fn add_task(
        &mut self,
        module_id: &NodeId,
        name: impl Into<String>,
        baseline_effort: f64,
        description: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        validate_effort(baseline_effort)?;

        let (si, mi) = self
            .module_position(module_id)
            .ok_or_else(|| TreeError::unknown(module_id))?;
        let task = Task::new(name, baseline_effort, description);
        let id = task.id.clone();
        self.subsystems[si].modules[mi].tasks.push(task);
        Ok(id)
    }

    // ---- mutation surface ---------------------------------------------

    /// Explicitly enable or disable a subsystem
    ///
    /// Cascades down through every module and task; task ratios snap to
    /// 1.0 or 0.0. A subsystem has no parent, so there is no upward check.
    pub fn toggle_subsystem(&mut self, id: &NodeId, state: bool) -> Result<(), TreeError> {
        let si = self
            .subsystem_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;

        let subsystem = &mut self.subsystems[si];
        subsystem.enabled = state;
        for module in &mut subsystem.modules {
            cascade_into_module(module, state);
        }
        Ok(())
    }

    /// Explicitly enable or disable a module
    ///
    /// Cascades down to the module's tasks. Enabling forces the owning
    /// subsystem on; disabling the last enabled module turns the
    /// subsystem off.
    pub fn toggle_module(&mut self, id: &NodeId, state: bool) -> Result<(), TreeError> {
        let (si, mi) = self
            .module_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;

        let subsystem = &mut self.subsystems[si];
        cascade_into_module(&mut subsystem.modules[mi], state);

        if state {
            subsystem.enabled = true;
        } else if subsystem.all_modules_disabled() {
            subsystem.enabled = false;
        }
        Ok(())
    }

    /// Explicitly include or exclude a task
    ///
    /// Equivalent to setting the ratio to 1.0 or 0.0.
    pub fn toggle_task(&mut self, id: &NodeId, state: bool) -> Result<(), TreeError> {
        self.set_task_ratio(id, if state { 1.0 } else { 0.0 })
    }

    /// Set a task's inclusion ratio to any value in [0, 1]
    ///
    /// A ratio above zero enables the owning module and subsystem (flags
    /// only; sibling ratios stay put). A ratio of zero triggers the
    /// derived-disable check on the module and, transitively, the
    /// subsystem.
    pub fn set_task_ratio(&mut self, id: &NodeId, ratio: f64) -> Result<(), TreeError> {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(TreeError::invalid(format!(
                "inclusion ratio must be in [0, 1], got {ratio}"
            )));
        }

        let (si, mi, ti) = self
            .task_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;

        let subsystem = &mut self.subsystems[si];
        let module = &mut subsystem.modules[mi];
        module.tasks[ti].inclusion_ratio = ratio;

        if ratio > 0.0 {
            module.enabled = true;
            subsystem.enabled = true;
        } else if module.all_tasks_excluded() {
            module.enabled = false;
            if subsystem.all_modules_disabled() {
                subsystem.enabled = false;
            }
        }
        Ok(())
    }

    /// Override a task's baseline effort
    ///
    /// An explicit edit, not a cascade: no flags or ratios change.
    pub fn set_task_baseline(&mut self, id: &NodeId, effort: f64) -> Result<(), TreeError> {
        validate_effort(effort)?;

        let (si, mi, ti) = self
            .task_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;
        self.subsystems[si].modules[mi].tasks[ti].baseline_effort = effort;
        Ok(())
    }

    /// Set the manual effort entry on a subsystem's miscellaneous module
    ///
    /// The effort must be non-negative and the comment at most
    /// [`MAX_COMMENT_LEN`] characters; an over-length comment is rejected,
    /// never truncated.
    pub fn set_module_override(
        &mut self,
        subsystem_id: &NodeId,
        effort: f64,
        comment: &str,
    ) -> Result<(), TreeError> {
        validate_effort(effort)?;
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(TreeError::invalid(format!(
                "comment exceeds {MAX_COMMENT_LEN} characters"
            )));
        }

        let si = self
            .subsystem_position(subsystem_id)
            .ok_or_else(|| TreeError::unknown(subsystem_id))?;
        let module = self.subsystems[si]
            .misc_module_mut()
            .ok_or_else(|| TreeError::unknown(subsystem_id))?;

        module.manual_effort = effort;
        module.manual_comment = comment.to_string();
        Ok(())
    }

    // ---- query surface ------------------------------------------------

    /// Total effort across all enabled subsystems
    pub fn total_effort(&self) -> f64 {
        self.subsystems.iter().map(Subsystem::total_effort).sum()
    }

    /// Total effort of one subsystem
    pub fn subsystem_effort(&self, id: &NodeId) -> Result<f64, TreeError> {
        let si = self
            .subsystem_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;
        Ok(self.subsystems[si].total_effort())
    }

    /// Total effort of one module
    pub fn module_effort(&self, id: &NodeId) -> Result<f64, TreeError> {
        let (si, mi) = self
            .module_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;
        Ok(self.subsystems[si].modules[mi].total_effort())
    }

    /// Effective effort of one task: baseline x ratio, or zero when the
    /// owning module or subsystem is disabled
    pub fn task_effort(&self, id: &NodeId) -> Result<f64, TreeError> {
        let (si, mi, ti) = self
            .task_position(id)
            .ok_or_else(|| TreeError::unknown(id))?;

        let subsystem = &self.subsystems[si];
        let module = &subsystem.modules[mi];
        if !subsystem.enabled || !module.enabled {
            return Ok(0.0);
        }
        Ok(module.tasks[ti].weighted_effort())
    }

    /// Read-only view of the full structure, for rendering
    pub fn subsystems(&self) -> &[Subsystem] {
        &self.subsystems
    }

    /// Iterate every node id in tree order (subsystem, its modules, their
    /// tasks)
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.subsystems.iter().flat_map(|subsystem| {
            std::iter::once(&subsystem.id).chain(subsystem.modules.iter().flat_map(|module| {
                std::iter::once(&module.id).chain(module.tasks.iter().map(|task| &task.id))
            }))
        })
    }

    // ---- position lookups ---------------------------------------------
    //
    // Linear scans. The tree holds dozens of nodes; derived state is
    // recomputed from the children on each mutation rather than cached.

    fn subsystem_position(&self, id: &NodeId) -> Option<usize> {
        self.subsystems.iter().position(|s| &s.id == id)
    }

    fn module_position(&self, id: &NodeId) -> Option<(usize, usize)> {
        self.subsystems.iter().enumerate().find_map(|(si, s)| {
            s.modules
                .iter()
                .position(|m| &m.id == id)
                .map(|mi| (si, mi))
        })
    }

    fn task_position(&self, id: &NodeId) -> Option<(usize, usize, usize)> {
        self.subsystems.iter().enumerate().find_map(|(si, s)| {
            s.modules.iter().enumerate().find_map(|(mi, m)| {
                m.tasks
                    .iter()
                    .position(|t| &t.id == id)
                    .map(|ti| (si, mi, ti))
            })
        })
    }
}

/// Push an explicit enabled state into a module and its tasks
fn cascade_into_module(module: &mut Module, state: bool) {
    module.enabled = state;
    let ratio = if state { 1.0 } else { 0.0 };
    for task in &mut module.tasks {
        task.inclusion_ratio = ratio;
    }
}

fn validate_effort(effort: f64) -> Result<(), TreeError> {
    if !effort.is_finite() || effort < 0.0 {
        return Err(TreeError::invalid(format!(
            "effort must be a non-negative number, got {effort}"
        )));
    }
    Ok(())
}
