//! Module entity - groups tasks within a subsystem

use serde::{Deserialize, Serialize};

use crate::core::identity::{NodeId, NodePrefix};
use crate::entities::task::Task;

/// Maximum length of a manual-effort comment, in characters
pub const MAX_COMMENT_LEN: usize = 50;

/// Module kind - whether this module accepts a manual effort entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ModuleKind {
    /// Regular module whose total comes from its tasks
    #[default]
    Standard,
    /// Designated catch-all module that contributes a manually entered
    /// effort figure not backed by discrete tasks
    Miscellaneous,
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleKind::Standard => write!(f, "standard"),
            ModuleKind::Miscellaneous => write!(f, "miscellaneous"),
        }
    }
}

/// A module grouping tasks, with its own enabled flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier
    pub id: NodeId,

    /// Display name (unique within the owning subsystem's data source)
    pub name: String,

    /// Module kind
    #[serde(default)]
    pub kind: ModuleKind,

    /// Whether the module counts toward totals
    pub enabled: bool,

    /// Tasks in ingestion order (order matters for display only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,

    /// Manually entered effort; only the miscellaneous module adds this
    /// to its total
    #[serde(default, skip_serializing_if = "is_zero")]
    pub manual_effort: f64,

    /// Comment attached to the manual effort entry
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manual_comment: String,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Module {
    /// Create an enabled standard module with no tasks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(NodePrefix::Mod),
            name: name.into(),
            kind: ModuleKind::Standard,
            enabled: true,
            tasks: Vec::new(),
            manual_effort: 0.0,
            manual_comment: String::new(),
        }
    }

    /// Create an enabled miscellaneous module
    pub fn miscellaneous(name: impl Into<String>) -> Self {
        Self {
            kind: ModuleKind::Miscellaneous,
            ..Self::new(name)
        }
    }

    /// Whether this is the designated manual-entry module
    pub fn is_miscellaneous(&self) -> bool {
        self.kind == ModuleKind::Miscellaneous
    }

    /// Total effort of this module
    ///
    /// Zero when disabled, regardless of task ratios. Otherwise the sum of
    /// the tasks' weighted efforts, plus the manual entry for the
    /// miscellaneous module.
    pub fn total_effort(&self) -> f64 {
        if !self.enabled {
            return 0.0;
        }

        let tasks: f64 = self.tasks.iter().map(Task::weighted_effort).sum();
        if self.is_miscellaneous() {
            tasks + self.manual_effort
        } else {
            tasks
        }
    }

    /// Whether every task sits at ratio zero
    ///
    /// Used by the derived-disable check; a module with no tasks never
    /// derives a disable from this.
    pub fn all_tasks_excluded(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(Task::is_excluded)
    }
}
