//! Task entity - leaf unit of work

use serde::{Deserialize, Serialize};

use crate::core::identity::{NodeId, NodePrefix};

/// A task with a fixed baseline effort and a mutable inclusion ratio
///
/// The inclusion ratio is a continuous value in [0, 1]. The percentages
/// offered by front-ends (100/60/25/0) are a presentation shorthand, not a
/// model constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: NodeId,

    /// Display name (unique within the owning module's data source)
    pub name: String,

    /// Baseline effort, as ingested (non-negative)
    pub baseline_effort: f64,

    /// Free-text description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Fraction of the baseline effort counted toward totals
    #[serde(default = "default_ratio")]
    pub inclusion_ratio: f64,
}

fn default_ratio() -> f64 {
    1.0
}

impl Task {
    /// Create a task with the full baseline effort included
    pub fn new(name: impl Into<String>, baseline_effort: f64, description: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(NodePrefix::Tsk),
            name: name.into(),
            baseline_effort,
            description: description.into(),
            inclusion_ratio: 1.0,
        }
    }

    /// Baseline effort scaled by the inclusion ratio
    ///
    /// This is the task's local contribution; gating by the owning module's
    /// and subsystem's enabled flags happens at the aggregation level.
    pub fn weighted_effort(&self) -> f64 {
        self.baseline_effort * self.inclusion_ratio
    }

    /// Whether the task contributes nothing to totals on its own
    pub fn is_excluded(&self) -> bool {
        self.inclusion_ratio == 0.0
    }
}
