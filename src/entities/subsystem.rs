//! Subsystem entity - top-level grouping of modules

use serde::{Deserialize, Serialize};

use crate::core::identity::{NodeId, NodePrefix};
use crate::entities::module::Module;

/// Display name given to each subsystem's miscellaneous module
pub const MISC_MODULE_NAME: &str = "Other";

/// A subsystem grouping modules, with its own enabled flag
///
/// Every subsystem carries a trailing miscellaneous module from creation;
/// modules added later keep it in last position for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsystem {
    /// Unique identifier
    pub id: NodeId,

    /// Display name (unique within the data source)
    pub name: String,

    /// Whether the subsystem counts toward totals
    pub enabled: bool,

    /// Modules in ingestion order, miscellaneous last
    pub modules: Vec<Module>,
}

impl Subsystem {
    /// Create an enabled subsystem holding only its miscellaneous module
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(NodePrefix::Sub),
            name: name.into(),
            enabled: true,
            modules: vec![Module::miscellaneous(MISC_MODULE_NAME)],
        }
    }

    /// Append a standard module, keeping the miscellaneous module last
    pub fn add_module(&mut self, name: impl Into<String>) -> &mut Module {
        let position = self.modules.len().saturating_sub(1);
        self.modules.insert(position, Module::new(name));
        &mut self.modules[position]
    }

    /// The designated miscellaneous module
    pub fn misc_module(&self) -> Option<&Module> {
        self.modules.iter().find(|m| m.is_miscellaneous())
    }

    /// Mutable access to the miscellaneous module
    pub fn misc_module_mut(&mut self) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.is_miscellaneous())
    }

    /// Total effort of this subsystem
    ///
    /// Zero when disabled; otherwise the sum of the modules' totals
    /// (disabled modules already report zero).
    pub fn total_effort(&self) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        self.modules.iter().map(Module::total_effort).sum()
    }

    /// Whether every module's enabled flag is off
    pub fn all_modules_disabled(&self) -> bool {
        self.modules.iter().all(|m| !m.enabled)
    }
}
