//! Entity type definitions

pub mod module;
pub mod subsystem;
pub mod task;

pub use module::{Module, ModuleKind, MAX_COMMENT_LEN};
pub use subsystem::{Subsystem, MISC_MODULE_NAME};
pub use task::Task;
