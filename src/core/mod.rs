//! Core module - fundamental types and utilities

pub mod identity;
pub mod project;
pub mod shortid;
pub mod tree;

pub use identity::{IdParseError, NodeId, NodePrefix};
pub use project::{Project, ProjectError, Session};
pub use shortid::ShortIdIndex;
pub use tree::{EstimationTree, TreeError};
