//! Command implementations

pub mod chart;
pub mod completions;
pub mod init;
pub mod other;
pub mod ratio;
pub mod summary;
pub mod toggle;
pub mod tree;
