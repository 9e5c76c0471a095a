//! Ingestion adapter - builds an estimation tree from tabular effort data
//!
//! The contract: a finite sequence of (subsystem, module, task, effort,
//! description) records. The first occurrence of a subsystem or
//! (subsystem, module) pair creates that node; later records with the same
//! pair append tasks to it. A (subsystem, module, task) triple must be
//! unique. Names key the build and nothing after it; once the tree exists,
//! nodes are addressed by id only.

pub mod reader;

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::identity::NodeId;
use crate::core::tree::{EstimationTree, TreeError};

pub use reader::read_records;

/// One row of effort data
#[derive(Debug, Clone, PartialEq)]
pub struct EffortRecord {
    pub subsystem: String,
    pub module: String,
    pub task: String,
    pub effort: f64,
    pub description: String,
}

/// Errors from ingesting effort records
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("duplicate task '{task}' in {subsystem}/{module} at row {row}")]
    DuplicateTask {
        subsystem: String,
        module: String,
        task: String,
        row: usize,
    },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build an estimation tree from effort records
///
/// Reported row numbers count the CSV header as row 1, so the first record
/// is row 2. Insertion order is preserved within each subsystem and module
/// for display purposes.
pub fn build_tree(records: &[EffortRecord]) -> Result<EstimationTree, IngestError> {
    let mut tree = EstimationTree::new();
    let mut subsystem_ids: HashMap<String, NodeId> = HashMap::new();
    let mut module_ids: HashMap<(String, String), NodeId> = HashMap::new();
    let mut seen_tasks: HashSet<(String, String, String)> = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        let row = i + 2;

        let subsystem = record.subsystem.trim();
        let module = record.module.trim();
        let task = record.task.trim();

        if subsystem.is_empty() || module.is_empty() || task.is_empty() {
            return Err(IngestError::InvalidRecord {
                row,
                message: "subsystem, module, and task names must be non-empty".to_string(),
            });
        }

        let triple = (
            subsystem.to_string(),
            module.to_string(),
            task.to_string(),
        );
        if !seen_tasks.insert(triple) {
            return Err(IngestError::DuplicateTask {
                subsystem: subsystem.to_string(),
                module: module.to_string(),
                task: task.to_string(),
                row,
            });
        }

        let subsystem_id = subsystem_ids
            .entry(subsystem.to_string())
            .or_insert_with(|| tree.add_subsystem(subsystem))
            .clone();

        let module_id = match module_ids.entry((subsystem.to_string(), module.to_string())) {
            std::collections::hash_map::Entry::Occupied(e) => e.get().clone(),
            std::collections::hash_map::Entry::Vacant(e) => {
                let id = tree
                    .add_module(&subsystem_id, module)
                    .map_err(|err| to_invalid_record(err, row))?;
                e.insert(id.clone());
                id
            }
        };

        tree.add_task(&module_id, task, record.effort, record.description.trim())
            .map_err(|err| to_invalid_record(err, row))?;
    }

    Ok(tree)
}

fn to_invalid_record(err: TreeError, row: usize) -> IngestError {
    IngestError::InvalidRecord {
        row,
        message: err.to_string(),
    }
}
