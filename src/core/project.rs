//! Project discovery and session persistence
//!
//! A project is a directory containing `.est/`, created by `est init`.
//! The session file holds the serialized estimation tree between CLI
//! invocations; the tree itself performs no I/O. Commands rewrite the
//! session only after a mutation succeeds, so a rejected mutation leaves
//! the stored tree in its last valid state.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::tree::EstimationTree;

/// Project directory name
pub const PROJECT_DIR: &str = ".est";

/// Session file name within the project directory
const SESSION_FILE: &str = "session.yaml";

/// Errors from project discovery and session I/O
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no {PROJECT_DIR} project found here or in any parent directory. Run 'est init <csv>' first")]
    NotFound,

    #[error("a project already exists at {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to parse session file: {message}")]
    Session { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A discovered project rooted at the directory containing `.est/`
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Create a new project at the given directory
    pub fn init(dir: &Path) -> Result<Self, ProjectError> {
        let est_dir = dir.join(PROJECT_DIR);
        if est_dir.exists() {
            return Err(ProjectError::AlreadyExists { path: est_dir });
        }
        fs::create_dir_all(&est_dir)?;
        Ok(Self {
            root: dir.to_path_buf(),
        })
    }

    /// Walk up from the current directory to find a project
    pub fn discover() -> Result<Self, ProjectError> {
        let start = env::current_dir()?;
        let mut dir: &Path = &start;
        loop {
            if dir.join(PROJECT_DIR).is_dir() {
                return Ok(Self {
                    root: dir.to_path_buf(),
                });
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Err(ProjectError::NotFound),
            }
        }
    }

    /// The project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.est/` directory
    pub fn est_dir(&self) -> PathBuf {
        self.root.join(PROJECT_DIR)
    }

    fn session_path(&self) -> PathBuf {
        self.est_dir().join(SESSION_FILE)
    }

    /// Load the session from disk
    pub fn load_session(&self) -> Result<Session, ProjectError> {
        let content = fs::read_to_string(self.session_path())?;
        serde_yml::from_str(&content).map_err(|e| ProjectError::Session {
            message: e.to_string(),
        })
    }

    /// Write the session to disk
    pub fn save_session(&self, session: &Session) -> Result<(), ProjectError> {
        let content = serde_yml::to_string(session).map_err(|e| ProjectError::Session {
            message: e.to_string(),
        })?;
        fs::write(self.session_path(), content)?;
        Ok(())
    }
}

/// The persisted state of an estimation project
#[derive(Debug, Serialize, Deserialize)]
pub struct Session {
    /// CSV file the tree was built from
    pub source: PathBuf,

    /// When the project was initialized
    pub created: DateTime<Utc>,

    /// Last mutation time
    pub modified: DateTime<Utc>,

    /// The estimation tree
    pub tree: EstimationTree,
}

impl Session {
    /// Create a session around a freshly built tree
    pub fn new(source: PathBuf, tree: EstimationTree) -> Self {
        let now = Utc::now();
        Self {
            source,
            created: now,
            modified: now,
            tree,
        }
    }

    /// Record a mutation time
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
