//! Short ID aliases for easier node selection
//!
//! Maps session aliases like `SUB@1`, `MOD@3`, `TSK@12` to full node ids
//! so nobody has to type a ULID. Aliases are assigned in tree order when a
//! project is initialized and persisted in `.est/shortids.json`.

use std::collections::HashMap;
use std::fs;

use crate::core::identity::NodeId;
use crate::core::project::Project;

/// Index file location within a project
const INDEX_FILE: &str = "shortids.json";

/// A mapping of `PREFIX@N` aliases to full node ids
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ShortIdIndex {
    /// Maps "PREFIX@N" to the full id string (e.g. "TSK@3" -> "TSK-01ABC...")
    entries: HashMap<String, String>,
    /// Maps full id to alias (reverse lookup)
    #[serde(skip)]
    reverse: HashMap<String, String>,
    /// Next available alias number per prefix
    next_ids: HashMap<String, u32>,
}

impl ShortIdIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index from a project, or create empty if not found
    pub fn load(project: &Project) -> Self {
        let path = project.est_dir().join(INDEX_FILE);
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(mut index) = serde_json::from_str::<ShortIdIndex>(&content) {
                index.reverse = index
                    .entries
                    .iter()
                    .map(|(k, v)| (v.clone(), k.clone()))
                    .collect();
                return index;
            }
        }
        Self::new()
    }

    /// Save the index to a project
    pub fn save(&self, project: &Project) -> std::io::Result<()> {
        let path = project.est_dir().join(INDEX_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
    }

    /// Clear the index and assign aliases to the given ids in order
    pub fn rebuild<'a>(&mut self, ids: impl IntoIterator<Item = &'a NodeId>) {
        self.entries.clear();
        self.reverse.clear();
        self.next_ids.clear();

        for id in ids {
            self.add(id);
        }
    }

    /// Add a node id, assigning the next alias for its prefix
    pub fn add(&mut self, id: &NodeId) -> String {
        let full = id.to_string();
        if let Some(alias) = self.reverse.get(&full) {
            return alias.clone();
        }

        let prefix = id.prefix().as_str();
        let next = self.next_ids.entry(prefix.to_string()).or_insert(1);
        let alias = format!("{}@{}", prefix, next);
        *next += 1;

        self.entries.insert(alias.clone(), full.clone());
        self.reverse.insert(full, alias.clone());
        alias
    }

    /// Resolve a reference to a full id string
    ///
    /// Accepts a `PREFIX@N` alias (case-insensitive prefix) or a full id,
    /// which passes through untouched.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        if let Some((prefix, number)) = reference.split_once('@') {
            let key = format!("{}@{}", prefix.to_ascii_uppercase(), number);
            return self.entries.get(&key).cloned();
        }
        Some(reference.to_string())
    }

    /// The alias for a full node id, if one was assigned
    pub fn alias_for(&self, id: &NodeId) -> Option<&str> {
        self.reverse.get(&id.to_string()).map(String::as_str)
    }

    /// Number of aliases in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
