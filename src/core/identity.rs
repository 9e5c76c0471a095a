//! Node identity - stable opaque identifiers for tree nodes
//!
//! Every node receives an id at creation time: a type prefix plus a ULID
//! (e.g. `TSK-01JDGJC92W6EBFGZ5SJW6MFGW6`). Names are display metadata and
//! are never used for lookup or equality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ulid::Ulid;

/// Node type prefixes used in ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodePrefix {
    /// Subsystem node
    Sub,
    /// Module node
    Mod,
    /// Task node
    Tsk,
}

impl NodePrefix {
    /// The prefix string as it appears in a rendered id
    pub fn as_str(&self) -> &'static str {
        match self {
            NodePrefix::Sub => "SUB",
            NodePrefix::Mod => "MOD",
            NodePrefix::Tsk => "TSK",
        }
    }

}

impl fmt::Display for NodePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodePrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUB" => Ok(NodePrefix::Sub),
            "MOD" => Ok(NodePrefix::Mod),
            "TSK" => Ok(NodePrefix::Tsk),
            _ => Err(IdParseError::UnknownPrefix {
                prefix: s.to_string(),
            }),
        }
    }
}

/// Errors from parsing a node id string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("missing '-' separator in id '{id}'")]
    MissingSeparator { id: String },

    #[error("unknown id prefix '{prefix}' (expected SUB, MOD, or TSK)")]
    UnknownPrefix { prefix: String },

    #[error("invalid ULID in id '{id}'")]
    InvalidUlid { id: String },
}

/// A stable node identifier: `PREFIX-ULID`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    prefix: NodePrefix,
    ulid: Ulid,
}

impl NodeId {
    /// Generate a fresh id for the given node type
    pub fn new(prefix: NodePrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    /// The node type this id belongs to
    pub fn prefix(&self) -> NodePrefix {
        self.prefix
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.ulid)
    }
}

impl FromStr for NodeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid) = s.split_once('-').ok_or_else(|| IdParseError::MissingSeparator {
            id: s.to_string(),
        })?;

        let prefix = prefix.parse::<NodePrefix>()?;
        let ulid = Ulid::from_string(ulid).map_err(|_| IdParseError::InvalidUlid {
            id: s.to_string(),
        })?;

        Ok(Self { prefix, ulid })
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}
