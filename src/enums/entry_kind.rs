use serde::{Deserialize, Serialize};

/// Kind of a directory listing entry as reported by the contents endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum EntryKind {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "symlink")]
    Symlink,
    #[serde(rename = "submodule")]
    Submodule,
    /// Any type this client does not know. Skipped like the unsupported kinds.
    #[serde(other)]
    Unknown,
}
