use serde::{Deserialize, Serialize};
use crate::structs::github::git_object::GitObject;

/// Response of `GET git/refs/heads/{branch}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub reference: String,
    pub object: GitObject,
}
