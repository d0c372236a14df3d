use serde::Serialize;
use crate::structs::github::tree_item::TreeItem;

#[derive(Debug, Clone, Serialize)]
pub struct CreateTreeRequest {
    pub base_tree: String,
    pub tree: Vec<TreeItem>,
}
