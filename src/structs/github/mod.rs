pub mod create_blob_request;
pub mod create_commit_request;
pub mod create_ref_request;
pub mod create_tree_request;
pub mod git_object;
pub mod git_ref;
pub mod git_tree;
pub mod sha_response;
pub mod tree_item;
