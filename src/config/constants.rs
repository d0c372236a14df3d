pub const CONFIG_DIR_NAME: &str = ".repo-remediator";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Listing root of a repository for the contents endpoint.
pub const ROOT_PATH: &str = "";
