/// Last `/`-separated segment of a repository path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of the base name, without the dot. Dotfiles have none.
pub fn extension(path: &str) -> Option<&str> {
    let name = base_name(path);
    name.rfind('.').filter(|&idx| idx > 0).map(|idx| &name[idx + 1..])
}
