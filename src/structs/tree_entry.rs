use serde::Deserialize;
use crate::enums::entry_kind::EntryKind;
use crate::helpers::paths;

/// One element of a `GET contents/{path}` listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl TreeEntry {
    /// Last path segment, which is what folder exclusion matches against.
    pub fn base_name(&self) -> &str {
        paths::base_name(&self.path)
    }

    pub fn extension(&self) -> Option<&str> {
        paths::extension(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_contents_listing_item() {
        let entry: TreeEntry = serde_json::from_value(serde_json::json!({
            "type": "file",
            "path": "src/lib/main.py",
            "size": 12,
            "download_url": "https://raw.githubusercontent.com/o/r/main/src/lib/main.py",
            "sha": "ignored"
        }))
        .unwrap();

        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.base_name(), "main.py");
        assert_eq!(entry.extension(), Some("py"));
    }

    #[test]
    fn directories_have_no_download_url() {
        let entry: TreeEntry = serde_json::from_value(serde_json::json!({
            "type": "dir",
            "path": "test",
            "size": 0,
            "download_url": null
        }))
        .unwrap();

        assert_eq!(entry.kind, EntryKind::Directory);
        assert_eq!(entry.base_name(), "test");
        assert_eq!(entry.download_url, None);
    }

    #[test]
    fn unrecognised_types_deserialize_as_unknown() {
        let entry: TreeEntry = serde_json::from_value(serde_json::json!({
            "type": "weird",
            "path": "odd",
            "size": 0,
            "download_url": null
        }))
        .unwrap();

        assert_eq!(entry.kind, EntryKind::Unknown);
    }

    #[test]
    fn dotfiles_have_no_extension() {
        let entry = TreeEntry {
            path: ".gitignore".to_string(),
            kind: EntryKind::File,
            size: 1,
            download_url: None,
        };
        assert_eq!(entry.extension(), None);
    }
}
