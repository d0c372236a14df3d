use std::collections::BTreeMap;

/// Path to raw content. Used for fetched files and, after remediation, as the
/// set of replacements handed to the publisher.
pub type FileMap = BTreeMap<String, Vec<u8>>;

pub type RemediationMap = FileMap;
