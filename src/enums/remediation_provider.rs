use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum RemediationProvider {
    #[default]
    #[serde(rename = "passthrough")]
    Passthrough,
    #[serde(rename = "http")]
    Http,
}
