use serde::{Deserialize, Serialize};

/// Metadata recorded for one indexed file
///
/// Serialized field order is `name`, `url`, `type`, `size`, `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub file_type: String,
    /// Size in megabytes, e.g. `"1.23MB"`
    pub size: String,
    /// Local modification date, `DD-MM-YYYY`
    pub date: String,
}
