use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Header metadata placed verbatim into the generated document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DocumentConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub organization_url: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Table inclusion/exclusion rules applied after normalization.
///
/// When any `designated_*` set is non-empty, only tables matching a
/// designate rule are kept and the ignore sets are not consulted.
/// Otherwise, tables matching an ignore rule are dropped. Matching is
/// byte-exact and case-sensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProcessConfig {
    /// Exact table names to designate.
    #[serde(default)]
    pub designated_table_name: Vec<String>,
    /// Table name prefixes to designate.
    #[serde(default)]
    pub designated_table_prefix: Vec<String>,
    /// Table name suffixes to designate.
    #[serde(default)]
    pub designated_table_suffix: Vec<String>,
    /// Exact table names to ignore.
    #[serde(default)]
    pub ignore_table_name: Vec<String>,
    /// Table name prefixes to ignore.
    #[serde(default)]
    pub ignore_table_prefix: Vec<String>,
    /// Table name suffixes to ignore.
    #[serde(default)]
    pub ignore_table_suffix: Vec<String>,
}

impl ProcessConfig {
    /// True when any designate rule set is populated.
    pub fn designate_mode(&self) -> bool {
        !self.designated_table_name.is_empty()
            || !self.designated_table_prefix.is_empty()
            || !self.designated_table_suffix.is_empty()
    }
}
