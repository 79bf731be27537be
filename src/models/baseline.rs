//! Known-results schema: the checked-in regression oracle.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
/// Expected warning counts keyed by finding name.
pub struct KnownResults {
    #[serde(rename = "warningsAndErrors", default, deserialize_with = "null_as_empty")]
    pub warnings_and_errors: BTreeMap<String, u64>,
}

impl KnownResults {
    pub fn get(&self, name: &str) -> Option<u64> {
        self.warnings_and_errors.get(name).copied()
    }
}

/// `null` reads as an empty mapping, like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, u64>>::deserialize(deserializer)?.unwrap_or_default())
}
