//! Destination descriptors for target sheets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// One target column of an assembled table, typically a destination sheet.
///
/// The display name is the whole identity: equality, header uniqueness, and
/// keyword matching all go through `name`. `meta` carries per-destination
/// manipulation values (for example a missing-value list) that the core
/// passes through untouched; interpreting them is the consumer's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    meta: BTreeMap<String, Value>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Destination {
        Destination {
            name: name.into(),
            meta: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &BTreeMap<String, Value> {
        &self.meta
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: Value) {
        self.meta.insert(key.into(), value);
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Destination {
        self.set_meta(key, value);
        self
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Destination {}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
