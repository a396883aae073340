//! Project manifest (`package.json`) model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Author record written into the manifest.
///
/// An empty record serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Key-value project descriptor.
///
/// Field order is preserved so that generated manifests read in the order
/// defaults were laid down, followed by fields carried over from an existing file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, replacing any previous value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Overlay every field of `other` onto this manifest (shallow, `other` wins)
    pub fn extend(&mut self, other: Manifest) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as two-space indented JSON with a trailing newline
    pub fn to_pretty_json(&self) -> crate::Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.0)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
