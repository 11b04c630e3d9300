//! The serializable extras channel that carries generated payloads

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;

use crate::error::{ExtrasError, ExtrasResult};

/// A tag-addressed bag of serialized values.
///
/// Generated dispatchers store one payload per target under that target's
/// deterministic tag. The map is ordered so rendering and comparison are
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extras {
    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

impl Extras {
    /// Create an empty extras bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tagged entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if an entry is stored under `tag`
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Store `value` under `tag`, replacing any previous entry.
    ///
    /// Encoding failures are logged and the entry is dropped; generated
    /// fluent chains have no error channel to propagate through. Use
    /// [`Extras::try_put`] when the caller can handle the failure.
    pub fn put<T: Serialize>(&mut self, tag: impl Into<String>, value: &T) {
        let tag = tag.into();
        match serde_json::to_value(value) {
            Ok(encoded) => {
                self.entries.insert(tag, encoded);
            }
            Err(err) => tracing::error!(tag, %err, "dropping extras entry that failed to encode"),
        }
    }

    /// Store `value` under `tag`, surfacing encoding failures
    pub fn try_put<T: Serialize>(&mut self, tag: impl Into<String>, value: &T) -> ExtrasResult<()> {
        let encoded = serde_json::to_value(value)?;
        self.entries.insert(tag.into(), encoded);
        Ok(())
    }

    /// Decode the entry under `tag`, or `None` if it is absent or does
    /// not decode to `T`.
    ///
    /// Decodes directly from the stored value without cloning.
    pub fn get<T: DeserializeOwned>(&self, tag: &str) -> Option<T> {
        self.entries.get(tag).and_then(|v| T::deserialize(v).ok())
    }

    /// Decode the entry under `tag`, distinguishing absence from decode
    /// failure
    pub fn try_get<T: DeserializeOwned>(&self, tag: &str) -> ExtrasResult<T> {
        let value = self.entries.get(tag).ok_or_else(|| ExtrasError::MissingEntry {
            tag: tag.to_string(),
        })?;
        T::deserialize(value).map_err(|source| ExtrasError::Decode {
            tag: tag.to_string(),
            source,
        })
    }

    /// Copy every entry of `other` into this bag.
    ///
    /// Entries from `other` replace same-tagged entries already present,
    /// so callers layer lower-precedence data first.
    pub fn merge(&mut self, other: &Extras) {
        for (tag, value) in &other.entries {
            self.entries.insert(tag.clone(), value.clone());
        }
    }

    /// Iterate the stored tags in order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
