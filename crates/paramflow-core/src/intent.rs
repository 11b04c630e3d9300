//! Intent transport for screen targets

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::extras::Extras;

/// The transport used to launch a screen target.
///
/// An intent is addressed to a single target (the generated dispatcher's
/// tag) and carries an [`Extras`] bag holding the payload of the target
/// plus the payloads of its ancestors, each under its own tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    target: String,
    #[serde(default)]
    extras: Extras,
}

impl Intent {
    /// Create an intent addressed to `target` with empty extras
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extras: Extras::new(),
        }
    }

    /// The target this intent is addressed to
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The carried extras bag
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Mutable access to the carried extras bag
    pub fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }

    /// Decode the extra stored under `tag`, if any
    pub fn extra<T: DeserializeOwned>(&self, tag: &str) -> Option<T> {
        self.extras.get(tag)
    }

    /// Layer another intent's extras into this one.
    ///
    /// Entries from `other` replace same-tagged entries already present;
    /// generated dispatchers merge ancestor intents before attaching the
    /// local payload so the child wins on collision.
    pub fn merge_extras(&mut self, other: &Intent) {
        self.extras.merge(&other.extras);
    }
}
