//! The minion record shared by the store, the HTTP layer and the client.

use serde::{Deserialize, Serialize};

/// A single managed minion.
///
/// `name` is the unique key in the store. Tag order carries no meaning and is
/// reshuffled by the store on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minion {
    /// Unique identifier, must not contain whitespace.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Unordered labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Minion {
    /// Create a new minion.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the name contains any whitespace character.
    pub fn has_whitespace_name(&self) -> bool {
        contains_whitespace(&self.name)
    }

    /// Compare two minions ignoring tag order.
    #[cfg(test)]
    pub(crate) fn same_as(&self, other: &Minion) -> bool {
        let mut ours = self.tags.clone();
        let mut theirs = other.tags.clone();
        ours.sort();
        theirs.sort();
        self.name == other.name && self.description == other.description && ours == theirs
    }
}

/// Whether `value` contains any whitespace character.
pub fn contains_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}
