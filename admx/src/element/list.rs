//! List elements
//!
//! A list element lets the administrator enter any number of values, all
//! written under the element's key. Value names are generated from a prefix
//! (`prefix1`, `prefix2`, ...) unless `explicit_value` lets the administrator
//! name each entry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// List element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListElement {
    value_prefix: String,
    additive: bool,
    expandable: bool,
    explicit_value: bool,
    client_extension: Option<String>,
}

impl ListElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.value_prefix = prefix.into();
        self
    }

    pub fn with_additive(mut self, additive: bool) -> Self {
        self.additive = additive;
        self
    }

    pub fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }

    pub fn with_explicit_value(mut self, explicit_value: bool) -> Self {
        self.explicit_value = explicit_value;
        self
    }

    pub fn with_client_extension(mut self, guid: impl Into<String>) -> Self {
        self.client_extension = Some(guid.into());
        self
    }

    pub fn value_prefix(&self) -> &str {
        &self.value_prefix
    }

    /// Existing values under the key are kept rather than replaced
    pub fn additive(&self) -> bool {
        self.additive
    }

    pub fn expandable(&self) -> bool {
        self.expandable
    }

    /// Administrator supplies value names as well as values
    pub fn explicit_value(&self) -> bool {
        self.explicit_value
    }

    /// Client-side extension GUID
    pub fn client_extension(&self) -> Option<&str> {
        self.client_extension.as_deref()
    }

    /// Generated value name for the entry at `index` (0-based)
    ///
    /// Only meaningful when values are not explicit.
    pub fn value_name_for(&self, index: usize) -> String {
        format!("{}{}", self.value_prefix, index + 1)
    }
}
