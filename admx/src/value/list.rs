//! Value Lists
//!
//! List-valued policies write a set of registry entries rather than a
//! single value. Each entry names its own key and value; entries without a
//! key fall back to the list's default key.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::definition::ValueDefinition;

/// One registry entry of a value list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListEntry {
    registry_path: String,
    value_name: String,
    value: ValueDefinition,
}

impl ListEntry {
    /// Create a new entry
    pub fn new(
        registry_path: impl Into<String>,
        value_name: impl Into<String>,
        value: ValueDefinition,
    ) -> Self {
        Self {
            registry_path: registry_path.into(),
            value_name: value_name.into(),
            value,
        }
    }

    /// Registry key path (may be empty)
    pub fn registry_path(&self) -> &str {
        &self.registry_path
    }

    /// Registry value name
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// Value written for this entry
    pub fn value(&self) -> &ValueDefinition {
        &self.value
    }
}

/// Ordered list of registry entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueDefinitionList {
    entries: Vec<ListEntry>,
    default_registry_path: String,
}

impl ValueDefinitionList {
    /// Create an empty list with no default path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with a default registry path
    pub fn with_default_registry_path(path: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_registry_path: path.into(),
        }
    }

    /// Append an entry, builder style
    pub fn with_entry(mut self, entry: ListEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append an entry
    pub fn push(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    /// Default registry path (empty when not given)
    pub fn default_registry_path(&self) -> &str {
        &self.default_registry_path
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> core::slice::Iter<'_, ListEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key path an entry is written under
    ///
    /// The entry's own path, or the list default when the entry has none.
    pub fn effective_path<'a>(&'a self, entry: &'a ListEntry) -> &'a str {
        if entry.registry_path.is_empty() {
            &self.default_registry_path
        } else {
            &entry.registry_path
        }
    }
}

impl FromIterator<ListEntry> for ValueDefinitionList {
    fn from_iter<I: IntoIterator<Item = ListEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            default_registry_path: String::new(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueDefinitionList {
    type Item = &'a ListEntry;
    type IntoIter = core::slice::Iter<'a, ListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Present and non-empty
pub(crate) fn has_entries(list: Option<&ValueDefinitionList>) -> bool {
    list.is_some_and(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCKED: &str = r"Software\Policies\Example\Blocked";

    #[test]
    fn test_default_path_is_empty() {
        let list = ValueDefinitionList::new();
        assert_eq!(list.default_registry_path(), "");
        assert!(list.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let list = ValueDefinitionList::with_default_registry_path(BLOCKED)
            .with_entry(ListEntry::new("", "2", ValueDefinition::text(".exe")))
            .with_entry(ListEntry::new("", "1", ValueDefinition::text(".bat")))
            .with_entry(ListEntry::new("", "1", ValueDefinition::text(".bat")));

        let names: Vec<&str> = list.iter().map(ListEntry::value_name).collect();
        assert_eq!(names, ["2", "1", "1"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_effective_path_falls_back_to_default() {
        let own = ListEntry::new(r"Software\Other", "A", ValueDefinition::Decimal32(1));
        let inherit = ListEntry::new("", "B", ValueDefinition::Decimal32(0));
        let list = ValueDefinitionList::with_default_registry_path(BLOCKED)
            .with_entry(own.clone())
            .with_entry(inherit.clone());

        assert_eq!(list.effective_path(&own), r"Software\Other");
        assert_eq!(list.effective_path(&inherit), BLOCKED);
    }

    #[test]
    fn test_has_entries_reflects_current_contents() {
        let mut list = ValueDefinitionList::new();
        assert!(!has_entries(None));
        assert!(!has_entries(Some(&list)));
        list.push(ListEntry::new("", "x", ValueDefinition::DeleteValue));
        assert!(has_entries(Some(&list)));
    }
}
