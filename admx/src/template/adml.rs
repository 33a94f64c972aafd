//! ADML resources
//!
//! An ADML file carries the localized text for one ADMX file in one
//! language: a string table and a table of presentation windows, both
//! keyed by resource id. Lookups are exact; there is no fallback between
//! languages.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Localized resources of one ADML file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdmlResource {
    display_name: String,
    description: String,
    strings: BTreeMap<String, String>,
    windows: BTreeMap<String, String>,
}

impl AdmlResource {
    pub fn new(display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a string table entry; a repeated id replaces the earlier text
    pub fn with_string(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.strings.insert(id.into(), text.into());
        self
    }

    /// Add a presentation window entry; a repeated id replaces the earlier one
    pub fn with_window(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.windows.insert(id.into(), text.into());
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Localized string for a resource id
    pub fn string(&self, id: &str) -> Option<&str> {
        self.strings.get(id).map(String::as_str)
    }

    /// Presentation window for a resource id
    pub fn window(&self, id: &str) -> Option<&str> {
        self.windows.get(id).map(String::as_str)
    }

    pub fn strings(&self) -> &BTreeMap<String, String> {
        &self.strings
    }

    pub fn windows(&self) -> &BTreeMap<String, String> {
        &self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_key_lookup() {
        let adml = AdmlResource::new("Explorer", "Explorer strings")
            .with_string("NoRun", "Remove Run menu from Start Menu")
            .with_window("NoRun", "<presentation id=\"NoRun\"/>");

        assert_eq!(adml.string("NoRun"), Some("Remove Run menu from Start Menu"));
        assert_eq!(adml.string("norun"), None);
        assert_eq!(adml.string("NoRun "), None);
        assert_eq!(adml.window("NoRun"), Some("<presentation id=\"NoRun\"/>"));
        assert_eq!(adml.window("Other"), None);
        assert_eq!(adml.display_name(), "Explorer");
    }

    #[test]
    fn test_tables_are_separate() {
        let adml = AdmlResource::default().with_string("Id", "text");
        assert!(adml.window("Id").is_none());
        assert_eq!(adml.strings().len(), 1);
        assert!(adml.windows().is_empty());
    }
}
