//! ADMX file information

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::category::CategoryInfo;

/// ADMX file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdmxFileInfo {
    name: String,
    display_name: String,
    description: String,
    categories: Vec<CategoryInfo>,
}

impl AdmxFileInfo {
    /// Create from the file name (e.g. `WindowsExplorer.admx`)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a category; declaration order is kept
    pub fn with_category(mut self, category: CategoryInfo) -> Self {
        self.categories.push(category);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Category with the given name
    pub fn category(&self, name: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for AdmxFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_file_name() {
        let file = AdmxFileInfo::new("WindowsExplorer.admx")
            .with_display_name("Windows Explorer")
            .with_description("Explorer policies");
        assert_eq!(file.to_string(), "WindowsExplorer.admx");
        assert_eq!(file.display_name(), "Windows Explorer");
        assert_eq!(file.description(), "Explorer policies");
    }

    #[test]
    fn test_categories_keep_order() {
        let file = AdmxFileInfo::new("inetres.admx")
            .with_category(CategoryInfo::new("InternetExplorer", "Internet Explorer"))
            .with_category(CategoryInfo::new("Security", "Security Features"));

        let names: Vec<&str> = file.categories().iter().map(CategoryInfo::name).collect();
        assert_eq!(names, ["InternetExplorer", "Security"]);
        assert_eq!(file.category("Security").map(CategoryInfo::display_name), Some("Security Features"));
        assert!(file.category("Missing").is_none());
    }
}
