//! Policy categories

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category declared by an ADMX file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoryInfo {
    name: String,
    display_name: String,
}

impl CategoryInfo {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
