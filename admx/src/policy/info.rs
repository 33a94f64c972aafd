//! Policy identity

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::scope::RegistryScope;
use super::value_info::PolicyValueInfo;
use crate::catalog::FileId;
use crate::element::ValueDefinitionElement;

/// Policy definition
///
/// Owns its value information. The defining ADMX file is referenced by
/// [`FileId`] and resolved through the catalog that holds the file table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolicyInfo {
    file: FileId,
    name: String,
    display_name: String,
    explain_text: String,
    registry_scope: RegistryScope,
    registry_path: String,
    value_info: PolicyValueInfo,
}

impl PolicyInfo {
    /// Create a policy; display name and explain text start empty
    pub fn new(
        file: FileId,
        name: impl Into<String>,
        registry_scope: RegistryScope,
        registry_path: impl Into<String>,
        value_info: PolicyValueInfo,
    ) -> Self {
        Self {
            file,
            name: name.into(),
            display_name: String::new(),
            explain_text: String::new(),
            registry_scope,
            registry_path: registry_path.into(),
            value_info,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_explain_text(mut self, explain_text: impl Into<String>) -> Self {
        self.explain_text = explain_text.into();
        self
    }

    /// Defining ADMX file
    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn explain_text(&self) -> &str {
        &self.explain_text
    }

    pub fn registry_scope(&self) -> RegistryScope {
        self.registry_scope
    }

    /// Registry key path, relative to the root key
    pub fn registry_path(&self) -> &str {
        &self.registry_path
    }

    pub fn value_info(&self) -> &PolicyValueInfo {
        &self.value_info
    }

    /// Root key names for the policy's scope
    pub fn root_keys(&self) -> Vec<&'static str> {
        self.registry_scope.root_keys()
    }

    /// PowerShell drive aliases for the policy's scope
    pub fn registry_drives(&self) -> Vec<&'static str> {
        self.registry_scope.registry_drives()
    }

    /// Key path an element is written under
    ///
    /// Elements without a key of their own inherit the policy's key.
    pub fn element_registry_path<'a>(&'a self, element: &'a ValueDefinitionElement) -> &'a str {
        if element.registry_path().is_empty() {
            &self.registry_path
        } else {
            element.registry_path()
        }
    }
}
