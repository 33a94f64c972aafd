//! Policy value aggregation
//!
//! Everything a policy writes, grouped three ways:
//!
//! - **Scalar**: one value each for the enabled and disabled states
//! - **List**: a list of entries each for the enabled and disabled states
//! - **Elements**: parameters configured while the policy is enabled
//!
//! Groups are independent; any combination may be populated.

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::element::{validate_elements, ValueDefinitionElement};
use crate::error::PolicyModelError;
use crate::value::list::has_entries;
use crate::value::{ValueDefinition, ValueDefinitionList};

bitflags! {
    /// Populated capability groups of a policy value
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ValueCapabilities: u8 {
        /// Enabled and/or disabled scalar value
        const SCALAR = 0x01;
        /// Non-empty enabled and/or disabled list
        const LIST = 0x02;
        /// Non-empty element set
        const ELEMENTS = 0x04;
    }
}

/// Policy value information
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolicyValueInfo {
    registry_value_name: String,
    enabled_value: Option<ValueDefinition>,
    disabled_value: Option<ValueDefinition>,
    enabled_list: Option<ValueDefinitionList>,
    disabled_list: Option<ValueDefinitionList>,
    elements: Option<Vec<ValueDefinitionElement>>,
}

impl PolicyValueInfo {
    /// Create with only a registry value name
    pub fn new(registry_value_name: impl Into<String>) -> Self {
        Self {
            registry_value_name: registry_value_name.into(),
            ..Self::default()
        }
    }

    /// Set the scalar enabled and disabled values
    pub fn with_registry_value(
        mut self,
        enabled_value: Option<ValueDefinition>,
        disabled_value: Option<ValueDefinition>,
    ) -> Self {
        self.enabled_value = enabled_value;
        self.disabled_value = disabled_value;
        self
    }

    pub fn with_enabled_list(mut self, list: ValueDefinitionList) -> Self {
        self.enabled_list = Some(list);
        self
    }

    pub fn with_disabled_list(mut self, list: ValueDefinitionList) -> Self {
        self.disabled_list = Some(list);
        self
    }

    pub fn with_elements(mut self, elements: Vec<ValueDefinitionElement>) -> Self {
        self.elements = Some(elements);
        self
    }

    /// Registry value name used by the scalar values
    pub fn registry_value_name(&self) -> &str {
        &self.registry_value_name
    }

    pub fn enabled_value(&self) -> Option<&ValueDefinition> {
        self.enabled_value.as_ref()
    }

    pub fn disabled_value(&self) -> Option<&ValueDefinition> {
        self.disabled_value.as_ref()
    }

    pub fn enabled_list(&self) -> Option<&ValueDefinitionList> {
        self.enabled_list.as_ref()
    }

    pub fn disabled_list(&self) -> Option<&ValueDefinitionList> {
        self.disabled_list.as_ref()
    }

    /// Elements in template order (empty when none are defined)
    pub fn elements(&self) -> &[ValueDefinitionElement] {
        self.elements.as_deref().unwrap_or(&[])
    }

    pub fn has_enabled_list(&self) -> bool {
        has_entries(self.enabled_list.as_ref())
    }

    pub fn has_disabled_list(&self) -> bool {
        has_entries(self.disabled_list.as_ref())
    }

    pub fn has_elements(&self) -> bool {
        self.elements.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Element with the given id
    pub fn element(&self, id: &str) -> Option<&ValueDefinitionElement> {
        self.elements().iter().find(|e| e.id() == id)
    }

    /// Populated capability groups
    pub fn capabilities(&self) -> ValueCapabilities {
        let mut caps = ValueCapabilities::empty();
        if self.enabled_value.is_some() || self.disabled_value.is_some() {
            caps |= ValueCapabilities::SCALAR;
        }
        if self.has_enabled_list() || self.has_disabled_list() {
            caps |= ValueCapabilities::LIST;
        }
        if self.has_elements() {
            caps |= ValueCapabilities::ELEMENTS;
        }
        caps
    }

    /// Check the value information for internal consistency
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), PolicyModelError> {
        if config.require_capability && self.capabilities().is_empty() {
            if config.log_failures {
                log::warn!("policy value '{}' has no capability", self.registry_value_name);
            }
            return Err(PolicyModelError::MissingCapability {
                value_name: self.registry_value_name.clone(),
            });
        }
        validate_elements(self.elements(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{DecimalElement, ElementDefinition};
    use crate::value::{ListEntry, RegistryStorageKind};

    fn one_entry() -> ValueDefinitionList {
        ValueDefinitionList::new().with_entry(ListEntry::new("", "1", ValueDefinition::text("x")))
    }

    #[test]
    fn test_dword_enables_delete_disables() {
        let info = PolicyValueInfo::new("NoRun")
            .with_registry_value(Some(ValueDefinition::Decimal32(1)), Some(ValueDefinition::DeleteValue));

        assert_eq!(info.registry_value_name(), "NoRun");
        assert_eq!(info.enabled_value().map(ValueDefinition::registry_type), Some(RegistryStorageKind::DWord));
        assert_eq!(info.disabled_value().map(ValueDefinition::registry_type), Some(RegistryStorageKind::None));
        assert_eq!(info.capabilities(), ValueCapabilities::SCALAR);
    }

    #[test]
    fn test_has_list_requires_entries() {
        let absent = PolicyValueInfo::new("v");
        assert!(!absent.has_enabled_list());
        assert!(!absent.has_disabled_list());
        assert!(!absent.has_elements());

        let empty = PolicyValueInfo::new("v")
            .with_enabled_list(ValueDefinitionList::new())
            .with_disabled_list(ValueDefinitionList::new())
            .with_elements(Vec::new());
        assert!(empty.enabled_list().is_some());
        assert!(!empty.has_enabled_list());
        assert!(!empty.has_disabled_list());
        assert!(!empty.has_elements());
        assert!(empty.capabilities().is_empty());

        let populated = PolicyValueInfo::new("v").with_enabled_list(one_entry());
        assert!(populated.has_enabled_list());
        assert!(!populated.has_disabled_list());
        assert_eq!(populated.capabilities(), ValueCapabilities::LIST);
    }

    #[test]
    fn test_groups_are_not_exclusive() {
        let element = ValueDefinitionElement::new(
            "Delay",
            "",
            "Delay",
            ElementDefinition::Decimal32(DecimalElement::new()),
        );
        let info = PolicyValueInfo::new("Enabled")
            .with_registry_value(Some(ValueDefinition::Decimal32(1)), None)
            .with_disabled_list(one_entry())
            .with_elements(vec![element]);

        assert_eq!(info.capabilities(), ValueCapabilities::all());
        assert_eq!(info.element("Delay").map(ValueDefinitionElement::id), Some("Delay"));
        assert!(info.element("Other").is_none());
    }

    #[test]
    fn test_validate_missing_capability() {
        let info = PolicyValueInfo::new("Orphan");
        assert_eq!(
            info.validate(&ValidationConfig::new()),
            Err(PolicyModelError::MissingCapability { value_name: "Orphan".into() })
        );
        assert!(info.validate(&ValidationConfig::permissive()).is_ok());
    }

    #[test]
    fn test_validate_checks_elements() {
        let bad = ValueDefinitionElement::new(
            "Range",
            "",
            "Range",
            ElementDefinition::Decimal64(DecimalElement::new().with_min_value(100).with_max_value(1)),
        );
        let info = PolicyValueInfo::new("v").with_elements(vec![bad]);
        assert!(matches!(
            info.validate(&ValidationConfig::new()),
            Err(PolicyModelError::InvalidRange { min: 100, max: 1, .. })
        ));
    }
}
