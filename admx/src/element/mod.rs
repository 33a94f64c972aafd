//! Policy Elements
//!
//! Elements are the extra parameters a policy exposes while it is enabled.
//! Each one is a separate registry value with its own constraints:
//!
//! - **Boolean**: Check box writing a true or false value (and optional lists)
//! - **Decimal32 / Decimal64**: Numeric entry bounded by min/max
//! - **Text**: Single-line string
//! - **MultiText**: Multi-line string (REG_MULTI_SZ)
//! - **Enum**: Drop-down of labelled values
//! - **List**: Caller-supplied set of values written under one key
//!
//! The set is closed. It mirrors the element grammar of the ADMX schema.
//!
//! # Identity
//!
//! ```text
//! <decimal id="Delay" key="Software\Policies\X" valueName="DelaySec" maxValue="600"/>
//!          ^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^
//!              id         registry_path          registry_value_name
//! ```
//!
//! An empty registry path means the element is written under its policy's key.

pub mod boolean;
pub mod decimal;
pub mod enumeration;
pub mod list;
pub mod text;

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::error::PolicyModelError;

pub use boolean::BooleanElement;
pub use decimal::DecimalElement;
pub use enumeration::{EnumElement, EnumItem, EnumValue};
pub use list::ListElement;
pub use text::{MultiTextElement, TextElement};

/// Default decimal element maximum
pub const DEFAULT_MAX_VALUE: u64 = 9999;

/// Default text element maximum length (characters)
pub const DEFAULT_MAX_LENGTH: u32 = 1023;

/// Element kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum ElementKind {
    /// Not initialized or not recognized
    #[default]
    Unspecified = 0,
    Boolean = 1,
    Decimal32 = 2,
    Decimal64 = 3,
    Text = 4,
    MultiText = 5,
    Enum = 6,
    List = 7,
}

impl ElementKind {
    /// Create from raw value, falling back to `Unspecified`
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Boolean,
            2 => Self::Decimal32,
            3 => Self::Decimal64,
            4 => Self::Text,
            5 => Self::MultiText,
            6 => Self::Enum,
            7 => Self::List,
            other => {
                log::warn!("unrecognized element kind {}, treating as Unspecified", other);
                Self::Unspecified
            }
        }
    }

    /// ADMX element tag name
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Boolean => "boolean",
            Self::Decimal32 => "decimal",
            Self::Decimal64 => "longDecimal",
            Self::Text => "text",
            Self::MultiText => "multiText",
            Self::Enum => "enum",
            Self::List => "list",
        }
    }
}

/// Kind-specific element definition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ElementDefinition {
    Boolean(BooleanElement),
    Decimal32(DecimalElement),
    Decimal64(DecimalElement),
    Text(TextElement),
    MultiText(MultiTextElement),
    Enum(EnumElement),
    List(ListElement),
}

impl ElementDefinition {
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Boolean(_) => ElementKind::Boolean,
            Self::Decimal32(_) => ElementKind::Decimal32,
            Self::Decimal64(_) => ElementKind::Decimal64,
            Self::Text(_) => ElementKind::Text,
            Self::MultiText(_) => ElementKind::MultiText,
            Self::Enum(_) => ElementKind::Enum,
            Self::List(_) => ElementKind::List,
        }
    }
}

/// Policy element: shared identity plus its kind-specific definition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueDefinitionElement {
    id: String,
    registry_path: String,
    registry_value_name: String,
    definition: ElementDefinition,
}

impl ValueDefinitionElement {
    /// Create an element
    pub fn new(
        id: impl Into<String>,
        registry_path: impl Into<String>,
        registry_value_name: impl Into<String>,
        definition: ElementDefinition,
    ) -> Self {
        Self {
            id: id.into(),
            registry_path: registry_path.into(),
            registry_value_name: registry_value_name.into(),
            definition,
        }
    }

    /// Element id (unique within its policy)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Registry key path (empty means the policy's key)
    pub fn registry_path(&self) -> &str {
        &self.registry_path
    }

    /// Registry value name
    pub fn registry_value_name(&self) -> &str {
        &self.registry_value_name
    }

    /// Kind-specific definition
    pub fn definition(&self) -> &ElementDefinition {
        &self.definition
    }

    /// Element kind
    pub const fn kind(&self) -> ElementKind {
        self.definition.kind()
    }

    /// Whether the element must be filled in when the policy is enabled
    ///
    /// Boolean and list elements have no required flag.
    pub fn is_required(&self) -> bool {
        match &self.definition {
            ElementDefinition::Decimal32(d) | ElementDefinition::Decimal64(d) => d.required(),
            ElementDefinition::Text(t) => t.required(),
            ElementDefinition::MultiText(m) => m.required(),
            ElementDefinition::Enum(e) => e.required(),
            ElementDefinition::Boolean(_) | ElementDefinition::List(_) => false,
        }
    }

    /// Check the element's constraints for internal consistency
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), PolicyModelError> {
        let result = match &self.definition {
            ElementDefinition::Decimal32(d) => check_decimal(&self.id, d, Some(u32::MAX as u64), config),
            ElementDefinition::Decimal64(d) => check_decimal(&self.id, d, None, config),
            ElementDefinition::Enum(e) if config.reject_empty_enums && e.is_empty() => {
                Err(PolicyModelError::EmptyEnum { id: self.id.clone() })
            }
            _ => Ok(()),
        };

        if let Err(ref err) = result {
            if config.log_failures {
                log::warn!("element '{}' ({:?}) failed validation: {}", self.id, self.kind(), err);
            }
        }
        result
    }
}

fn check_decimal(
    id: &str,
    decimal: &DecimalElement,
    limit: Option<u64>,
    config: &ValidationConfig,
) -> Result<(), PolicyModelError> {
    if !config.check_ranges {
        return Ok(());
    }
    if let Some(limit) = limit {
        for bound in [decimal.min_value(), decimal.max_value()] {
            if bound > limit {
                return Err(PolicyModelError::ValueOutOfRange { id: id.into(), value: bound });
            }
        }
    }
    if decimal.min_value() > decimal.max_value() {
        return Err(PolicyModelError::InvalidRange {
            id: id.into(),
            min: decimal.min_value(),
            max: decimal.max_value(),
        });
    }
    Ok(())
}

/// Validate every element of one policy, including id uniqueness
pub(crate) fn validate_elements(
    elements: &[ValueDefinitionElement],
    config: &ValidationConfig,
) -> Result<(), PolicyModelError> {
    let mut seen = BTreeSet::new();
    for element in elements {
        if config.check_element_ids && !seen.insert(element.id()) {
            if config.log_failures {
                log::warn!("duplicate element id '{}'", element.id());
            }
            return Err(PolicyModelError::DuplicateElementId { id: element.id.clone() });
        }
        element.validate(config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ListEntry, ValueDefinition, ValueDefinitionList};

    fn decimal(id: &str, min: u64, max: u64) -> ValueDefinitionElement {
        ValueDefinitionElement::new(
            id,
            "",
            id,
            ElementDefinition::Decimal32(DecimalElement::new().with_min_value(min).with_max_value(max)),
        )
    }

    #[test]
    fn test_kind_discriminant() {
        let elements = [
            ElementDefinition::Boolean(BooleanElement::new()),
            ElementDefinition::Decimal32(DecimalElement::new()),
            ElementDefinition::Decimal64(DecimalElement::new()),
            ElementDefinition::Text(TextElement::new()),
            ElementDefinition::MultiText(MultiTextElement::new()),
            ElementDefinition::Enum(EnumElement::new()),
            ElementDefinition::List(ListElement::new()),
        ];
        for (code, definition) in (1u32..).zip(elements) {
            let element = ValueDefinitionElement::new("e", "", "v", definition);
            assert_eq!(element.kind() as u32, code);
            assert_eq!(ElementKind::from_u32(code), element.kind());
        }
        assert_eq!(ElementKind::from_u32(8), ElementKind::Unspecified);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(ElementKind::Decimal64.tag_name(), "longDecimal");
        assert_eq!(ElementKind::MultiText.tag_name(), "multiText");
    }

    #[test]
    fn test_identity_fields() {
        let element = ValueDefinitionElement::new(
            "Delay",
            r"Software\Policies\Example",
            "DelaySec",
            ElementDefinition::Decimal64(DecimalElement::new().with_required(true)),
        );
        assert_eq!(element.id(), "Delay");
        assert_eq!(element.registry_path(), r"Software\Policies\Example");
        assert_eq!(element.registry_value_name(), "DelaySec");
        assert!(element.is_required());
    }

    #[test]
    fn test_boolean_element_lists() {
        let true_list = ValueDefinitionList::new()
            .with_entry(ListEntry::new(r"Software\A", "One", ValueDefinition::Decimal32(1)))
            .with_entry(ListEntry::new(r"Software\A", "Two", ValueDefinition::Decimal32(2)));
        let boolean = BooleanElement::new()
            .with_true_value(ValueDefinition::Decimal32(1))
            .with_false_value(ValueDefinition::Decimal32(0))
            .with_true_list(true_list);
        let element = ValueDefinitionElement::new("Toggle", "", "Toggle", ElementDefinition::Boolean(boolean));

        let ElementDefinition::Boolean(b) = element.definition() else {
            panic!("expected boolean element");
        };
        assert!(b.has_true_list());
        assert!(!b.has_false_list());
        assert!(!element.is_required());
    }

    #[test]
    fn test_validate_ranges() {
        let config = ValidationConfig::new();
        assert!(decimal("ok", 1, 10).validate(&config).is_ok());
        assert_eq!(
            decimal("bad", 10, 1).validate(&config),
            Err(PolicyModelError::InvalidRange { id: "bad".into(), min: 10, max: 1 })
        );
        assert_eq!(
            decimal("wide", 0, u64::from(u32::MAX) + 1).validate(&config),
            Err(PolicyModelError::ValueOutOfRange { id: "wide".into(), value: u64::from(u32::MAX) + 1 })
        );
        assert!(decimal("bad", 10, 1).validate(&ValidationConfig::permissive()).is_ok());
    }

    #[test]
    fn test_validate_empty_enum_only_when_strict() {
        let element = ValueDefinitionElement::new("Mode", "", "Mode", ElementDefinition::Enum(EnumElement::new()));
        assert!(element.validate(&ValidationConfig::new()).is_ok());
        assert_eq!(
            element.validate(&ValidationConfig::strict()),
            Err(PolicyModelError::EmptyEnum { id: "Mode".into() })
        );
    }

    #[test]
    fn test_duplicate_element_ids() {
        let elements = [decimal("A", 0, 1), decimal("B", 0, 1), decimal("A", 0, 1)];
        assert_eq!(
            validate_elements(&elements, &ValidationConfig::new()),
            Err(PolicyModelError::DuplicateElementId { id: "A".into() })
        );
        assert!(validate_elements(&elements, &ValidationConfig::permissive()).is_ok());
    }
}
