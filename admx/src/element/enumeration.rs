//! Enum elements
//!
//! An enum element is a drop-down list. Each item pairs a display label with
//! the value written when the item is chosen, and optionally a list of
//! extra registry entries written alongside it.
//!
//! Items keep template order. Labels are not required to be unique; lookup
//! by label returns the first item in display order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::list::has_entries;
use crate::value::{ValueDefinition, ValueDefinitionList};

/// Value written for one enum choice
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumValue {
    value: ValueDefinition,
    value_list: Option<ValueDefinitionList>,
}

impl EnumValue {
    /// Choice that writes only its scalar value
    pub fn new(value: ValueDefinition) -> Self {
        Self { value, value_list: None }
    }

    /// Choice that also writes a list of entries
    pub fn with_value_list(value: ValueDefinition, value_list: ValueDefinitionList) -> Self {
        Self { value, value_list: Some(value_list) }
    }

    pub fn value(&self) -> &ValueDefinition {
        &self.value
    }

    pub fn value_list(&self) -> Option<&ValueDefinitionList> {
        self.value_list.as_ref()
    }

    pub fn has_value_list(&self) -> bool {
        has_entries(self.value_list.as_ref())
    }
}

/// Labelled enum choice
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumItem {
    display_label: String,
    value: EnumValue,
}

impl EnumItem {
    pub fn new(display_label: impl Into<String>, value: EnumValue) -> Self {
        Self {
            display_label: display_label.into(),
            value,
        }
    }

    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    pub fn value(&self) -> &EnumValue {
        &self.value
    }
}

/// Enum element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnumElement {
    required: bool,
    items: Vec<EnumItem>,
}

impl EnumElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Append a choice; display order is insertion order
    pub fn with_item(mut self, display_label: impl Into<String>, value: EnumValue) -> Self {
        self.items.push(EnumItem::new(display_label, value));
        self
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Choices in display order, duplicates included
    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }

    /// Display labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(EnumItem::display_label)
    }

    /// First choice with the given label
    pub fn find(&self, display_label: &str) -> Option<&EnumValue> {
        self.items
            .iter()
            .find(|item| item.display_label == display_label)
            .map(EnumItem::value)
    }

    /// Display index of the first choice writing the given value
    pub fn position_of(&self, value: &ValueDefinition) -> Option<usize> {
        self.items.iter().position(|item| item.value.value == *value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<EnumItem> for EnumElement {
    fn from_iter<I: IntoIterator<Item = EnumItem>>(iter: I) -> Self {
        Self {
            required: false,
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ListEntry;

    #[test]
    fn test_insertion_order_with_repeated_labels() {
        let element = EnumElement::new()
            .with_item("A", EnumValue::new(ValueDefinition::Decimal32(0)))
            .with_item("B", EnumValue::new(ValueDefinition::Decimal32(1)))
            .with_item("C", EnumValue::new(ValueDefinition::Decimal32(2)))
            .with_item("A", EnumValue::new(ValueDefinition::Decimal32(3)));

        let labels: Vec<&str> = element.labels().collect();
        assert_eq!(labels, ["A", "B", "C", "A"]);
        assert_eq!(element.len(), 4);
    }

    #[test]
    fn test_find_returns_first_in_display_order() {
        let element = EnumElement::new()
            .with_item("Same", EnumValue::new(ValueDefinition::text("first")))
            .with_item("Same", EnumValue::new(ValueDefinition::text("second")));

        let found = element.find("Same").map(EnumValue::value);
        assert_eq!(found, Some(&ValueDefinition::text("first")));
        assert!(element.find("Missing").is_none());
    }

    #[test]
    fn test_nested_value_list() {
        let list = ValueDefinitionList::with_default_registry_path(r"Software\Policies\Example\Mode")
            .with_entry(ListEntry::new("", "Extra", ValueDefinition::Decimal32(1)));
        let element = EnumElement::new()
            .with_item("Plain", EnumValue::new(ValueDefinition::Decimal32(0)))
            .with_item("WithList", EnumValue::with_value_list(ValueDefinition::Decimal32(1), list));

        let items = element.items();
        assert!(!items[0].value().has_value_list());
        assert!(items[1].value().has_value_list());
        assert_eq!(element.position_of(&ValueDefinition::Decimal32(1)), Some(1));
    }
}
