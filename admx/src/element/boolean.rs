//! Boolean elements
//!
//! A check box writes its true or false value. Either state may also carry
//! a list of additional entries; when both are present, both are applied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::list::has_entries;
use crate::value::{ValueDefinition, ValueDefinitionList};

/// Boolean element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BooleanElement {
    true_value: Option<ValueDefinition>,
    false_value: Option<ValueDefinition>,
    true_list: Option<ValueDefinitionList>,
    false_list: Option<ValueDefinitionList>,
}

impl BooleanElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_true_value(mut self, value: ValueDefinition) -> Self {
        self.true_value = Some(value);
        self
    }

    pub fn with_false_value(mut self, value: ValueDefinition) -> Self {
        self.false_value = Some(value);
        self
    }

    pub fn with_true_list(mut self, list: ValueDefinitionList) -> Self {
        self.true_list = Some(list);
        self
    }

    pub fn with_false_list(mut self, list: ValueDefinitionList) -> Self {
        self.false_list = Some(list);
        self
    }

    pub fn true_value(&self) -> Option<&ValueDefinition> {
        self.true_value.as_ref()
    }

    pub fn false_value(&self) -> Option<&ValueDefinition> {
        self.false_value.as_ref()
    }

    pub fn true_list(&self) -> Option<&ValueDefinitionList> {
        self.true_list.as_ref()
    }

    pub fn false_list(&self) -> Option<&ValueDefinitionList> {
        self.false_list.as_ref()
    }

    pub fn has_true_list(&self) -> bool {
        has_entries(self.true_list.as_ref())
    }

    pub fn has_false_list(&self) -> bool {
        has_entries(self.false_list.as_ref())
    }

    /// Scalar value for a check box state
    pub fn value_for(&self, checked: bool) -> Option<&ValueDefinition> {
        if checked {
            self.true_value()
        } else {
            self.false_value()
        }
    }

    /// List for a check box state, if present and non-empty
    pub fn list_for(&self, checked: bool) -> Option<&ValueDefinitionList> {
        let list = if checked { self.true_list() } else { self.false_list() };
        list.filter(|l| !l.is_empty())
    }
}
