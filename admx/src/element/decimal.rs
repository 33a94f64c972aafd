//! Decimal and long decimal elements

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::DEFAULT_MAX_VALUE;

/// Numeric element constraints
///
/// Shared by `decimal` (REG_DWORD) and `longDecimal` (REG_QWORD) elements;
/// the width is given by the `ElementDefinition` arm holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalElement {
    required: bool,
    min_value: u64,
    max_value: u64,
    store_as_text: bool,
    soft: bool,
}

impl DecimalElement {
    /// Create with schema defaults (0..=9999, optional, stored as a number)
    pub const fn new() -> Self {
        Self {
            required: false,
            min_value: 0,
            max_value: DEFAULT_MAX_VALUE,
            store_as_text: false,
            soft: false,
        }
    }

    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub const fn with_min_value(mut self, min_value: u64) -> Self {
        self.min_value = min_value;
        self
    }

    pub const fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    pub const fn with_store_as_text(mut self, store_as_text: bool) -> Self {
        self.store_as_text = store_as_text;
        self
    }

    pub const fn with_soft(mut self, soft: bool) -> Self {
        self.soft = soft;
        self
    }

    pub const fn required(&self) -> bool {
        self.required
    }

    pub const fn min_value(&self) -> u64 {
        self.min_value
    }

    pub const fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Value is written as REG_SZ instead of a number
    pub const fn store_as_text(&self) -> bool {
        self.store_as_text
    }

    /// Existing registry value is not overwritten
    pub const fn soft(&self) -> bool {
        self.soft
    }

    /// Check if a value lies within the bounds
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

impl Default for DecimalElement {
    fn default() -> Self {
        Self::new()
    }
}
