//! Validation Configuration
//!
//! The model accepts whatever the loader builds. Callers that want to reject
//! inconsistent definitions run validation with one of these configurations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy model validation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationConfig {
    /// Reject policies with no scalar value, list, or element
    pub require_capability: bool,
    /// Reject decimal elements whose minimum exceeds their maximum
    pub check_ranges: bool,
    /// Reject enum elements with no items
    pub reject_empty_enums: bool,
    /// Reject policies where two elements share an id
    pub check_element_ids: bool,
    /// Log validation failures
    pub log_failures: bool,
}

impl ValidationConfig {
    pub const fn new() -> Self {
        Self {
            require_capability: true,
            check_ranges: true,
            reject_empty_enums: false,
            check_element_ids: true,
            log_failures: true,
        }
    }

    /// Every check enabled
    pub const fn strict() -> Self {
        Self {
            require_capability: true,
            check_ranges: true,
            reject_empty_enums: true,
            check_element_ids: true,
            log_failures: true,
        }
    }

    /// Every check disabled
    pub const fn permissive() -> Self {
        Self {
            require_capability: false,
            check_ranges: false,
            reject_empty_enums: false,
            check_element_ids: false,
            log_failures: false,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}
