//! Policy model errors

use thiserror::Error;

use crate::catalog::FileId;

/// Policy model error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyModelError {
    /// Policy has no scalar value, list, or element
    #[error("policy value '{value_name}' defines no enabled/disabled value, list, or element")]
    MissingCapability { value_name: String },

    /// Decimal element minimum exceeds maximum
    #[error("element '{id}': minimum {min} exceeds maximum {max}")]
    InvalidRange { id: String, min: u64, max: u64 },

    /// Decimal32 element bound does not fit in a DWORD
    #[error("element '{id}': bound {value} does not fit in a 32-bit value")]
    ValueOutOfRange { id: String, value: u64 },

    /// Enum element has no items
    #[error("enum element '{id}' has no items")]
    EmptyEnum { id: String },

    /// Two elements of one policy share an id
    #[error("duplicate element id '{id}'")]
    DuplicateElementId { id: String },

    /// Policy references a file that is not in the catalog
    #[error("unknown ADMX file {0:?}")]
    UnknownFile(FileId),
}

impl PolicyModelError {
    /// Stable numeric error code
    pub fn code(&self) -> u32 {
        match self {
            Self::MissingCapability { .. } => 0x80072101,
            Self::InvalidRange { .. } => 0x80072102,
            Self::ValueOutOfRange { .. } => 0x80072103,
            Self::EmptyEnum { .. } => 0x80072104,
            Self::DuplicateElementId { .. } => 0x80072105,
            Self::UnknownFile(_) => 0x80072106,
        }
    }
}
