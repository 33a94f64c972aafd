//! Value Definitions
//!
//! A value definition is a value kind together with its payload. The payload
//! type is fixed per kind, so a definition whose payload disagrees with its
//! kind cannot be constructed.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::kind::{RegistryStorageKind, ValueKind};

/// Tagged scalar value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum ValueDefinition {
    /// Not initialized or not recognized
    #[default]
    Unspecified,
    /// Remove the registry value
    DeleteValue,
    /// REG_DWORD payload
    Decimal32(u32),
    /// REG_QWORD payload
    Decimal64(u64),
    /// REG_SZ payload
    Text(String),
}

impl ValueDefinition {
    /// Create a string value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Value kind tag
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Unspecified => ValueKind::Unspecified,
            Self::DeleteValue => ValueKind::DeleteValue,
            Self::Decimal32(_) => ValueKind::Decimal32,
            Self::Decimal64(_) => ValueKind::Decimal64,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Registry storage kind this value is written as
    pub const fn registry_type(&self) -> RegistryStorageKind {
        self.kind().registry_type()
    }

    /// Check if applying this value removes the registry value
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::DeleteValue)
    }

    /// Get DWORD payload
    pub fn as_dword(&self) -> Option<u32> {
        match self {
            Self::Decimal32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get QWORD payload
    pub fn as_qword(&self) -> Option<u64> {
        match self {
            Self::Decimal64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get string payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<u32> for ValueDefinition {
    fn from(value: u32) -> Self {
        Self::Decimal32(value)
    }
}

impl From<u64> for ValueDefinition {
    fn from(value: u64) -> Self {
        Self::Decimal64(value)
    }
}

impl From<&str> for ValueDefinition {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for ValueDefinition {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ValueDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : ", self.kind())?;
        match self {
            Self::Unspecified | Self::DeleteValue => Ok(()),
            Self::Decimal32(v) => write!(f, "{}", v),
            Self::Decimal64(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}
