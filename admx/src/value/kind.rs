//! Value Kinds and Registry Storage Kinds
//!
//! Every value a template declares has an abstract kind, and every kind
//! maps to exactly one registry storage kind:
//!
//! - DeleteValue: the value is removed (no storage)
//! - Decimal32: REG_DWORD
//! - Decimal64: REG_QWORD
//! - Text: REG_SZ
//! - Unspecified: no mapping

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Win32 registry value type codes
pub mod reg_types {
    /// No value type
    pub const REG_NONE: u32 = 0;
    /// Null-terminated string
    pub const REG_SZ: u32 = 1;
    /// Expandable string (with %VARIABLE% references)
    pub const REG_EXPAND_SZ: u32 = 2;
    /// 32-bit little-endian integer
    pub const REG_DWORD: u32 = 4;
    /// Array of null-terminated strings
    pub const REG_MULTI_SZ: u32 = 7;
    /// 64-bit little-endian integer
    pub const REG_QWORD: u32 = 11;
}

/// Abstract value kind declared by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum ValueKind {
    /// Not initialized or not recognized
    #[default]
    Unspecified = 0,
    /// Remove the registry value
    DeleteValue = 1,
    /// 32-bit unsigned integer
    Decimal32 = 2,
    /// 64-bit unsigned integer
    Decimal64 = 3,
    /// String
    Text = 4,
}

impl ValueKind {
    /// Create from raw value, falling back to `Unspecified`
    pub fn from_u32(value: u32) -> Self {
        match value {
            1 => Self::DeleteValue,
            2 => Self::Decimal32,
            3 => Self::Decimal64,
            4 => Self::Text,
            0 => Self::Unspecified,
            other => {
                log::warn!("unrecognized value kind {}, treating as Unspecified", other);
                Self::Unspecified
            }
        }
    }

    /// Registry storage kind this value kind is written as
    pub const fn registry_type(self) -> RegistryStorageKind {
        match self {
            Self::Unspecified => RegistryStorageKind::Unspecified,
            Self::DeleteValue => RegistryStorageKind::None,
            Self::Decimal32 => RegistryStorageKind::DWord,
            Self::Decimal64 => RegistryStorageKind::QWord,
            Self::Text => RegistryStorageKind::String,
        }
    }

    /// Name used in display output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::DeleteValue => "DeleteValue",
            Self::Decimal32 => "Decimal32",
            Self::Decimal64 => "Decimal64",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry storage kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum RegistryStorageKind {
    /// No mapping
    #[default]
    Unspecified = 0,
    /// Nothing is stored; the value is deleted
    None = 1,
    /// REG_DWORD
    DWord = 2,
    /// REG_QWORD
    QWord = 3,
    /// REG_SZ
    String = 4,
}

impl RegistryStorageKind {
    /// Create from raw value, falling back to `Unspecified`
    pub fn from_u32(value: u32) -> Self {
        match value {
            1 => Self::None,
            2 => Self::DWord,
            3 => Self::QWord,
            4 => Self::String,
            _ => Self::Unspecified,
        }
    }

    /// Win32 `REG_*` type code for kinds that store data
    pub const fn registry_type_code(self) -> Option<u32> {
        match self {
            Self::DWord => Some(reg_types::REG_DWORD),
            Self::QWord => Some(reg_types::REG_QWORD),
            Self::String => Some(reg_types::REG_SZ),
            Self::None | Self::Unspecified => None,
        }
    }

    /// Check if writing this kind stores data
    pub const fn stores_data(self) -> bool {
        self.registry_type_code().is_some()
    }

    /// Check if kind is an integer type
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::DWord | Self::QWord)
    }
}
