//! Registry scope
//!
//! A policy applies to the machine hive, the user hive, or both. The scope
//! determines which root keys (and PowerShell drive aliases) its values are
//! written under.

use bitflags::bitflags;

bitflags! {
    /// Registry roots a policy applies to
    ///
    /// The empty set is the unspecified scope.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RegistryScope: u32 {
        /// HKEY_LOCAL_MACHINE (ADMX class "Machine")
        const LOCAL_MACHINE = 0x0001;
        /// HKEY_CURRENT_USER (ADMX class "User")
        const CURRENT_USER = 0x0002;
        /// Both roots (ADMX class "Both")
        const BOTH = Self::LOCAL_MACHINE.bits() | Self::CURRENT_USER.bits();
    }
}

/// Registry root key names
pub mod root_key_names {
    pub const HKLM: &str = "HKEY_LOCAL_MACHINE";
    pub const HKCU: &str = "HKEY_CURRENT_USER";
}

/// PowerShell registry drive aliases
pub mod drive_names {
    pub const HKLM: &str = "HKLM:";
    pub const HKCU: &str = "HKCU:";
}

impl RegistryScope {
    /// Unspecified scope
    pub const UNSPECIFIED: Self = Self::empty();

    /// Create from raw bits, keeping bits that name no root
    pub const fn from_u32(value: u32) -> Self {
        Self::from_bits_retain(value)
    }

    /// Scope for an ADMX policy `class` attribute
    pub fn from_class_name(class: &str) -> Self {
        match class {
            "Machine" => Self::LOCAL_MACHINE,
            "User" => Self::CURRENT_USER,
            "Both" => Self::BOTH,
            other => {
                log::warn!("unrecognized policy class '{}'", other);
                Self::UNSPECIFIED
            }
        }
    }

    /// Root key names, machine first
    ///
    /// Unspecified or unrecognized scopes yield a single empty name so
    /// callers can always index `[0]`.
    pub fn root_keys(&self) -> Vec<&'static str> {
        self.select(root_key_names::HKLM, root_key_names::HKCU)
    }

    /// PowerShell drive aliases, machine first
    ///
    /// Same shape as [`root_keys`](Self::root_keys).
    pub fn registry_drives(&self) -> Vec<&'static str> {
        self.select(drive_names::HKLM, drive_names::HKCU)
    }

    fn select(&self, machine: &'static str, user: &'static str) -> Vec<&'static str> {
        match self.bits() {
            0x0001 => vec![machine],
            0x0002 => vec![user],
            0x0003 => vec![machine, user],
            other => {
                log::trace!("registry scope {:#x} maps to no root", other);
                vec![""]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_is_machine_then_user() {
        assert_eq!(RegistryScope::BOTH, RegistryScope::LOCAL_MACHINE | RegistryScope::CURRENT_USER);
        assert_eq!(RegistryScope::BOTH.root_keys(), ["HKEY_LOCAL_MACHINE", "HKEY_CURRENT_USER"]);
        assert_eq!(RegistryScope::BOTH.registry_drives(), ["HKLM:", "HKCU:"]);
    }

    #[test]
    fn test_single_roots() {
        assert_eq!(RegistryScope::LOCAL_MACHINE.root_keys(), ["HKEY_LOCAL_MACHINE"]);
        assert_eq!(RegistryScope::CURRENT_USER.registry_drives(), ["HKCU:"]);
    }

    #[test]
    fn test_unspecified_yields_empty_placeholder() {
        assert_eq!(RegistryScope::UNSPECIFIED.root_keys(), [""]);
        assert_eq!(RegistryScope::default().registry_drives(), [""]);
        assert_eq!(RegistryScope::from_u32(0x10).root_keys(), [""]);
        assert_eq!(RegistryScope::from_u32(0x13).registry_drives(), [""]);
    }

    #[test]
    fn test_from_class_name() {
        assert_eq!(RegistryScope::from_class_name("Machine"), RegistryScope::LOCAL_MACHINE);
        assert_eq!(RegistryScope::from_class_name("User"), RegistryScope::CURRENT_USER);
        assert_eq!(RegistryScope::from_class_name("Both"), RegistryScope::BOTH);
        assert_eq!(RegistryScope::from_class_name("machine"), RegistryScope::UNSPECIFIED);
    }
}
