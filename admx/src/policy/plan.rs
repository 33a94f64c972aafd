//! Registry write plans
//!
//! Projects a policy's enabled or disabled state onto the registry writes
//! its scalar value and list imply. Nothing is written here; the plan is
//! handed to whatever layer owns registry I/O.
//!
//! # Ordering
//!
//! For each root key (machine first):
//! 1. The scalar value for the state, under the policy's key
//! 2. Each entry of the state's list, in list order
//!
//! Element values depend on administrator input and are not planned.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::info::PolicyInfo;
use crate::value::{RegistryStorageKind, ValueDefinition, ValueDefinitionList};

/// Policy state to plan for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PolicyState {
    Enabled,
    Disabled,
}

/// One planned registry write
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RegistryWrite {
    /// Root key name (empty for an unspecified scope)
    pub root_key: &'static str,
    /// Key path below the root
    pub registry_path: String,
    /// Value name
    pub value_name: String,
    /// Value to store, or `DeleteValue`
    pub value: ValueDefinition,
}

impl RegistryWrite {
    /// Storage kind of the write
    pub fn registry_type(&self) -> RegistryStorageKind {
        self.value.registry_type()
    }
}

impl PolicyInfo {
    /// Registry writes for the scalar and list groups of a state
    pub fn registry_writes(&self, state: PolicyState) -> Vec<RegistryWrite> {
        let info = self.value_info();
        let (scalar, list) = match state {
            PolicyState::Enabled => (info.enabled_value(), info.enabled_list()),
            PolicyState::Disabled => (info.disabled_value(), info.disabled_list()),
        };

        let mut writes = Vec::new();
        for root_key in self.root_keys() {
            if let Some(value) = scalar {
                writes.push(RegistryWrite {
                    root_key,
                    registry_path: self.registry_path().into(),
                    value_name: info.registry_value_name().into(),
                    value: value.clone(),
                });
            }
            if let Some(list) = list {
                self.push_list_writes(root_key, list, &mut writes);
            }
        }

        log::debug!(
            "policy '{}' {:?}: {} registry write(s) planned",
            self.name(),
            state,
            writes.len()
        );
        writes
    }

    fn push_list_writes(&self, root_key: &'static str, list: &ValueDefinitionList, writes: &mut Vec<RegistryWrite>) {
        for entry in list {
            let mut path = list.effective_path(entry);
            if path.is_empty() {
                path = self.registry_path();
            }
            writes.push(RegistryWrite {
                root_key,
                registry_path: path.into(),
                value_name: entry.value_name().into(),
                value: entry.value().clone(),
            });
        }
    }
}
