//! Policies
//!
//! A policy is one named setting from an ADMX file that can be enabled or
//! disabled:
//!
//! - **PolicyInfo**: Name, presentation text, registry key, scope
//! - **PolicyValueInfo**: Values, lists, and elements the policy writes
//! - **RegistryScope**: Machine, user, or both
//! - **Write plans**: Registry writes implied by enabling or disabling
//!
//! # Registry Locations
//!
//! ```text
//! class="Machine"  ->  HKEY_LOCAL_MACHINE\<key>   (HKLM:)
//! class="User"     ->  HKEY_CURRENT_USER\<key>    (HKCU:)
//! class="Both"     ->  both of the above, machine first
//! ```

pub mod info;
pub mod plan;
pub mod scope;
pub mod value_info;

pub use info::PolicyInfo;
pub use plan::{PolicyState, RegistryWrite};
pub use scope::{drive_names, root_key_names, RegistryScope};
pub use value_info::{PolicyValueInfo, ValueCapabilities};
