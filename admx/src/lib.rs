//! ADMX Policy Value Model
//!
//! A typed model of Windows Group Policy administrative templates (ADMX
//! schema files plus their ADML string resources), as consumed by tooling
//! that applies, inspects, or renders policy values against a registry.
//!
//! # Subsystems
//!
//! - **value** - Value definitions, registry storage kinds, value lists
//! - **element** - Per-element policy parameters (boolean, decimal, text, enum, list)
//! - **policy** - Policy identity, registry scope, value aggregation, write plans
//! - **template** - ADMX file, category, and ADML resource metadata
//! - **catalog** - Policies aggregated across loaded template files
//! - **config** - Validation configuration
//! - **error** - Model error type
//!
//! # Lifecycle
//!
//! The model is built in one pass by an external ADMX/ADML loader, then read
//! without further mutation:
//!
//! ```text
//! loader ──► AdmxFileInfo ──► PolicyCatalog::add_file ──► FileId
//!        └─► PolicyInfo(FileId, PolicyValueInfo) ──► PolicyCatalog::add_policy
//!
//! applier ◄── PolicyInfo::registry_writes / root_keys / value_info()
//! ```
//!
//! # Registry Storage Mapping
//!
//! | Value kind  | Storage kind | REG_* code |
//! |-------------|--------------|------------|
//! | DeleteValue | None         | -          |
//! | Decimal32   | DWord        | 4          |
//! | Decimal64   | QWord        | 11         |
//! | Text        | String       | 1          |
//! | Unspecified | Unspecified  | -          |

#![allow(clippy::new_without_default)]

pub mod catalog;
pub mod config;
pub mod element;
pub mod error;
pub mod policy;
pub mod template;
pub mod value;

pub use catalog::{FileId, PolicyCatalog};
pub use config::ValidationConfig;
pub use element::{
    BooleanElement,
    DecimalElement,
    ElementDefinition,
    ElementKind,
    EnumElement,
    EnumItem,
    EnumValue,
    ListElement,
    MultiTextElement,
    TextElement,
    ValueDefinitionElement,
    DEFAULT_MAX_LENGTH,
    DEFAULT_MAX_VALUE,
};
pub use error::PolicyModelError;
pub use policy::{
    PolicyInfo,
    PolicyState,
    PolicyValueInfo,
    RegistryScope,
    RegistryWrite,
    ValueCapabilities,
};
pub use template::{AdmlResource, AdmxFileInfo, CategoryInfo};
pub use value::{
    ListEntry,
    RegistryStorageKind,
    ValueDefinition,
    ValueDefinitionList,
    ValueKind,
};
