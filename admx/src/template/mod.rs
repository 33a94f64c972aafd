//! Template Metadata
//!
//! Presentation metadata from the template files themselves:
//!
//! - **AdmxFileInfo**: One ADMX file and the categories it declares
//! - **CategoryInfo**: A category node
//! - **AdmlResource**: Localized strings and presentation windows from an ADML file
//!
//! Localized text is resolved by the loader before it builds the model;
//! these types only carry the results.

pub mod adml;
pub mod admx;
pub mod category;

pub use adml::AdmlResource;
pub use admx::AdmxFileInfo;
pub use category::CategoryInfo;
