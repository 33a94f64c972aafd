//! Policy Values
//!
//! The scalar and list values a policy writes when it is enabled or
//! disabled:
//!
//! - **ValueKind**: Abstract value tag as declared by the template
//! - **RegistryStorageKind**: Concrete registry storage the tag maps to
//! - **ValueDefinition**: A tagged scalar carrying its typed payload
//! - **ValueDefinitionList**: Ordered registry entries for list-valued policies
//!
//! # Template Forms
//!
//! ```text
//! <enabledValue><decimal value="1"/></enabledValue>        Decimal32(1)
//! <disabledValue><delete/></disabledValue>                 DeleteValue
//! <enabledValue><string>on</string></enabledValue>         Text("on")
//! <enabledList defaultKey="...">                           ValueDefinitionList
//!   <item key="..." valueName="..."><value>...</value></item>
//! </enabledList>
//! ```

pub mod definition;
pub mod kind;
pub mod list;

pub use definition::ValueDefinition;
pub use kind::{RegistryStorageKind, ValueKind, reg_types};
pub use list::{ListEntry, ValueDefinitionList};
