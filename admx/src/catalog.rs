//! Policy Catalog
//!
//! Aggregates the policies of every loaded ADMX file. The catalog owns the
//! file table; policies refer back to their file by [`FileId`] rather than
//! holding the file themselves.
//!
//! # Lifecycle
//!
//! 1. The loader registers each file with [`PolicyCatalog::add_file`]
//! 2. The loader registers each policy with [`PolicyCatalog::add_policy`]
//! 3. Readers share the catalog immutably; the name index is built on the
//!    first lookup
//!
//! Reloading builds a new catalog.

use core::fmt;
use std::collections::BTreeMap;

use spin::Once;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::error::PolicyModelError;
use crate::policy::PolicyInfo;
use crate::template::AdmxFileInfo;

/// Index of an ADMX file in a catalog's file table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileId(u32);

impl FileId {
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Policies across loaded ADMX files
pub struct PolicyCatalog {
    files: Vec<AdmxFileInfo>,
    policies: Vec<PolicyInfo>,
    /// Policy name -> first policy index with that name
    name_index: Once<BTreeMap<String, usize>>,
}

impl PolicyCatalog {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            policies: Vec::new(),
            name_index: Once::new(),
        }
    }

    /// Register an ADMX file
    pub fn add_file(&mut self, file: AdmxFileInfo) -> FileId {
        let id = FileId(self.files.len() as u32);
        log::debug!(
            "catalog: file {} '{}' ({} categories)",
            id.0,
            file.name(),
            file.categories().len()
        );
        self.files.push(file);
        id
    }

    /// Register a policy
    ///
    /// Fails if the policy's file was not registered with this catalog.
    pub fn add_policy(&mut self, policy: PolicyInfo) -> Result<(), PolicyModelError> {
        if policy.file().index() >= self.files.len() {
            log::warn!("catalog: policy '{}' references unknown file {:?}", policy.name(), policy.file());
            return Err(PolicyModelError::UnknownFile(policy.file()));
        }

        log::debug!(
            "catalog: policy '{}' in '{}' ({} element(s))",
            policy.name(),
            self.files[policy.file().index()].name(),
            policy.value_info().elements().len()
        );
        self.policies.push(policy);
        self.name_index = Once::new();
        Ok(())
    }

    pub fn files(&self) -> &[AdmxFileInfo] {
        &self.files
    }

    /// Policies in registration order
    pub fn policies(&self) -> &[PolicyInfo] {
        &self.policies
    }

    pub fn file(&self, id: FileId) -> Option<&AdmxFileInfo> {
        self.files.get(id.index())
    }

    /// File that defines a policy
    pub fn file_info(&self, policy: &PolicyInfo) -> Option<&AdmxFileInfo> {
        self.file(policy.file())
    }

    /// Name of the file that defines a policy
    pub fn file_name(&self, policy: &PolicyInfo) -> Option<&str> {
        self.file_info(policy).map(AdmxFileInfo::name)
    }

    /// Policy by name
    ///
    /// When several files define the same name, the first registered wins.
    pub fn policy(&self, name: &str) -> Option<&PolicyInfo> {
        let index = self.name_index().get(name)?;
        self.policies.get(*index)
    }

    /// Policies defined by one file, in registration order
    pub fn policies_in_file(&self, id: FileId) -> impl Iterator<Item = &PolicyInfo> {
        self.policies.iter().filter(move |p| p.file() == id)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Validate every policy, stopping at the first error
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), PolicyModelError> {
        for policy in &self.policies {
            policy.value_info().validate(config)?;
        }
        Ok(())
    }

    fn name_index(&self) -> &BTreeMap<String, usize> {
        self.name_index.call_once(|| {
            let mut index = BTreeMap::new();
            for (i, policy) in self.policies.iter().enumerate() {
                index.entry(policy.name().to_string()).or_insert(i);
            }
            log::trace!("catalog: name index built over {} policies", self.policies.len());
            index
        })
    }
}

impl Default for PolicyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PolicyCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyCatalog")
            .field("files", &self.files)
            .field("policies", &self.policies)
            .finish_non_exhaustive()
    }
}
