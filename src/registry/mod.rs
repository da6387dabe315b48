// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor registry keyed by module name.
//!
//! ```text
//! ingest [records]
//!   register: name unseen --> store, keep registration order
//!             name taken  --> DuplicateModule (record dropped)
//! ```
//!
//! Registration order is kept for diagnostics ordering only; semantic
//! ordering always comes from the build plan.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::record::{ModuleName, ModuleRecord};

/// Registry of all module records for one resolution pass.
///
/// Holds no state across invocations; a registry is built, resolved, and
/// discarded.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    /// Records in registration order.
    records: Vec<ModuleRecord>,

    /// Name to position in `records`.
    index: BTreeMap<ModuleName, usize>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Builds a registry from a record sequence, accumulating duplicate
    /// registrations instead of stopping at the first.
    ///
    /// The first record under a name wins; later records with the same
    /// name are dropped and reported.
    pub fn ingest(records: impl IntoIterator<Item = ModuleRecord>) -> (Self, Vec<RegistryError>) {
        let mut registry = Self::new();
        let mut errors = Vec::new();

        for record in records {
            if let Err(error) = registry.register(record) {
                errors.push(error);
            }
        }

        (registry, errors)
    }

    /// Registers one record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateModule`] if the name is already
    /// taken; the registry is unchanged in that case.
    pub fn register(&mut self, record: ModuleRecord) -> Result<(), RegistryError> {
        if self.index.contains_key(record.name()) {
            return Err(RegistryError::DuplicateModule {
                name: record.name().clone(),
            });
        }

        tracing::debug!(module = %record.name(), "Registered module");
        self.index.insert(record.name().clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Looks up a record by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownModule`] if the name was never
    /// registered.
    pub fn get(&self, name: &ModuleName) -> Result<&ModuleRecord, RegistryError> {
        self.index
            .get(name)
            .and_then(|position| self.records.get(*position))
            .ok_or_else(|| RegistryError::UnknownModule { name: name.clone() })
    }

    /// Whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &ModuleName) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates records in registration order. Restartable: the iterator
    /// is `Clone` and borrows the registry.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> + Clone {
        self.records.iter()
    }

    /// Number of registered modules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
