// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ResolveError
//!                 |
//!     +--------+--+-----+--------+
//!     v        v        v        v
//! Registry Settings   Graph    Plan
//!
//! Sub-errors:
//!   Registry  DuplicateModule, UnknownModule
//!   Settings  ConflictingOverrides
//!   Graph     MissingDependency, SelfDependency
//!   Plan      CyclicDependency
//! ```
//!
//! Every variant is fatal for plan emission; advisory conditions live in
//! [`crate::diagnostics`] instead. Validation accumulates these errors
//! rather than aborting on the first, so one report carries the complete
//! set of problems found in a pass.

use thiserror::Error;

use crate::record::{ModuleName, SettingKey};

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level resolution error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Registry ingestion or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Per-module settings resolution failed.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Dependency graph construction failed.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Build ordering failed.
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
}

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A record with this name is already registered. Re-ingestion is a
    /// conflict, not an update.
    #[error("duplicate module '{name}'")]
    DuplicateModule { name: ModuleName },

    /// Lookup of a name that was never registered.
    #[error("unknown module '{name}'")]
    UnknownModule { name: ModuleName },
}

/// Settings resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The same record sets the same key twice with different values.
    /// Defaults never conflict with explicit overrides: explicit wins.
    #[error("module '{module}' sets '{key}' twice with conflicting values")]
    ConflictingOverrides { module: ModuleName, key: SettingKey },
}

/// Dependency graph errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A declared dependency target does not exist in the registry.
    #[error("module '{module}' depends on missing module '{target}'")]
    MissingDependency {
        module: ModuleName,
        target: ModuleName,
    },

    /// A module declares itself as a dependency.
    #[error("module '{module}' depends on itself")]
    SelfDependency { module: ModuleName },
}

/// Build ordering errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The graph contains a directed cycle; no valid build order exists.
    /// Carries the first cycle found by lexicographic depth-first scan.
    #[error("cyclic dependency: {}", join_cycle(.cycle))]
    CyclicDependency { cycle: Vec<ModuleName> },
}

/// Renders a cycle as `A -> B -> C -> A`.
fn join_cycle(cycle: &[ModuleName]) -> String {
    let mut rendered: Vec<&str> = cycle.iter().map(ModuleName::as_str).collect();
    if let Some(first) = rendered.first().copied() {
        rendered.push(first);
    }
    rendered.join(" -> ")
}

#[cfg(test)]
mod tests;
