// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deterministic build ordering.
//!
//! ```text
//! topological_order(graph)
//!   repeat: pop lexicographically smallest zero-in-degree module
//!   leftovers --> CyclicDependency(first cycle, lexicographic DFS)
//!
//! BuildPlan: [(name, BuildSettings), ...] dependency-first
//! ```
//!
//! Tie-breaks are always lexicographic, so an unchanged registry yields
//! a byte-identical plan across runs and process restarts.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::PlanError;
use crate::graph::BuildGraph;
use crate::record::ModuleName;
use crate::settings::BuildSettings;

/// One plan slot: module plus its fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: ModuleName,
    pub settings: BuildSettings,
}

/// Immutable, fully ordered build plan.
///
/// If `A` depends on `B`, `B` precedes `A`. The external compiler driver
/// may compile in this order or in any order respecting the underlying
/// partial order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildPlan {
    entries: Vec<PlanEntry>,
}

impl BuildPlan {
    /// Pairs an ordered name sequence with resolved settings.
    ///
    /// Names without resolved settings are skipped; the resolver only
    /// orders modules it has already resolved.
    #[must_use]
    pub fn from_order(
        order: Vec<ModuleName>,
        resolved: &BTreeMap<ModuleName, BuildSettings>,
    ) -> Self {
        let entries = order
            .into_iter()
            .filter_map(|name| {
                resolved.get(&name).map(|settings| PlanEntry {
                    settings: *settings,
                    name,
                })
            })
            .collect();
        Self { entries }
    }

    /// Plan entries in build order.
    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Module names in build order.
    pub fn module_names(&self) -> impl Iterator<Item = &ModuleName> {
        self.entries.iter().map(|entry| &entry.name)
    }

    /// Number of planned modules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical JSON emission for the compiler driver.
    ///
    /// Deterministic: the same plan always serializes to the same bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, entry.name)?;
        }
        Ok(())
    }
}

/// Computes a deterministic topological order over the graph.
///
/// Kahn's algorithm: repeatedly select a module whose dependencies are
/// all placed, smallest name first via a min-heap, so plans reproduce
/// exactly given identical input.
///
/// # Errors
///
/// Returns [`PlanError::CyclicDependency`] carrying the first cycle
/// found by lexicographic depth-first scan when no total order exists.
pub fn topological_order(graph: &BuildGraph) -> Result<Vec<ModuleName>, PlanError> {
    let mut in_degree: BTreeMap<&ModuleName, usize> = graph
        .modules()
        .map(|name| (name, graph.dependencies_of(name).len()))
        .collect();

    let mut dependents: BTreeMap<&ModuleName, Vec<&ModuleName>> = BTreeMap::new();
    for name in graph.modules() {
        for target in graph.dependencies_of(name) {
            dependents.entry(target).or_default().push(name);
        }
    }

    let mut ready: BinaryHeap<Reverse<&ModuleName>> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(name, _)| Reverse(*name))
        .collect();

    let mut order: Vec<ModuleName> = Vec::with_capacity(graph.module_count());
    while let Some(Reverse(name)) = ready.pop() {
        order.push(name.clone());

        for dependent in dependents.get(name).map_or(&[][..], Vec::as_slice) {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(*dependent));
                }
            }
        }
    }

    if order.len() < graph.module_count() {
        let cycle = graph.find_cycle().unwrap_or_default();
        return Err(PlanError::CyclicDependency { cycle });
    }

    Ok(order)
}
