// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency graph construction and cycle detection.
//!
//! ```text
//! build(registry)
//!   per declared dependency:
//!     target == module   --> SelfDependency (no edge)
//!     target unknown     --> MissingDependency (no edge)
//!     otherwise          --> edge (from, to, visibility)
//!   errors accumulate; one pass reports every bad target
//!
//! find_cycle()
//!   DFS, roots and neighbors in lexicographic order,
//!   recursion-stack marker --> first cycle, members only
//! ```
//!
//! All visibilities participate equally: every dependency kind affects
//! compile order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::record::{ModuleName, Visibility};
use crate::registry::ModuleRegistry;

/// One directed dependency edge. `from` depends on `to`, so `to` must be
/// built first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: ModuleName,
    pub to: ModuleName,
    pub visibility: Visibility,
}

/// DFS node state for cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Validated dependency graph over a registry's modules.
#[derive(Debug, Clone, Default)]
pub struct BuildGraph {
    /// Edges in declaration order, duplicates included.
    edges: Vec<DependencyEdge>,

    /// Module name to its distinct dependency targets, sorted. Covers
    /// every registered module, including ones without dependencies.
    adjacency: BTreeMap<ModuleName, Vec<ModuleName>>,
}

impl BuildGraph {
    /// Builds the graph for a registry.
    ///
    /// Never aborts on the first bad dependency: every missing target
    /// and self-dependency in the registry lands in the returned error
    /// list, and the affected edges are left out of the graph.
    #[must_use]
    pub fn build(registry: &ModuleRegistry) -> (Self, Vec<GraphError>) {
        let mut errors = Vec::new();
        let mut edges = Vec::new();
        let mut adjacency: BTreeMap<ModuleName, Vec<ModuleName>> = registry
            .modules()
            .map(|record| (record.name().clone(), Vec::new()))
            .collect();

        for record in registry.modules() {
            for dependency in record.dependencies() {
                if dependency.target() == record.name() {
                    errors.push(GraphError::SelfDependency {
                        module: record.name().clone(),
                    });
                    continue;
                }
                if !registry.contains(dependency.target()) {
                    errors.push(GraphError::MissingDependency {
                        module: record.name().clone(),
                        target: dependency.target().clone(),
                    });
                    continue;
                }

                edges.push(DependencyEdge {
                    from: record.name().clone(),
                    to: dependency.target().clone(),
                    visibility: dependency.visibility(),
                });
            }
        }

        for edge in &edges {
            if let Some(targets) = adjacency.get_mut(&edge.from)
                && !targets.contains(&edge.to)
            {
                targets.push(edge.to.clone());
            }
        }
        for targets in adjacency.values_mut() {
            targets.sort_unstable();
        }

        tracing::debug!(
            modules = adjacency.len(),
            edges = edges.len(),
            errors = errors.len(),
            "Built dependency graph"
        );

        (Self { edges, adjacency }, errors)
    }

    /// All validated edges, in declaration order.
    #[must_use]
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// Module names in the graph, lexicographic.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleName> {
        self.adjacency.keys()
    }

    /// Distinct dependency targets of one module, sorted. Empty for
    /// unknown names.
    #[must_use]
    pub fn dependencies_of(&self, name: &ModuleName) -> &[ModuleName] {
        self.adjacency.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of modules in the graph.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Finds the first dependency cycle, if any.
    ///
    /// Depth-first traversal with a recursion-stack marker; roots and
    /// neighbors are visited in lexicographic order, so the same graph
    /// always reports the same cycle. The returned sequence contains
    /// exactly the modules on the cycle, starting at the re-entered
    /// node.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<ModuleName>> {
        let mut marks: BTreeMap<&ModuleName, Mark> = self
            .adjacency
            .keys()
            .map(|name| (name, Mark::Unvisited))
            .collect();
        let mut stack: Vec<&ModuleName> = Vec::new();

        for root in self.adjacency.keys() {
            if marks.get(root) == Some(&Mark::Unvisited)
                && let Some(cycle) = self.visit(root, &mut marks, &mut stack)
            {
                return Some(cycle);
            }
        }

        None
    }

    /// DFS step: returns the cycle when `node` reaches a module already
    /// on the recursion stack.
    fn visit<'graph>(
        &'graph self,
        node: &'graph ModuleName,
        marks: &mut BTreeMap<&'graph ModuleName, Mark>,
        stack: &mut Vec<&'graph ModuleName>,
    ) -> Option<Vec<ModuleName>> {
        marks.insert(node, Mark::OnStack);
        stack.push(node);

        for target in self.dependencies_of(node) {
            match marks.get(target).copied() {
                Some(Mark::OnStack) => {
                    let start = stack.iter().position(|name| *name == target).unwrap_or(0);
                    return Some(stack[start..].iter().map(|name| (*name).clone()).collect());
                }
                Some(Mark::Unvisited) => {
                    if let Some(cycle) = self.visit(target, marks, stack) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        stack.pop();
        marks.insert(node, Mark::Done);
        None
    }
}
