// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution pipeline.
//!
//! ```text
//! Resolver::new(tables)
//!   .resolve(records)
//!       ingest      duplicates --> report
//!       settings    per module, rayon par_iter (read-only inputs)
//!                   conflicts --> report, redundant --> advisories
//!       graph       missing/self deps --> report
//!       order       any fatal so far --> no plan
//!                   else topological order --> BuildPlan
//! ```
//!
//! A resolution either completes with a full report or its state is
//! discarded wholesale; there is no partial or resumable plan.

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::diagnostics::{Advisory, Report};
use crate::error::SettingsError;
use crate::graph::BuildGraph;
use crate::plan::{BuildPlan, topological_order};
use crate::record::{ModuleName, ModuleRecord, SettingKey};
use crate::registry::ModuleRegistry;
use crate::settings::{
    BuildSettings, DefaultTables, override_conflicts, redundant_overrides, resolve_settings,
};

/// Outcome of one resolution pass.
///
/// `plan` is `Some` exactly when the report carries no fatal
/// diagnostic; ordering is never computed over data known to be
/// invalid, and a plan is never partial.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub plan: Option<BuildPlan>,
    pub report: Report,
}

/// Per-module outcome of the parallel settings pass.
struct ModuleSettings {
    name: ModuleName,
    outcome: Result<BuildSettings, Vec<SettingsError>>,
    redundant: Vec<SettingKey>,
}

/// The resolution engine: turns module records plus read-only defaults
/// tables into an ordered, fully resolved build plan.
#[derive(Debug, Clone)]
pub struct Resolver {
    tables: DefaultTables,
}

impl Resolver {
    /// Creates a resolver over the given defaults tables.
    #[must_use]
    pub const fn new(tables: DefaultTables) -> Self {
        Self { tables }
    }

    /// The defaults tables this resolver applies.
    #[must_use]
    pub const fn tables(&self) -> &DefaultTables {
        &self.tables
    }

    /// Resolves a record sequence end to end.
    ///
    /// Duplicate names are reported and the first record under a name
    /// wins; the rest of the pipeline runs on the deduplicated registry
    /// so one pass still reports graph and settings problems.
    #[must_use]
    pub fn resolve(&self, records: impl IntoIterator<Item = ModuleRecord>) -> Resolution {
        let (registry, duplicate_errors) = ModuleRegistry::ingest(records);

        let mut report = Report::new();
        report.extend_fatal(duplicate_errors);

        self.resolve_registry(&registry, report)
    }

    /// Resolves a prebuilt registry, appending to an existing report.
    fn resolve_registry(&self, registry: &ModuleRegistry, mut report: Report) -> Resolution {
        tracing::info!(module_count = registry.len(), "Starting resolution");

        let resolved = self.resolve_all_settings(registry, &mut report);

        let (graph, graph_errors) = BuildGraph::build(registry);
        report.extend_fatal(graph_errors);

        if report.has_fatal() {
            tracing::warn!(
                fatal = report.fatal().count(),
                "Resolution failed validation, no plan emitted"
            );
            return Resolution { plan: None, report };
        }

        match topological_order(&graph) {
            Ok(order) => {
                let plan = BuildPlan::from_order(order, &resolved);
                tracing::info!(planned = plan.len(), "Resolution complete");
                Resolution {
                    plan: Some(plan),
                    report,
                }
            }
            Err(error) => {
                report.push_fatal(error);
                Resolution { plan: None, report }
            }
        }
    }

    /// Runs the per-module settings pass.
    ///
    /// Each module's resolution reads only its own record and the
    /// read-only tables, so the pass fans out across worker threads and
    /// collects in registration order for deterministic reporting.
    fn resolve_all_settings(
        &self,
        registry: &ModuleRegistry,
        report: &mut Report,
    ) -> BTreeMap<ModuleName, BuildSettings> {
        let records: Vec<&ModuleRecord> = registry.modules().collect();

        let outcomes: Vec<ModuleSettings> = records
            .par_iter()
            .map(|&record| {
                let conflicts = override_conflicts(record);
                let outcome = if conflicts.is_empty() {
                    resolve_settings(record, &self.tables).map_err(|error| vec![error])
                } else {
                    Err(conflicts)
                };
                let redundant = if outcome.is_ok() {
                    redundant_overrides(record, &self.tables)
                } else {
                    Vec::new()
                };

                ModuleSettings {
                    name: record.name().clone(),
                    outcome,
                    redundant,
                }
            })
            .collect();

        let mut resolved = BTreeMap::new();
        for module in outcomes {
            match module.outcome {
                Ok(settings) => {
                    resolved.insert(module.name.clone(), settings);
                }
                Err(conflicts) => report.extend_fatal(conflicts),
            }
            for key in module.redundant {
                report.push_advisory(Advisory::RedundantOverride {
                    module: module.name.clone(),
                    key,
                });
            }
        }

        resolved
    }
}
