// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aggregated validation report.
//!
//! ```text
//! Report
//!   fatal:    ResolveError (no plan can be emitted)
//!   advisory: informational, never blocks the plan
//! ```
//!
//! Validation collects everything it can detect in one pass; a caller
//! sees the complete set of problems in one report instead of the first
//! failure.

use crate::error::ResolveError;
use crate::record::{ModuleName, SettingKey};

/// Whether a diagnostic blocks plan emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Resolution cannot produce a plan.
    Fatal,
    /// Informational only.
    Advisory,
}

/// Non-blocking findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A module overrides a setting to the value its selected defaults
    /// table already carries.
    RedundantOverride { module: ModuleName, key: SettingKey },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedundantOverride { module, key } => write!(
                f,
                "module '{module}' overrides '{key}' to its default value"
            ),
        }
    }
}

/// One report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Fatal(ResolveError),
    Advisory(Advisory),
}

impl Diagnostic {
    /// Entry severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Fatal(_) => Severity::Fatal,
            Self::Advisory(_) => Severity::Advisory,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal(error) => write!(f, "fatal: {error}"),
            Self::Advisory(advisory) => write!(f, "advisory: {advisory}"),
        }
    }
}

/// Ordered collection of diagnostics for one resolution pass.
///
/// Order is deterministic: entries land in pipeline-stage order, and
/// within a stage in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Appends a fatal error.
    pub fn push_fatal(&mut self, error: impl Into<ResolveError>) {
        self.diagnostics.push(Diagnostic::Fatal(error.into()));
    }

    /// Appends every fatal error in a batch.
    pub fn extend_fatal<E: Into<ResolveError>>(&mut self, errors: impl IntoIterator<Item = E>) {
        for error in errors {
            self.push_fatal(error);
        }
    }

    /// Appends an advisory.
    pub fn push_advisory(&mut self, advisory: Advisory) {
        self.diagnostics.push(Diagnostic::Advisory(advisory));
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Fatal entries only.
    pub fn fatal(&self) -> impl Iterator<Item = &ResolveError> {
        self.diagnostics.iter().filter_map(|entry| match entry {
            Diagnostic::Fatal(error) => Some(error),
            Diagnostic::Advisory(_) => None,
        })
    }

    /// Advisory entries only.
    pub fn advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.diagnostics.iter().filter_map(|entry| match entry {
            Diagnostic::Advisory(advisory) => Some(advisory),
            Diagnostic::Fatal(_) => None,
        })
    }

    /// Whether any entry blocks plan emission.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|entry| entry.severity() == Severity::Fatal)
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the report is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
