// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build settings values and versioned defaults tables.
//!
//! ```text
//! DefaultTables
//!   versioned: 5.0 -> BuildSettings, 5.3 -> BuildSettings, ...
//!   latest:    BuildSettings
//!   engine_default: BuildSettings
//!
//! select(VersionToken)
//!   Latest        --> latest
//!   EngineDefault --> engine_default
//!   Explicit(v)   --> newest versioned table <= v, else engine_default
//! ```
//!
//! The two-tier merge (selected table, then explicit overrides) lives in
//! [`merge`]; it is pure and deterministic.

pub mod merge;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::VersionToken;

pub use merge::{override_conflicts, redundant_overrides, resolve_settings};

/// Engine version as `major.minor`.
///
/// Orders chronologically, so pinned-table lookup can take the newest
/// table at or below a requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EngineVersion {
    pub major: u16,
    pub minor: u16,
}

impl EngineVersion {
    /// Creates a version from major and minor components.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Compiler warning escalation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum WarningLevel {
    Off,
    #[default]
    Warning,
    Error,
}

impl std::fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "Off"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// C++ language standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CppStandard {
    Cpp14,
    #[default]
    Cpp17,
    Cpp20,
    Latest,
}

impl std::fmt::Display for CppStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpp14 => write!(f, "Cpp14"),
            Self::Cpp17 => write!(f, "Cpp17"),
            Self::Cpp20 => write!(f, "Cpp20"),
            Self::Latest => write!(f, "Latest"),
        }
    }
}

/// Precompiled header mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PchMode {
    NoPchs,
    NoSharedPchs,
    UseSharedPchs,
    #[default]
    UseExplicitOrSharedPchs,
}

impl std::fmt::Display for PchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPchs => write!(f, "NoPchs"),
            Self::NoSharedPchs => write!(f, "NoSharedPchs"),
            Self::UseSharedPchs => write!(f, "UseSharedPchs"),
            Self::UseExplicitOrSharedPchs => write!(f, "UseExplicitOrSharedPchs"),
        }
    }
}

/// Per-category warning escalation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningSettings {
    pub shadow_variable: WarningLevel,
    pub unsafe_type_cast: WarningLevel,
    pub non_inlined_generated_code: WarningLevel,
}

/// Fully resolved, concrete build settings for one module.
///
/// Immutable value; two modules with identical overrides may still
/// resolve differently when their version tokens select different
/// defaults tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub warnings: WarningSettings,
    pub cpp_standard: CppStandard,
    pub pch_mode: PchMode,
    pub unity_build: bool,
    pub include_order: EngineVersion,
    pub legacy_public_include_paths: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            warnings: WarningSettings::default(),
            cpp_standard: CppStandard::default(),
            pch_mode: PchMode::default(),
            unity_build: true,
            include_order: EngineVersion::new(5, 0),
            legacy_public_include_paths: true,
        }
    }
}

/// Read-only defaults tables supplied by the engine-versioning
/// collaborator at startup.
///
/// Never ambient state: every resolution takes the tables as an explicit
/// parameter, so resolution stays a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct DefaultTables {
    versioned: BTreeMap<EngineVersion, BuildSettings>,
    latest: BuildSettings,
    engine_default: BuildSettings,
}

impl DefaultTables {
    /// Creates tables with the given baseline and latest settings and no
    /// version-pinned entries.
    #[must_use]
    pub const fn new(engine_default: BuildSettings, latest: BuildSettings) -> Self {
        Self {
            versioned: BTreeMap::new(),
            latest,
            engine_default,
        }
    }

    /// Adds (or replaces) the pinned table for one engine version.
    #[must_use]
    pub fn with_version(mut self, version: EngineVersion, settings: BuildSettings) -> Self {
        self.versioned.insert(version, settings);
        self
    }

    /// The baseline table.
    #[must_use]
    pub const fn engine_default(&self) -> &BuildSettings {
        &self.engine_default
    }

    /// The newest table.
    #[must_use]
    pub const fn latest(&self) -> &BuildSettings {
        &self.latest
    }

    /// Selects the table a version token refers to.
    ///
    /// `Explicit(v)` takes the newest pinned table at or below `v`;
    /// a pin older than every table falls back to the baseline.
    #[must_use]
    pub fn select(&self, token: VersionToken) -> &BuildSettings {
        match token {
            VersionToken::Latest => &self.latest,
            VersionToken::EngineDefault => &self.engine_default,
            VersionToken::Explicit(version) => self
                .versioned
                .range(..=version)
                .next_back()
                .map_or(&self.engine_default, |(_, settings)| settings),
        }
    }
}
