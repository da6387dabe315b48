// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module descriptor records.
//!
//! ```text
//! ModuleRecord
//!   name          unique, immutable
//!   dependencies  [(target, visibility), ...] in declaration order
//!   overrides     sparse per-field settings overrides
//!   version_token Explicit(x.y) | Latest | EngineDefault
//! ```
//!
//! Records arrive already parsed from the manifest format; ingestion and
//! every later stage treat them as immutable values.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::settings::{CppStandard, EngineVersion, PchMode, WarningLevel};

/// Unique module identifier.
///
/// Ordered and hashed by the underlying string, so `BTreeMap` keys and
/// lexicographic tie-breaks agree everywhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Creates a module name from anything string-like.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ModuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Whether a dependency's interface propagates to the depending module's
/// own dependents (Public) or stops at the module boundary (Private).
///
/// All visibilities count equally toward compile ordering and cycle
/// detection; visibility only tags the edge for the compiler driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Visibility {
    Public,
    Private,
    PublicAndPrivate,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "Public"),
            Self::Private => write!(f, "Private"),
            Self::PublicAndPrivate => write!(f, "PublicAndPrivate"),
        }
    }
}

/// One declared dependency: target module plus edge visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRef {
    target: ModuleName,
    visibility: Visibility,
}

impl DependencyRef {
    /// Creates a dependency reference.
    pub fn new(target: impl Into<ModuleName>, visibility: Visibility) -> Self {
        Self {
            target: target.into(),
            visibility,
        }
    }

    /// The depended-upon module.
    #[must_use]
    pub const fn target(&self) -> &ModuleName {
        &self.target
    }

    /// Edge visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Selects which defaults table the settings resolver starts from.
///
/// A module can pin an older policy (`Explicit`) while the registry's
/// defaults evolve, float with the newest table (`Latest`), or take the
/// registry baseline (`EngineDefault`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VersionToken {
    /// Pin to the defaults of a specific engine version.
    Explicit(EngineVersion),
    /// Float with the newest defaults table.
    Latest,
    /// Use the registry's own baseline table.
    #[default]
    EngineDefault,
}

/// Identity of a settable field.
///
/// Used for duplicate-override detection and in diagnostics; the typed
/// values live in [`SettingOverride`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    ShadowVariableWarning,
    UnsafeTypeCastWarning,
    NonInlinedGeneratedCodeWarning,
    CppStandard,
    PchMode,
    UnityBuild,
    IncludeOrder,
    LegacyIncludePaths,
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ShadowVariableWarning => "shadow_variable_warning",
            Self::UnsafeTypeCastWarning => "unsafe_type_cast_warning",
            Self::NonInlinedGeneratedCodeWarning => "non_inlined_generated_code_warning",
            Self::CppStandard => "cpp_standard",
            Self::PchMode => "pch_mode",
            Self::UnityBuild => "unity_build",
            Self::IncludeOrder => "include_order",
            Self::LegacyIncludePaths => "legacy_include_paths",
        };
        f.write_str(name)
    }
}

/// One explicit per-module settings override.
///
/// Typed by construction: a key can only carry a value of its field's
/// type, so the merge step never sees a key/value mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingOverride {
    ShadowVariableWarning(WarningLevel),
    UnsafeTypeCastWarning(WarningLevel),
    NonInlinedGeneratedCodeWarning(WarningLevel),
    CppStandard(CppStandard),
    PchMode(PchMode),
    UnityBuild(bool),
    IncludeOrder(EngineVersion),
    LegacyIncludePaths(bool),
}

impl SettingOverride {
    /// The field this override targets.
    #[must_use]
    pub const fn key(&self) -> SettingKey {
        match self {
            Self::ShadowVariableWarning(_) => SettingKey::ShadowVariableWarning,
            Self::UnsafeTypeCastWarning(_) => SettingKey::UnsafeTypeCastWarning,
            Self::NonInlinedGeneratedCodeWarning(_) => SettingKey::NonInlinedGeneratedCodeWarning,
            Self::CppStandard(_) => SettingKey::CppStandard,
            Self::PchMode(_) => SettingKey::PchMode,
            Self::UnityBuild(_) => SettingKey::UnityBuild,
            Self::IncludeOrder(_) => SettingKey::IncludeOrder,
            Self::LegacyIncludePaths(_) => SettingKey::LegacyIncludePaths,
        }
    }
}

/// One module's build descriptor.
///
/// Immutable once registered; re-ingestion of the same name is a
/// conflict, not an update.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique module name.
    #[builder(into)]
    name: ModuleName,

    /// Declared dependencies, in declaration order.
    #[builder(default)]
    dependencies: Vec<DependencyRef>,

    /// Sparse explicit settings overrides, in declaration order.
    #[builder(default)]
    overrides: Vec<SettingOverride>,

    /// Which defaults table this module's settings start from.
    #[builder(default)]
    version_token: VersionToken,
}

impl ModuleRecord {
    /// Module name.
    #[must_use]
    pub const fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Declared dependencies.
    #[must_use]
    pub fn dependencies(&self) -> &[DependencyRef] {
        &self.dependencies
    }

    /// Explicit settings overrides.
    #[must_use]
    pub fn overrides(&self) -> &[SettingOverride] {
        &self.overrides
    }

    /// Defaults-table selector.
    #[must_use]
    pub const fn version_token(&self) -> VersionToken {
        self.version_token
    }
}
