// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Two-tier settings merge.
//!
//! ```text
//! DefaultTables.select(token) + explicit overrides --> BuildSettings
//! ```
//!
//! The selected table supplies every field; explicit overrides replace
//! fields one by one and always win. Only two overrides on the *same
//! record* can conflict, and only when they target the same key with
//! different values.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::SettingsError;
use crate::record::{ModuleRecord, SettingKey, SettingOverride};

use super::{BuildSettings, DefaultTables};

/// Resolves a record's concrete settings against the given tables.
///
/// Pure and side-effect free: the same inputs always produce
/// bit-identical output.
///
/// # Errors
///
/// Returns [`SettingsError::ConflictingOverrides`] for the first key the
/// record sets twice with different values. Use [`override_conflicts`]
/// to collect every conflict on a record.
pub fn resolve_settings(
    record: &ModuleRecord,
    tables: &DefaultTables,
) -> Result<BuildSettings, SettingsError> {
    if let Some(conflict) = override_conflicts(record).into_iter().next() {
        return Err(conflict);
    }

    let mut settings = *tables.select(record.version_token());
    for setting in record.overrides() {
        apply(&mut settings, *setting);
    }
    Ok(settings)
}

/// Collects every conflicting-override error on a record.
///
/// Setting the same key twice with the *same* value is tolerated and
/// applied once; only differing values conflict.
#[must_use]
pub fn override_conflicts(record: &ModuleRecord) -> Vec<SettingsError> {
    let mut seen: BTreeMap<SettingKey, SettingOverride> = BTreeMap::new();
    let mut reported: BTreeSet<SettingKey> = BTreeSet::new();
    let mut conflicts = Vec::new();

    for setting in record.overrides() {
        let key = setting.key();
        match seen.get(&key) {
            Some(previous) => {
                if previous != setting && reported.insert(key) {
                    conflicts.push(SettingsError::ConflictingOverrides {
                        module: record.name().clone(),
                        key,
                    });
                }
            }
            None => {
                seen.insert(key, *setting);
            }
        }
    }

    conflicts
}

/// Keys whose explicit override equals the selected default, field for
/// field. Informational input for advisory diagnostics; never blocks a
/// plan.
#[must_use]
pub fn redundant_overrides(record: &ModuleRecord, tables: &DefaultTables) -> Vec<SettingKey> {
    let base = tables.select(record.version_token());
    let keys: BTreeSet<SettingKey> = record
        .overrides()
        .iter()
        .filter(|setting| matches_default(base, **setting))
        .map(SettingOverride::key)
        .collect();
    keys.into_iter().collect()
}

/// Writes one override into the settings value.
fn apply(settings: &mut BuildSettings, setting: SettingOverride) {
    match setting {
        SettingOverride::ShadowVariableWarning(level) => {
            settings.warnings.shadow_variable = level;
        }
        SettingOverride::UnsafeTypeCastWarning(level) => {
            settings.warnings.unsafe_type_cast = level;
        }
        SettingOverride::NonInlinedGeneratedCodeWarning(level) => {
            settings.warnings.non_inlined_generated_code = level;
        }
        SettingOverride::CppStandard(standard) => settings.cpp_standard = standard,
        SettingOverride::PchMode(mode) => settings.pch_mode = mode,
        SettingOverride::UnityBuild(enabled) => settings.unity_build = enabled,
        SettingOverride::IncludeOrder(version) => settings.include_order = version,
        SettingOverride::LegacyIncludePaths(enabled) => {
            settings.legacy_public_include_paths = enabled;
        }
    }
}

/// Whether an override restates the base table's value for its field.
fn matches_default(base: &BuildSettings, setting: SettingOverride) -> bool {
    match setting {
        SettingOverride::ShadowVariableWarning(level) => base.warnings.shadow_variable == level,
        SettingOverride::UnsafeTypeCastWarning(level) => base.warnings.unsafe_type_cast == level,
        SettingOverride::NonInlinedGeneratedCodeWarning(level) => {
            base.warnings.non_inlined_generated_code == level
        }
        SettingOverride::CppStandard(standard) => base.cpp_standard == standard,
        SettingOverride::PchMode(mode) => base.pch_mode == mode,
        SettingOverride::UnityBuild(enabled) => base.unity_build == enabled,
        SettingOverride::IncludeOrder(version) => base.include_order == version,
        SettingOverride::LegacyIncludePaths(enabled) => {
            base.legacy_public_include_paths == enabled
        }
    }
}
