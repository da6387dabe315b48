// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    BuildSettings, CppStandard, DefaultTables, EngineVersion, PchMode, WarningLevel,
    override_conflicts, redundant_overrides, resolve_settings,
};
use crate::error::SettingsError;
use crate::record::{ModuleRecord, SettingKey, SettingOverride, VersionToken};

/// Tables with a distinguishable value in each tier.
fn test_tables() -> DefaultTables {
    let engine_default = BuildSettings::default();

    let latest = BuildSettings {
        cpp_standard: CppStandard::Latest,
        include_order: EngineVersion::new(5, 4),
        legacy_public_include_paths: false,
        ..BuildSettings::default()
    };

    let v5_0 = BuildSettings {
        cpp_standard: CppStandard::Cpp17,
        ..BuildSettings::default()
    };

    let v5_3 = BuildSettings {
        cpp_standard: CppStandard::Cpp20,
        include_order: EngineVersion::new(5, 3),
        ..BuildSettings::default()
    };

    DefaultTables::new(engine_default, latest)
        .with_version(EngineVersion::new(5, 0), v5_0)
        .with_version(EngineVersion::new(5, 3), v5_3)
}

#[test]
fn test_select_latest_and_engine_default() {
    let tables = test_tables();

    assert_eq!(
        tables.select(VersionToken::Latest).cpp_standard,
        CppStandard::Latest
    );
    assert_eq!(
        tables.select(VersionToken::EngineDefault).cpp_standard,
        CppStandard::Cpp17
    );
}

#[test]
fn test_select_explicit_exact_and_between() {
    let tables = test_tables();

    // Exact pin
    let selected = tables.select(VersionToken::Explicit(EngineVersion::new(5, 3)));
    assert_eq!(selected.cpp_standard, CppStandard::Cpp20);

    // 5.2 has no table of its own: newest table at or below wins (5.0)
    let selected = tables.select(VersionToken::Explicit(EngineVersion::new(5, 2)));
    assert_eq!(selected.cpp_standard, CppStandard::Cpp17);
    assert_eq!(selected.include_order, EngineVersion::new(5, 0));

    // 5.4 pins newer than every table: newest at or below is 5.3
    let selected = tables.select(VersionToken::Explicit(EngineVersion::new(5, 4)));
    assert_eq!(selected.cpp_standard, CppStandard::Cpp20);
}

#[test]
fn test_select_explicit_older_than_all_falls_back_to_baseline() {
    let tables = test_tables();

    let selected = tables.select(VersionToken::Explicit(EngineVersion::new(4, 27)));
    assert_eq!(selected, tables.engine_default());
}

#[test]
fn test_no_overrides_resolves_to_selected_table_exactly() {
    let tables = test_tables();
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .version_token(VersionToken::Latest)
        .build();

    let settings = resolve_settings(&record, &tables).unwrap();
    assert_eq!(settings, *tables.latest());
}

#[test]
fn test_explicit_override_always_wins() {
    let tables = test_tables();

    // Latest table leaves shadow_variable at Warning; the override must
    // land regardless of what the table says.
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .version_token(VersionToken::Latest)
        .overrides(vec![SettingOverride::ShadowVariableWarning(
            WarningLevel::Error,
        )])
        .build();

    let settings = resolve_settings(&record, &tables).unwrap();
    assert_eq!(settings.warnings.shadow_variable, WarningLevel::Error);

    // Every other field falls through to the selected table.
    assert_eq!(settings.cpp_standard, tables.latest().cpp_standard);
    assert_eq!(settings.include_order, tables.latest().include_order);
}

#[test]
fn test_identical_overrides_different_tokens_diverge() {
    let tables = test_tables();
    let overrides = vec![SettingOverride::UnityBuild(false)];

    let pinned = ModuleRecord::builder()
        .name("Pinned")
        .version_token(VersionToken::Explicit(EngineVersion::new(5, 0)))
        .overrides(overrides.clone())
        .build();
    let floating = ModuleRecord::builder()
        .name("Floating")
        .version_token(VersionToken::Latest)
        .overrides(overrides)
        .build();

    let pinned = resolve_settings(&pinned, &tables).unwrap();
    let floating = resolve_settings(&floating, &tables).unwrap();

    assert!(!pinned.unity_build);
    assert!(!floating.unity_build);
    assert_ne!(pinned.cpp_standard, floating.cpp_standard);
}

#[test]
fn test_conflicting_overrides_fail() {
    let tables = test_tables();
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .overrides(vec![
            SettingOverride::UnityBuild(false),
            SettingOverride::UnityBuild(true),
        ])
        .build();

    let error = resolve_settings(&record, &tables).unwrap_err();
    assert_eq!(
        error,
        SettingsError::ConflictingOverrides {
            module: "WidgetEditor".into(),
            key: SettingKey::UnityBuild,
        }
    );
}

#[test]
fn test_same_value_twice_is_tolerated() {
    let tables = test_tables();
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .overrides(vec![
            SettingOverride::PchMode(PchMode::NoPchs),
            SettingOverride::PchMode(PchMode::NoPchs),
        ])
        .build();

    let settings = resolve_settings(&record, &tables).unwrap();
    assert_eq!(settings.pch_mode, PchMode::NoPchs);
}

#[test]
fn test_override_conflicts_reports_each_key_once() {
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .overrides(vec![
            SettingOverride::UnityBuild(false),
            SettingOverride::UnityBuild(true),
            SettingOverride::UnityBuild(false),
            SettingOverride::CppStandard(CppStandard::Cpp14),
            SettingOverride::CppStandard(CppStandard::Cpp20),
        ])
        .build();

    let conflicts = override_conflicts(&record);
    assert_eq!(conflicts.len(), 2);
    assert!(conflicts.iter().all(|error| matches!(
        error,
        SettingsError::ConflictingOverrides { .. }
    )));
}

#[test]
fn test_redundant_overrides_detected() {
    let tables = test_tables();
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .version_token(VersionToken::Latest)
        .overrides(vec![
            // Restates the Latest table's value
            SettingOverride::CppStandard(CppStandard::Latest),
            // Genuine change
            SettingOverride::UnityBuild(false),
        ])
        .build();

    let redundant = redundant_overrides(&record, &tables);
    assert_eq!(redundant, vec![SettingKey::CppStandard]);
}

#[test]
fn test_resolution_is_deterministic() {
    let tables = test_tables();
    let record = ModuleRecord::builder()
        .name("WidgetEditor")
        .version_token(VersionToken::Explicit(EngineVersion::new(5, 3)))
        .overrides(vec![
            SettingOverride::ShadowVariableWarning(WarningLevel::Error),
            SettingOverride::LegacyIncludePaths(false),
        ])
        .build();

    let first = resolve_settings(&record, &tables).unwrap();
    let second = resolve_settings(&record, &tables).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_engine_version_display_and_order() {
    assert_eq!(EngineVersion::new(5, 3).to_string(), "5.3");
    assert!(EngineVersion::new(5, 3) < EngineVersion::new(5, 10));
    assert!(EngineVersion::new(4, 27) < EngineVersion::new(5, 0));
}
