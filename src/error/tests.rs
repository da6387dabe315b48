// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GraphError, PlanError, RegistryError, ResolveError, SettingsError};
use crate::record::{ModuleName, SettingKey};

#[test]
fn test_registry_error_display() {
    let error = RegistryError::DuplicateModule {
        name: ModuleName::new("Core"),
    };
    assert_eq!(error.to_string(), "duplicate module 'Core'");

    let error = RegistryError::UnknownModule {
        name: ModuleName::new("Slate"),
    };
    assert_eq!(error.to_string(), "unknown module 'Slate'");
}

#[test]
fn test_settings_error_display() {
    let error = SettingsError::ConflictingOverrides {
        module: ModuleName::new("WidgetEditor"),
        key: SettingKey::UnityBuild,
    };
    assert_eq!(
        error.to_string(),
        "module 'WidgetEditor' sets 'unity_build' twice with conflicting values"
    );
}

#[test]
fn test_graph_error_display() {
    let error = GraphError::MissingDependency {
        module: ModuleName::new("WidgetEditor"),
        target: ModuleName::new("Slate"),
    };
    assert_eq!(
        error.to_string(),
        "module 'WidgetEditor' depends on missing module 'Slate'"
    );

    let error = GraphError::SelfDependency {
        module: ModuleName::new("Core"),
    };
    assert_eq!(error.to_string(), "module 'Core' depends on itself");
}

#[test]
fn test_cycle_error_display() {
    let error = PlanError::CyclicDependency {
        cycle: vec![
            ModuleName::new("A"),
            ModuleName::new("B"),
            ModuleName::new("C"),
        ],
    };
    assert_eq!(
        error.to_string(),
        "cyclic dependency: A -> B -> C -> A"
    );
}

#[test]
fn test_cycle_error_display_empty() {
    let error = PlanError::CyclicDependency { cycle: vec![] };
    assert_eq!(error.to_string(), "cyclic dependency: ");
}

#[test]
fn test_resolve_error_wraps_sub_errors() {
    let error: ResolveError = RegistryError::DuplicateModule {
        name: ModuleName::new("Core"),
    }
    .into();
    assert_eq!(
        error.to_string(),
        "registry error: duplicate module 'Core'"
    );

    let error: ResolveError = GraphError::SelfDependency {
        module: ModuleName::new("Core"),
    }
    .into();
    assert_eq!(error.to_string(), "graph error: module 'Core' depends on itself");
}
