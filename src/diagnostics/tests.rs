// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Advisory, Diagnostic, Report, Severity};
use crate::error::{GraphError, RegistryError};
use crate::record::{ModuleName, SettingKey};

fn sample_fatal() -> RegistryError {
    RegistryError::DuplicateModule {
        name: ModuleName::new("Core"),
    }
}

fn sample_advisory() -> Advisory {
    Advisory::RedundantOverride {
        module: ModuleName::new("WidgetEditor"),
        key: SettingKey::UnityBuild,
    }
}

#[test]
fn test_empty_report_has_no_fatal() {
    let report = Report::new();
    assert!(report.is_empty());
    assert!(!report.has_fatal());
}

#[test]
fn test_fatal_entries_block() {
    let mut report = Report::new();
    report.push_advisory(sample_advisory());
    assert!(!report.has_fatal());

    report.push_fatal(sample_fatal());
    assert!(report.has_fatal());
    assert_eq!(report.len(), 2);
    assert_eq!(report.fatal().count(), 1);
    assert_eq!(report.advisories().count(), 1);
}

#[test]
fn test_extend_fatal_keeps_order() {
    let mut report = Report::new();
    report.extend_fatal([
        GraphError::MissingDependency {
            module: ModuleName::new("A"),
            target: ModuleName::new("Ghost"),
        },
        GraphError::SelfDependency {
            module: ModuleName::new("B"),
        },
    ]);

    let rendered: Vec<String> = report.fatal().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "graph error: module 'A' depends on missing module 'Ghost'",
            "graph error: module 'B' depends on itself",
        ]
    );
}

#[test]
fn test_diagnostic_severity() {
    let fatal = Diagnostic::Fatal(sample_fatal().into());
    let advisory = Diagnostic::Advisory(sample_advisory());

    assert_eq!(fatal.severity(), Severity::Fatal);
    assert_eq!(advisory.severity(), Severity::Advisory);
}

#[test]
fn test_report_display() {
    let mut report = Report::new();
    report.push_fatal(sample_fatal());
    report.push_advisory(sample_advisory());

    insta::assert_snapshot!(report.to_string(), @r"
    fatal: registry error: duplicate module 'Core'
    advisory: module 'WidgetEditor' overrides 'unity_build' to its default value
    ");
}
