// modres: Module Build Resolution Engine
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        [ModuleRecord, ...]        DefaultTables
//!                 |                       |
//!                 v                       v
//!             registry  ----------->  settings
//!          ingest, dedupe        per-module two-tier
//!                 |            merge (parallel, pure)
//!                 v                       |
//!               graph                     |
//!        edges, missing/self,             |
//!           cycle detection               |
//!                 |                       |
//!                 +----------+------------+
//!                            v
//!                         resolver
//!                    validation gate
//!                            |
//!              +-------------+------------+
//!              v                          v
//!            plan                   diagnostics
//!     deterministic topo          fatal + advisory
//!     order + settings                 report
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, record    |
//!   +-----------------------------------------+
//! ```
//!
//! The engine is a pure function of (records, defaults tables): no
//! ambient state, no I/O, no persistence between invocations. Compiler
//! invocation and manifest parsing are external collaborators.

pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod logging;
pub mod plan;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod settings;
