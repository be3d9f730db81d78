//! Compile event boundary.
//!
//! Build passes never log directly. Every count and finding flows through
//! `CompileEvent` into a `CompileSink`; the default sink forwards to
//! `tracing`.

use crate::obs::report::{CompileReport, Diagnostic, DiagnosticKind};
use derive_more::Display;

///
/// Phase
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Phase {
    Group,
    Tables,
    Relations,
    Inverses,
    Junctions,
    Columns,
}

///
/// CompileEvent
///

#[derive(Clone, Copy, Debug)]
pub enum CompileEvent<'a> {
    Start { rows: u64 },
    PhaseFinish { phase: Phase, items: u64 },
    Diagnostic(&'a Diagnostic),
    Finish { tables: u64, junctions: u64, diagnostics: u64 },
}

///
/// CompileSink
///

pub trait CompileSink {
    fn record(&self, event: CompileEvent<'_>);
}

///
/// TracingSink
/// Default sink: phase counts at debug, findings at warn.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl CompileSink for TracingSink {
    fn record(&self, event: CompileEvent<'_>) {
        match event {
            CompileEvent::Start { rows } => {
                tracing::debug!(rows, "schema compile started");
            }
            CompileEvent::PhaseFinish { phase, items } => {
                tracing::debug!(%phase, items, "compile phase finished");
            }
            CompileEvent::Diagnostic(diagnostic) => {
                tracing::warn!(
                    kind = %diagnostic.kind,
                    row_id = diagnostic.row_id,
                    "{}",
                    diagnostic.message
                );
            }
            CompileEvent::Finish {
                tables,
                junctions,
                diagnostics,
            } => {
                tracing::info!(tables, junctions, diagnostics, "schema compiled");
            }
        }
    }
}

///
/// NullSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CompileSink for NullSink {
    fn record(&self, _: CompileEvent<'_>) {}
}

///
/// Recorder
/// Per-compile bridge: forwards events and accumulates the report.
///

pub(crate) struct Recorder<'a> {
    sink: &'a dyn CompileSink,
    pub(crate) report: CompileReport,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(sink: &'a dyn CompileSink, rows: usize) -> Self {
        let rows = rows as u64;
        sink.record(CompileEvent::Start { rows });

        Self {
            sink,
            report: CompileReport {
                rows,
                ..CompileReport::default()
            },
        }
    }

    pub(crate) fn phase(&self, phase: Phase, items: usize) {
        self.sink.record(CompileEvent::PhaseFinish {
            phase,
            items: items as u64,
        });
    }

    pub(crate) fn diagnose(&mut self, kind: DiagnosticKind, row_id: i32, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, row_id, message);
        self.sink.record(CompileEvent::Diagnostic(&diagnostic));
        self.report.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish(self) -> CompileReport {
        self.sink.record(CompileEvent::Finish {
            tables: self.report.tables,
            junctions: self.report.junctions,
            diagnostics: self.report.diagnostics.len() as u64,
        });

        self.report
    }
}
