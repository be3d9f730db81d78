//! Observability: compile events, sinks, and the per-compile report.

pub(crate) mod report;
pub(crate) mod sink;

pub use report::{CompileReport, Diagnostic, DiagnosticKind, Diagnostics};
pub(crate) use sink::Recorder;
pub use sink::{CompileEvent, CompileSink, NullSink, Phase, TracingSink};
