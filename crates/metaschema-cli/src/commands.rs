use crate::{
    cli::Format,
    error::{CliError, CliResult},
    summary::{DiagnosticLine, JunctionSummary, SchemaSummary, junctions},
};
use metaschema_config::Config;
use metaschema_core::{
    Compilation, obs::Diagnostic, row::MetaRow, validate::validate_schema,
};
use serde::Serialize;
use std::{
    fmt::{self, Display},
    fs,
    io::{self, Read, Write},
    path::Path,
};

const STDIN_PATH: &str = "-";

/// Read a JSON row dump from a file, or stdin for `-`.
pub fn read_rows(path: &Path) -> CliResult<Vec<MetaRow>> {
    let source = if path.as_os_str() == STDIN_PATH {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Input {
                path: path.to_path_buf(),
                source,
            })?;
        source
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Input {
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_rows(&source, path)
}

pub fn parse_rows(source: &str, path: &Path) -> CliResult<Vec<MetaRow>> {
    serde_json::from_str(source).map_err(|source| CliError::Rows {
        path: path.to_path_buf(),
        source,
    })
}

// ----------------------------------------------------------------------
// compile
// ----------------------------------------------------------------------

pub fn compile(
    out: &mut impl Write,
    config: &Config,
    format: Format,
    rows: &[MetaRow],
    strict: bool,
) -> CliResult<()> {
    let namer = config.compiler.namer();
    let Compilation { schema, report } = config
        .compiler
        .compiler(&namer)
        .strict(strict || config.compiler.strict)
        .compile(rows)?;

    tracing::debug!(tables = schema.table_count(), "rendering schema summary");
    render(out, format, &SchemaSummary::new(&schema, report))
}

// ----------------------------------------------------------------------
// check
// ----------------------------------------------------------------------

///
/// CheckOutcome
///

#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    #[must_use]
    pub fn problems(&self) -> usize {
        self.diagnostics.len() + self.findings.len()
    }
}

impl Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", DiagnosticLine(diagnostic))?;
        }
        for finding in &self.findings {
            writeln!(f, "{finding}")?;
        }
        if self.problems() == 0 {
            writeln!(f, "ok")?;
        }

        Ok(())
    }
}

///
/// Finding
///

#[derive(Debug, Serialize)]
pub struct Finding {
    pub route: String,
    pub message: String,
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.route.is_empty() {
            write!(f, "error: {}", self.message)
        } else {
            write!(f, "error[{}]: {}", self.route, self.message)
        }
    }
}

/// Compile leniently, then run the integrity pass. Fails when either step
/// reported anything.
pub fn check(
    out: &mut impl Write,
    config: &Config,
    format: Format,
    rows: &[MetaRow],
) -> CliResult<()> {
    let namer = config.compiler.namer();
    let Compilation { schema, report } = config
        .compiler
        .compiler(&namer)
        .strict(false)
        .compile(rows)?;

    let findings = validate_schema(&schema)
        .err()
        .map(|tree| tree.flatten())
        .unwrap_or_default()
        .into_iter()
        .map(|(route, message)| Finding { route, message })
        .collect();

    let outcome = CheckOutcome {
        diagnostics: report.diagnostics.into_iter().collect(),
        findings,
    };
    render(out, format, &outcome)?;

    match outcome.problems() {
        0 => Ok(()),
        count => Err(CliError::CheckFailed { count }),
    }
}

// ----------------------------------------------------------------------
// junctions
// ----------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct JunctionList(Vec<JunctionSummary>);

impl Display for JunctionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for junction in &self.0 {
            writeln!(f, "{junction}")?;
        }

        Ok(())
    }
}

pub fn list_junctions(
    out: &mut impl Write,
    config: &Config,
    format: Format,
    rows: &[MetaRow],
) -> CliResult<()> {
    let namer = config.compiler.namer();
    let Compilation { schema, .. } = config.compiler.compiler(&namer).compile(rows)?;

    render(out, format, &JunctionList(junctions(&schema)))
}

fn render<T: Display + Serialize>(out: &mut impl Write, format: Format, value: &T) -> CliResult<()> {
    match format {
        Format::Text => write!(out, "{value}").map_err(CliError::Write),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out).map_err(CliError::Write)
        }
    }
}
