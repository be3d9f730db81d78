use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "metaschema",
    about = "Compile metadata row dumps into a schema graph",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file
    #[arg(long, short = 'c', global = true, env = "METASCHEMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log compile phases and diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a row dump and print a summary of the schema
    Compile {
        /// JSON array of metadata rows; `-` reads stdin
        rows: PathBuf,

        /// Run the integrity pass regardless of config
        #[arg(long)]
        strict: bool,
    },

    /// Compile leniently, then report diagnostics and integrity findings
    Check {
        /// JSON array of metadata rows; `-` reads stdin
        rows: PathBuf,
    },

    /// List the junction tables synthesized for many-to-many relations
    Junctions {
        /// JSON array of metadata rows; `-` reads stdin
        rows: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
