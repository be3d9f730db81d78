//! TOML configuration for the schema compiler.
//!
//! ```toml
//! [compiler]
//! strict = true
//!
//! [compiler.junction]
//! prefix = "mtm_"
//! max_name_len = 30
//! ```
//!
//! Every key is optional; an empty file yields the defaults.

pub mod error;

pub use error::{ConfigError, Result};

use metaschema_core::{Compiler, build::JUNCTION_STUB_LEN, naming::PrefixNamer};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub compiler: CompilerConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        let junction = &self.compiler.junction;

        match junction.max_name_len {
            Some(0) => Err(ConfigError::Invalid(
                "compiler.junction.max_name_len must be positive".to_string(),
            )),
            Some(max) if max < junction.prefix.len() + JUNCTION_STUB_LEN => {
                Err(ConfigError::Invalid(format!(
                    "compiler.junction.max_name_len ({max}) cannot hold prefix '{}' \
                     and a {JUNCTION_STUB_LEN}-character junction stub",
                    junction.prefix
                )))
            }
            _ => Ok(()),
        }
    }
}

///
/// CompilerConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Run the integrity pass and fail the compile on any finding.
    pub strict: bool,

    pub junction: JunctionConfig,
}

impl CompilerConfig {
    /// Physical namer for synthesized junction tables.
    #[must_use]
    pub fn namer(&self) -> PrefixNamer {
        PrefixNamer::new(self.junction.prefix.clone(), self.junction.max_name_len)
    }

    /// Compiler using `namer` with this config's strictness.
    #[must_use]
    pub fn compiler<'a>(&self, namer: &'a PrefixNamer) -> Compiler<'a> {
        Compiler::new().with_namer(namer).strict(self.strict)
    }
}

///
/// JunctionConfig
///
/// `max_name_len` falls back to the schema provider's identifier limit.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct JunctionConfig {
    pub prefix: String,
    pub max_name_len: Option<usize>,
}
