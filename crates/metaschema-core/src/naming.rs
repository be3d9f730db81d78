//! Physical naming of synthesized tables.

use crate::model::{schema::Schema, types::Provider};

///
/// PhysicalNamer
///
/// Maps a synthesized table stub (for example `01011_01021_002`) to the
/// identifier used in the backing store. Supplied by the DDL layer.
///

pub trait PhysicalNamer {
    fn physical_name(&self, stub: &str, schema: &Schema) -> String;
}

/// Longest identifier the provider accepts.
#[must_use]
pub const fn provider_name_limit(provider: Provider) -> usize {
    match provider {
        Provider::Oracle => 30,
        Provider::MySql => 64,
        Provider::SqlServer => 128,
        Provider::Postgres | Provider::Sqlite | Provider::Undefined => 63,
    }
}

///
/// PrefixNamer
///
/// Prepends a fixed prefix and truncates to `max_len`, or to the schema
/// provider's identifier limit when unset.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixNamer {
    pub prefix: String,
    pub max_len: Option<usize>,
}

impl PrefixNamer {
    #[must_use]
    pub fn new(prefix: impl Into<String>, max_len: Option<usize>) -> Self {
        Self {
            prefix: prefix.into(),
            max_len,
        }
    }
}

impl PhysicalNamer for PrefixNamer {
    fn physical_name(&self, stub: &str, schema: &Schema) -> String {
        let limit = self
            .max_len
            .unwrap_or_else(|| provider_name_limit(schema.provider));

        let mut name = format!("{}{stub}", self.prefix);
        if name.len() > limit {
            let mut cut = limit;
            while !name.is_char_boundary(cut) {
                cut -= 1;
            }
            name.truncate(cut);
        }

        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(provider: Provider) -> Schema {
        Schema::new(1, "app".to_string(), provider)
    }

    #[test]
    fn default_namer_keeps_stub() {
        let namer = PrefixNamer::default();

        assert_eq!(
            namer.physical_name("01011_01021_002", &schema(Provider::Postgres)),
            "01011_01021_002"
        );
    }

    #[test]
    fn prefix_is_prepended_and_bounded() {
        let namer = PrefixNamer::new("mtm_", Some(10));

        assert_eq!(
            namer.physical_name("01011_01021_002", &schema(Provider::Postgres)),
            "mtm_01011_"
        );
    }

    #[test]
    fn provider_limit_applies_when_unset() {
        let namer = PrefixNamer::new("x".repeat(40), None);
        let name = namer.physical_name("01011_01021_002", &schema(Provider::Oracle));

        assert_eq!(name.len(), 30);
    }
}
