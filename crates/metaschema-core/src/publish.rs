//! Shared handle on the current compiled schema.

use crate::model::schema::Schema;
use arc_swap::ArcSwap;
use std::sync::Arc;

///
/// SchemaCell
///
/// Readers take a snapshot with `load` and keep using it for as long as
/// they hold the `Arc`; `publish` swaps in a newly compiled schema without
/// blocking them.
///

pub struct SchemaCell {
    current: ArcSwap<Schema>,
}

impl SchemaCell {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            current: ArcSwap::from_pointee(schema),
        }
    }

    /// Replace the current schema, returning the one it displaced.
    pub fn publish(&self, schema: Schema) -> Arc<Schema> {
        self.current.swap(Arc::new(schema))
    }

    #[must_use]
    pub fn load(&self) -> Arc<Schema> {
        self.current.load_full()
    }
}

impl std::fmt::Debug for SchemaCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.load();
        f.debug_struct("SchemaCell")
            .field("schema", &current.name)
            .field("tables", &current.table_count())
            .finish()
    }
}
