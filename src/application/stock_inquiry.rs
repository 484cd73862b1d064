//! Product stock inquiry page.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{Schema, StockItem};
use crate::error::Result;
use crate::port::Backend;

/// Lists current stock per product and filters it.
pub struct StockInquiry<B> {
    backend: Arc<B>,
    schema: Schema,
    items: Vec<StockItem>,
}

impl<B: Backend> StockInquiry<B> {
    pub fn new(backend: Arc<B>, schema: Schema) -> Self {
        Self {
            backend,
            schema,
            items: Vec::new(),
        }
    }

    pub async fn load(&mut self) -> Result<&[StockItem]> {
        match self.backend.stock(&self.schema).await {
            Ok(items) => {
                debug!(count = items.len(), "Loaded stock");
                self.items = items;
                Ok(&self.items)
            }
            Err(e) => {
                error!(error = %e, schema = %self.schema, "Stock inquiry failed");
                Err(e)
            }
        }
    }

    /// Items whose code, name or spec contains `query`, ignoring case.
    pub fn filter(&self, query: &str) -> Vec<&StockItem> {
        self.items.iter().filter(|i| i.matches(query)).collect()
    }
}
