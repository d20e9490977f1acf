use std::sync::Arc;

use anyhow::Context;

use crate::core::Config;
use crate::reservations::ColumnMap;
use crate::store::{SheetStore, SheetsClient};

/// Server state - the explicitly constructed, injected dependencies
///
/// The store client is built once at startup and shared via `Arc`; there is
/// no implicit global handle. Cloning is a shallow copy.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Reservation store client
    store: Arc<dyn SheetStore>,
}

impl ServerState {
    /// Build the production state and verify the store is reachable.
    ///
    /// An unreachable store is fatal to the process (the service cannot do
    /// anything without it). A header that is missing required columns is
    /// only warned about here: schema problems are fixable live in the
    /// sheet and fail per-request, not process-wide.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let client = SheetsClient::new(config);
        let state = Self::with_store(config.clone(), Arc::new(client));

        let header = state
            .store
            .read_header_row()
            .await
            .context("reservation store is unreachable")?;

        match ColumnMap::from_header(&header) {
            Ok(_) => tracing::info!(columns = header.len(), "reservation store reachable"),
            Err(e) => tracing::warn!("store header incomplete at startup: {}", e),
        }

        Ok(state)
    }

    /// Build state around an existing store client (tests).
    pub fn with_store(config: Config, store: Arc<dyn SheetStore>) -> Self {
        Self { config, store }
    }

    /// The injected store client
    pub fn store(&self) -> &dyn SheetStore {
        self.store.as_ref()
    }
}
