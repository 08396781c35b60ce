use crate::config::ServerConfig;
use crate::error::ServerResult;
use records::TracingDiagnostics;
use std::sync::Arc;
use store::RecordStore;

/// Shared application state
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Record store (read-only, shared across requests)
    pub store: Arc<RecordStore>,
}

impl ServerState {
    /// Create new server state, loading the store from `config.data_path`
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = userdir::open_store(&config.directory(), Arc::new(TracingDiagnostics))?;
        Ok(Self::with_store(config, store))
    }

    /// Create server state around an already-built store
    pub fn with_store(config: ServerConfig, store: RecordStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub records: usize,
}
