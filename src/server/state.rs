//! Server State
//!
//! Shared state handed to every handler, wrapped in `Arc` by the router.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct ServerState {
    /// Host configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn dist_dir(&self) -> &Path {
        &self.config.dist_dir
    }

    /// The single-page entry point every unknown path falls back to
    pub fn index_file(&self) -> PathBuf {
        self.config.dist_dir.join("index.html")
    }

    /// Whether a UI build is present to serve
    pub fn has_ui(&self) -> bool {
        self.index_file().is_file()
    }
}
