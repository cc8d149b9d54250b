//! Configuration for the book store service
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a book store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Largest accepted request body (bytes)
    pub max_body_bytes: usize,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Load the built-in catalogue on startup
    pub seed: bool,

    // -------------------------------------------------------------------------
    // Response Configuration
    // -------------------------------------------------------------------------
    /// Render response bodies as indented JSON
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
            max_body_bytes: 1024 * 1024, // 1 MB
            seed: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the request body limit (in bytes)
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.config.max_body_bytes = bytes;
        self
    }

    /// Whether to load the built-in catalogue on startup
    pub fn seed(mut self, seed: bool) -> Self {
        self.config.seed = seed;
        self
    }

    /// Whether to indent response bodies
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
