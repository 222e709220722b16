//! Bridge configuration
//!
//! ```rust
//! use kwargs_bridge::BridgeConfig;
//!
//! let config = BridgeConfig::from_toml("max_depth = 16").unwrap();
//! assert_eq!(config.max_depth, 16);
//! assert_eq!(BridgeConfig::default().max_depth, 128);
//! ```

use serde::Deserialize;

/// Default nesting limit, matching serde_json's parser recursion limit
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Deepest container nesting either direction will descend into.
    /// The root node is depth 0.
    pub max_depth: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse bridge configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse bridge config: {}", e))
    }
}
