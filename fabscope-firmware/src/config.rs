//! Configuration loading
//!
//! `scope.toml` is embedded at build time (and validated by `build.rs`).
//! Falls back to defaults if it still fails to parse at runtime.

use defmt::*;

use fabscope_core::config::{parse_config, ScopeConfig};
use fabscope_protocol::CAPTURE_LEN;

/// Embedded configuration (compiled into firmware)
/// Edit scope.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../scope.toml");

/// Parse the embedded configuration
pub fn load() -> ScopeConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: period={}us ({} Hz, {}us window), baud={}, trigger={}",
                config.sample_period_us,
                config.sample_rate_hz(),
                config.window_us(CAPTURE_LEN),
                config.baudrate,
                config.trigger_level
            );
            config
        }
        Err(e) => {
            error!("Failed to parse scope.toml line {}: {:?}", e.line, e.kind);
            error!("Using default configuration");
            ScopeConfig::default()
        }
    }
}
