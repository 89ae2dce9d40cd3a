//! TOML loading for [`SimConfig`].
//!
//! All keys are optional; missing ones take the [`SimConfig::default`]
//! value.
//!
//! ```toml
//! total_ticks           = 480
//! tick_duration_secs    = 60
//! start_unix_secs       = 1_700_000_000
//! agent_speed           = 1.5
//! output_interval_ticks = 30
//! ```

use std::path::Path;

use bdi_core::SimConfig;

use crate::{SimError, SimResult};

/// Parse and validate a config from TOML text.
pub fn parse_config(text: &str) -> SimResult<SimConfig> {
    let config: SimConfig = toml::from_str(text)?;
    config
        .validate()
        .map_err(|e| SimError::Config(e.to_string()))?;
    Ok(config)
}

/// Read, parse and validate a config file.
pub fn load_config(path: &Path) -> SimResult<SimConfig> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}
