use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_ALPHA_PMAX, DEFAULT_DELTA_T, DEFAULT_GS, DEFAULT_K, DEFAULT_PAS,
};

/// Generation parameters shared by the hourly model and the reference
/// estimate. `alpha_pmax` is stored as a fraction per °C (-0.0035), not as
/// the percent figure shown on data sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvConfig {
    pub k: f64,
    pub pas: f64,
    pub gs: f64,
    pub alpha_pmax: f64,
    pub delta_t: f64,
}

impl Default for PvConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            pas: DEFAULT_PAS,
            gs: DEFAULT_GS,
            alpha_pmax: DEFAULT_ALPHA_PMAX,
            delta_t: DEFAULT_DELTA_T,
        }
    }
}

impl PvConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
