// Module declarations for the NEDO PV generation estimator

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod pv_config;
}

// Data loaders
pub mod data {
    pub mod nedo_loader;
}

// Model definitions
pub mod models {
    pub mod channel;
}

// Core pipeline
pub mod core {
    pub mod generation;
    pub mod pipeline;
}

// Analysis and reporting
pub mod analysis {
    pub mod monthly;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used types
pub use crate::config::pv_config::PvConfig;
pub use crate::core::pipeline::PvEstimate;
pub use crate::data::nedo_loader::{load_nedo_csv, NedoLoadError};
pub use crate::models::channel::Channel;
