#![deny(unsafe_code)]

pub mod config_file;
pub mod error;
pub mod paths;
pub mod settings;

pub use crate::error::ConfigError;
pub use crate::paths::{CONFIG_ENV_VAR, config_path};
pub use crate::settings::{
    ChromaConfig, DEFAULT_BRAND_PALETTE, DEFAULT_OCR_CONFIDENCE, ScoringSettings,
};
