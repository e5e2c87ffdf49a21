//! Core engine services: configuration loading

pub mod config;

pub use config::{AppConfig, ConfigError, FrameConfig};
