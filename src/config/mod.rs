//! Configuration module for the ATM simulator
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AtmPaths;
pub use settings::Settings;
