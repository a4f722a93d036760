//! Core application setup and shared resources.
//!
//! Handles plugin registration, window configuration, and the resources that
//! carry the loaded flow map sequence and command-line settings into the ECS.

/// Application setup and system scheduling for the Bevy engine.
pub mod app_setup;

/// Loaded sequence and runtime settings resources.
pub mod settings;

/// Primary window configuration.
pub mod window_config;
