//! Macsweep library crate
//!
//! This crate provides both the CLI binary and a library API for programmatic use

pub mod catalog;
pub mod cleaner;
pub mod cli;
pub mod docker;
pub mod progress;
pub mod prompt;
pub mod scanner;
pub mod size;
pub mod theme;
pub mod utils;
pub mod walker;
