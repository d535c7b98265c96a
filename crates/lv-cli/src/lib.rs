//! Device activity log viewer CLI library.
//!
//! This crate provides the CLI interface over `lv-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
