//! Command-line interface module
//!
//! Implements the CLI commands using clap:
//! - (default): run the clock
//! - config init: Initialize configuration file

pub mod config;
pub mod run;
