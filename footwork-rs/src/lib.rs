//! Footwork CLI library
//!
//! Command definitions and helpers shared by the `footwork` binary.

pub mod cli;
pub mod commands;
pub mod utils;
