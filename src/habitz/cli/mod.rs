//! # CLI Layer
//!
//! One possible UI client for habitz. It is the only place that:
//! - parses arguments (clap),
//! - initialises logging,
//! - prompts the user,
//! - writes to stdout/stderr.
//!
//! Errors bubble up to `main.rs`, which prints them and exits with status 1.

mod commands;
mod confirm;
mod render;
mod setup;

pub use commands::run;
