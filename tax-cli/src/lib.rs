//! Command-line front end for the Swiss tax engine.
//!
//! The binary lives in `main.rs`; this library holds the pieces it is built
//! from so they can be tested without spawning a process.

pub mod config;
pub mod logging;
pub mod profile_loader;
pub mod report;
