//! `lostfound` command-line harness library.
//!
//! Plays the part of the page layer for batch use: loads JSON inputs, calls
//! `lostfound_core`, and shapes results for printing. The binary entrypoint
//! lives in `main.rs`.

pub mod commands;
pub mod config;
pub mod error;
