//! certdrift core library.
//!
//! This crate exposes programmatic APIs for running a certificate lint
//! regression check: every certificate under a directory is posted to a
//! remote linter and the warning tally is compared with known results.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `baseline`: Known-results loader.
//! - `client`: Remote lint client (`LintClient` trait and HTTP impl).
//! - `scan`: Lazy directory scanner driving the client.
//! - `aggregate`: Response parsing and warning tally.
//! - `compare`: Diff of the tally against known results.
//! - `harness`: Sequential runner tying the stages together.
//! - `models`: Data models for findings, known results, and reports.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod baseline;
pub mod cli;
pub mod client;
pub mod compare;
pub mod config;
pub mod error;
pub mod harness;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
