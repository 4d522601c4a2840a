//! Leadwatch - election lead change watcher.
//!
//! Polls a public election results feed once per invocation, reduces the
//! tally to the tracked candidate's lead over the strongest opponent plus
//! the fraction of returns processed, and sends a Telegram message when the
//! processed fraction has moved since the previous run.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from a JSON file with env fallback
//! - [`domain`] - Snapshot type, margin arithmetic, message formatting
//! - [`gma`] - Results feed client and response shapes
//! - [`store`] - Snapshot persistence between runs
//! - [`telegram`] - Telegram Bot API notifier behind the [`telegram::Notify`] trait
//! - [`app`] - The one-pass pipeline
//! - [`error`] - Error types for the crate
//!
//! The tool is built to run under an external timer (cron, systemd timer);
//! every error aborts the run and the next invocation simply tries again.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gma;
pub mod store;
pub mod telegram;
