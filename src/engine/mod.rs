//! Engine instance, request protocol and worker thread.
//!
//! The `Engine` owns one board and answers `Request`s in arrival order.
//! `EngineWorker` runs an engine on its own thread behind a channel so an
//! interactive front end never blocks on a search; `command` turns text
//! lines into requests for the command-line host.

pub mod command;
mod config;
mod controller;
mod options;
mod protocol;
mod worker;

pub use config::EngineConfig;
pub use controller::Engine;
pub use options::{EngineOption, OptionError, MAX_MEMO_SLOTS};
pub use protocol::{EngineError, Operation, Reply, Request, Response};
pub use worker::{EngineHandle, EngineWorker};
