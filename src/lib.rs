// src/lib.rs

pub mod api;
pub mod audio;
pub mod catalog;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod repl;
pub mod session;
pub mod transcript;

pub use client::{ChatClient, ResetOutcome, SubmitOutcome, View};
pub use config::Config;
pub use errors::{InterviewError, InterviewResult};
