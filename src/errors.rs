// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type InterviewResult<T> = Result<T, InterviewError>;

impl InterviewError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn session_error(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    pub fn audio_error(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }
}
