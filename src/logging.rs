// src/logging.rs

use crate::models::ApiCallLog;
use log::{log, Level, LevelFilter};

pub const API_LOG_TARGET: &str = "api_calls";

/// Below the default filter, so call records stay off the terminal while a
/// reply spinner is drawing.
pub const API_LOG_LEVEL: Level = Level::Debug;

/// Installs the global logger. `RUST_LOG`, when set, takes precedence over
/// the configured level.
pub fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed (tests, embedding).
    let _ = builder.format_timestamp_millis().try_init();
}

fn format_api_call(log: &ApiCallLog) -> String {
    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    )
}

/// Logs an API call on the `api_calls` target.
pub fn log_api_call(log: &ApiCallLog) {
    log!(target: API_LOG_TARGET, API_LOG_LEVEL, "{}", format_api_call(log));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_api_calls_hidden_at_default_level() {
        assert!(API_LOG_LEVEL > LevelFilter::Info);
        assert!(API_LOG_LEVEL <= LevelFilter::Debug);
    }

    #[test]
    fn test_format_api_call() {
        let log = ApiCallLog {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            endpoint: "http://127.0.0.1:5000/chat".to_string(),
            request_summary: "chat".to_string(),
            response_status: 200,
            response_time_ms: 42,
        };
        assert_eq!(
            format_api_call(&log),
            "[2024-05-01T12:00:00+00:00] http://127.0.0.1:5000/chat - chat - Status: 200 - Time: 42ms"
        );
    }
}
