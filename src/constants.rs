// UI Constants
pub const HEAVY_DOWN_AND_RIGHT: char = '┏';
pub const HEAVY_DOWN_AND_LEFT: char = '┓';
pub const HEAVY_UP_AND_RIGHT: char = '┗';
pub const HEAVY_UP_AND_LEFT: char = '┛';
pub const HEAVY_HORIZONTAL: char = '━';
pub const HEAVY_VERTICAL: char = '┃';

pub const HEADER_WIDTH: usize = 60;
pub const TRANSCRIPT_WIDTH: usize = 80;

// API Constants
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const CHAT_ENDPOINT: &str = "/chat";
pub const RESET_ENDPOINT: &str = "/reset";
pub const RESET_ACK_STATUS: &str = "reset";

// Session storage keys
pub const SCENARIO_KEY: &str = "scenario";
pub const LEVEL_KEY: &str = "level";

// Config
pub const CONFIG_DIR_NAME: &str = "interview-bot";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const SERVER_URL_ENV: &str = "INTERVIEW_BOT_SERVER_URL";
pub const LOG_LEVEL_ENV: &str = "INTERVIEW_BOT_LOG_LEVEL";
