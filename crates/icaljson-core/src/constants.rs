/// Application name used in CLI output and generated docs
pub const APP_NAME: &str = "icaljson";

/// Prefix for environment variable configuration
pub const ENV_PREFIX: &str = "ICALJSON";
pub const OUTPUT_PATH_ENV: &str = const_str::concat!(ENV_PREFIX, "_OUTPUT_PATH");
pub const LOG_LEVEL_ENV: &str = const_str::concat!(ENV_PREFIX, "_LOG_LEVEL");

/// Optional settings file looked up in the working directory (`icaljson.toml`)
pub const CONFIG_FILE_STEM: &str = APP_NAME;

/// File extensions accepted by the input sniff check, lower case, without dot
pub const ICAL_EXTENSIONS: &[&str] = &["ics", "ical", "txt"];

/// Suffix appended to the input file stem when no output path is configured
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_parsed.json";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
