use log::Level;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

pub const PAGE_SIZE: usize = 10;

/// Base URL of the analytics backend, baked in at build time via `API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("DASHBOARD_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn") => Level::Warn,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ => Level::Info,
    }
}

/// Joins `base` and `path` with exactly one slash between them.
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
