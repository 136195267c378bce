//! Runtime Configuration
//!
//! API base URL and log level, resolved once at startup.

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const API_URL_META: &str = "todo-api-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `<meta name="todo-api-url">`, then `TODO_API_URL` at build time, then the default
    pub fn resolve() -> Self {
        let base = meta_content(API_URL_META)
            .filter(|url| !url.trim().is_empty())
            .or_else(|| option_env!("TODO_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    pub fn todo_url(&self, id: u64) -> String {
        format!("{}/todos/{}/", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Log level from `TODO_LOG_LEVEL` at build time
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("TODO_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name='{}']", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = ApiConfig::default();
        assert_eq!(config.todos_url(), "http://localhost:8000/api/todos/");
        assert_eq!(config.todo_url(42), "http://localhost:8000/api/todos/42/");
        assert_eq!(config.todo_url(5_000_000_000), "http://localhost:8000/api/todos/5000000000/");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new(" https://example.com/api/ ");
        assert_eq!(config.base_url(), "https://example.com/api");
        assert_eq!(config.todos_url(), "https://example.com/api/todos/");
    }

    #[test]
    fn test_relative_base() {
        let config = ApiConfig::new("/api");
        assert_eq!(config.todo_url(5), "/api/todos/5/");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("chatty")), LevelFilter::Info);
    }
}
