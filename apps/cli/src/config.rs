use std::collections::HashMap;
use std::fs;

use anyhow::{bail, Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub database_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "https://eatgo-customer-api.ahastudio.com".into(),
            database_url: "sqlite://./data/goeat.db".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("goeat.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("database_url") {
                settings.database_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("GOEAT_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("GOEAT_DATABASE_URL") {
        settings.database_url = v;
    }

    settings
}

/// Parses and trims the configured server url so request paths can be
/// appended directly.
pub fn prepare_server_url(raw_server_url: &str) -> Result<String> {
    let trimmed = raw_server_url.trim();
    let parsed = Url::parse(trimmed).with_context(|| format!("invalid server url '{trimmed}'"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("server url '{trimmed}' must use http or https");
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Accepts either a sqlite url or a bare file path for the session store.
pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }
    if raw_database_url.starts_with("sqlite:") || raw_database_url.contains("://") {
        return raw_database_url.to_string();
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_plain_file_path_to_sqlite_url() {
        assert_eq!(
            normalize_database_url("./data/test.db"),
            "sqlite://./data/test.db"
        );
    }

    #[test]
    fn keeps_sqlite_urls_untouched() {
        assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_database_url("sqlite://./data/goeat.db"),
            "sqlite://./data/goeat.db"
        );
    }

    #[test]
    fn empty_database_url_falls_back_to_default() {
        assert_eq!(
            normalize_database_url("  "),
            Settings::default().database_url
        );
    }

    #[test]
    fn prepare_server_url_trims_trailing_slash() {
        assert_eq!(
            prepare_server_url("https://api.example.com/").expect("valid url"),
            "https://api.example.com"
        );
    }

    #[test]
    fn prepare_server_url_rejects_other_schemes() {
        assert!(prepare_server_url("ftp://api.example.com").is_err());
        assert!(prepare_server_url("not a url").is_err());
    }
}
