// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::category_field::CategoryCatalog;
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backend (e.g. `https://xyz.supabase.co`)
    pub supabase_url: String,
    /// Public anon key sent as the `apikey` header
    pub supabase_anon_key: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Ordered category names used for badge result lookups
    pub category_catalog: CategoryCatalog,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test_anon_key".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            category_catalog: CategoryCatalog::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let category_catalog = match env::var("CATEGORY_NAMES") {
            Ok(raw) => parse_catalog(&raw)?,
            Err(_) => CategoryCatalog::default(),
        };

        Ok(Self {
            supabase_url: env::var("SUPABASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_URL"))?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            category_catalog,
        })
    }
}

/// Parse a comma-separated, ordered list of category names.
fn parse_catalog(raw: &str) -> Result<CategoryCatalog, ConfigError> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    if names.is_empty() {
        return Err(ConfigError::Invalid {
            name: "CATEGORY_NAMES",
            reason: "no category names given".to_string(),
        });
    }

    Ok(CategoryCatalog::new(names))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("SUPABASE_URL", "https://example.supabase.co/");
        env::set_var("SUPABASE_ANON_KEY", " anon ");
        env::remove_var("CATEGORY_NAMES");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon");
        assert_eq!(config.port, 8080);
        assert_eq!(config.category_catalog, CategoryCatalog::default());
    }

    #[test]
    fn test_parse_catalog_keeps_order() {
        let catalog = parse_catalog(" 대기오염, 수질오염 ,,").unwrap();
        assert_eq!(catalog.position("대기오염"), Some(1));
        assert_eq!(catalog.position("수질오염"), Some(2));
    }

    #[test]
    fn test_parse_catalog_rejects_empty() {
        assert!(matches!(
            parse_catalog(" , "),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
