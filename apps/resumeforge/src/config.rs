use std::path::PathBuf;

use anyhow::{bail, Result};

/// Process configuration loaded from environment variables.
/// Every variable is optional; the core works with no configuration at all.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Template catalog JSON. Built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Origin prefixed onto root-relative thumbnail paths (detached dev frontend).
    pub asset_base: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let asset_base = match optional_env("RESUMEFORGE_ASSET_BASE") {
            Some(base) => Some(validate_asset_base(&base)?),
            None => None,
        };

        Ok(Config {
            catalog_path: optional_env("RESUMEFORGE_CATALOG").map(PathBuf::from),
            asset_base,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts `http://` / `https://` origins and strips a trailing slash so that
/// joining with a root-relative path never produces `//`.
fn validate_asset_base(raw: &str) -> Result<String> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        bail!("RESUMEFORGE_ASSET_BASE must be an http(s) origin, got '{raw}'");
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_base_trailing_slash_stripped() {
        let base = validate_asset_base("http://127.0.0.1:5000/").unwrap();
        assert_eq!(base, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_asset_base_rejects_non_http() {
        assert!(validate_asset_base("ftp://assets").is_err());
        assert!(validate_asset_base("/static").is_err());
    }
}
