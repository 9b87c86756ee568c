use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use super::validation::{validate_base_url, validate_page_size};
use crate::utils::{non_blank, resolve_path};
use portal_domain::RuntimeConfig;

pub const CONFIG_ENV: &str = "PORTAL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./portal.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub session_path: String,
    pub export_dir: String,
    pub log_dir: Option<String>,
    pub log_filter: String,
    pub admin_page_size: u32,
    pub events_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_seconds: 15,
            session_path: "./session.toml".to_string(),
            export_dir: "./exports".to_string(),
            log_dir: None,
            log_filter: "warn".to_string(),
            admin_page_size: 20,
            events_page_size: 50,
        }
    }
}

impl AppConfig {
    /// Loads from `PORTAL_CONFIG` (default `./portal.toml`).
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path)).await
    }

    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)
                .map_err(|err| anyhow!("invalid {}: {}", file_path.display(), err))?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.log_dir = non_blank(self.log_dir.take());
        if self.log_filter.trim().is_empty() {
            self.log_filter = "warn".to_string();
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.session_path = resolve_path(base, &self.session_path);
        self.export_dir = resolve_path(base, &self.export_dir);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.api_base_url)?;
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.session_path.trim().is_empty() {
            return Err(anyhow!("session_path must not be empty"));
        }
        if self.export_dir.trim().is_empty() {
            return Err(anyhow!("export_dir must not be empty"));
        }
        validate_page_size("admin_page_size", self.admin_page_size)?;
        validate_page_size("events_page_size", self.events_page_size)?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            admin_page_size: self.admin_page_size,
            events_page_size: self.events_page_size,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PORTAL_API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Some(value) = lookup("PORTAL_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("PORTAL_SESSION_PATH") {
            self.session_path = value;
        }
        if let Some(value) = lookup("PORTAL_EXPORT_DIR") {
            self.export_dir = value;
        }
        if let Some(value) = lookup("PORTAL_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Some(value) = lookup("PORTAL_LOG_FILTER") {
            self.log_filter = value;
        }
        if let Some(value) = lookup("PORTAL_ADMIN_PAGE_SIZE") {
            self.admin_page_size = value.parse().unwrap_or(self.admin_page_size);
        }
        if let Some(value) = lookup("PORTAL_EVENTS_PAGE_SIZE") {
            self.events_page_size = value.parse().unwrap_or(self.events_page_size);
        }
    }
}
