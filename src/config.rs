//! Configuration handling: config file plus command line overrides

use crate::api::DEFAULT_BASE_URL;
use crate::state::Route;
use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Command line arguments
#[derive(Debug, Default, Parser)]
#[command(name = "estagio-admin", version, about = "Terminal admin panel for EstagioTech")]
pub struct Cli {
    /// Base URL of the backend API
    #[arg(long, env = "ESTAGIO_API_URL")]
    pub api_url: Option<String>,

    /// Screen to open, e.g. /adm/documento/edit/5
    #[arg(long)]
    pub route: Option<Route>,

    /// Give up on backend calls after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// User configuration for the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Base URL of the backend API
    pub api_base_url: Option<String>,
    /// Request timeout in seconds; unset means no timeout
    pub request_timeout_secs: Option<u64>,
    /// Route opened at startup
    pub start_route: Option<String>,
}

/// Effective settings after merging the config file and the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
    pub start_route: Route,
}

impl AdminConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("br", "estagiotech", "estagio-admin")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("estagio-admin.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let config: AdminConfig = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Command line values win over the file; the file wins over defaults
    pub fn resolve(self, cli: Cli) -> Result<Settings> {
        let start_route = match (cli.route, self.start_route) {
            (Some(route), _) => route,
            (None, Some(path)) => path
                .parse()
                .with_context(|| format!("invalid start_route {path:?} in config"))?,
            (None, None) => Route::default(),
        };

        Ok(Settings {
            api_base_url: cli
                .api_url
                .or(self.api_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: cli
                .timeout_secs
                .or(self.request_timeout_secs)
                .map(Duration::from_secs),
            start_route,
        })
    }
}
