use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::http::connection::DEFAULT_READ_BUFFER_SIZE;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Upper bound on the bytes taken from one read; a request must fit.
    pub read_buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Root for `/files/` reads and writes.
    pub directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4221".to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Command line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "tern", version, about = "Minimal HTTP/1.1 server")]
pub struct Cli {
    /// Directory path to serve files from
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Defaults overlaid with the process environment.
    pub fn load() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Overlays `LISTEN` and `SERVE_DIR` as returned by `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Some(dir) = lookup("SERVE_DIR") {
            self.files.directory = PathBuf::from(dir);
        }
        self
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("invalid configuration")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Resolves the final configuration: defaults, then the config file,
    /// then the environment, then flags.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let mut cfg = base.with_env(|key| std::env::var(key).ok());

        if let Some(dir) = cli.directory {
            cfg.files.directory = dir;
        }
        if let Some(addr) = cli.listen {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }
}
