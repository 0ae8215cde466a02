// SPDX-License-Identifier: MIT
//
// User configuration: ~/.config/palette-forge/config.toml
//
//   [generator]
//   token = "hf_..."          # or HUGGING_FACE_TOKEN
//   endpoint = "https://api-inference.huggingface.co/models"
//   model = "stabilityai/stable-diffusion-xl-base-1.0"
//   timeout_secs = 60
//
//   [history]
//   path = "/somewhere/history.json"
//   limit = 20
//
//   [preview]
//   language = "rust"

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use pf_preview::Language;
use pf_source::HuggingFaceConfig;
use pf_source::generate::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `generator.token`.
pub const TOKEN_ENV: &str = "HUGGING_FACE_TOKEN";

const APP_DIR: &str = "palette-forge";

// ─── Sections ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub history: HistoryConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub token: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: Option<PathBuf>,
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            limit: pf_history::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub language: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            language: Language::default().name().to_string(),
        }
    }
}

// ─── Loading ────────────────────────────────────────────────────────────────

impl Config {
    /// `<config_dir>/palette-forge/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `explicit`, or from [`default_path`](Self::default_path).
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Let a non-empty environment token win over the file.
    pub fn apply_env_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.generator.token = Some(token);
        }
    }

    /// Reject values no subcommand can work with.
    pub fn validate(&self) -> Result<()> {
        if self.generator.timeout_secs == 0 {
            bail!("generator.timeout_secs must be at least 1");
        }
        if self.history.limit == 0 {
            bail!("history.limit must be at least 1");
        }
        self.preview_language()?;
        Ok(())
    }

    pub fn preview_language(&self) -> Result<Language> {
        self.preview
            .language
            .parse()
            .context("invalid preview.language")
    }

    /// Generator settings; fails when no token is configured.
    pub fn hugging_face(&self) -> Result<HuggingFaceConfig> {
        let Some(token) = self.generator.token.as_deref().filter(|t| !t.trim().is_empty()) else {
            bail!("no Hugging Face token: set {TOKEN_ENV} or [generator] token in the config file");
        };
        Ok(HuggingFaceConfig {
            token: token.to_string(),
            endpoint: self.generator.endpoint.clone(),
            model: self.generator.model.clone(),
            timeout: Duration::from_secs(self.generator.timeout_secs),
        })
    }

    /// Configured history file, else `<data_dir>/palette-forge/history.json`.
    pub fn history_path(&self) -> PathBuf {
        self.history.path.clone().unwrap_or_else(|| {
            dirs_next::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("history.json")
        })
    }
}
