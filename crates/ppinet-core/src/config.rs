//! Runtime configuration: upstream endpoints, credentials, preview size and
//! algorithm parameters.
//!
//! Loaded from TOML; every field has a default so a missing file or a
//! partial file is fine.
//!
//! ```toml
//! [biogrid]
//! access_key = "…"
//!
//! [string]
//! species = 9606
//!
//! [analysis]
//! preview_limit = 10
//!
//! [eigenvector]
//! max_iter = 500
//! tolerance = 1e-6
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::metrics::{CentralityConfig, EigenvectorConfig, PageRankConfig};

/// Environment variable that overrides `[biogrid] access_key`.
pub const BIOGRID_KEY_ENV: &str = "BIOGRID_ACCESS_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PpiConfig {
    #[serde(default)]
    pub biogrid: BioGridConfig,
    #[serde(default)]
    pub string: StringConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub eigenvector: EigenvectorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioGridConfig {
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default = "default_biogrid_url")]
    pub base_url: String,
}

impl Default for BioGridConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            base_url: default_biogrid_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringConfig {
    /// NCBI taxonomy ID. Default: 9606 (human).
    #[serde(default = "default_species")]
    pub species: u32,
    #[serde(default = "default_string_url")]
    pub base_url: String,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            species: default_species(),
            base_url: default_string_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Interactions kept before the graph is built. `0` keeps them all.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
        }
    }
}

impl PpiConfig {
    /// Parameters for the centrality engine.
    #[must_use]
    pub fn centrality(&self) -> CentralityConfig {
        CentralityConfig {
            pagerank: self.pagerank.clone(),
            eigenvector: self.eigenvector.clone(),
        }
    }

    /// The configured preview limit, `None` meaning "no limit".
    #[must_use]
    pub const fn preview_limit(&self) -> Option<usize> {
        match self.analysis.preview_limit {
            0 => None,
            n => Some(n),
        }
    }

    /// Apply environment overrides on top of file values.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let key = env::var(BIOGRID_KEY_ENV).ok();
        self.with_biogrid_key(key)
    }

    fn with_biogrid_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.biogrid.access_key = Some(key);
        }
        self
    }

    /// A copy safe to print: the access key is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if let Some(key) = &out.biogrid.access_key {
            out.biogrid.access_key = Some(mask(key));
        }
        out
    }
}

/// Default config file location: `<config dir>/ppinet/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ppinet/config.toml"))
}

/// Load configuration from `path`, or the default location when `None`.
///
/// A missing file yields defaults. Environment overrides are applied last.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<PpiConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path(),
    };

    let config = match path {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str::<PpiConfig>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        _ => PpiConfig::default(),
    };

    Ok(config.with_env_overrides())
}

fn mask(key: &str) -> String {
    let tail: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{tail}")
    }
}

fn default_biogrid_url() -> String {
    "https://webservice.thebiogrid.org/interactions/".to_string()
}

fn default_string_url() -> String {
    "https://string-db.org/api/json/network".to_string()
}

const fn default_species() -> u32 {
    9606
}

const fn default_preview_limit() -> usize {
    10
}
