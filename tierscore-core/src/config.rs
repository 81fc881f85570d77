//! Configuration file support for tierscore
//!
//! Loads classifier configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.tierscorerc.json` in the working directory
//! 3. `tierscore.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::category::CategoryMode;
use crate::scoring::{ScoringModel, DEFAULT_BASE_SCORE};
use crate::tier::{Tier, TierThresholds};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on base_score; keeps every composite score well inside u32
const MAX_BASE_SCORE: u32 = 10_000;

/// Configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierscoreConfig {
    /// Starting score before multipliers (default: 85)
    #[serde(default)]
    pub base_score: Option<u32>,

    /// Custom tier thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,

    /// How unknown category strings are handled (default: strict)
    #[serde(default)]
    pub category_mode: Option<CategoryMode>,

    /// Minimum composite score to report in matrix output
    #[serde(default)]
    pub min_score: Option<u32>,

    /// Only report this tier (1, 2 or 3) in matrix output
    #[serde(default)]
    pub tier: Option<u8>,

    /// Maximum number of results to show
    #[serde(default)]
    pub top: Option<usize>,
}

/// Custom tier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Lowest score in tier 1 (default: 85)
    pub tier_1: Option<u32>,
    /// Lowest score in tier 2 (default: 70)
    pub tier_2: Option<u32>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub base_score: u32,
    pub tier_1_threshold: u32,
    pub tier_2_threshold: u32,
    pub category_mode: CategoryMode,
    /// Filters
    pub min_score: Option<u32>,
    pub tier: Option<Tier>,
    pub top_n: Option<usize>,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl TierscoreConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(base) = self.base_score {
            if base == 0 {
                anyhow::bail!("base_score must be positive (got {})", base);
            }
            if base > MAX_BASE_SCORE {
                anyhow::bail!(
                    "base_score must be at most {} (got {})",
                    MAX_BASE_SCORE,
                    base
                );
            }
        }

        // Validate thresholds are positive and ordered
        if let Some(ref t) = self.thresholds {
            let defaults = TierThresholds::default();
            let tier_1 = t.tier_1.unwrap_or(defaults.tier_1);
            let tier_2 = t.tier_2.unwrap_or(defaults.tier_2);

            if tier_1 == 0 {
                anyhow::bail!("thresholds.tier_1 must be positive (got {})", tier_1);
            }
            if tier_2 == 0 {
                anyhow::bail!("thresholds.tier_2 must be positive (got {})", tier_2);
            }
            if tier_2 >= tier_1 {
                anyhow::bail!(
                    "thresholds.tier_2 ({}) must be less than thresholds.tier_1 ({})",
                    tier_2,
                    tier_1
                );
            }
        }

        if let Some(n) = self.tier {
            if Tier::from_number(n).is_none() {
                anyhow::bail!("tier must be 1, 2 or 3 (got {})", n);
            }
        }

        if self.top == Some(0) {
            anyhow::bail!("top must be at least 1");
        }

        Ok(())
    }

    /// Resolve config into the form used by the classifier
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let defaults = TierThresholds::default();
        let (tier_1, tier_2) = match &self.thresholds {
            Some(t) => (
                t.tier_1.unwrap_or(defaults.tier_1),
                t.tier_2.unwrap_or(defaults.tier_2),
            ),
            None => (defaults.tier_1, defaults.tier_2),
        };

        Ok(ResolvedConfig {
            base_score: self.base_score.unwrap_or(DEFAULT_BASE_SCORE),
            tier_1_threshold: tier_1,
            tier_2_threshold: tier_2,
            category_mode: self.category_mode.unwrap_or_default(),
            min_score: self.min_score,
            tier: self.tier.and_then(Tier::from_number),
            top_n: self.top,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Scoring model described by this config
    pub fn model(&self) -> ScoringModel {
        ScoringModel {
            base_score: self.base_score,
            thresholds: TierThresholds {
                tier_1: self.tier_1_threshold,
                tier_2: self.tier_2_threshold,
            },
        }
    }

    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        TierscoreConfig::default().resolve()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize resolved config")
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.tierscorerc.json`
/// 2. `tierscore.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(TierscoreConfig, PathBuf)>> {
    for name in [".tierscorerc.json", "tierscore.config.json"] {
        let path = dir.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<TierscoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: TierscoreConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in `dir`.
/// Returns default config if nothing is found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (TierscoreConfig::default(), None),
        }
    };

    match &source_path {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
