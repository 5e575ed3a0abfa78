use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::{Matcher, SectorCategory, SectorTaxonomy, StageLadder};
use crate::models::ScoringWeights;

/// Allowed drift of the weight total from 1.0
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scoring weight {name}={value}: must be within [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("Scoring weights must sum to 1.0, got {0}")]
    WeightsTotal(f64),

    #[error("Invalid matching limits: default_limit={default_limit}, max_limit={max_limit}")]
    InvalidLimits { default_limit: u16, max_limit: u16 },
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    pub json_limit_bytes: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            json_limit_bytes: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Place profile stages (MVP, Revenue) on the funding-round ladder
    #[serde(default = "default_stage_aliases")]
    pub stage_aliases: bool,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Candidate count above which ranking runs on the blocking pool
    #[serde(default = "default_offload_threshold")]
    pub offload_threshold: usize,
    /// Categories merged into the built-in sector taxonomy
    #[serde(default)]
    pub extra_sectors: Vec<SectorCategory>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            stage_aliases: default_stage_aliases(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            offload_threshold: default_offload_threshold(),
            extra_sectors: Vec::new(),
        }
    }
}

fn default_stage_aliases() -> bool { true }
fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_offload_threshold() -> usize { 500 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_industry_weight")]
    pub industry: f64,
    #[serde(default = "default_stage_weight")]
    pub stage: f64,
    #[serde(default = "default_funding_weight")]
    pub funding: f64,
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            industry: default_industry_weight(),
            stage: default_stage_weight(),
            funding: default_funding_weight(),
            keyword: default_keyword_weight(),
        }
    }
}

fn default_industry_weight() -> f64 { 0.30 }
fn default_stage_weight() -> f64 { 0.25 }
fn default_funding_weight() -> f64 { 0.25 }
fn default_keyword_weight() -> f64 { 0.20 }

impl WeightsConfig {
    pub fn to_weights(&self) -> ScoringWeights {
        ScoringWeights {
            industry: self.industry,
            stage: self.stage,
            funding: self.funding,
            keyword: self.keyword,
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let named = [
            ("industry", self.industry),
            ("stage", self.stage),
            ("funding", self.funding),
            ("keyword", self.keyword),
        ];

        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::WeightOutOfRange { name, value });
            }
        }

        let total = self.to_weights().total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(SettingsError::WeightsTotal(total));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VMATCH_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.scoring.weights.validate()?;

        let (default_limit, max_limit) = (self.matching.default_limit, self.matching.max_limit);
        if default_limit == 0 || max_limit == 0 || default_limit > max_limit {
            return Err(SettingsError::InvalidLimits { default_limit, max_limit });
        }

        Ok(())
    }

    /// Build the matcher described by the scoring and matching sections
    pub fn matcher(&self) -> Matcher {
        let mut taxonomy = SectorTaxonomy::builtin();
        taxonomy.extend(self.matching.extra_sectors.iter().cloned());

        Matcher::new(self.scoring.weights.to_weights())
            .with_taxonomy(taxonomy)
            .with_stage_ladder(StageLadder::new(self.matching.stage_aliases))
    }
}
