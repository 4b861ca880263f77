//! # medi-config
//!
//! Layered configuration loading for Medisort using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MEDISORT_*` prefix, `__` as separator)
//! 2. Project-level `.medisort/config.toml`
//! 3. User-level `~/.config/medisort/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MEDISORT_CLASSIFIER__TEXT_ALPHA` -> `classifier.text_alpha`,
//! `MEDISORT_ENRICH__ENABLED` -> `enrich.enabled`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use medi_config::MedisortConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = MedisortConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = MedisortConfig::load().expect("config");
//!
//! assert!(config.classifier.confidence_threshold <= 1.0);
//! ```

mod classifier;
mod enrich;
mod error;
mod extract;
mod pipeline;
mod resolver;

pub use classifier::ClassifierConfig;
pub use enrich::EnrichConfig;
pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use pipeline::PipelineConfig;
pub use resolver::ResolverConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MedisortConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub enrich: EnrichConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl MedisortConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`MEDISORT_*` prefix)
    /// 2. `.medisort/config.toml` (project-local)
    /// 3. `~/.config/medisort/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] when a field is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the embedding application and tests.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".medisort/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MEDISORT_").split("__"))
    }

    /// Range-check the unit-interval classifier fields and the jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("classifier.confidence_threshold", self.classifier.confidence_threshold),
            ("classifier.tie_epsilon", self.classifier.tie_epsilon),
            ("classifier.text_alpha", self.classifier.text_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} is outside [0, 1]"),
                });
            }
        }

        if self.extract.max_image_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extract.max_image_bytes".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if self.resolver.default_jurisdiction.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "resolver.default_jurisdiction".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("medisort").join("config.toml"))
    }
}
