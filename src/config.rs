use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::shared::ActorId;

// ============================================================================
// Service Configuration
// ============================================================================
//
// Sources, lowest to highest precedence:
// 1. Built-in defaults (log filter only)
// 2. Optional TOML file
// 3. Environment variables (CUSTOMER_SERVICE_ACTOR, CUSTOMER_SERVICE_LOG)
//
// There is no default actor: one of the file or the environment must name it.
//
// ============================================================================

pub const ACTOR_ENV: &str = "CUSTOMER_SERVICE_ACTOR";
pub const LOG_ENV: &str = "CUSTOMER_SERVICE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info,customer_service=debug";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Actor recorded in audit metadata for operations run by this process
    pub actor: Option<String>,
    /// `EnvFilter` directive used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            actor: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load defaults, the TOML file at `path` (if given) and environment
    /// overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// `load` with an explicit variable lookup in place of the process
    /// environment.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.with_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("TOML parsing error")
    }

    /// Apply overrides from a key lookup (the process environment in `load`).
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(actor) = lookup(ACTOR_ENV) {
            self.actor = Some(actor);
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.actor_id()?;
        Ok(())
    }

    pub fn actor_id(&self) -> Result<ActorId> {
        let actor = self.actor.clone().with_context(|| {
            format!("No actor configured: set `actor` in the config file or {}", ACTOR_ENV)
        })?;
        ActorId::new(actor).context("Invalid actor in service configuration")
    }
}
