//! Store fixture configuration
//!
//! A fixture holds the raw text captured from the brand site and from the
//! retailer site for one store. A missing key means the element could not
//! be located on that page.
//!
//! ```toml
//! [store]
//! name = "Example Retailer Paris"
//!
//! [brand]
//! address = "1 Rue de la Paix, 75002 Paris"
//! phone_number = "+33 1 42 68 53 00"
//! opening_hours = """
//! Monday 10:00-19:00
//! Sunday closed
//! """
//!
//! [retailer]
//! address = "1 rue de la Paix\n75002 Paris"
//! phone_number = "0033142685300"
//!
//! [output]
//! format = "console"
//! ```

use anyhow::Context;
use compliance_engine::{FactKind, StaticFactSource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::reporter::OutputFormat;

/// Problems with a fixture that parsed but cannot be checked
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("[store] name must not be empty")]
    EmptyStoreName,

    #[error("neither [brand] nor [retailer] defines any fact")]
    NoFacts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub brand: SourceConfig,
    #[serde(default)]
    pub retailer: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load and validate a fixture from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate a fixture from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::EmptyStoreName);
        }
        if self.brand.is_empty() && self.retailer.is_empty() {
            return Err(ConfigError::NoFacts);
        }
        Ok(())
    }

    pub fn brand_source(&self) -> StaticFactSource {
        self.brand.to_source("brand")
    }

    pub fn retailer_source(&self) -> StaticFactSource {
        self.retailer.to_source("retailer")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub name: String,
}

/// Raw fact text captured from one site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub opening_hours: Option<String>,
}

impl SourceConfig {
    pub fn get(&self, kind: FactKind) -> Option<&str> {
        match kind {
            FactKind::Address => self.address.as_deref(),
            FactKind::PhoneNumber => self.phone_number.as_deref(),
            FactKind::OpeningHours => self.opening_hours.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FactKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }

    pub fn to_source(&self, name: &str) -> StaticFactSource {
        FactKind::ALL
            .iter()
            .fold(StaticFactSource::new(name), |source, kind| {
                source.with_optional_fact(*kind, self.get(*kind))
            })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
