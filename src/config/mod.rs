//! Client configuration: defaults, TOML loading and validation.
//!
//! A [`Config`] is built once, adjusted by the caller, validated and then
//! shared read-only with the transport, producer and consumer as a
//! [`ValidatedConfig`].

mod advisory;
mod consumer;
mod metadata;
mod net;
mod producer;
mod validate;

use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use advisory::{Advisory, AdvisorySink, FnSink, TracingSink};
pub use consumer::{ConsumerConfig, ConsumerFetch, ConsumerReturn, ConsumerRetry};
pub use metadata::{MetadataConfig, MetadataRetry};
pub use net::NetConfig;
pub use producer::{ProducerConfig, ProducerFlush, ProducerReturn, ProducerRetry};

use crate::ConfigurationError;

/// Client id a [`Config`] starts with. Leaving it in place is reported as an
/// advisory since brokers log and audit requests by this id.
pub const DEFAULT_CLIENT_ID: &str = "flyq";

/// Everything a client session needs to know before it opens a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sent with every request for broker-side logging and auditing.
    pub client_id: String,

    /// Capacity of the internal and external channels. Lets the producer
    /// and consumer keep working in the background while user code runs.
    pub channel_buffer_size: i32,

    pub net: NetConfig,
    pub metadata: MetadataConfig,
    pub producer: ProducerConfig,
    pub consumer: ConsumerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            channel_buffer_size: 256,
            net: NetConfig::default(),
            metadata: MetadataConfig::default(),
            producer: ProducerConfig::default(),
            consumer: ConsumerConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` when given, otherwise the defaults. Keys missing from
    /// the file keep their default value. The result is not validated.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("parsing client config TOML")
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {:?}", path.as_ref()))?;
        Self::from_toml(&raw).with_context(|| format!("loading {:?}", path.as_ref()))
    }

    /// Validates and freezes the configuration.
    pub fn validated(self) -> Result<ValidatedConfig, ConfigurationError> {
        self.validate()?;
        Ok(ValidatedConfig(Arc::new(self)))
    }
}

/// A configuration that passed [`Config::validate`]. Read-only and cheap to
/// clone, so every collaborator can hold its own handle.
#[derive(Debug, Clone)]
pub struct ValidatedConfig(Arc<Config>);

impl Deref for ValidatedConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.0
    }
}

impl AsRef<Config> for ValidatedConfig {
    fn as_ref(&self) -> &Config {
        &self.0
    }
}

/// Durations are written the way people type them: `"250ms"`, `"10m"`.
mod humantime_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
