use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use triversion::VersionValue;

pub mod error;

use error::*;

pub const CONFIG_FILE: &str = "triversion.toml";
pub const ENV_MINIMUM: &str = "TRIVERSION_MINIMUM";
pub const ENV_MAXIMUM: &str = "TRIVERSION_MAXIMUM";

/// Range of accepted versions: `minimum` inclusive, `maximum` exclusive.
///
/// Deserializing fills in a missing `minimum` with `0.0.0` and fails when
/// `maximum` is not above `minimum`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionPolicy {
  pub minimum: VersionValue,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub maximum: Option<VersionValue>,
}

#[derive(Debug, Deserialize)]
struct TomlConfig {
  minimum: Option<VersionValue>,
  maximum: Option<VersionValue>,
}

impl From<TomlConfig> for VersionPolicy {
  fn from(config: TomlConfig) -> Self {
    VersionPolicy {
      minimum: config.minimum.unwrap_or(VersionValue::ZERO),
      maximum: config.maximum,
    }
  }
}

impl<'de> Deserialize<'de> for VersionPolicy {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let policy = VersionPolicy::from(TomlConfig::deserialize(deserializer)?);
    policy
      .validate()
      .map_err(<D::Error as de::Error>::custom)?;
    Ok(policy)
  }
}

impl Default for VersionPolicy {
  fn default() -> Self {
    VersionPolicy {
      minimum: VersionValue::ZERO,
      maximum: None,
    }
  }
}

impl VersionPolicy {
  pub fn new(minimum: VersionValue, maximum: Option<VersionValue>) -> Result<Self> {
    let policy = VersionPolicy { minimum, maximum };
    policy.validate()?;
    Ok(policy)
  }

  pub fn from_env() -> Result<Self> {
    Self::from_env_with(|key| std::env::var(key).ok())
  }

  fn from_env_with<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = VersionPolicy::default();

    config.apply_env_with(lookup);
    config.validate()?;

    Ok(config)
  }

  pub fn load() -> Result<Self> {
    Self::load_from(CONFIG_FILE)
  }

  pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!("loading version policy: {}", path.display());

    let mut config = Self::parse_toml(&fs::read_to_string(path)?)?;

    config.apply_env();
    config.validate()?;

    Ok(config)
  }

  /// Parses a policy without applying environment overrides.
  pub fn from_toml_str(s: &str) -> Result<Self> {
    let config = Self::parse_toml(s)?;
    config.validate()?;
    Ok(config)
  }

  pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    fs::write(path, toml::to_string_pretty(self)?).map_err(Into::into)
  }

  pub fn accepts(&self, version: &VersionValue) -> bool {
    *version >= self.minimum && self.maximum.map_or(true, |maximum| *version < maximum)
  }

  pub fn check(&self, version: &VersionValue) -> Result<()> {
    if self.accepts(version) {
      Ok(())
    } else {
      tracing::warn!(
        "version {} rejected by policy: minimum = {}, maximum = {:?}",
        version,
        self.minimum,
        self.maximum.map(|v| v.to_string())
      );
      Err(Error::Unsupported(*version))
    }
  }

  fn parse_toml(s: &str) -> Result<Self> {
    let config: TomlConfig = toml::from_str(s)?;
    Ok(config.into())
  }

  fn validate(&self) -> Result<()> {
    match self.maximum {
      Some(maximum) if maximum <= self.minimum => Err(Error::InvalidRange {
        minimum: self.minimum,
        maximum,
      }),
      _ => Ok(()),
    }
  }

  fn apply_env(&mut self) {
    use std::env;

    self.apply_env_with(|key| env::var(key).ok())
  }

  fn apply_env_with<F>(&mut self, lookup: F)
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(version) = env_version(&lookup, ENV_MINIMUM) {
      self.minimum = version;
    }

    if let Some(version) = env_version(&lookup, ENV_MAXIMUM) {
      self.maximum = Some(version);
    }
  }
}

fn env_version<F>(lookup: &F, key: &str) -> Option<VersionValue>
where
  F: Fn(&str) -> Option<String>,
{
  let value = lookup(key)?;
  match VersionValue::parse(&value) {
    Ok(version) => {
      tracing::debug!("{} = {}", key, version);
      Some(version)
    }
    Err(err) => {
      tracing::warn!("ignoring {}: {}", key, err);
      None
    }
  }
}
