use thiserror::Error;
use triversion::VersionValue;

#[derive(Error, Debug)]
pub enum Error {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("toml serialize: {0}")]
  TomlSer(#[from] toml::ser::Error),

  #[error("toml deserialize: {0}")]
  TomlDe(#[from] toml::de::Error),

  #[error("maximum version {maximum} must be greater than minimum version {minimum}")]
  InvalidRange {
    minimum: VersionValue,
    maximum: VersionValue,
  },

  #[error("version {0} is not supported")]
  Unsupported(VersionValue),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
