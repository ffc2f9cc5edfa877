use crate::component::Component;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("{component} version cannot be negative: {value}")]
  OutOfRange { component: Component, value: i32 },

  #[error("invalid version format: {input:?}: {reason}")]
  MalformedInput {
    input: String,
    reason: MalformedReason,
  },
}

impl Error {
  pub(crate) fn malformed<T: Into<String>>(input: T, reason: MalformedReason) -> Self {
    Error::MalformedInput {
      input: input.into(),
      reason,
    }
  }

  #[inline]
  pub fn is_out_of_range(&self) -> bool {
    match *self {
      Error::OutOfRange { .. } => true,
      _ => false,
    }
  }

  #[inline]
  pub fn is_malformed(&self) -> bool {
    match *self {
      Error::MalformedInput { .. } => true,
      _ => false,
    }
  }
}

/// Why a version string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
  /// Empty or whitespace only, so there are no fields at all.
  Empty,
  TooManyFields(usize),
  /// A field that is not a base-10 `i32`, possibly empty.
  InvalidField(String),
}

impl fmt::Display for MalformedReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      MalformedReason::Empty => f.write_str("version string cannot be empty"),
      MalformedReason::TooManyFields(count) => {
        write!(f, "expected at most 3 version parts, got {}", count)
      }
      MalformedReason::InvalidField(ref field) => write!(f, "invalid version part {:?}", field),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
