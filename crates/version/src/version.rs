use crate::component::Component;
use crate::error::{Error, Result};
use crate::parse;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// An immutable `major.minor.patch` version.
///
/// Components are stored as `i32` and are never negative. Ordering compares
/// `major`, then `minor`, then `patch`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionValue {
  major: i32,
  minor: i32,
  patch: i32,
}

impl VersionValue {
  pub const ZERO: VersionValue = VersionValue {
    major: 0,
    minor: 0,
    patch: 0,
  };

  /// Fails with [`Error::OutOfRange`] on the first negative component.
  pub fn new(major: i32, minor: i32, patch: i32) -> Result<Self> {
    for (component, value) in Component::ALL.iter().zip(&[major, minor, patch]) {
      if *value < 0 {
        return Err(Error::OutOfRange {
          component: *component,
          value: *value,
        });
      }
    }

    Ok(VersionValue {
      major,
      minor,
      patch,
    })
  }

  /// Parses `1.2.3`, `1.2`, `1`, or the same with `-` separators.
  ///
  /// Surrounding whitespace is ignored, a trailing separator is tolerated,
  /// and negative components become `0`. Empty input, empty or non-numeric
  /// parts and more than three parts fail with [`Error::MalformedInput`].
  pub fn parse(input: &str) -> Result<Self> {
    let [major, minor, patch] = parse::parse_components(input)?;
    Ok(VersionValue {
      major,
      minor,
      patch,
    })
  }

  #[inline]
  pub fn major(&self) -> i32 {
    self.major
  }

  #[inline]
  pub fn minor(&self) -> i32 {
    self.minor
  }

  #[inline]
  pub fn patch(&self) -> i32 {
    self.patch
  }

  pub fn get(&self, component: Component) -> i32 {
    match component {
      Component::Major => self.major,
      Component::Minor => self.minor,
      Component::Patch => self.patch,
    }
  }

  pub fn as_tuple(&self) -> (i32, i32, i32) {
    (self.major, self.minor, self.patch)
  }
}

impl fmt::Display for VersionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
  }
}

impl FromStr for VersionValue {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    VersionValue::parse(s)
  }
}

impl<'a> TryFrom<&'a str> for VersionValue {
  type Error = Error;

  fn try_from(value: &'a str) -> Result<Self> {
    VersionValue::parse(value)
  }
}

impl TryFrom<i32> for VersionValue {
  type Error = Error;

  fn try_from(major: i32) -> Result<Self> {
    VersionValue::new(major, 0, 0)
  }
}

impl TryFrom<(i32, i32)> for VersionValue {
  type Error = Error;

  fn try_from((major, minor): (i32, i32)) -> Result<Self> {
    VersionValue::new(major, minor, 0)
  }
}

impl TryFrom<(i32, i32, i32)> for VersionValue {
  type Error = Error;

  fn try_from((major, minor, patch): (i32, i32, i32)) -> Result<Self> {
    VersionValue::new(major, minor, patch)
  }
}

impl From<VersionValue> for (i32, i32, i32) {
  fn from(v: VersionValue) -> Self {
    v.as_tuple()
  }
}
