use crate::version::VersionValue;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

impl Serialize for VersionValue {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for VersionValue {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct VersionVisitor;

    impl<'de> Visitor<'de> for VersionVisitor {
      type Value = VersionValue;

      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a version string such as \"1.2.3\"")
      }

      fn visit_str<E>(self, v: &str) -> Result<VersionValue, E>
      where
        E: de::Error,
      {
        VersionValue::parse(v).map_err(E::custom)
      }
    }

    deserializer.deserialize_str(VersionVisitor)
  }
}
