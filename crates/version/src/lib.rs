//! A three component `major.minor.patch` version value.
//!
//! Values are built either from a numeric triple, which rejects negative
//! components, or from text, which clamps negative components to zero and
//! rejects anything that is not one to three integer fields separated by
//! `.` or `-`.

mod component;
pub mod error;
mod parse;
mod serde_impl;
mod version;

pub use component::Component;
pub use error::{Error, MalformedReason, Result};
pub use version::VersionValue;
