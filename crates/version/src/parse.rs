use crate::component::Component;
use crate::error::{Error, MalformedReason, Result};

const DELIMITERS: [char; 2] = ['.', '-'];
const MAX_FIELDS: usize = 3;

/// Parses `input` into normalized `[major, minor, patch]`.
pub(crate) fn parse_components(input: &str) -> Result<[i32; 3]> {
  // only an empty string splits into zero fields
  let fields = split_fields(input.trim());
  if fields.is_empty() {
    return Err(Error::malformed(input, MalformedReason::Empty));
  }
  if fields.len() > MAX_FIELDS {
    return Err(Error::malformed(
      input,
      MalformedReason::TooManyFields(fields.len()),
    ));
  }

  let mut values = [None; MAX_FIELDS];
  for (slot, field) in values.iter_mut().zip(&fields) {
    match parse_field(field) {
      Some(value) => *slot = Some(value),
      None => {
        return Err(Error::malformed(
          input,
          MalformedReason::InvalidField(field.to_string()),
        ))
      }
    }
  }

  let mut components = [0; MAX_FIELDS];
  for ((component, slot), value) in Component::ALL.iter().zip(&mut components).zip(&values) {
    *slot = normalize(*component, *value);
  }
  Ok(components)
}

/// Splits on `.` and `-`, keeping empty fields.
///
/// A single terminating delimiter does not produce a trailing empty field,
/// while a leading delimiter does produce a leading one. A `-` at the very
/// start of a field is that field's sign.
pub(crate) fn split_fields(s: &str) -> Vec<&str> {
  let mut fields = vec![];
  let mut start = 0;

  for (i, c) in s.char_indices() {
    if !DELIMITERS.contains(&c) || (c == '-' && i == start) {
      continue;
    }
    fields.push(&s[start..i]);
    start = i + c.len_utf8();
  }

  if start < s.len() {
    fields.push(&s[start..]);
  }

  fields
}

/// Base-10, optionally signed. `None` instead of an error for anything else.
pub(crate) fn parse_field(field: &str) -> Option<i32> {
  field.parse::<i32>().ok()
}

fn normalize(component: Component, value: Option<i32>) -> i32 {
  match value {
    Some(value) if value >= 0 => value,
    Some(value) => {
      tracing::trace!(%component, value, "negative version component clamped to 0");
      0
    }
    None => 0,
  }
}
