use triversion::{Component, Error, MalformedReason, VersionValue};

fn parsed(input: &str) -> (i32, i32, i32) {
  VersionValue::parse(input)
    .unwrap_or_else(|err| panic!("{:?} should parse: {}", input, err))
    .as_tuple()
}

fn rejected(input: &str) -> MalformedReason {
  match VersionValue::parse(input) {
    Err(Error::MalformedInput {
      input: original,
      reason,
    }) => {
      assert_eq!(original, input);
      reason
    }
    other => panic!("{:?} should be malformed, got {:?}", input, other),
  }
}

#[test]
fn test_valid() {
  assert_eq!(parsed("1.2.3"), (1, 2, 3));
  assert_eq!(parsed("1.2"), (1, 2, 0));
  assert_eq!(parsed("1"), (1, 0, 0));
  assert_eq!(parsed("1-2-3"), (1, 2, 3));
  assert_eq!(parsed(" 1.2.3 "), (1, 2, 3));
}

#[test]
fn test_negative_components() {
  assert_eq!(parsed("-1.2.3"), (0, 2, 3));
  assert_eq!(parsed("1.-2.3"), (1, 0, 3));
  assert_eq!(parsed("1.2.-3"), (1, 2, 0));
}

#[test]
fn test_trailing_delimiter() {
  assert_eq!(parsed("1.2."), (1, 2, 0));
  assert_eq!(parsed("1-"), (1, 0, 0));
}

#[test]
fn test_invalid_formats() {
  assert_eq!(rejected(""), MalformedReason::Empty);
  assert_eq!(rejected(" \t "), MalformedReason::Empty);
  assert_eq!(rejected("1.2.3.4"), MalformedReason::TooManyFields(4));
  assert_eq!(rejected("abc"), MalformedReason::InvalidField("abc".to_string()));
  assert_eq!(rejected("1..2"), MalformedReason::InvalidField("".to_string()));
  assert_eq!(rejected(".1.2.3"), MalformedReason::TooManyFields(4));
  assert_eq!(rejected(".1"), MalformedReason::InvalidField("".to_string()));
  assert_eq!(rejected("."), MalformedReason::InvalidField("".to_string()));
  assert_eq!(rejected("1.2.."), MalformedReason::InvalidField("".to_string()));
  assert_eq!(rejected("1 .2"), MalformedReason::InvalidField("1 ".to_string()));
  assert_eq!(
    rejected("99999999999.0"),
    MalformedReason::InvalidField("99999999999".to_string())
  );
}

#[test]
fn test_numeric_constructor() {
  assert_eq!(
    VersionValue::new(-1, 0, 0),
    Err(Error::OutOfRange {
      component: Component::Major,
      value: -1,
    })
  );
  assert_eq!(VersionValue::new(0, 0, 0), Ok(VersionValue::default()));
}

#[test]
fn test_text_and_numeric_paths_differ() {
  assert!(VersionValue::parse("").unwrap_err().is_malformed());
  assert_eq!(VersionValue::default().to_string(), "0.0.0");

  assert!(VersionValue::new(-1, 2, 3).unwrap_err().is_out_of_range());
  assert_eq!(parsed("-1.2.3"), (0, 2, 3));
}

#[test]
fn test_comparison() {
  let a = VersionValue::new(1, 2, 3).unwrap();
  assert_eq!(a, VersionValue::new(1, 2, 3).unwrap());
  assert!(a < VersionValue::new(1, 3, 0).unwrap());
}

#[test]
fn test_error_messages() {
  assert_eq!(
    VersionValue::new(0, -5, 0).unwrap_err().to_string(),
    "minor version cannot be negative: -5"
  );
  assert_eq!(
    VersionValue::parse("1.2.3.4").unwrap_err().to_string(),
    "invalid version format: \"1.2.3.4\": expected at most 3 version parts, got 4"
  );
}
