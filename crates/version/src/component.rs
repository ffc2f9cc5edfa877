use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
  Major,
  Minor,
  Patch,
}

impl Component {
  pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];

  pub fn name(&self) -> &'static str {
    match *self {
      Component::Major => "major",
      Component::Minor => "minor",
      Component::Patch => "patch",
    }
  }
}

impl fmt::Display for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
