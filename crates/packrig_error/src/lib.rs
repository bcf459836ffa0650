use std::fmt;
use std::ops::{Deref, DerefMut};

/// Aggregate of every failure hit while assembling a build configuration.
///
/// Most operations keep going after an individual file fails and report
/// everything they collected at the end, so the error type is a list.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn push(&mut self, error: anyhow::Error) {
    self.0.push(error);
  }

  /// `Ok(())` when nothing was collected, otherwise the aggregate.
  pub fn into_result(self) -> BuildResult<()> {
    if self.0.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<std::io::Error> for BuildError {
  fn from(error: std::io::Error) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_joins_collected_errors() {
  let mut errors = BuildError::default();
  errors.push(anyhow::anyhow!("first"));
  errors.push(anyhow::anyhow!("second"));
  assert_eq!(errors.to_string(), "first\nsecond");
}

#[test]
fn test_into_result() {
  assert!(BuildError::default().into_result().is_ok());
  assert!(BuildError::from(anyhow::anyhow!("boom")).into_result().is_err());
}
