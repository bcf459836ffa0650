use std::fmt;
use std::str::FromStr;

/// Build environment selector. Passed explicitly instead of being read from a
/// process-wide environment variable so a single process can assemble both
/// configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
  Dev,
  Prod,
}

impl Env {
  pub fn is_prod(self) -> bool {
    matches!(self, Self::Prod)
  }
}

impl fmt::Display for Env {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Dev => f.write_str("dev"),
      Self::Prod => f.write_str("prod"),
    }
  }
}

impl FromStr for Env {
  type Err = anyhow::Error;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "dev" => Ok(Self::Dev),
      "prod" => Ok(Self::Prod),
      _ => Err(anyhow::anyhow!("unknown build environment `{value}`, expected `dev` or `prod`")),
    }
  }
}

#[test]
fn test_env_round_trip() {
  assert_eq!("dev".parse::<Env>().unwrap(), Env::Dev);
  assert_eq!("prod".parse::<Env>().unwrap(), Env::Prod);
  assert!("staging".parse::<Env>().is_err());
  assert_eq!(Env::Prod.to_string(), "prod");
}
