use std::sync::LazyLock;

use regex::Regex;

static ENTRY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[A-Za-z_0-9-]+$").unwrap());

/// An entry stem may only contain `[A-Za-z_0-9-]`. Anything else (dots,
/// spaces, unicode) is treated as a non-entry artifact of the source tree.
pub fn is_valid_entry_name(stem: &str) -> bool {
  ENTRY_NAME_RE.is_match(stem)
}

#[test]
fn test_is_valid_entry_name() {
  assert!(is_valid_entry_name("app"));
  assert!(is_valid_entry_name("_partial"));
  assert!(is_valid_entry_name("landing-page_2"));
  assert!(!is_valid_entry_name("app.spec"));
  assert!(!is_valid_entry_name("with space"));
  assert!(!is_valid_entry_name(""));
}
