use std::path::PathBuf;

/// Options for entry-point discovery.
#[derive(Debug, Clone)]
pub struct EntryOptions {
  /// Base the entry keys are made relative to. Defaults to the source root.
  pub base_dir: Option<PathBuf>,
  /// When present, only these keys survive and `excludes` is ignored.
  pub includes: Option<Vec<String>>,
  pub excludes: Option<Vec<String>>,
  /// Keep `_`-prefixed files, which are otherwise treated as partials.
  pub keep_underscore: bool,
  /// Print the discovered entries. Defaults to true.
  pub verbose: Option<bool>,
  pub glob: glob::MatchOptions,
}

impl Default for EntryOptions {
  fn default() -> Self {
    Self {
      base_dir: None,
      includes: None,
      excludes: None,
      keep_underscore: false,
      verbose: None,
      glob: glob::MatchOptions::new(),
    }
  }
}

impl EntryOptions {
  pub fn verbose(&self) -> bool {
    self.verbose.unwrap_or(true)
  }
}
