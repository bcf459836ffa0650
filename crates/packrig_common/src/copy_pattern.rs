use std::path::PathBuf;

/// One source-to-destination mapping of a copy plan.
#[derive(Debug, Clone)]
pub struct CopyPattern {
  pub from: PathBuf,
  pub to: PathBuf,
  pub kind: CopyKind,
}

#[derive(Debug, Clone)]
pub enum CopyKind {
  /// Copy the file or tree as-is.
  Verbatim,
  /// Copy images under a content-hashed name and record the rename in the
  /// caller's manifest. `context` is the directory public URLs are relative
  /// to; `public_path` is prepended to both sides of each manifest entry.
  HashedImages { context: PathBuf, public_path: String },
}
