use std::fs;
use std::path::{Component, Path, PathBuf};

use packrig_common::BuildPaths;
use sugar_path::SugarPath;
use tracing::{error, info};

/// What happened to the target. Refusals and failures are logged rather than
/// raised; callers inspect the outcome when they care.
#[derive(Debug)]
pub enum RemoveOutcome {
  Removed,
  Refused,
  Failed(std::io::Error),
}

impl RemoveOutcome {
  pub fn is_removed(&self) -> bool {
    matches!(self, Self::Removed)
  }
}

/// Recursively delete `target`, but only when it is safely contained in the
/// project.
///
/// Refused outright when the target is the filesystem root, the user's home
/// directory (compared case-insensitively), or any path that escapes
/// `paths.root`. An IO failure during deletion is fatal for the operation
/// but never aborts the process.
pub fn safe_remove(target: &Path, paths: &BuildPaths) -> RemoveOutcome {
  let target = target.absolutize();
  if is_protected(&target, paths) {
    error!("{} is not contained in the project folder, will not remove!", target.display());
    return RemoveOutcome::Refused;
  }

  info!("try to remove {}", target.display());
  let result = fs::metadata(&target).and_then(|metadata| {
    if metadata.is_dir() { fs::remove_dir_all(&target) } else { fs::remove_file(&target) }
  });
  match result {
    Ok(()) => {
      info!("done!");
      RemoveOutcome::Removed
    }
    Err(err) => {
      error!("FATAL: failed to remove {}: {err}", target.display());
      RemoveOutcome::Failed(err)
    }
  }
}

fn is_protected(target: &Path, paths: &BuildPaths) -> bool {
  if target.parent().is_none() {
    return true;
  }
  if let Some(home) = home_dir() {
    if paths_equal_ignore_case(target, &home.absolutize()) {
      return true;
    }
  }
  // Escapes the project root when the relative form starts with `..`.
  let relative = target.relative(paths.root.absolutize());
  relative.components().next().is_some_and(|first| matches!(first, Component::ParentDir))
}

fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
  let a = dunce::simplified(a).to_string_lossy().to_lowercase();
  let b = dunce::simplified(b).to_string_lossy().to_lowercase();
  a == b
}

fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")).map(PathBuf::from)
}

#[test]
fn test_refuses_filesystem_root() {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  assert!(matches!(safe_remove(Path::new("/"), &paths), RemoveOutcome::Refused));
}

#[test]
fn test_refuses_home_directory() {
  let Some(home) = home_dir() else { return };
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  assert!(matches!(safe_remove(&home, &paths), RemoveOutcome::Refused));
}

#[test]
fn test_refuses_path_outside_project_root() {
  let project = tempfile::tempdir().unwrap();
  let elsewhere = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(project.path());

  let outcome = safe_remove(elsewhere.path(), &paths);
  assert!(matches!(outcome, RemoveOutcome::Refused));
  assert!(elsewhere.path().exists());
}

#[test]
fn test_removes_directory_inside_project() {
  let project = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(project.path());
  let doomed = project.path().join("dist");
  fs::create_dir_all(doomed.join("img")).unwrap();
  fs::write(doomed.join("img").join("logo.png"), b"png").unwrap();

  assert!(safe_remove(&doomed, &paths).is_removed());
  assert!(!doomed.exists());
}

#[test]
fn test_removes_single_file() {
  let project = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(project.path());
  let file = project.path().join("stale.log");
  fs::write(&file, "x").unwrap();

  assert!(safe_remove(&file, &paths).is_removed());
  assert!(!file.exists());
}

#[test]
fn test_missing_target_reports_failure() {
  let project = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(project.path());

  let outcome = safe_remove(&project.path().join("ghost"), &paths);
  assert!(matches!(outcome, RemoveOutcome::Failed(_)));
}
