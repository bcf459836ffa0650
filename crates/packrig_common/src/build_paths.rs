use std::path::{Path, PathBuf};

use packrig_utils::path_ext::PathExt;

use crate::Env;

/// Project layout handed in by the build script. All other paths in the
/// toolkit derive from these.
#[derive(Debug, Clone)]
pub struct BuildPaths {
  /// Project root; the deletion safety boundary and the base for `resolve`.
  pub root: PathBuf,
  /// Source tree scanned for entry points.
  pub src: PathBuf,
  /// Directory the template files are emitted into for the server.
  pub views: PathBuf,
  pub dev_assets_root: PathBuf,
  pub prod_assets_root: PathBuf,
}

impl BuildPaths {
  /// Conventional layout under a single project root.
  pub fn from_root(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    Self {
      src: root.join("src"),
      views: root.join("views"),
      dev_assets_root: root.join("dist").join("dev"),
      prod_assets_root: root.join("dist").join("prod"),
      root,
    }
  }

  /// Join a directory onto the project root.
  pub fn resolve(&self, dir: impl AsRef<Path>) -> PathBuf {
    self.root.join(dir)
  }

  pub fn assets_root(&self, env: Env) -> &Path {
    match env {
      Env::Dev => &self.dev_assets_root,
      Env::Prod => &self.prod_assets_root,
    }
  }

  /// Join onto the environment's assets root, always forward slashes since
  /// the result ends up in bundler configuration.
  pub fn assets_path(&self, env: Env, filepath: impl AsRef<Path>) -> String {
    self.assets_root(env).join(filepath).expect_to_slash()
  }
}

#[test]
fn test_from_root_layout() {
  let paths = BuildPaths::from_root("/project");
  assert_eq!(paths.src, Path::new("/project/src"));
  assert_eq!(paths.views, Path::new("/project/views"));
  assert_eq!(paths.resolve("bin"), Path::new("/project/bin"));
}

#[test]
fn test_assets_path_selects_env_root() {
  let paths = BuildPaths::from_root("/project");
  assert_eq!(paths.assets_path(Env::Dev, "img/logo.png"), "/project/dist/dev/img/logo.png");
  assert_eq!(paths.assets_path(Env::Prod, "img/logo.png"), "/project/dist/prod/img/logo.png");
}
