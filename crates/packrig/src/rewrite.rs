use std::path::PathBuf;

use ansi_term::Colour;
use packrig_common::{AssetManifest, BuildPaths, Env};
use tracing::{info, warn};

/// Manifest files a previous compilation may have produced, merged in order.
pub const MANIFEST_FILES: [&str; 3] =
  ["manifest-js.json", "manifest-stylus.json", "manifest-img.json"];

/// Rewrites asset URLs inside templates to their content-hashed forms.
///
/// The merged manifest is loaded lazily on the first prod rewrite; in dev
/// nothing is hashed and every URL passes through untouched.
pub struct UrlRewriter {
  env: Env,
  assets_root: PathBuf,
  manifest: Option<AssetManifest>,
}

impl UrlRewriter {
  pub fn new(env: Env, paths: &BuildPaths) -> Self {
    Self { env, assets_root: paths.assets_root(env).to_path_buf(), manifest: None }
  }

  pub fn rewrite(&mut self, url: &str) -> String {
    if self.env == Env::Dev {
      return url.to_string();
    }
    let manifest = self.manifest.get_or_insert_with(|| {
      let merged = AssetManifest::load_merged(&self.assets_root, &MANIFEST_FILES);
      info!("Manifest from previous compilation:");
      for (original, hashed) in merged.iter() {
        info!(" {} => \n   {}", Colour::Green.paint(original), Colour::Yellow.paint(hashed));
      }
      merged
    });

    if let Some(hashed) = manifest.get(url) {
      return hashed.to_string();
    }
    if should_warn(url) {
      warn!("Not found {url} in manifest files");
    }
    url.to_string()
  }
}

// Library urls and non-asset schemes are expected to miss the manifest.
fn should_warn(url: &str) -> bool {
  !url.contains("/lib/")
    && !url.starts_with("javascript:;")
    && !url.starts_with("mailto:")
    && !url.starts_with("http")
    && !url.starts_with("#{")
}

#[test]
fn test_dev_is_a_passthrough() {
  let paths = BuildPaths::from_root("/project");
  let mut rewriter = UrlRewriter::new(Env::Dev, &paths);
  assert_eq!(rewriter.rewrite("/assets/img/logo.png"), "/assets/img/logo.png");
}

#[test]
fn test_prod_rewrites_manifest_hits() {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  std::fs::create_dir_all(&paths.prod_assets_root).unwrap();
  std::fs::write(
    paths.prod_assets_root.join("manifest-img.json"),
    r#"{"/assets/img/logo.png": "/assets/img/logo-abcdef0.png"}"#,
  )
  .unwrap();

  let mut rewriter = UrlRewriter::new(Env::Prod, &paths);
  assert_eq!(rewriter.rewrite("/assets/img/logo.png"), "/assets/img/logo-abcdef0.png");
  assert_eq!(rewriter.rewrite("/assets/img/missing.png"), "/assets/img/missing.png");
  assert_eq!(rewriter.rewrite("mailto:team@example.com"), "mailto:team@example.com");
}

#[test]
fn test_prod_without_manifests_leaves_urls_alone() {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());

  let mut rewriter = UrlRewriter::new(Env::Prod, &paths);
  assert_eq!(rewriter.rewrite("/assets/css/site.css"), "/assets/css/site.css");
}
