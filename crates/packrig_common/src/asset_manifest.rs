use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapping from an asset's original public URL to its content-hashed one,
/// used to rewrite references after a production build.
///
/// The manifest is owned by the caller and threaded through explicitly; there
/// is no process-wide accumulator, so separate builds cannot leak entries
/// into each other.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest(IndexMap<String, String>);

impl AssetManifest {
  /// Read and merge the named manifest files under `assets_root`. Missing or
  /// malformed files contribute nothing; later files win on duplicate keys.
  pub fn load_merged(assets_root: &Path, names: &[&str]) -> Self {
    let mut merged = Self::default();
    for name in names {
      let path = assets_root.join(name);
      let Ok(raw) = fs::read_to_string(&path) else { continue };
      match serde_json::from_str::<Self>(&raw) {
        Ok(part) => merged.0.extend(part.0),
        Err(error) => debug!("skipping malformed manifest {}: {error}", path.display()),
      }
    }
    merged
  }

  pub fn insert(&mut self, original: String, hashed: String) -> Option<String> {
    self.0.insert(original, hashed)
  }

  pub fn get(&self, url: &str) -> Option<&str> {
    self.0.get(url).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Pretty-printed JSON, parent directories created as needed.
  pub fn write(&self, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(self)?)?;
    Ok(())
  }
}

#[test]
fn test_load_merged_skips_missing_and_malformed() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("manifest-js.json"), r#"{"/a.js": "/a-1234567.js"}"#).unwrap();
  fs::write(dir.path().join("manifest-img.json"), "not json").unwrap();

  let merged = AssetManifest::load_merged(
    dir.path(),
    &["manifest-js.json", "manifest-stylus.json", "manifest-img.json"],
  );
  assert_eq!(merged.len(), 1);
  assert_eq!(merged.get("/a.js"), Some("/a-1234567.js"));
}

#[test]
fn test_later_manifests_win() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("first.json"), r#"{"/a.css": "/a-old.css"}"#).unwrap();
  fs::write(dir.path().join("second.json"), r#"{"/a.css": "/a-new.css"}"#).unwrap();

  let merged = AssetManifest::load_merged(dir.path(), &["first.json", "second.json"]);
  assert_eq!(merged.get("/a.css"), Some("/a-new.css"));
}

#[test]
fn test_write_round_trip() {
  let dir = tempfile::tempdir().unwrap();
  let mut manifest = AssetManifest::default();
  manifest.insert("/img/logo.png".to_string(), "/img/logo-abcdef0.png".to_string());

  let path = dir.path().join("nested").join("manifest-img.json");
  manifest.write(&path).unwrap();

  let raw = fs::read_to_string(&path).unwrap();
  let read: AssetManifest = serde_json::from_str(&raw).unwrap();
  assert_eq!(read, manifest);
}
