use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use packrig_common::{AssetManifest, BuildPaths, CopyKind, CopyPattern, Env};
use packrig_error::{BuildError, BuildResult};
use packrig_utils::{path_ext::PathExt, xxhash::short_hash};
use sugar_path::SugarPath;
use tracing::warn;

/// The copy patterns one build environment needs: the image tree (hashed in
/// prod) plus the static files the bundler never sees.
#[derive(Debug, Clone)]
pub struct CopyPlan {
  pub patterns: Vec<CopyPattern>,
  pub manifest_file: PathBuf,
}

pub fn copy_plan(env: Env, paths: &BuildPaths, assets_public_path: &str) -> CopyPlan {
  let assets_root = paths.assets_root(env).to_path_buf();

  let image_kind = if env.is_prod() {
    CopyKind::HashedImages {
      context: paths.src.clone(),
      public_path: assets_public_path.to_string(),
    }
  } else {
    CopyKind::Verbatim
  };
  let mut patterns = vec![CopyPattern {
    from: paths.src.join("img"),
    to: assets_root.join("img"),
    kind: image_kind,
  }];

  // static files, add more if needed
  let statics = [
    (paths.src.join("css").join("lib"), assets_root.join("css").join("lib")),
    (paths.src.join("js").join("lib"), assets_root.join("js").join("lib")),
    (paths.src.join("fonts"), assets_root.join("fonts")),
    (paths.src.join("html").join("sitemap.xml"), paths.views.join("sitemap.xml")),
    (paths.src.join("html").join("robots.txt"), paths.views.join("robots.txt")),
  ];
  for (from, to) in statics {
    patterns.push(CopyPattern { from, to, kind: CopyKind::Verbatim });
  }

  CopyPlan { patterns, manifest_file: assets_root.join("manifest-img.json") }
}

impl CopyPlan {
  /// Run every pattern, recording image renames into the caller-owned
  /// manifest and rewriting the image manifest file when hashing happened.
  /// Missing sources are skipped with a warning; per-pattern failures are
  /// collected and reported in aggregate.
  pub fn execute(&self, manifest: &mut AssetManifest) -> BuildResult<()> {
    let mut errors = BuildError::default();
    let mut hashed_any = false;

    for pattern in &self.patterns {
      if !pattern.from.exists() {
        warn!("copy source {} does not exist, skipped", pattern.from.display());
        continue;
      }
      let result = match &pattern.kind {
        CopyKind::Verbatim => copy_tree(&pattern.from, &pattern.to),
        CopyKind::HashedImages { context, public_path } => {
          hashed_any = true;
          copy_hashed_images(pattern, context, public_path, manifest)
        }
      };
      if let Err(error) = result {
        errors.push(error);
      }
    }

    if hashed_any {
      if let Err(error) = manifest.write(&self.manifest_file) {
        errors.push(error);
      }
    }
    errors.into_result()
  }
}

fn copy_tree(from: &Path, to: &Path) -> anyhow::Result<()> {
  let metadata = fs::metadata(from)?;
  if metadata.is_dir() {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
      let entry = entry?;
      copy_tree(&entry.path(), &to.join(entry.file_name()))?;
    }
  } else {
    if let Some(parent) = to.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::copy(from, to)?;
  }
  Ok(())
}

fn copy_hashed_images(
  pattern: &CopyPattern,
  context: &Path,
  public_path: &str,
  manifest: &mut AssetManifest,
) -> anyhow::Result<()> {
  let glob_pattern = format!("{}/**/*", pattern.from.expect_to_slash());
  for file in glob::glob(&glob_pattern)?.flatten() {
    if !fs::metadata(&file)?.is_file() {
      continue;
    }
    let Some(file_name) = file.file_name().and_then(OsStr::to_str) else { continue };
    let (stem, extension) = split_name(file_name);

    let relative = file.relative(&pattern.from);
    let dest_dir = pattern.to.join(relative.parent().unwrap_or_else(|| Path::new("")));
    fs::create_dir_all(&dest_dir)?;

    // A trailing underscore in the stem opts the file out of hashing.
    if stem.ends_with('_') {
      fs::copy(&file, dest_dir.join(file_name))?;
      continue;
    }

    let content = fs::read(&file)?;
    let hashed_name = format!("{stem}-{}{extension}", short_hash(&content));
    fs::write(dest_dir.join(&hashed_name), &content)?;

    let public_dir =
      file.parent().map(|dir| dir.relative(context).expect_to_slash()).unwrap_or_default();
    manifest.insert(
      format!("{public_path}{public_dir}/{file_name}"),
      format!("{public_path}{public_dir}/{hashed_name}"),
    );
  }
  Ok(())
}

fn split_name(file_name: &str) -> (&str, &str) {
  match file_name.rfind('.') {
    Some(index) if index > 0 => file_name.split_at(index),
    _ => (file_name, ""),
  }
}

#[cfg(test)]
fn image_fixture() -> (tempfile::TempDir, BuildPaths) {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  let img = paths.src.join("img");
  fs::create_dir_all(img.join("icons")).unwrap();
  fs::write(img.join("logo.png"), b"logo-bytes").unwrap();
  fs::write(img.join("icons").join("pin.png"), b"pin-bytes").unwrap();
  fs::write(img.join("sprite_.png"), b"sprite-bytes").unwrap();
  fs::create_dir_all(paths.src.join("fonts")).unwrap();
  fs::write(paths.src.join("fonts").join("body.woff"), b"font").unwrap();
  (dir, paths)
}

#[test]
fn test_prod_plan_hashes_images_and_records_manifest() {
  let (_dir, paths) = image_fixture();
  let plan = copy_plan(Env::Prod, &paths, "/assets/");
  let mut manifest = AssetManifest::default();
  plan.execute(&mut manifest).unwrap();

  let assets_root = paths.assets_root(Env::Prod);
  let logo_hash = short_hash(b"logo-bytes");
  assert!(assets_root.join("img").join(format!("logo-{logo_hash}.png")).exists());
  assert_eq!(
    manifest.get("/assets/img/logo.png"),
    Some(format!("/assets/img/logo-{logo_hash}.png").as_str())
  );

  let pin_hash = short_hash(b"pin-bytes");
  assert_eq!(
    manifest.get("/assets/img/icons/pin.png"),
    Some(format!("/assets/img/icons/pin-{pin_hash}.png").as_str())
  );

  // Opted out of hashing, copied under its own name and absent from the manifest.
  assert!(assets_root.join("img").join("sprite_.png").exists());
  assert!(manifest.get("/assets/img/sprite_.png").is_none());

  assert!(plan.manifest_file.exists());
  assert!(assets_root.join("fonts").join("body.woff").exists());
}

#[test]
fn test_dev_plan_copies_images_verbatim() {
  let (_dir, paths) = image_fixture();
  let plan = copy_plan(Env::Dev, &paths, "/assets/");
  let mut manifest = AssetManifest::default();
  plan.execute(&mut manifest).unwrap();

  let assets_root = paths.assets_root(Env::Dev);
  assert!(assets_root.join("img").join("logo.png").exists());
  assert!(manifest.is_empty());
  assert!(!plan.manifest_file.exists());
}

#[test]
fn test_missing_static_sources_are_skipped() {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  fs::create_dir_all(paths.src.join("img")).unwrap();

  let plan = copy_plan(Env::Prod, &paths, "/assets/");
  let mut manifest = AssetManifest::default();
  assert!(plan.execute(&mut manifest).is_ok());
}
