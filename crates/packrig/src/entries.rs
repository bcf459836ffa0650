use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ansi_term::Colour;
use packrig_common::{BuildPaths, EntryOptions};
use packrig_utils::{entry_name::is_valid_entry_name, path_ext::PathExt};
use rustc_hash::FxHashMap;
use sugar_path::SugarPath;
use tracing::{error, info, warn};

/// Logical entry key to slashed absolute file path.
pub type EntryMap = FxHashMap<String, String>;

/// A source file starting with these 13 bytes has opted out of being an
/// entry point, whatever its name looks like.
pub const NOT_ENTRY_DIRECTIVE: &[u8; 13] = b"/*not entry*/";

/// Scan the source tree for entry points with the given extensions
/// (e.g. `[".js", ".styl"]`; empty defaults to `[".js"]`).
///
/// A file becomes an entry unless its extension only partially matches, its
/// stem is `_`-prefixed or contains characters outside `[A-Za-z_0-9-]`, or
/// it carries the not-entry directive. Keys are relative to
/// `options.base_dir` (default: the source root) with the extension
/// stripped; duplicate keys are overwritten in glob order.
///
/// An empty aggregate result is reported through the log, never raised.
pub fn resolve_entries(
  extensions: &[&str],
  options: &EntryOptions,
  paths: &BuildPaths,
) -> EntryMap {
  let extensions = if extensions.is_empty() { &[".js"] } else { extensions };
  let src = paths.src.absolutize();
  let base_dir =
    options.base_dir.as_deref().map_or_else(|| src.clone(), |base| base.absolutize());

  let mut entries = EntryMap::default();
  for extension in extensions {
    let pattern = format!("{}/**/*{extension}", src.expect_to_slash());
    let candidates = match glob::glob_with(&pattern, options.glob) {
      Ok(candidates) => candidates,
      Err(err) => {
        warn!("invalid entry glob {pattern}: {err}");
        continue;
      }
    };

    for candidate in candidates {
      let Ok(filepath) = candidate else { continue };
      let filepath = filepath.absolutize();
      if !is_entry_candidate(&filepath, extension, options) {
        continue;
      }
      let key = entry_key(&filepath, &base_dir, extension);
      if let Some(includes) = &options.includes {
        if !includes.iter().any(|included| included == &key) {
          continue;
        }
      } else if let Some(excludes) = &options.excludes {
        if excludes.iter().any(|excluded| excluded == &key) {
          continue;
        }
      }
      entries.insert(key, filepath.expect_to_slash());
    }
  }

  if options.verbose() {
    info!("{}", Colour::Cyan.bold().paint(format!("Entries for {}", extensions.join(" and "))));
    for (key, filepath) in &entries {
      info!("{} =>\n   {}", Colour::Green.paint(key.as_str()), Colour::Yellow.paint(filepath.as_str()));
    }
  }
  if entries.is_empty() {
    error!("got no entry for {}", extensions.join(", "));
  }
  entries
}

fn is_entry_candidate(filepath: &Path, extension: &str, options: &EntryOptions) -> bool {
  let Some(file_name) = filepath.file_name().and_then(OsStr::to_str) else {
    return false;
  };
  // Requires the full requested extension at the end, which also drops glob
  // partial matches like `.js` against `.mjs` candidates.
  let Some(stem) = file_name.strip_suffix(extension) else {
    return false;
  };
  if !options.keep_underscore && stem.starts_with('_') {
    return false;
  }
  if !is_valid_entry_name(stem) {
    return false;
  }
  !has_not_entry_directive(filepath)
}

/// Bounded probe: open, read exactly the directive length, close. Files too
/// short to hold the directive are entry candidates.
fn has_not_entry_directive(filepath: &Path) -> bool {
  let mut head = [0_u8; NOT_ENTRY_DIRECTIVE.len()];
  let Ok(mut file) = File::open(filepath) else {
    return false;
  };
  match file.read_exact(&mut head) {
    Ok(()) => head == *NOT_ENTRY_DIRECTIVE,
    Err(_) => false,
  }
}

fn entry_key(filepath: &Path, base_dir: &Path, extension: &str) -> String {
  let relative = filepath.relative(base_dir).expect_to_slash();
  match relative.strip_suffix(extension) {
    Some(stripped) => stripped.to_string(),
    None => relative,
  }
}

#[cfg(test)]
fn fixture(files: &[(&str, &str)]) -> (tempfile::TempDir, BuildPaths) {
  let dir = tempfile::tempdir().unwrap();
  let paths = BuildPaths::from_root(dir.path());
  for (name, content) in files {
    let filepath = paths.src.join(name);
    std::fs::create_dir_all(filepath.parent().unwrap()).unwrap();
    std::fs::write(&filepath, content).unwrap();
  }
  (dir, paths)
}

#[cfg(test)]
fn quiet() -> EntryOptions {
  EntryOptions { verbose: Some(false), ..EntryOptions::default() }
}

#[test]
fn test_discovers_entries_relative_to_src() {
  let (_dir, paths) = fixture(&[
    ("foo.js", "console.log(1)"),
    ("nested/bar.js", "console.log(2)"),
    ("style.styl", "body {}"),
  ]);

  let entries = resolve_entries(&[".js"], &quiet(), &paths);
  assert_eq!(entries.len(), 2);
  assert!(entries["foo"].ends_with("/src/foo.js"));
  assert!(entries["nested/bar"].ends_with("/src/nested/bar.js"));
}

#[test]
fn test_underscore_partials_are_skipped_unless_kept() {
  let (_dir, paths) = fixture(&[("_partial.js", ""), ("app.js", "")]);

  let entries = resolve_entries(&[".js"], &quiet(), &paths);
  assert_eq!(entries.len(), 1);
  assert!(entries.contains_key("app"));

  let options = EntryOptions { keep_underscore: true, ..quiet() };
  let entries = resolve_entries(&[".js"], &options, &paths);
  assert_eq!(entries.len(), 2);
  assert!(entries.contains_key("_partial"));
}

#[test]
fn test_not_entry_directive_excludes_file() {
  let (_dir, paths) = fixture(&[
    ("app.js", "/*not entry*/ export default 1"),
    ("tiny.js", "let x"),
    ("kept.js", "/* not entry */ still an entry"),
  ]);

  let entries = resolve_entries(&[".js"], &quiet(), &paths);
  assert!(!entries.contains_key("app"));
  assert!(entries.contains_key("tiny"));
  assert!(entries.contains_key("kept"));
}

#[test]
fn test_invalid_stem_characters_are_rejected() {
  let (_dir, paths) = fixture(&[("with space.js", ""), ("app.spec.js", ""), ("ok-2_a.js", "")]);

  let entries = resolve_entries(&[".js"], &quiet(), &paths);
  assert_eq!(entries.len(), 1);
  assert!(entries.contains_key("ok-2_a"));
}

#[test]
fn test_includes_take_precedence_over_excludes() {
  let (_dir, paths) = fixture(&[("foo.js", ""), ("bar.js", "")]);

  let options = EntryOptions {
    includes: Some(vec!["foo".to_string()]),
    excludes: Some(vec!["foo".to_string()]),
    ..quiet()
  };
  let entries = resolve_entries(&[".js"], &options, &paths);
  assert_eq!(entries.len(), 1);
  assert!(entries.contains_key("foo"));
}

#[test]
fn test_excludes_drop_listed_keys() {
  let (_dir, paths) = fixture(&[("foo.js", ""), ("bar.js", "")]);

  let options = EntryOptions { excludes: Some(vec!["foo".to_string()]), ..quiet() };
  let entries = resolve_entries(&[".js"], &options, &paths);
  assert_eq!(entries.len(), 1);
  assert!(entries.contains_key("bar"));
}

#[test]
fn test_empty_result_is_returned_not_raised() {
  let (_dir, paths) = fixture(&[("style.styl", "")]);

  let entries = resolve_entries(&[".js"], &quiet(), &paths);
  assert!(entries.is_empty());
}

#[test]
fn test_custom_base_dir_shapes_keys() {
  let (_dir, paths) = fixture(&[("js/app.js", "")]);

  let options = EntryOptions { base_dir: Some(paths.src.join("js")), ..quiet() };
  let entries = resolve_entries(&[".js"], &options, &paths);
  assert!(entries.contains_key("app"));
}

#[test]
fn test_multiple_extensions_accumulate() {
  let (_dir, paths) = fixture(&[("app.js", ""), ("site.styl", "")]);

  let entries = resolve_entries(&[".js", ".styl"], &quiet(), &paths);
  assert_eq!(entries.len(), 2);
  assert!(entries.contains_key("app"));
  assert!(entries.contains_key("site"));
}
