use packrig_common::{BuildPaths, Env, LoaderDescriptor};
use packrig_utils::path_ext::PathExt;
use serde_json::json;

const IMAGE_TEST: &str = r"\.(png|jpe?g|gif|svg)(\?.*)?$";

const DEFAULT_INLINE_LIMIT: u32 = 10_000;

fn image_name(env: Env) -> &'static str {
  match env {
    Env::Dev => "img/[path][name].[ext]",
    Env::Prod => "img/[path][name]-[hash:7].[ext]",
  }
}

/// url-loader rule for images. Emits no files itself: it only generates
/// URLs, the copy plan is responsible for moving the images.
pub fn image_loader(env: Env, limit: Option<u32>, paths: &BuildPaths) -> LoaderDescriptor {
  LoaderDescriptor::new(IMAGE_TEST, "url-loader").with_options(json!({
    "emitFile": false,
    "context": paths.src.join("img").expect_to_slash(),
    "limit": limit.unwrap_or(DEFAULT_INLINE_LIMIT),
    "name": image_name(env),
  }))
}

#[test]
fn test_image_loader_prod_names_are_hashed() {
  let paths = BuildPaths::from_root("/project");
  let descriptor = image_loader(Env::Prod, None, &paths);
  let options = descriptor.options.unwrap();

  assert_eq!(descriptor.loader, "url-loader");
  assert_eq!(options["emitFile"], false);
  assert_eq!(options["context"], "/project/src/img");
  assert_eq!(options["limit"], 10_000);
  assert_eq!(options["name"], "img/[path][name]-[hash:7].[ext]");
}

#[test]
fn test_image_loader_honors_custom_limit() {
  let paths = BuildPaths::from_root("/project");
  let descriptor = image_loader(Env::Dev, Some(4096), &paths);
  let options = descriptor.options.unwrap();

  assert_eq!(options["limit"], 4096);
  assert_eq!(options["name"], "img/[path][name].[ext]");
}
