use packrig_common::{Env, LoaderDescriptor};
use serde_json::json;

const FONTS_TEST: &str = r"\.(woff2?|eot|ttf|otf)(\?.*)?$";

const DEFAULT_INLINE_LIMIT: u32 = 10_000;

fn font_name(env: Env) -> &'static str {
  match env {
    Env::Dev => "fonts/[name].[ext]",
    Env::Prod => "fonts/[name]-[chunkhash].[ext]",
  }
}

/// url-loader rule for font files.
pub fn fonts_loader(env: Env, limit: Option<u32>) -> LoaderDescriptor {
  LoaderDescriptor::new(FONTS_TEST, "url-loader").with_options(json!({
    "limit": limit.unwrap_or(DEFAULT_INLINE_LIMIT),
    "name": font_name(env),
  }))
}

#[test]
fn test_fonts_loader_defaults() {
  let descriptor = fonts_loader(Env::Dev, None);
  let options = descriptor.options.unwrap();

  assert_eq!(descriptor.loader, "url-loader");
  assert_eq!(options["limit"], 10_000);
  assert_eq!(options["name"], "fonts/[name].[ext]");
}

#[test]
fn test_fonts_loader_prod_name_is_chunkhashed() {
  let descriptor = fonts_loader(Env::Prod, Some(1024));
  let options = descriptor.options.unwrap();

  assert_eq!(options["limit"], 1024);
  assert_eq!(options["name"], "fonts/[name]-[chunkhash].[ext]");
}
