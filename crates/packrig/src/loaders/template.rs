use packrig_common::{Env, LoaderDescriptor, LoaderSetup, PluginDescriptor};
use serde_json::json;

/// Template attributes whose URLs get rewritten against the asset manifest.
pub const TEMPLATE_URL_ATTRS: [&str; 8] = [
  "a:href",
  "img:src",
  "script:src",
  "link:href",
  "video:src",
  "source:src",
  "audio:src",
  "img:data-src",
];

/// Copies jade templates into the views directory for the server.
///
/// Without the plugin the loader just returns a render function; with it,
/// asset URLs inside the listed attributes are rewritten to their hashed
/// forms (see `UrlRewriter`) and each template is extracted under its own
/// name.
pub fn template_loader(with_plugin: bool, env: Env) -> LoaderSetup {
  const TEST: &str = r"\.jade$";
  if with_plugin {
    LoaderSetup::Extracted {
      loader: LoaderDescriptor::new(TEST, "extract-text-webpack-plugin").with_options(json!({
        "use": {
          "loader": "jade-url-replace-loader",
          "options": {
            "attrs": TEMPLATE_URL_ATTRS,
            "env": env.to_string(),
          },
        },
      })),
      plugins: vec![PluginDescriptor::new("extract-text-webpack-plugin")
        .with_options(json!({ "filename": "[name].jade" }))],
    }
  } else {
    // plain jade loader
    LoaderSetup::Inline(LoaderDescriptor::new(TEST, "jade-loader"))
  }
}

#[test]
fn test_template_loader_inline() {
  let setup = template_loader(false, Env::Dev);
  assert_eq!(setup.loader().loader, "jade-loader");
  assert!(setup.plugins().is_empty());
}

#[test]
fn test_template_loader_extracted_carries_attrs() {
  let setup = template_loader(true, Env::Prod);
  let options = setup.loader().options.as_ref().unwrap();

  assert_eq!(options["use"]["loader"], "jade-url-replace-loader");
  assert_eq!(options["use"]["options"]["attrs"].as_array().unwrap().len(), 8);
  assert_eq!(setup.plugins()[0].options.as_ref().unwrap()["filename"], "[name].jade");
}
