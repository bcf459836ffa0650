use packrig_common::{Env, LoaderDescriptor, LoaderSetup, PluginDescriptor};
use serde_json::json;

const EXTRACT_PLUGIN: &str = "extract-text-webpack-plugin";

fn css_name(env: Env) -> &'static str {
  match env {
    Env::Dev => "[name].css",
    Env::Prod => "[name]-[chunkhash].css",
  }
}

/// Compiles stylus files into css.
///
/// Without the plugin the css is inserted as a style node into the DOM; with
/// it, the compiled css is extracted into its own named file.
pub fn stylus_loader(with_plugin: bool, env: Env) -> LoaderSetup {
  const TEST: &str = r"\.styl$";
  if with_plugin {
    let chain = if env.is_prod() {
      "css-loader?minimize=true!stylus-loader"
    } else {
      "css-loader!stylus-loader"
    };
    LoaderSetup::Extracted {
      loader: LoaderDescriptor::new(TEST, EXTRACT_PLUGIN).with_options(json!({
        "use": chain,
        "remove": false,
      })),
      plugins: vec![
        PluginDescriptor::new(EXTRACT_PLUGIN).with_options(json!({ "filename": css_name(env) })),
      ],
    }
  } else {
    // plain stylus loader
    LoaderSetup::Inline(LoaderDescriptor::new(TEST, "style-loader!css-loader!stylus-loader"))
  }
}

/// Chained less pipeline, minimized for prod.
pub fn less_loader(env: Env) -> LoaderDescriptor {
  let chain = if env.is_prod() {
    "style-loader!css-loader?minimize=true!less-loader"
  } else {
    "style-loader!css-loader!less-loader"
  };
  LoaderDescriptor::new(r"\.less$", chain)
}

#[test]
fn test_stylus_loader_inline() {
  let setup = stylus_loader(false, Env::Dev);
  assert!(setup.plugins().is_empty());
  assert_eq!(setup.loader().loader, "style-loader!css-loader!stylus-loader");
}

#[test]
fn test_stylus_loader_extracted_prod() {
  let setup = stylus_loader(true, Env::Prod);
  let plugins = setup.plugins();

  assert_eq!(plugins.len(), 1);
  assert_eq!(plugins[0].name, "extract-text-webpack-plugin");
  assert_eq!(plugins[0].options.as_ref().unwrap()["filename"], "[name]-[chunkhash].css");
  assert_eq!(setup.loader().options.as_ref().unwrap()["use"], "css-loader?minimize=true!stylus-loader");
}

#[test]
fn test_less_loader_minimizes_in_prod() {
  assert_eq!(less_loader(Env::Dev).loader, "style-loader!css-loader!less-loader");
  assert_eq!(less_loader(Env::Prod).loader, "style-loader!css-loader?minimize=true!less-loader");
}
