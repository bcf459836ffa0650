use std::sync::LazyLock;

use packrig_common::PluginDescriptor;
use regex::Regex;
use serde_json::{json, Map, Value};

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[\x1B\x{9B}][\[()#;?]*(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PRZcf-nqry=><]").unwrap()
});

/// Friendly-errors and desktop-notifier plugins for the dev server. The
/// notifier title is stripped of ANSI escapes since it ends up in OS
/// notifications.
pub fn dev_helper_plugins(title: &str, opts: Option<Map<String, Value>>) -> Vec<PluginDescriptor> {
  let mut opts = opts.unwrap_or_default();
  let title = opts.get("title").and_then(Value::as_str).unwrap_or(title);
  let title = ANSI_RE.replace_all(title, "").into_owned();
  opts.insert("title".to_string(), Value::String(title));

  vec![
    PluginDescriptor::new("friendly-errors-webpack-plugin"),
    PluginDescriptor::new("webpack-notifier").with_options(Value::Object(opts)),
  ]
}

/// Minification and stable-hash plugins for production output.
pub fn prod_helper_plugins() -> Vec<PluginDescriptor> {
  vec![
    PluginDescriptor::new("uglifyjs-webpack-plugin")
      .with_options(json!({ "compress": { "warnings": false } })),
    PluginDescriptor::new("occurrence-order-webpack-plugin"),
    PluginDescriptor::new("webpack-md5-hash"),
  ]
}

#[test]
fn test_dev_helper_plugins_strip_ansi_from_title() {
  let plugins = dev_helper_plugins("\u{1b}[36mMy App\u{1b}[0m", None);
  assert_eq!(plugins.len(), 2);
  assert_eq!(plugins[0].name, "friendly-errors-webpack-plugin");
  assert_eq!(plugins[1].options.as_ref().unwrap()["title"], "My App");
}

#[test]
fn test_dev_helper_plugins_prefer_title_from_opts() {
  let mut opts = Map::new();
  opts.insert("title".to_string(), Value::String("Custom".to_string()));
  opts.insert("excludeWarnings".to_string(), Value::Bool(true));

  let plugins = dev_helper_plugins("fallback", Some(opts));
  let options = plugins[1].options.as_ref().unwrap();
  assert_eq!(options["title"], "Custom");
  assert_eq!(options["excludeWarnings"], true);
}

#[test]
fn test_prod_helper_plugins() {
  let plugins = prod_helper_plugins();
  assert_eq!(plugins.len(), 3);
  assert_eq!(plugins[0].options.as_ref().unwrap()["compress"]["warnings"], false);
  assert_eq!(plugins[2].name, "webpack-md5-hash");
}
