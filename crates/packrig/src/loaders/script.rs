use packrig_common::LoaderDescriptor;
use serde_json::{Map, Value};

/// babel-loader rule. `extra` entries land on the rule itself so callers can
/// set bundler fields like `exclude` or `enforce`.
pub fn script_loader(pattern: Option<&str>, extra: Option<Map<String, Value>>) -> LoaderDescriptor {
  let mut descriptor = LoaderDescriptor::new(pattern.unwrap_or(r"\.js$"), "babel-loader");
  if let Some(extra) = extra {
    descriptor.extra.extend(extra);
  }
  descriptor
}

/// vue-loader rule with an optional options passthrough.
pub fn vue_loader(options: Option<Value>) -> LoaderDescriptor {
  let mut descriptor = LoaderDescriptor::new(r"\.vue$", "vue-loader");
  descriptor.options = options;
  descriptor
}

#[test]
fn test_script_loader_defaults() {
  let descriptor = script_loader(None, None);
  assert_eq!(descriptor.test, r"\.js$");
  assert_eq!(descriptor.loader, "babel-loader");
  assert!(descriptor.options.is_none());
}

#[test]
fn test_script_loader_merges_extra_rule_fields() {
  let mut extra = Map::new();
  extra.insert("exclude".to_string(), Value::String("node_modules".to_string()));

  let descriptor = script_loader(Some(r"\.m?js$"), Some(extra));
  let value = serde_json::to_value(&descriptor).unwrap();
  assert_eq!(value["test"], r"\.m?js$");
  assert_eq!(value["exclude"], "node_modules");
}

#[test]
fn test_vue_loader_options_passthrough() {
  let descriptor = vue_loader(None);
  assert!(descriptor.options.is_none());

  let descriptor = vue_loader(Some(serde_json::json!({"transformToRequire": {"img": "src"}})));
  assert_eq!(descriptor.options.unwrap()["transformToRequire"]["img"], "src");
}
