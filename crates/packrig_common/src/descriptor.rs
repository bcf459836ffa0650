use serde::Serialize;
use serde_json::{Map, Value};

/// A module rule handed to the external bundler: which files it matches,
/// which loader transforms them, and the loader's options.
///
/// `extra` is flattened on serialization, so callers can attach arbitrary
/// rule-level fields (`exclude`, `enforce`, ...) the bundler understands.
#[derive(Debug, Clone, Serialize)]
pub struct LoaderDescriptor {
  pub test: String,
  pub loader: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
  #[serde(flatten, skip_serializing_if = "Map::is_empty")]
  pub extra: Map<String, Value>,
}

impl LoaderDescriptor {
  pub fn new(test: impl Into<String>, loader: impl Into<String>) -> Self {
    Self { test: test.into(), loader: loader.into(), options: None, extra: Map::new() }
  }

  pub fn with_options(mut self, options: Value) -> Self {
    self.options = Some(options);
    self
  }
}

/// A post-processing plugin the bundler should instantiate.
#[derive(Debug, Clone, Serialize)]
pub struct PluginDescriptor {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Value>,
}

impl PluginDescriptor {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), options: None }
  }

  pub fn with_options(mut self, options: Value) -> Self {
    self.options = Some(options);
    self
  }
}

/// Some loaders come alone, some drag an extraction plugin with them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LoaderSetup {
  Inline(LoaderDescriptor),
  Extracted { loader: LoaderDescriptor, plugins: Vec<PluginDescriptor> },
}

impl LoaderSetup {
  pub fn loader(&self) -> &LoaderDescriptor {
    match self {
      Self::Inline(loader) | Self::Extracted { loader, .. } => loader,
    }
  }

  pub fn plugins(&self) -> &[PluginDescriptor] {
    match self {
      Self::Inline(_) => &[],
      Self::Extracted { plugins, .. } => plugins,
    }
  }
}

#[test]
fn test_extra_fields_flatten() {
  let mut descriptor = LoaderDescriptor::new(r"\.js$", "babel-loader");
  descriptor.extra.insert("exclude".to_string(), Value::String("node_modules".to_string()));

  let value = serde_json::to_value(&descriptor).unwrap();
  assert_eq!(value["loader"], "babel-loader");
  assert_eq!(value["exclude"], "node_modules");
  assert!(value.get("options").is_none());
}
