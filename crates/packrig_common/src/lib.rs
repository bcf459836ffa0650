mod asset_manifest;
mod build_paths;
mod copy_pattern;
mod descriptor;
mod entry_options;
mod env;

pub use crate::{
  asset_manifest::AssetManifest,
  build_paths::BuildPaths,
  copy_pattern::{CopyKind, CopyPattern},
  descriptor::{LoaderDescriptor, LoaderSetup, PluginDescriptor},
  entry_options::EntryOptions,
  env::Env,
};
