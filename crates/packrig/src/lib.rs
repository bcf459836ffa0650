mod copy;
mod entries;
mod loaders;
mod rewrite;
mod safe_rm;

pub use crate::{
  copy::{copy_plan, CopyPlan},
  entries::{resolve_entries, EntryMap, NOT_ENTRY_DIRECTIVE},
  loaders::{
    dev_helper_plugins, fonts_loader, image_loader, less_loader, prod_helper_plugins,
    script_loader, stylus_loader, template_loader, vue_loader, TEMPLATE_URL_ATTRS,
  },
  rewrite::{UrlRewriter, MANIFEST_FILES},
  safe_rm::{safe_remove, RemoveOutcome},
};
pub use packrig_common::*;
pub use packrig_error::{BuildError, BuildResult};
