mod fonts;
mod helper_plugins;
mod image;
mod script;
mod style;
mod template;

pub use fonts::fonts_loader;
pub use helper_plugins::{dev_helper_plugins, prod_helper_plugins};
pub use image::image_loader;
pub use script::{script_loader, vue_loader};
pub use style::{less_loader, stylus_loader};
pub use template::{template_loader, TEMPLATE_URL_ATTRS};
