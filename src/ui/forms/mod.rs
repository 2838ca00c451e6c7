//! Form rendering module
//!
//! - `field_renderer`: per-type field widgets and their key handling
//! - `form_view`: the field stack and action panel

mod field_renderer;
mod form_view;

pub use field_renderer::handle_field_key;
pub use form_view::draw_form;
