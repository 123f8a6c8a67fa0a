//! Form rendering module
//!
//! - `field_renderer`: text, select, checkbox and error-line rendering
//! - `contact_form`: the contact form card

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
