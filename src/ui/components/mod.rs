//! Reusable UI components

mod button;
mod spinner;

pub use button::{render_action_button, render_button, BUTTON_HEIGHT};
pub use spinner::spinner_frame;
