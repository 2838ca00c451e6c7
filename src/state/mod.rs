//! Application state module

mod app_state;
mod forms;
mod submit_timer;

pub use app_state::*;
pub use forms::*;
pub use submit_timer::*;
