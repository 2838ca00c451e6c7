//! Progress spinner shown while a submission is pending

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Loop iterations each spinner frame stays on screen
const TICKS_PER_FRAME: usize = 2;

/// Spinner glyph for the given loop tick
pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[(tick / TICKS_PER_FRAME) % FRAMES.len()]
}
