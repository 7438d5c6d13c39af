//! Platform abstraction layer
//!
//! Handles the native host side of the loop:
//! - Tick pacing against wall-clock time
//! - Mapping window-system input events to game inputs

pub mod clock;
pub mod input;

pub use clock::Ticker;
pub use input::{canvas_position, click_between, key_from_code};
