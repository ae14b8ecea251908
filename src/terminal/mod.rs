//! Shared terminal utilities.
//!
//! Box drawing, slider and checkbox rendering, raw mode, clipboard writes and ANSI helpers.

mod clipboard;
mod output;
mod raw_mode;

pub use clipboard::*;
pub use output::*;
pub use raw_mode::*;
