//! `bt-output` — terminal presentation for the brace-topia model.
//!
//! [`TextRenderer`] implements `bt_sim::SimObserver` and writes each cycle to
//! any `io::Write` in one of two modes:
//!
//! | Mode                 | Behaviour                                              |
//! |----------------------|--------------------------------------------------------|
//! | [`RenderMode::Scroll`] | Cycles are printed one after another.               |
//! | [`RenderMode::Frame`]  | Screen is cleared and the cursor homed every cycle; a quit hint follows the statistics. |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bt_output::{RenderMode, TextRenderer};
//!
//! let mut renderer = TextRenderer::new(std::io::stdout(), &config, RenderMode::Scroll);
//! sim.run(&mut renderer)?;
//! if let Some(e) = renderer.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod ansi;
pub mod error;
pub mod render;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use render::{RenderMode, TextRenderer, format_happiness};
