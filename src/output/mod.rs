//! Terminal output formatting
//!
//! The renderer seam used by the line-based game loop, its colored implementation,
//! and shared formatting helpers.

pub mod display;
pub mod formatters;
mod renderer;

pub use display::TerminalRenderer;
pub use renderer::Renderer;
