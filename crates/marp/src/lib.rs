//! Marp CLI backend for compiling generated slide markdown.
//!
//! Runs the external `marp` program as a child process.

pub mod renderer;

pub use renderer::MarpRenderer;
