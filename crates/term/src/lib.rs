//! Terminal output for the simulation.
//!
//! Rendering is split in two steps so the core stays free of I/O:
//!
//! - [`frame`] turns a grid into plain text (pure)
//! - [`display`] shows that text somewhere: a real terminal via crossterm, or
//!   an in-memory recorder for tests

pub mod display;
pub mod frame;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use display::{Display, DisplayEvent, MemoryDisplay, TerminalDisplay};
pub use frame::{print_grid, render_frame, render_frame_into, write_frame};
