//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`terminal`]: session transcript (echoed commands, messages, program output)
//! - [`tape`]: memory tape with the pointer cell highlighted
//! - [`prompt`]: command input line
//! - [`status`]: status bar with keybindings and machine state
//!
//! Each pane module exports a stateless `render_*` function; scroll state is
//! owned by [`App`](crate::ui::App) and passed in by reference.

pub mod prompt;
pub mod status;
pub mod tape;
pub mod terminal;

pub use prompt::render_prompt;
pub use status::{render_status_bar, StatusRenderData};
pub use tape::{render_tape_pane, TapeScrollState};
pub use terminal::render_terminal_pane;
