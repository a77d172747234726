//! Interactive session built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`command`]** — parsing of typed lines into [`Command`]s
//! - **[`session`]** — the machine, the command semantics, and the transcript
//! - **[`app`]** — keyboard event loop, prompt editing, pane focus
//! - **[`panes`]** — stateless render functions (transcript, tape, prompt, status bar)
//!
//! plus **[`theme`]**, the shared color palette.
//!
//! The entry point is [`App`]: construct it with a [`Session`] and call
//! [`App::run`] to start the event loop. [`Session`] is terminal-independent and
//! can be driven directly.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod command;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use command::Command;
pub use session::{Session, SessionFlow};
