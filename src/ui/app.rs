//! Main TUI application state and logic

use super::session::{LineKind, Session, SessionFlow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

/// Which pane receives scroll keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Transcript,
    Tape,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Transcript => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Transcript,
        }
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Text typed at the prompt, not yet submitted
    pub input: String,

    /// Previously submitted lines, oldest first
    pub history: Vec<String>,

    /// Position while browsing `history` with Up/Down
    pub history_cursor: Option<usize>,

    pub focused_pane: FocusedPane,

    pub transcript_scroll: usize,
    pub tape_scroll: super::panes::TapeScrollState,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
            focused_pane: FocusedPane::Transcript,
            transcript_scroll: usize::MAX,
            tape_scroll: Default::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
            .split(frame.area());

        // Transcript (left) | Tape (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        super::panes::render_terminal_pane(
            frame,
            columns[0],
            self.session.transcript(),
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        let interpreter = self.session.interpreter();
        super::panes::render_tape_pane(
            frame,
            columns[1],
            interpreter.tape(),
            interpreter.pointer(),
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        super::panes::render_prompt(
            frame,
            main_chunks[1],
            self.session.command_number(),
            &self.input,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                program_len: interpreter.program().len(),
                program_counter: interpreter.program_counter(),
                steps_executed: interpreter.steps_executed(),
                is_error: self.last_submission_failed(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.history_cursor = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::Up => self.browse_history(true),
            KeyCode::Down => self.browse_history(false),
            KeyCode::PageUp => match self.focused_pane {
                FocusedPane::Transcript => {
                    let total = self.session.transcript().len();
                    self.transcript_scroll = self.transcript_scroll.min(total).saturating_sub(PAGE);
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow_pointer = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_sub(PAGE);
                }
            },
            KeyCode::PageDown => match self.focused_pane {
                FocusedPane::Transcript => {
                    self.transcript_scroll = self.transcript_scroll.saturating_add(PAGE);
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow_pointer = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_add(PAGE);
                }
            },
            KeyCode::Home => {
                // Snap the tape view back to the pointer
                self.tape_scroll.follow_pointer = true;
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        if !line.trim().is_empty() {
            self.history.push(line.clone());
        }
        self.history_cursor = None;

        let before = self.session.transcript().len();
        if self.session.submit(&line) == SessionFlow::Exit {
            self.should_quit = true;
            return;
        }

        self.status_message = if self.last_submission_failed() {
            "Command failed".to_string()
        } else if self.session.transcript().len() > before {
            "Done".to_string()
        } else {
            "Ready!".to_string()
        };
        self.transcript_scroll = usize::MAX;
        self.tape_scroll.follow_pointer = true;
    }

    fn browse_history(&mut self, older: bool) {
        if self.history.is_empty() {
            return;
        }
        let last = self.history.len() - 1;
        self.history_cursor = match (self.history_cursor, older) {
            (None, true) => Some(last),
            (None, false) => None,
            (Some(i), true) => Some(i.saturating_sub(1)),
            (Some(i), false) if i < last => Some(i + 1),
            (Some(_), false) => None,
        };
        self.input = match self.history_cursor {
            Some(i) => self.history[i].clone(),
            None => String::new(),
        };
    }

    fn last_submission_failed(&self) -> bool {
        self.session
            .transcript()
            .last()
            .is_some_and(|line| line.kind == LineKind::Error)
    }
}
