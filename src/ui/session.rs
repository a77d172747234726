//! Interactive session state
//!
//! A [`Session`] owns one machine for the lifetime of the session. Programs
//! typed at the prompt are loaded into it and run; the tape and pointer carry
//! over from one command to the next until `reset`.
//!
//! Everything the session prints is recorded as [`TranscriptLine`]s so the UI
//! (and tests) can render it without touching the real terminal.

use super::command::Command;
use crate::codec::{source_to_integer, Program};
use crate::interpreter::engine::{Interpreter, StepOutcome};
use crate::interpreter::errors::PnplError;
use num_bigint::BigUint;

/// Default cap on instructions per command, so a non-terminating program
/// cannot freeze the UI
pub const DEFAULT_STEP_LIMIT: u64 = 50_000_000;

/// Largest trial divisor tried when decoding a typed program. Programs encoded
/// from up to several hundred thousand instructions stay under it.
pub const DEFAULT_FACTOR_LIMIT: u64 = 10_000_000;

const WELCOME: &str = "Welcome to the PNPL sandbox! Here you can execute your programs interactively.";

const HELP: &[&str] = &[
    "Type any valid program and the interpreter will execute it, although it will not clean the memory tape afterwards.",
    "There are a few special commands for debugging purposes as well:",
    " * reset: Deliberately resets the machine's memory, pointer and program counter.",
    " * dump: Prints the machine's memory tape, but does not erase it.",
    " * mem (size): Change the size of the memory to the provided integer, truncating or extending the previous tape.",
    " * bf (program): Translate, print, and then execute a Brainfuck program.",
    " * exit: Exits the session.",
];

/// Kind of transcript line, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command
    Prompt,
    /// Program output
    Output,
    /// Informational message from the session
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

/// What the caller should do after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Exit,
}

pub struct Session {
    interpreter: Interpreter,
    /// Size used by `reset`; updated by `mem`
    memory_size: usize,
    transcript: Vec<TranscriptLine>,
    /// Number shown in the next prompt
    command_number: usize,
    step_limit: Option<u64>,
    factor_limit: u64,
}

impl Session {
    pub fn new(memory_size: usize) -> Result<Self, PnplError> {
        let interpreter = Interpreter::from_program(Program::default(), memory_size)?;
        let mut session = Session {
            interpreter,
            memory_size,
            transcript: Vec::new(),
            command_number: 1,
            step_limit: Some(DEFAULT_STEP_LIMIT),
            factor_limit: DEFAULT_FACTOR_LIMIT,
        };
        session.info(WELCOME);
        session.info("Type `help` to see all the available commands.");
        Ok(session)
    }

    /// Cap the number of instructions a single command may execute; `None` removes the cap
    pub fn with_step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Cap the trial divisor used when decoding submitted programs
    pub fn with_factor_limit(mut self, max_divisor: u64) -> Self {
        self.factor_limit = max_divisor;
        self
    }

    /// Handle one line of input
    pub fn submit(&mut self, line: &str) -> SessionFlow {
        let command = match Command::parse(line) {
            Ok(Command::Empty) => return SessionFlow::Continue,
            Ok(command) => command,
            Err(message) => {
                self.echo(line);
                self.error(message);
                self.command_number += 1;
                return SessionFlow::Continue;
            }
        };

        self.echo(line);
        let flow = self.execute(command);
        self.command_number += 1;
        flow
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> SessionFlow {
        match command {
            Command::Empty => {}
            Command::Exit => return SessionFlow::Exit,
            Command::Help => {
                self.info(WELCOME);
                for line in HELP {
                    self.info(*line);
                }
            }
            Command::Reset => {
                if let Err(e) = self.interpreter.reset(self.memory_size) {
                    self.error(e.to_string());
                } else {
                    self.info("Machine reset.");
                }
            }
            Command::Dump => {
                let dump = self.interpreter.tape().dump();
                self.push(LineKind::Output, dump);
            }
            Command::Mem(size) => match self.interpreter.resize_memory(size) {
                Ok(()) => {
                    self.memory_size = size;
                    self.info(format!("Memory resized to {} cells.", size));
                }
                Err(e) => self.error(e.to_string()),
            },
            Command::Bf(source) => {
                let program = source_to_integer(&source);
                self.info(program.to_string());
                self.load_and_run(&program);
            }
            Command::Run(program) => self.load_and_run(&program),
        }
        SessionFlow::Continue
    }

    fn load_and_run(&mut self, program: &BigUint) {
        match Program::from_integer_bounded(program, self.factor_limit) {
            Ok(program) => {
                self.interpreter.load_program(program);
                self.run_loaded();
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    fn run_loaded(&mut self) {
        let mut output = Vec::new();
        let mut failure = None;

        loop {
            if let Some(limit) = self.step_limit {
                if self.interpreter.steps_executed() >= limit {
                    failure = Some(format!("Stopped after {} steps.", limit));
                    break;
                }
            }
            match self.interpreter.step(&mut output, None) {
                Ok(StepOutcome::Executed(_)) => {}
                Ok(StepOutcome::Finished) => break,
                Err(e) => {
                    failure = Some(e.to_string());
                    break;
                }
            }
        }

        let text = String::from_utf8_lossy(&output).into_owned();
        for line in text.lines() {
            self.push(LineKind::Output, line.to_string());
        }
        if let Some(message) = failure {
            self.error(message);
        }
    }

    fn echo(&mut self, line: &str) {
        let text = format!("[{}] {}", self.command_number, line.trim());
        self.push(LineKind::Prompt, text);
    }

    fn info(&mut self, text: impl Into<String>) {
        self.push(LineKind::Info, text.into());
    }

    fn error(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text.into());
    }

    fn push(&mut self, kind: LineKind, text: String) {
        self.transcript.push(TranscriptLine { kind, text });
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn command_number(&self) -> usize {
        self.command_number
    }

    pub fn memory_size(&self) -> usize {
        self.memory_size
    }
}
