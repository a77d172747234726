//! Session command parsing
//!
//! Every line typed into the interactive session is one [`Command`]. Bare
//! integers are programs; everything else is a keyword command:
//!
//! | Input | Command |
//! |---|---|
//! | `help` | [`Command::Help`] |
//! | `exit` | [`Command::Exit`] |
//! | `reset` | [`Command::Reset`] |
//! | `dump` | [`Command::Dump`] |
//! | `mem <size>` | [`Command::Mem`] |
//! | `bf <program>` | [`Command::Bf`] |
//! | `<integer>` | [`Command::Run`] |

use crate::codec::parse_integer;
use num_bigint::BigUint;

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Zero the tape (at the configured size) and drop the program
    Reset,
    /// Print every tape cell
    Dump,
    /// Resize the tape, keeping existing cells
    Mem(usize),
    /// Encode a bracket-language program, print its integer, and run it
    Bf(String),
    /// Load and run a program integer
    Run(BigUint),
    /// Blank line
    Empty,
}

impl Command {
    /// Parse one input line. Errors are user-facing messages.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        match line {
            "" => return Ok(Command::Empty),
            "help" => return Ok(Command::Help),
            "exit" => return Ok(Command::Exit),
            "reset" => return Ok(Command::Reset),
            "dump" => return Ok(Command::Dump),
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("mem") {
            let size = rest.trim();
            if size.is_empty() {
                return Err("The `mem` command requires a memory size as argument.".to_string());
            }
            return match size.parse::<usize>() {
                Ok(0) => Err("Invalid memory size, must be positive.".to_string()),
                Ok(n) => Ok(Command::Mem(n)),
                Err(_) => Err("Invalid memory size, not an integer.".to_string()),
            };
        }

        if let Some(rest) = line.strip_prefix("bf") {
            let program = rest.trim();
            if program.is_empty() {
                return Err("The `bf` command requires a Brainfuck program as argument.".to_string());
            }
            return Ok(Command::Bf(program.to_string()));
        }

        parse_integer(line)
            .map(Command::Run)
            .map_err(|_| "Invalid PNPL program, not an integer.".to_string())
    }
}
