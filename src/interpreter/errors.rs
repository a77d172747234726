//! Error types for the PNPL interpreter
//!
//! This module defines [`PnplError`], which covers every failure the library can
//! report: malformed program integers, unbalanced loops found while running,
//! invalid tape sizes, and I/O failures on the output sink or input source.
//!
//! All errors are fatal to the current run only. The tape keeps whatever state it
//! had when the error was raised, and the next load starts from a clean program
//! counter and loop stack.

use std::fmt;
use std::io;

/// Which side of a loop was left unmatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopFault {
    /// A LoopEnd was reached with no active LoopStart on the loop stack
    UnmatchedEnd,
    /// The forward scan from a LoopStart ran off the end of the program
    UnterminatedStart,
    /// The program finished while loops were still open
    OpenAtExit { depth: usize },
}

/// Errors produced while decoding, loading, or running a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PnplError {
    /// The program integer is zero, negative, or not an integer at all
    InvalidProgramEncoding { message: String },

    /// Malformed bracket nesting, detected at `position` in the program
    UnbalancedLoop { position: usize, fault: LoopFault },

    /// A tape length of zero was requested
    InvalidMemorySize { size: usize },

    /// Reading input or writing output failed
    Io { message: String },
}

impl PnplError {
    /// Program position the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            PnplError::UnbalancedLoop { position, .. } => Some(*position),
            PnplError::InvalidProgramEncoding { .. }
            | PnplError::InvalidMemorySize { .. }
            | PnplError::Io { .. } => None,
        }
    }

    pub(crate) fn encoding(message: impl Into<String>) -> Self {
        PnplError::InvalidProgramEncoding {
            message: message.into(),
        }
    }
}

impl fmt::Display for PnplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnplError::InvalidProgramEncoding { message } => {
                write!(f, "Invalid program encoding: {}", message)
            }
            PnplError::UnbalancedLoop { position, fault } => match fault {
                LoopFault::UnmatchedEnd => {
                    write!(
                        f,
                        "Unbalanced loop: loop end at instruction {} has no matching start",
                        position
                    )
                }
                LoopFault::UnterminatedStart => {
                    write!(
                        f,
                        "Unbalanced loop: loop start at instruction {} is never closed",
                        position
                    )
                }
                LoopFault::OpenAtExit { depth } => {
                    write!(
                        f,
                        "Unbalanced loop: program ended at instruction {} with {} open loop{}",
                        position,
                        depth,
                        if *depth == 1 { "" } else { "s" }
                    )
                }
            },
            PnplError::InvalidMemorySize { size } => {
                write!(f, "Invalid memory size: {} (must be positive)", size)
            }
            PnplError::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for PnplError {}

impl From<io::Error> for PnplError {
    fn from(err: io::Error) -> Self {
        PnplError::Io {
            message: err.to_string(),
        }
    }
}
