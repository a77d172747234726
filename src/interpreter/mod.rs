//! PNPL execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) tape machine
//! - `loops`: LoopStart/LoopEnd handling and bracket matching
//! - [`errors`]: error types shared by the whole crate
//! - [`constants`]: defaults and instruction code bounds
//!
//! # Execution Model
//!
//! The machine holds a tape, a pointer into it, the decoded program, a program
//! counter and a loop stack. Each step executes the instruction at the program
//! counter and advances it by one; the loop instructions move it first. A run
//! ends when the program counter passes the last instruction.
//!
//! # Input and Output
//!
//! Output instructions write one character to any [`std::io::Write`]. Input
//! instructions do nothing unless a [`std::io::Read`] is supplied.

pub mod constants;
pub mod engine;
pub mod errors;
mod loops;
