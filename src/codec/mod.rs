//! Conversion between program integers, instruction sequences, and text
//!
//! ```text
//!            factor            decode
//! integer ──────────► powers ──────────► Program
//!    ▲                                      │
//!    └────────────── encode ◄───────────────┘
//! ```
//!
//! - [`opcode`]: the eight [`Instruction`]s, their exponent codes and their
//!   bracket-language symbols
//! - [`program`]: [`Program`], the decoder (prime order → program order) and
//!   the integer literal readers
//! - [`encode`]: the encoder (program order → ascending primes) and the
//!   text conversions used by the command line

pub mod encode;
pub mod opcode;
pub mod program;

pub use encode::{encode, encode_program, integer_to_source, source_to_integer};
pub use opcode::Instruction;
pub use program::{decode, parse_integer, read_digits, Program};
