//! # Introduction
//!
//! PNPL (Prime Number Programming Language) is a tape-and-pointer language whose
//! programs are single positive integers. Factoring the integer recovers the
//! instructions: each prime, taken in ascending order, contributes one
//! instruction selected by its exponent.
//!
//! | Exponent | Instruction | Symbol |
//! |---|---|---|
//! | 1 | move right | `>` |
//! | 2 | move left | `<` |
//! | 3 | increment | `+` |
//! | 4 | decrement | `-` |
//! | 5 | loop start | `[` |
//! | 6 | loop end | `]` |
//! | 7 | input | `,` |
//! | 8 | output | `.` |
//!
//! So `216 = 2^3 * 3^3` is `++`, and `256 = 2^8` is `.`.
//!
//! ## Execution pipeline
//!
//! ```text
//! Integer → Factorizer → Decoder → Program → Interpreter → Output
//! ```
//!
//! 1. [`primes`] — trial-division primality, the prime cursor, and factorization.
//! 2. [`codec`] — instructions, decoding, and encoding (including conversion
//!    from and to bracket-language text).
//! 3. [`memory`] — the wraparound [`memory::Tape`].
//! 4. [`interpreter`] — the tape machine and the crate's error type.
//! 5. [`ui`] — interactive session and its ratatui front end; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! use pnpl::interpreter::engine::Interpreter;
//!
//! let program = pnpl::codec::source_to_integer("++++++++[>++++++++<-]>+.");
//! let mut machine = Interpreter::new(&program, 16).unwrap();
//! let mut output = Vec::new();
//! machine.run(&mut output).unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod codec;
pub mod interpreter;
pub mod memory;
pub mod primes;
pub mod ui;

pub use codec::{Instruction, Program};
pub use interpreter::engine::Interpreter;
pub use interpreter::errors::PnplError;
