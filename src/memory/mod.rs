//! Memory model for the PNPL machine
//!
//! - [`tape`]: the fixed-length [`Tape`] of byte cells
//!
//! # Addressing
//!
//! The tape has no ends. Moving left from cell 0 lands on the last cell and
//! moving right from the last cell lands on cell 0:
//! ```text
//! left_of(0) == len - 1      right_of(len - 1) == 0
//! ```
//!
//! # Cell Values
//!
//! Cells hold `u8` values. Increment and decrement wrap modulo 256, and output
//! emits the character whose code point equals the cell value.

pub mod tape;

pub use tape::Tape;
