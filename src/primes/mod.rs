//! Prime arithmetic behind PNPL
//!
//! Programs are integers, and the instruction sequence is read off their prime
//! factorization. This module provides the two number-theoretic pieces:
//!
//! - [`oracle`]: trial-division primality test and [`PrimeCursor`], an owned
//!   cursor over the primes in increasing order (used when encoding)
//! - [`factor`]: decomposition of a [`BigUint`](num_bigint::BigUint) into a
//!   sorted [`Factorization`] (used when decoding), plus [`factor_bounded`]
//!   which caps the trial divisor for interactive use
//!
//! Both are deliberately plain trial division. Encoded programs only use the
//! first few primes, so the divisor never grows beyond the program length's
//! prime, while the cofactor may be enormous.

pub mod factor;
pub mod oracle;

pub use factor::{factor, factor_bounded, Factorization, PrimePower};
pub use oracle::{is_prime, PrimeCursor};
