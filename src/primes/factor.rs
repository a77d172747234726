//! Prime-power decomposition of program integers
//!
//! [`factor`] finds the smallest remaining divisor by scanning upward from 2,
//! divides it out completely, and continues on the cofactor. Once the divisor
//! passes the square root of the cofactor, whatever is left (if greater than 1)
//! is itself prime and is recorded with exponent 1.
//!
//! The result is a [`Factorization`]: prime powers sorted ascending by prime,
//! each prime appearing exactly once with a strictly positive exponent.

use crate::interpreter::errors::PnplError;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;
use tracing::trace;

/// One `prime^exponent` term of a factorization
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimePower {
    pub prime: BigUint,
    pub exponent: u32,
}

impl PrimePower {
    pub fn new(prime: impl Into<BigUint>, exponent: u32) -> Self {
        PrimePower {
            prime: prime.into(),
            exponent,
        }
    }

    /// Value of the term, `prime^exponent`
    pub fn value(&self) -> BigUint {
        self.prime.pow(self.exponent)
    }
}

impl fmt::Display for PrimePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.prime)
        } else {
            write!(f, "{}^{}", self.prime, self.exponent)
        }
    }
}

/// A set of prime powers, kept sorted ascending by prime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Factorization {
    powers: Vec<PrimePower>,
}

impl Factorization {
    /// Build a factorization from terms in any order.
    ///
    /// Terms are sorted by prime, zero exponents are dropped and repeated primes
    /// have their exponents summed, so the product is unchanged.
    pub fn from_powers(mut powers: Vec<PrimePower>) -> Self {
        powers.retain(|p| p.exponent > 0);
        powers.sort();

        let mut merged: Vec<PrimePower> = Vec::with_capacity(powers.len());
        for power in powers {
            match merged.last_mut() {
                Some(last) if last.prime == power.prime => last.exponent += power.exponent,
                _ => merged.push(power),
            }
        }
        Factorization { powers: merged }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrimePower> {
        self.powers.iter()
    }

    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    pub fn powers(&self) -> &[PrimePower] {
        &self.powers
    }

    /// Multiply the terms back together
    pub fn product(&self) -> BigUint {
        self.powers
            .iter()
            .fold(BigUint::one(), |acc, power| acc * power.value())
    }
}

impl<'a> IntoIterator for &'a Factorization {
    type Item = &'a PrimePower;
    type IntoIter = std::slice::Iter<'a, PrimePower>;

    fn into_iter(self) -> Self::IntoIter {
        self.powers.iter()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (i, power) in self.powers.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "{}", power)?;
        }
        Ok(())
    }
}

/// Decompose `n` into its prime powers.
///
/// `1` has the empty factorization. `0` has none and is rejected.
pub fn factor(n: &BigUint) -> Result<Factorization, PnplError> {
    factor_with_limit(n, None)
}

/// Like [`factor`], but gives up once trial division passes `max_divisor`
/// without having reached the square root of the cofactor.
///
/// Integers whose factors are all at most `max_divisor` (every integer an
/// encoder produces for a program shorter than that many primes) factor
/// exactly as with [`factor`].
pub fn factor_bounded(n: &BigUint, max_divisor: u64) -> Result<Factorization, PnplError> {
    factor_with_limit(n, Some(max_divisor))
}

fn factor_with_limit(n: &BigUint, max_divisor: Option<u64>) -> Result<Factorization, PnplError> {
    if n.is_zero() {
        return Err(PnplError::encoding("0 has no prime factorization"));
    }

    let mut remaining = n.clone();
    let mut powers = Vec::new();
    let mut divisor: u64 = 2;

    while !remaining.is_one() {
        let square = BigUint::from(divisor) * divisor;
        if square > remaining {
            // No divisor up to the square root: the cofactor is prime.
            let prime = std::mem::replace(&mut remaining, BigUint::one());
            trace!(%prime, "prime cofactor");
            powers.push(PrimePower { prime, exponent: 1 });
            break;
        }
        if max_divisor.is_some_and(|limit| divisor > limit) {
            trace!(divisor, "trial division limit reached");
            return Err(PnplError::encoding("program too large to factor"));
        }

        let mut exponent = 0u32;
        while (&remaining % divisor).is_zero() {
            remaining /= divisor;
            exponent += 1;
        }
        if exponent > 0 {
            trace!(divisor, exponent, "found prime power");
            powers.push(PrimePower::new(divisor, exponent));
        }

        // Even candidates past 2 can never divide what is left.
        divisor = match divisor {
            2 => 3,
            d => d.checked_add(2).ok_or_else(|| {
                PnplError::encoding("prime factor exceeds the trial division range")
            })?,
        };
    }

    Ok(Factorization { powers })
}
