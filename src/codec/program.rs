//! Decoded programs and the decoder

use super::opcode::Instruction;
use crate::interpreter::errors::PnplError;
use crate::primes::{factor, factor_bounded, Factorization};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::ops::Index;
use tracing::debug;

/// An ordered instruction sequence, in ascending prime order of the integer it
/// was decoded from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    /// Factor `n` and decode the result
    pub fn from_integer(n: &BigUint) -> Result<Self, PnplError> {
        let factors = factor(n)?;
        let program = Self::from_factorization(&factors);
        debug!(
            primes = factors.len(),
            instructions = program.len(),
            "decoded program"
        );
        Ok(program)
    }

    /// Like [`Program::from_integer`], but rejects integers with a prime factor
    /// that trial division cannot find below `max_divisor`
    pub fn from_integer_bounded(n: &BigUint, max_divisor: u64) -> Result<Self, PnplError> {
        let factors = factor_bounded(n, max_divisor)?;
        Ok(Self::from_factorization(&factors))
    }

    pub fn from_factorization(factors: &Factorization) -> Self {
        decode(factors)
    }

    /// Decode a program written out as decimal digits.
    ///
    /// Every non-digit character is ignored, so line breaks and separators in
    /// program files are harmless.
    pub fn from_digits(text: &str) -> Result<Self, PnplError> {
        Self::from_integer(&read_digits(text)?)
    }

    /// Parse bracket-language text, dropping characters that are not instructions
    pub fn from_source(source: &str) -> Self {
        Program {
            instructions: source.chars().filter_map(Instruction::from_symbol).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Instruction> {
        self.instructions.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Bracket-language rendering of the program
    pub fn to_source(&self) -> String {
        self.instructions.iter().map(|i| i.symbol()).collect()
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Program {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_source())
    }
}

/// Map a factorization to its program.
///
/// Terms are read in ascending prime order, which [`Factorization`] maintains
/// for its terms. Each exponent selects an instruction and exponents outside
/// 1..=8 contribute nothing.
pub fn decode(factors: &Factorization) -> Program {
    factors
        .iter()
        .filter_map(|power| Instruction::from_exponent(power.exponent))
        .collect()
}

/// Collect the decimal digits of `text` into an integer, ignoring everything else
pub fn read_digits(text: &str) -> Result<BigUint, PnplError> {
    let digits: Vec<u8> = text.bytes().filter(u8::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(PnplError::encoding("no digits found"));
    }
    let n = BigUint::parse_bytes(&digits, 10)
        .ok_or_else(|| PnplError::encoding("digits could not be parsed"))?;
    if n.is_zero() {
        return Err(PnplError::encoding("program must be a positive integer"));
    }
    Ok(n)
}

/// Parse a program literal: a positive decimal integer with optional surrounding
/// whitespace and `_` separators
pub fn parse_integer(text: &str) -> Result<BigUint, PnplError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PnplError::encoding("empty program"));
    }
    if trimmed.starts_with('-') {
        return Err(PnplError::encoding(format!(
            "program must be a positive integer, got {}",
            trimmed
        )));
    }
    let cleaned: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .filter(|&c| c != '_')
        .collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PnplError::encoding(format!("not an integer: {}", trimmed)));
    }
    let n = BigUint::parse_bytes(cleaned.as_bytes(), 10)
        .ok_or_else(|| PnplError::encoding(format!("not an integer: {}", trimmed)))?;
    if n.is_zero() {
        return Err(PnplError::encoding("program must be a positive integer, got 0"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::PrimePower;

    #[test]
    fn test_decode_twelve() {
        // 12 = 2^2 * 3^1
        let program = Program::from_integer(&BigUint::from(12u32)).unwrap();
        assert_eq!(
            program.instructions(),
            &[Instruction::MoveLeft, Instruction::MoveRight]
        );
    }

    #[test]
    fn test_decode_sorts_by_prime() {
        let factors = Factorization::from_powers(vec![
            PrimePower::new(7u32, 8),
            PrimePower::new(2u32, 3),
            PrimePower::new(3u32, 5),
        ]);
        assert_eq!(decode(&factors).to_source(), "+[.");
    }

    #[test]
    fn test_decode_skips_unmapped_exponents() {
        // 2^3 * 3^9 * 5^4: the middle term has no instruction
        let factors = Factorization::from_powers(vec![
            PrimePower::new(2u32, 3),
            PrimePower::new(3u32, 9),
            PrimePower::new(5u32, 4),
        ]);
        assert_eq!(decode(&factors).to_source(), "+-");
    }

    #[test]
    fn test_decode_one_is_empty_program() {
        let program = Program::from_integer(&BigUint::from(1u32)).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_from_integer_bounded() {
        // 2^3 * 97: 97 is found as the cofactor once the divisor passes 9
        let program = Program::from_integer_bounded(&BigUint::from(8u32 * 97), 10).unwrap();
        assert_eq!(program.to_source(), "+>");
        assert!(Program::from_integer_bounded(&BigUint::from(1_000_003u64 * 1_000_033u64), 100).is_err());
    }

    #[test]
    fn test_from_digits_ignores_noise() {
        let program = Program::from_digits("1\n2 # twelve").unwrap();
        assert_eq!(program.to_source(), "<>");
    }

    #[test]
    fn test_read_digits_rejects_empty_and_zero() {
        assert!(read_digits("no digits here").is_err());
        assert!(read_digits("000").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 72 ").unwrap(), BigUint::from(72u32));
        assert_eq!(parse_integer("1_000").unwrap(), BigUint::from(1000u32));
        assert_eq!(parse_integer("+5").unwrap(), BigUint::from(5u32));
        assert!(parse_integer("-5").is_err());
        assert!(parse_integer("0").is_err());
        assert!(parse_integer("12a").is_err());
        assert!(parse_integer("").is_err());
        assert!(parse_integer("1.5").is_err());
    }

    #[test]
    fn test_from_source_drops_comments() {
        let program = Program::from_source("+ add one\n[-] clear");
        assert_eq!(program.to_source(), "+[-]");
    }
}
