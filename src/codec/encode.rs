//! The encoder and bracket-language conversions

use super::opcode::Instruction;
use super::program::Program;
use crate::interpreter::errors::PnplError;
use crate::primes::PrimeCursor;
use num_bigint::BigUint;
use num_traits::One;

/// Encode a sequence of instruction slots.
///
/// Slot `k` is paired with the `k`-th prime, raised to the slot's exponent code.
/// Empty slots still consume their prime but contribute a factor of 1, so the
/// positions of later instructions are preserved.
pub fn encode(slots: &[Option<Instruction>]) -> BigUint {
    let mut primes = PrimeCursor::new();
    slots.iter().fold(BigUint::one(), |acc, slot| {
        let prime = primes.next_prime();
        match slot {
            Some(instruction) => acc * BigUint::from(prime).pow(instruction.exponent()),
            None => acc,
        }
    })
}

/// Encode a decoded program, one consecutive prime per instruction.
///
/// This inverts [`Program::from_integer`] only for integers whose primes are
/// consecutive from 2 and whose exponents all lie in 1..=8. Gaps and unmapped
/// exponents are lost on decoding, so `2^3 * 5^4` re-encodes as `2^3 * 3^4`.
pub fn encode_program(program: &Program) -> BigUint {
    let slots: Vec<Option<Instruction>> = program.iter().copied().map(Some).collect();
    encode(&slots)
}

/// Convert bracket-language text to a program integer.
///
/// Every character occupies one prime; characters that are not instructions
/// are encoded as empty slots.
pub fn source_to_integer(source: &str) -> BigUint {
    let slots: Vec<Option<Instruction>> = source.chars().map(Instruction::from_symbol).collect();
    encode(&slots)
}

/// Convert a program integer back to bracket-language text
pub fn integer_to_source(n: &BigUint) -> Result<String, PnplError> {
    Ok(Program::from_integer(n)?.to_source())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_is_one() {
        assert_eq!(encode(&[]), BigUint::one());
        assert_eq!(source_to_integer(""), BigUint::one());
    }

    #[test]
    fn test_encode_two_increments() {
        // 2^3 * 3^3
        assert_eq!(source_to_integer("++"), BigUint::from(216u32));
    }

    #[test]
    fn test_encode_output() {
        assert_eq!(source_to_integer("."), BigUint::from(256u32));
    }

    #[test]
    fn test_empty_slots_consume_primes() {
        // '+' -> 2^3, ' ' -> 3^0, '-' -> 5^4
        let n = source_to_integer("+ -");
        assert_eq!(n, BigUint::from(8u32 * 625));
        assert_eq!(integer_to_source(&n).unwrap(), "+-");
    }

    #[test]
    fn test_encode_inverts_decode() {
        let n = BigUint::from(12u32);
        let program = Program::from_integer(&n).unwrap();
        assert_eq!(encode_program(&program), n);
    }

    #[test]
    fn test_gaps_are_closed_on_reencode() {
        // 2^3 * 5^4 decodes to "+-", which encodes on consecutive primes
        let n = BigUint::from(8u32 * 625);
        let program = Program::from_integer(&n).unwrap();
        assert_eq!(encode_program(&program), BigUint::from(8u32 * 81));
    }

    #[test]
    fn test_repeated_encodes_are_independent() {
        let first = source_to_integer("+[-]");
        let second = source_to_integer("+[-]");
        assert_eq!(first, second);
    }

    #[test]
    fn test_integer_to_source_rejects_zero() {
        assert!(integer_to_source(&BigUint::from(0u32)).is_err());
    }
}
