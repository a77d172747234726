// Property-based tests for factorization and the encode/decode laws

use num_bigint::BigUint;
use pnpl::codec::{encode_program, integer_to_source, source_to_integer, Program};
use pnpl::interpreter::engine::Interpreter;
use pnpl::primes::{factor, PrimeCursor};
use proptest::prelude::*;

proptest! {
    /// Property: the factorization multiplies back to the input, with distinct
    /// ascending primes and positive exponents
    #[test]
    fn prop_factorization_invariant(n in 1u64..5_000_000) {
        let big = BigUint::from(n);
        let factors = factor(&big).unwrap();

        prop_assert_eq!(factors.product(), big);
        prop_assert!(factors.iter().all(|p| p.exponent >= 1));
        prop_assert!(factors.powers().windows(2).all(|w| w[0].prime < w[1].prime));
    }

    /// Property: instruction-only text survives text -> integer -> text
    #[test]
    fn prop_source_round_trip(source in "[<>+.,\\[\\]-]{0,40}") {
        let n = source_to_integer(&source);
        prop_assert_eq!(integer_to_source(&n).unwrap(), source);
    }

    /// Property: integers built from consecutive primes with exponents 1..=8
    /// survive integer -> program -> integer
    #[test]
    fn prop_integer_round_trip(exponents in prop::collection::vec(1u32..=8, 0..24)) {
        let n = PrimeCursor::new()
            .zip(exponents.iter())
            .fold(BigUint::from(1u32), |acc, (p, &e)| acc * BigUint::from(p).pow(e));

        let program = Program::from_integer(&n).unwrap();
        prop_assert_eq!(program.len(), exponents.len());
        prop_assert_eq!(encode_program(&program), n);
    }

    /// Property: moving right k times on a tape of size s lands on k mod s
    #[test]
    fn prop_pointer_wraps(k in 0usize..64, size in 1usize..16) {
        let mut machine = Interpreter::from_program(Program::from_source(&">".repeat(k)), size).unwrap();
        machine.run(&mut Vec::new()).unwrap();
        prop_assert_eq!(machine.pointer(), k % size);

        let mut machine = Interpreter::from_program(Program::from_source(&"<".repeat(k)), size).unwrap();
        machine.run(&mut Vec::new()).unwrap();
        prop_assert_eq!(machine.pointer(), (size - k % size) % size);
    }
}
