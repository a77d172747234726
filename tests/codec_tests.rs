// Encoding and decoding tests through the public API

use num_bigint::BigUint;
use pnpl::codec::{
    decode, encode, encode_program, integer_to_source, read_digits, source_to_integer,
    Instruction, Program,
};
use pnpl::primes::{factor, Factorization, PrimeCursor, PrimePower};

#[test]
fn test_factor_twelve_decodes_left_right() {
    let factors = factor(&BigUint::from(12u32)).expect("Factorization failed");
    assert_eq!(
        factors.powers(),
        &[PrimePower::new(2u32, 2), PrimePower::new(3u32, 1)]
    );

    let program = decode(&factors);
    assert_eq!(
        program.instructions(),
        &[Instruction::MoveLeft, Instruction::MoveRight]
    );
}

#[test]
fn test_all_instructions_round_trip() {
    let source = "><+-[],.";
    let n = source_to_integer(source);

    // 2^1 * 3^2 * 5^3 * 7^4 * 11^5 * 13^6 * 17^7 * 19^8
    let expected = [(2u32, 1u32), (3, 2), (5, 3), (7, 4), (11, 5), (13, 6), (17, 7), (19, 8)]
        .iter()
        .fold(BigUint::from(1u32), |acc, &(p, e)| acc * BigUint::from(p).pow(e));
    assert_eq!(n, expected);
    assert_eq!(integer_to_source(&n).unwrap(), source);
}

#[test]
fn test_encode_slots_with_gaps() {
    let n = encode(&[Some(Instruction::Increment), None, Some(Instruction::Output)]);

    // 2^3 * 5^8: the empty slot used up 3
    assert_eq!(n, BigUint::from(8u32) * BigUint::from(5u32).pow(8));
    assert_eq!(Program::from_integer(&n).unwrap().to_source(), "+.");
}

#[test]
fn test_comments_survive_as_gaps() {
    let commented = "+ increment\n. output";
    let n = source_to_integer(commented);

    // Only the instruction characters come back.
    assert_eq!(integer_to_source(&n).unwrap(), "+.");
}

#[test]
fn test_encode_program_inverse() {
    let program = Program::from_source("++[>+<-]>.");
    let n = encode_program(&program);

    assert_eq!(Program::from_integer(&n).unwrap(), program);
    assert_eq!(n, source_to_integer("++[>+<-]>."));
}

#[test]
fn test_large_program_round_trip() {
    let source = "+[->+<]".repeat(30);
    let n = source_to_integer(&source);

    assert_eq!(integer_to_source(&n).unwrap(), source);
}

#[test]
fn test_decode_skips_large_exponents() {
    // 2^3 * 3^12 * 5^8
    let n = BigUint::from(8u32) * BigUint::from(3u32).pow(12) * BigUint::from(5u32).pow(8);
    assert_eq!(integer_to_source(&n).unwrap(), "+.");
}

#[test]
fn test_prime_program_is_single_move() {
    // Any prime p is p^1, a single MoveRight.
    let n = BigUint::from(1_000_003u64);
    assert_eq!(integer_to_source(&n).unwrap(), ">");
}

#[test]
fn test_read_digits_from_file_text() {
    let n = read_digits("21\n6\r\n").unwrap();
    assert_eq!(n, BigUint::from(216u32));
    assert_eq!(integer_to_source(&n).unwrap(), "++");
}

#[test]
fn test_factorization_display_and_product() {
    let n = source_to_integer("+.");
    let factors: Factorization = factor(&n).unwrap();

    assert_eq!(factors.to_string(), "2^3 * 3^8");
    assert_eq!(factors.product(), n);
}

#[test]
fn test_cursor_matches_encoder_primes() {
    let primes: Vec<u64> = PrimeCursor::new().take(5).collect();
    let n = source_to_integer(">>>>>");

    assert_eq!(primes, vec![2, 3, 5, 7, 11]);
    assert_eq!(n, BigUint::from(2u32 * 3 * 5 * 7 * 11));
}
