//! Primality test and the prime cursor

/// Check whether `n` is prime by trial division up to floor(sqrt(n))
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut k: u64 = 2;
    while k <= n / k {
        if n % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}

/// Cursor over the primes in increasing order.
///
/// A fresh cursor has emitted nothing yet; the first call to
/// [`next_prime`](PrimeCursor::next_prime) returns 2. Every encoding owns its
/// own cursor, so two encodings never observe each other's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCursor {
    current: u64,
}

impl PrimeCursor {
    pub fn new() -> Self {
        PrimeCursor { current: 1 }
    }

    /// Advance to the next prime and return it
    pub fn next_prime(&mut self) -> u64 {
        self.current += 1;
        while !is_prime(self.current) {
            self.current += 1;
        }
        self.current
    }

    /// Last prime returned, or 1 if none has been returned yet
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Rewind to the initial state
    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for PrimeCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeCursor {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_prime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    /// Same trial division over arbitrary-precision integers, used as a reference
    fn is_prime_big(n: &BigUint) -> bool {
        if n <= &BigUint::one() {
            return false;
        }
        let limit = n.sqrt();
        let mut k = BigUint::from(2u32);
        while k <= limit {
            if (n % &k).is_zero() {
                return false;
            }
            k += 1u32;
        }
        true
    }

    #[test]
    fn test_small_primes() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_non_positive_and_one_are_not_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime_big(&BigUint::zero()));
        assert!(!is_prime_big(&BigUint::one()));
    }

    #[test]
    fn test_squares_are_composite() {
        assert!(!is_prime(4));
        assert!(!is_prime(49));
        assert!(!is_prime(10_403)); // 101 * 103
        assert!(!is_prime_big(&BigUint::from(10_403u32)));
    }

    #[test]
    fn test_big_matches_small() {
        for n in 0u64..500 {
            assert_eq!(is_prime(n), is_prime_big(&BigUint::from(n)), "n = {}", n);
        }
    }

    #[test]
    fn test_cursor_sequence() {
        let mut cursor = PrimeCursor::new();
        assert_eq!(cursor.current(), 1);
        let first: Vec<u64> = (0..8).map(|_| cursor.next_prime()).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(cursor.current(), 19);
    }

    #[test]
    fn test_cursor_reset_is_deterministic() {
        let mut cursor = PrimeCursor::new();
        cursor.next_prime();
        cursor.next_prime();
        cursor.reset();
        assert_eq!(cursor.next_prime(), 2);
    }

    #[test]
    fn test_independent_cursors() {
        let mut a = PrimeCursor::new();
        let mut b = PrimeCursor::new();
        a.next_prime();
        a.next_prime();
        assert_eq!(b.next_prime(), 2);
        assert_eq!(a.next_prime(), 5);
    }

    #[test]
    fn test_iterator() {
        let hundredth = PrimeCursor::new().nth(99);
        assert_eq!(hundredth, Some(541));
    }
}
