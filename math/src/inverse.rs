//! Word-sized modular inverse via the extended Euclidean algorithm.

const MODULUS: i64 = 1 << 32;

/// Compute `n0⁻¹ mod 2^32` for an odd `n0`.
///
/// Returns `None` when `n0` is even, since `gcd(n0, 2^32) > 1` leaves no
/// inverse. RSA moduli are products of two odd primes, so their low word
/// is always odd in well-formed input.
pub fn inverse_mod_2_32(n0: u32) -> Option<u32> {
    if n0 & 1 == 0 {
        return None;
    }

    // Bezout coefficients stay below the modulus in magnitude, so i64
    // arithmetic cannot overflow here.
    let (mut r_prev, mut r) = (MODULUS, i64::from(n0));
    let (mut s_prev, mut s) = (0i64, 1i64);
    while r != 0 {
        let q = r_prev / r;
        (r_prev, r) = (r, r_prev - q * r);
        (s_prev, s) = (s, s_prev - q * s);
    }
    debug_assert_eq!(r_prev, 1, "gcd(odd, 2^32) must be 1");

    Some(s_prev.rem_euclid(MODULUS) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn one_is_its_own_inverse() {
        assert_eq!(inverse_mod_2_32(1), Some(1));
    }

    #[test]
    fn all_ones_word_is_its_own_inverse() {
        // (2^32 - 1)² = 2^64 - 2^33 + 1 ≡ 1 (mod 2^32)
        assert_eq!(inverse_mod_2_32(u32::MAX), Some(u32::MAX));
    }

    #[test]
    fn even_words_have_no_inverse() {
        assert_eq!(inverse_mod_2_32(0), None);
        assert_eq!(inverse_mod_2_32(2), None);
        assert_eq!(inverse_mod_2_32(0x8000_0000), None);
    }

    #[test]
    fn known_inverse_of_three() {
        let inv = inverse_mod_2_32(3).unwrap();
        assert_eq!(3u32.wrapping_mul(inv), 1);
    }

    #[quickcheck]
    fn inverse_of_odd_word_multiplies_to_one(word: u32) -> bool {
        let odd = word | 1;
        let inv = inverse_mod_2_32(odd).unwrap();
        odd.wrapping_mul(inv) == 1
    }
}
