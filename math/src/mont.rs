//! Montgomery parameter derivation for fixed-width RSA verification keys.
//!
//! A constrained verifier (bootloader, mask ROM) performs modular
//! exponentiation with Montgomery multiplication, which needs two
//! precomputed constants alongside the modulus: `R² mod N` where
//! `R = 2^(32·word_count)`, and `−N⁻¹ mod 2^32`. This module derives both
//! from an arbitrary-precision key and packs everything into fixed-size
//! 32-bit limb arrays so the verifier never touches a bignum library.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{MontError, Result};
use crate::inverse::inverse_mod_2_32;
use crate::limbs;

/// Bits per limb of the packed key format.
pub const LIMB_BITS: u32 = 32;

/// Precomputed RSA public key, ready for byte-exact serialization.
///
/// Constructed once by [`derive_montgomery_record`] and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MontgomeryKeyRecord {
    /// Number of 32-bit limbs representing the modulus. Fixed by the
    /// deployment, never inferred from the key.
    pub word_count: u32,
    /// `(−N⁻¹) mod 2^32` of the modulus's low word.
    pub n0inv: u32,
    /// The modulus N base 2^32, least significant limb first.
    pub modulus_limbs: Vec<u32>,
    /// `R² mod N` base 2^32, least significant limb first.
    pub montgomery_r2_limbs: Vec<u32>,
    /// The public exponent.
    pub exponent: u32,
}

impl MontgomeryKeyRecord {
    /// Size of the serialized record in bytes.
    pub fn encoded_len(&self) -> usize {
        12 + 8 * self.word_count as usize
    }

    /// Serialize field by field in the layout the verifier consumes:
    /// `word_count`, `n0inv`, modulus limbs, R² limbs, `exponent`, every
    /// scalar as a little-endian u32. No struct memory layout is involved,
    /// so the encoding is identical on every host platform.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.word_count.to_le_bytes());
        out.extend_from_slice(&self.n0inv.to_le_bytes());
        for limb in &self.modulus_limbs {
            out.extend_from_slice(&limb.to_le_bytes());
        }
        for limb in &self.montgomery_r2_limbs {
            out.extend_from_slice(&limb.to_le_bytes());
        }
        out.extend_from_slice(&self.exponent.to_le_bytes());
        out
    }
}

/// Derive the precomputed key record for `modulus` and `exponent` at a
/// fixed `word_count`.
///
/// The modulus must occupy exactly `word_count` 32-bit words in its minimal
/// representation; both smaller and larger keys are rejected with
/// [`MontError::SizeMismatch`] rather than padded or truncated. The
/// exponent must fit in 32 bits. All arithmetic before the final limb
/// decomposition is exact, so identical inputs always produce identical
/// records.
pub fn derive_montgomery_record(
    modulus: &BigUint,
    exponent: &BigUint,
    word_count: u32,
) -> Result<MontgomeryKeyRecord> {
    let found = limbs::minimal_word_count(modulus);
    if word_count == 0 || found != word_count {
        return Err(MontError::SizeMismatch {
            expected: word_count,
            found,
        });
    }

    if exponent.bits() > u64::from(LIMB_BITS) {
        return Err(MontError::ExponentOverflow);
    }
    let exponent = exponent.iter_u32_digits().next().unwrap_or(0);

    let n0 = modulus
        .iter_u32_digits()
        .next()
        .ok_or(MontError::EvenModulus)?;
    let inv = inverse_mod_2_32(n0).ok_or(MontError::EvenModulus)?;
    let n0inv = inv.wrapping_neg();

    // R² mod N with R = 2^(32·word_count).
    let r = BigUint::one() << (LIMB_BITS as usize * word_count as usize);
    let rr = (&r * &r) % modulus;

    Ok(MontgomeryKeyRecord {
        word_count,
        n0inv,
        modulus_limbs: limbs::decompose(modulus, word_count)?,
        montgomery_r2_limbs: limbs::decompose(&rr, word_count)?,
        exponent,
    })
}
