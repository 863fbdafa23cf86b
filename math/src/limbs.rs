//! Base-2^32 limb decomposition of arbitrary-precision integers.

use num_bigint::BigUint;

use crate::error::{MontError, Result};

/// Decompose `value` into exactly `word_count` base-2^32 limbs, least
/// significant first, zero-padding the high end.
///
/// Fails when the value needs more than `word_count` limbs; the key format
/// carries no length information beyond the fixed word count, so an
/// oversized value cannot be represented.
pub fn decompose(value: &BigUint, word_count: u32) -> Result<Vec<u32>> {
    let mut limbs = value.to_u32_digits();
    if limbs.len() > word_count as usize {
        return Err(MontError::SizeMismatch {
            expected: word_count,
            found: limbs.len() as u32,
        });
    }
    limbs.resize(word_count as usize, 0);
    Ok(limbs)
}

/// Positional base-2^32 evaluation; inverse of [`decompose`].
pub fn reconstruct(limbs: &[u32]) -> BigUint {
    BigUint::new(limbs.to_vec())
}

/// Number of limbs in the minimal base-2^32 representation of `value`.
/// Zero occupies zero limbs.
pub fn minimal_word_count(value: &BigUint) -> u32 {
    value.bits().div_ceil(32) as u32
}
