use std::fmt;

use crate::error::InvalidKeySize;

/// Key size used when the caller does not pick one (RSA-2048, 64 words).
pub const DEFAULT_KEY_SIZE: KeySize = KeySize::Rsa2048;

/// RSA key sizes the packed key format is deployed with.
pub const SUPPORTED_KEY_SIZES: [KeySize; 3] =
    [KeySize::Rsa2048, KeySize::Rsa3072, KeySize::Rsa4096];

/// Fixed RSA key sizes the verifier and this tool agree on ahead of time.
///
/// The word count is a deployment constant: the derivation rejects any
/// certificate whose modulus does not match it exactly, rather than
/// inferring the size from the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    Rsa2048,
    Rsa3072,
    Rsa4096,
}

impl KeySize {
    /// Modulus bit length for this key size.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            KeySize::Rsa2048 => 2048,
            KeySize::Rsa3072 => 3072,
            KeySize::Rsa4096 => 4096,
        }
    }

    /// Number of 32-bit limbs in the packed record.
    #[inline]
    pub const fn word_count(self) -> u32 {
        (self.bits() / 32) as u32
    }
}

impl TryFrom<usize> for KeySize {
    type Error = InvalidKeySize;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        match bits {
            2048 => Ok(KeySize::Rsa2048),
            3072 => Ok(KeySize::Rsa3072),
            4096 => Ok(KeySize::Rsa4096),
            other => Err(InvalidKeySize(other)),
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RSA-{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts_match_bit_lengths() {
        assert_eq!(KeySize::Rsa2048.word_count(), 64);
        assert_eq!(KeySize::Rsa3072.word_count(), 96);
        assert_eq!(KeySize::Rsa4096.word_count(), 128);
    }

    #[test]
    fn supported_bit_lengths_round_trip() {
        for size in SUPPORTED_KEY_SIZES {
            assert_eq!(KeySize::try_from(size.bits()), Ok(size));
        }
    }

    #[test]
    fn unsupported_bit_length_is_rejected() {
        assert_eq!(KeySize::try_from(1536), Err(InvalidKeySize(1536)));
    }

    #[test]
    fn display_names_the_bit_length() {
        assert_eq!(KeySize::Rsa2048.to_string(), "RSA-2048");
    }
}
