use thiserror::Error;

/// Result type specialized for Montgomery parameter derivation.
pub type Result<T> = std::result::Result<T, MontError>;

/// Errors that can arise while deriving the precomputed key record.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MontError {
    #[error(
        "modulus occupies {found} 32-bit words but the key format requires exactly {expected}"
    )]
    SizeMismatch { expected: u32, found: u32 },
    #[error("public exponent does not fit in 32 bits")]
    ExponentOverflow,
    #[error("modulus is even; its low word has no inverse modulo 2^32")]
    EvenModulus,
}
