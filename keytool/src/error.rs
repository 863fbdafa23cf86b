use std::io;
use std::path::PathBuf;

use thiserror::Error;

use math::error::MontError;

/// Result type specialized for the conversion pipeline.
pub type Result<T> = std::result::Result<T, KeytoolError>;

/// Raised when a requested RSA bit length is not a supported deployment
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported RSA key size: {0} bits")]
pub struct InvalidKeySize(pub usize);

/// Errors that can arise while converting a certificate into a packed
/// verity key. Every error is terminal for the conversion; nothing is
/// retried and no partial output is written.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum KeytoolError {
    #[error("failed to read certificate {}: {source}", .path.display())]
    CertificateRead { path: PathBuf, source: io::Error },
    #[error("input is not a valid PEM or DER X.509 certificate")]
    CertificateParse,
    #[error("certificate public key cannot be decoded")]
    PublicKeyExtraction,
    #[error("certificate public key uses {found}, expected RSA")]
    UnsupportedKeyType { found: &'static str },
    #[error(transparent)]
    Derivation(#[from] MontError),
    #[error(transparent)]
    KeySize(#[from] InvalidKeySize),
    #[error("failed to write key file {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}
