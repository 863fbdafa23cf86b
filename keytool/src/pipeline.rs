//! Certificate-to-key conversion pipeline.

use std::fs;
use std::path::Path;

use math::derive_montgomery_record;

use crate::cert::extract_rsa_public_key;
use crate::error::{KeytoolError, Result};
use crate::params::KeySize;

/// Convert the certificate at `cert_path` into a packed verity key at
/// `out_path`.
///
/// The encoded record is fully assembled in memory before anything touches
/// the destination, and is then persisted through a sibling temporary file
/// renamed over the target. A failure at any step leaves the destination
/// untouched; there are no partial key files.
pub fn convert_certificate(
    cert_path: &Path,
    out_path: &Path,
    key_size: KeySize,
) -> Result<()> {
    let cert_bytes =
        fs::read(cert_path).map_err(|source| KeytoolError::CertificateRead {
            path: cert_path.to_path_buf(),
            source,
        })?;
    let (modulus, exponent) = extract_rsa_public_key(&cert_bytes)?;
    let record =
        derive_montgomery_record(&modulus, &exponent, key_size.word_count())?;
    write_replacing(out_path, &record.to_bytes())
}

fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| KeytoolError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let staging = path.with_extension("key.tmp");
    fs::write(&staging, bytes).map_err(write_err)?;
    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        write_err(source)
    })
}
