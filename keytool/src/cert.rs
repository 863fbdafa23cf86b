//! RSA public key extraction from X.509 certificates.

use num_bigint::BigUint;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

use crate::error::{KeytoolError, Result};

/// Parse a PEM or DER encoded X.509 certificate and return the RSA
/// modulus and public exponent as arbitrary-precision integers.
///
/// PEM armor is tried first; inputs without it are parsed as raw DER.
pub fn extract_rsa_public_key(cert_bytes: &[u8]) -> Result<(BigUint, BigUint)> {
    if let Ok((_, pem)) = parse_x509_pem(cert_bytes) {
        let cert = pem
            .parse_x509()
            .map_err(|_| KeytoolError::CertificateParse)?;
        return rsa_key_from_cert(&cert);
    }
    let (_, cert) = X509Certificate::from_der(cert_bytes)
        .map_err(|_| KeytoolError::CertificateParse)?;
    rsa_key_from_cert(&cert)
}

fn rsa_key_from_cert(cert: &X509Certificate<'_>) -> Result<(BigUint, BigUint)> {
    match cert.public_key().parsed() {
        Ok(PublicKey::RSA(rsa)) => Ok((
            BigUint::from_bytes_be(rsa.modulus),
            BigUint::from_bytes_be(rsa.exponent),
        )),
        Ok(other) => Err(KeytoolError::UnsupportedKeyType {
            found: key_algorithm_name(&other),
        }),
        Err(_) => Err(KeytoolError::PublicKeyExtraction),
    }
}

fn key_algorithm_name(key: &PublicKey<'_>) -> &'static str {
    match key {
        PublicKey::RSA(_) => "RSA",
        PublicKey::EC(_) => "EC",
        PublicKey::DSA(_) => "DSA",
        _ => "an unrecognized algorithm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSA_PEM: &[u8] = include_bytes!("../tests/data/rsa2048.pem");
    const RSA_DER: &[u8] = include_bytes!("../tests/data/rsa2048.der");
    const EC_PEM: &[u8] = include_bytes!("../tests/data/ecdsa_p256.pem");

    #[test]
    fn pem_certificate_yields_an_rsa_key() {
        let (modulus, exponent) = extract_rsa_public_key(RSA_PEM).unwrap();
        assert_eq!(modulus.bits(), 2048);
        assert_eq!(exponent, BigUint::from(65537u32));
    }

    #[test]
    fn der_certificate_yields_the_same_key_as_pem() {
        assert_eq!(
            extract_rsa_public_key(RSA_DER).unwrap(),
            extract_rsa_public_key(RSA_PEM).unwrap()
        );
    }

    #[test]
    fn ec_certificate_is_unsupported() {
        assert!(matches!(
            extract_rsa_public_key(EC_PEM),
            Err(KeytoolError::UnsupportedKeyType { found: "EC" })
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            extract_rsa_public_key(b"not a certificate"),
            Err(KeytoolError::CertificateParse)
        ));
    }
}
