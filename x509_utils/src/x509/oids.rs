// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! OID constants
//!
//! Object identifiers for the digest, signature, key and extension algorithms
//! this crate recognizes.
//!
//! # References
//! - RFC 3279 / RFC 4055 / RFC 5758 - Algorithm identifiers
//! - RFC 5280 - Certificate extensions
//! - RFC 6962 - Certificate Transparency

use const_oid::ObjectIdentifier;

// =============================================================================
// Digest Algorithm OIDs
// =============================================================================

/// MD2 - 1.2.840.113549.2.2
pub const MD2: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.2");

/// MD4 - 1.2.840.113549.2.4
pub const MD4: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.4");

/// MD5 - 1.2.840.113549.2.5
pub const MD5: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.5");

/// SHA-1 - 1.3.14.3.2.26
pub const SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.26");

/// SHA-224 - 2.16.840.1.101.3.4.2.4
pub const SHA224: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.4");

/// SHA-256 - 2.16.840.1.101.3.4.2.1
pub const SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");

/// SHA-384 - 2.16.840.1.101.3.4.2.2
pub const SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2");

/// SHA-512 - 2.16.840.1.101.3.4.2.3
pub const SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");

// =============================================================================
// RSA OIDs (PKCS #1)
// =============================================================================

/// RSA Encryption - 1.2.840.113549.1.1.1
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// md2WithRSAEncryption - 1.2.840.113549.1.1.2
pub const MD2_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.2");

/// md4WithRSAEncryption - 1.2.840.113549.1.1.3
pub const MD4_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.3");

/// md5WithRSAEncryption - 1.2.840.113549.1.1.4
pub const MD5_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.4");

/// sha1WithRSAEncryption - 1.2.840.113549.1.1.5
pub const SHA1_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.5");

/// RSAES-OAEP - 1.2.840.113549.1.1.7
pub const RSAES_OAEP: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.7");

/// MGF1 - 1.2.840.113549.1.1.8
pub const MGF1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.8");

/// RSASSA-PSS - 1.2.840.113549.1.1.10
pub const RSASSA_PSS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");

/// sha256WithRSAEncryption - 1.2.840.113549.1.1.11
pub const SHA256_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

/// sha384WithRSAEncryption - 1.2.840.113549.1.1.12
pub const SHA384_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");

/// sha512WithRSAEncryption - 1.2.840.113549.1.1.13
pub const SHA512_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");

/// sha224WithRSAEncryption - 1.2.840.113549.1.1.14
pub const SHA224_WITH_RSA: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.14");

/// md5WithRSASignature (OIW, obsolete) - 1.3.14.3.2.3
pub const MD5_WITH_RSA_SIGNATURE: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.3");

/// sha1WithRSASignature (OIW, obsolete) - 1.3.14.3.2.29
pub const SHA1_WITH_RSA_SIGNATURE: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.14.3.2.29");

// =============================================================================
// Elliptic Curve OIDs
// =============================================================================

/// EC Public Key - 1.2.840.10045.2.1
pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// prime192v1 - 1.2.840.10045.3.1.1
pub const PRIME192V1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1");

/// NIST P-224 - 1.3.132.0.33
pub const SECP224R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.33");

/// secp256k1 - 1.3.132.0.10
pub const SECP256K1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// NIST P-256 (prime256v1) - 1.2.840.10045.3.1.7
pub const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// NIST P-384 - 1.3.132.0.34
pub const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// NIST P-521 - 1.3.132.0.35
pub const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// ecdsa-with-SHA1 - 1.2.840.10045.4.1
pub const ECDSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.1");

/// ecdsa-with-SHA224 - 1.2.840.10045.4.3.1
pub const ECDSA_WITH_SHA224: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.1");

/// ecdsa-with-SHA256 - 1.2.840.10045.4.3.2
pub const ECDSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");

/// ecdsa-with-SHA384 - 1.2.840.10045.4.3.3
pub const ECDSA_WITH_SHA384: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");

/// ecdsa-with-SHA512 - 1.2.840.10045.4.3.4
pub const ECDSA_WITH_SHA512: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.4");

// =============================================================================
// DSA and EdDSA OIDs
// =============================================================================

/// DSA - 1.2.840.10040.4.1
pub const DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// dsa-with-sha1 - 1.2.840.10040.4.3
pub const DSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.3");

/// dsa-with-sha256 - 2.16.840.1.101.3.4.3.2
pub const DSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.3.2");

/// X25519 - 1.3.101.110
pub const X25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.110");

/// X448 - 1.3.101.111
pub const X448: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.111");

/// EdDSA Ed25519 - 1.3.101.112
pub const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// EdDSA Ed448 - 1.3.101.113
pub const ED448: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.113");

// =============================================================================
// Certificate Transparency OIDs (RFC 6962 Section 3.3)
// =============================================================================

/// Embedded SCT list extension - 1.3.6.1.4.1.11129.2.4.2
///
/// The extnValue is an OCTET STRING holding a TLS-encoded
/// `SignedCertificateTimestampList`.
pub const CT_PRECERT_SCTS: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.11129.2.4.2");

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_rsa_encryption_oid() {
        assert_eq!(RSA_ENCRYPTION.to_string(), "1.2.840.113549.1.1.1");
        assert_eq!(
            RSA_ENCRYPTION.as_bytes(),
            &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01]
        );
    }

    #[test]
    fn test_curve_oids() {
        assert_eq!(SECP256K1.as_bytes(), &[0x2b, 0x81, 0x04, 0x00, 0x0a]);
        assert_eq!(PRIME192V1.to_string(), "1.2.840.10045.3.1.1");
    }

    #[test]
    fn test_ct_oids() {
        assert_eq!(CT_PRECERT_SCTS.to_string(), "1.3.6.1.4.1.11129.2.4.2");
    }
}
