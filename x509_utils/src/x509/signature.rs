// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Signature algorithm identification and naming
//!
//! Resolves a certificate's signature AlgorithmIdentifier to a
//! `(SignatureAlgorithmId, DigestAlgorithm)` pair and maps both enums to the
//! display names certificate viewers show.
//!
//! # Recognized algorithms
//! - RSA PKCS #1 v1.5 with MD2, MD4, MD5, SHA-1, SHA-256, SHA-384, SHA-512
//! - RSASSA-PSS with any of the above digests and MGF1
//! - ECDSA with SHA-1, SHA-256, SHA-384, SHA-512
//! - DSA with SHA-1 and SHA-256
//!
//! # References
//! - RFC 3279 Section 2.2 - Signature algorithms
//! - RFC 4055 Section 3.1 - RSASSA-PSS parameters
//! - RFC 5758 Section 3 - DSA and ECDSA with SHA-2

use alloc::string::ToString;
use const_oid::ObjectIdentifier;
use der::{Decode, Tag, TagNumber};

use super::algorithm::{parse_algorithm_identifier, AlgorithmIdentifierRef};
use super::oids;
use super::parser::Parser;
use crate::error::{AlgorithmError, Error, Result};

// =============================================================================
// Digest Algorithm
// =============================================================================

/// Digest algorithms that may appear in a certificate signature algorithm.
///
/// The discriminants are the stable raw codes accepted by
/// [`digest_name_from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DigestAlgorithm {
    Md2 = 0,
    Md4 = 1,
    Md5 = 2,
    Sha1 = 3,
    Sha256 = 4,
    Sha384 = 5,
    Sha512 = 6,
}

impl DigestAlgorithm {
    /// Display name, e.g. `"SHA-256"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Convert a raw code back to the enum.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Md2),
            1 => Some(Self::Md4),
            2 => Some(Self::Md5),
            3 => Some(Self::Sha1),
            4 => Some(Self::Sha256),
            5 => Some(Self::Sha384),
            6 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Map a digest OID to the enum.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        match *oid {
            oids::MD2 => Some(Self::Md2),
            oids::MD4 => Some(Self::Md4),
            oids::MD5 => Some(Self::Md5),
            oids::SHA1 => Some(Self::Sha1),
            oids::SHA256 => Some(Self::Sha256),
            oids::SHA384 => Some(Self::Sha384),
            oids::SHA512 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Parse a DER digest AlgorithmIdentifier.
    ///
    /// Parameters must be absent or NULL.
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let algorithm = parse_algorithm_identifier(input)?;
        let oid = algorithm_oid(&algorithm)?;

        let digest = Self::from_oid(&oid).ok_or_else(|| {
            log::debug!("unsupported digest algorithm {}", oid);
            Error::unknown_algorithm(oid.to_string())
        })?;

        if !algorithm.parameters_absent_or_null() {
            return Err(unexpected_parameters(digest.name()));
        }

        Ok(digest)
    }
}

// =============================================================================
// Signature Algorithm Id
// =============================================================================

/// Signature scheme families.
///
/// The discriminants are the stable raw codes accepted by
/// [`algorithm_id_name_from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignatureAlgorithmId {
    /// RSA PKCS #1 v1.5
    RsaPkcs1 = 0,
    /// RSASSA-PSS
    RsaPss = 1,
    Ecdsa = 2,
    Dsa = 3,
}

impl SignatureAlgorithmId {
    /// Display name, e.g. `"RSA-PSS"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RsaPkcs1 => "RSA",
            Self::RsaPss => "RSA-PSS",
            Self::Ecdsa => "ECDSA",
            Self::Dsa => "DSA",
        }
    }

    /// Convert a raw code back to the enum.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::RsaPkcs1),
            1 => Some(Self::RsaPss),
            2 => Some(Self::Ecdsa),
            3 => Some(Self::Dsa),
            _ => None,
        }
    }
}

// =============================================================================
// Signature Algorithm
// =============================================================================

/// RSASSA-PSS parameters beyond the message digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPssParameters {
    /// Digest used by MGF1
    pub mgf1_hash: DigestAlgorithm,
    /// Salt length in octets
    pub salt_length: u32,
}

/// A decoded certificate signature algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureAlgorithm {
    algorithm: SignatureAlgorithmId,
    digest: DigestAlgorithm,
    pss: Option<RsaPssParameters>,
}

impl SignatureAlgorithm {
    /// Build a non-PSS signature algorithm.
    pub fn new(algorithm: SignatureAlgorithmId, digest: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            digest,
            pss: None,
        }
    }

    /// Build an RSASSA-PSS signature algorithm.
    pub fn new_rsa_pss(digest: DigestAlgorithm, params: RsaPssParameters) -> Self {
        Self {
            algorithm: SignatureAlgorithmId::RsaPss,
            digest,
            pss: Some(params),
        }
    }

    pub fn algorithm(&self) -> SignatureAlgorithmId {
        self.algorithm
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// PSS parameters, present only for [`SignatureAlgorithmId::RsaPss`].
    pub fn pss_parameters(&self) -> Option<&RsaPssParameters> {
        self.pss.as_ref()
    }

    /// Parse a DER signature AlgorithmIdentifier (the certificate's
    /// `signatureAlgorithm` or the TBS `signature` field).
    pub fn from_der(input: &[u8]) -> Result<Self> {
        let algorithm = parse_algorithm_identifier(input)?;
        Self::from_algorithm_identifier(&algorithm)
    }

    /// Resolve an already split AlgorithmIdentifier.
    pub fn from_algorithm_identifier(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<Self> {
        use DigestAlgorithm as D;
        use SignatureAlgorithmId as A;

        let oid = algorithm_oid(algorithm)?;

        let (id, digest) = match oid {
            oids::MD2_WITH_RSA => (A::RsaPkcs1, D::Md2),
            oids::MD4_WITH_RSA => (A::RsaPkcs1, D::Md4),
            oids::MD5_WITH_RSA => (A::RsaPkcs1, D::Md5),
            oids::SHA1_WITH_RSA | oids::SHA1_WITH_RSA_SIGNATURE => (A::RsaPkcs1, D::Sha1),
            oids::SHA256_WITH_RSA => (A::RsaPkcs1, D::Sha256),
            oids::SHA384_WITH_RSA => (A::RsaPkcs1, D::Sha384),
            oids::SHA512_WITH_RSA => (A::RsaPkcs1, D::Sha512),
            oids::ECDSA_WITH_SHA1 => (A::Ecdsa, D::Sha1),
            oids::ECDSA_WITH_SHA256 => (A::Ecdsa, D::Sha256),
            oids::ECDSA_WITH_SHA384 => (A::Ecdsa, D::Sha384),
            oids::ECDSA_WITH_SHA512 => (A::Ecdsa, D::Sha512),
            oids::DSA_WITH_SHA1 => (A::Dsa, D::Sha1),
            oids::DSA_WITH_SHA256 => (A::Dsa, D::Sha256),
            oids::RSASSA_PSS => return parse_rsa_pss_params(algorithm.parameters),
            _ => {
                log::debug!("unsupported signature algorithm {}", oid);
                return Err(Error::unknown_algorithm(oid.to_string()));
            }
        };

        // RSA allows an explicit NULL; ECDSA and DSA forbid any parameters.
        let params_ok = match id {
            A::RsaPkcs1 => algorithm.parameters_absent_or_null(),
            _ => !algorithm.has_parameters(),
        };
        if !params_ok {
            log::debug!("{} signature algorithm {} carries parameters", id.name(), oid);
            return Err(unexpected_parameters(id.name()));
        }

        Ok(Self::new(id, digest))
    }
}

/// Parse RSASSA-PSS-params.
///
/// ```asn1
/// RSASSA-PSS-params ::= SEQUENCE {
///     hashAlgorithm     [0] HashAlgorithm DEFAULT sha1,
///     maskGenAlgorithm  [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
///     saltLength        [2] INTEGER DEFAULT 20,
///     trailerField      [3] TrailerField DEFAULT trailerFieldBC
/// }
/// ```
///
/// The parameters themselves are mandatory. Only MGF1 is accepted as the mask
/// generation function and the trailer field must be 1.
fn parse_rsa_pss_params(params: &[u8]) -> Result<SignatureAlgorithm> {
    if params.is_empty() {
        return Err(Error::invalid_parameters("RSA-PSS requires parameters"));
    }

    let mut outer = Parser::new(params)?;
    let mut parser = outer.read_sequence()?;
    if outer.has_more() {
        return Err(Error::trailing_data(outer.remaining()));
    }

    let mut digest = DigestAlgorithm::Sha1;
    if let Some(hash) = parser.read_optional_tag(explicit(TagNumber::N0))? {
        digest = DigestAlgorithm::from_der(hash)?;
    }

    let mut mgf1_hash = DigestAlgorithm::Sha1;
    if let Some(mask_gen) = parser.read_optional_tag(explicit(TagNumber::N1))? {
        let mgf = parse_algorithm_identifier(mask_gen)?;
        let mgf_oid = algorithm_oid(&mgf)?;
        if mgf_oid != oids::MGF1 {
            log::debug!("RSA-PSS with unsupported mask generation function {}", mgf_oid);
            return Err(Error::invalid_parameters(alloc::format!(
                "unsupported mask generation function {}",
                mgf_oid
            )));
        }
        if !mgf.has_parameters() {
            return Err(Error::invalid_parameters("MGF1 without a digest"));
        }
        mgf1_hash = DigestAlgorithm::from_der(mgf.parameters)?;
    }

    let mut salt_length = 20;
    if let Some(salt) = parser.read_optional_tag(explicit(TagNumber::N2))? {
        salt_length = u32::from_der(salt)?;
    }

    if let Some(trailer) = parser.read_optional_tag(explicit(TagNumber::N3))? {
        let trailer_field = u8::from_der(trailer)?;
        if trailer_field != 1 {
            return Err(Error::invalid_parameters(alloc::format!(
                "unsupported trailer field {}",
                trailer_field
            )));
        }
    }

    if parser.has_more() {
        return Err(Error::trailing_data(parser.remaining()));
    }

    Ok(SignatureAlgorithm::new_rsa_pss(
        digest,
        RsaPssParameters {
            mgf1_hash,
            salt_length,
        },
    ))
}

fn explicit(number: TagNumber) -> Tag {
    Tag::ContextSpecific {
        constructed: true,
        number,
    }
}

fn algorithm_oid(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<ObjectIdentifier> {
    ObjectIdentifier::from_bytes(algorithm.oid).map_err(|_| {
        Error::unknown_algorithm(alloc::format!("malformed OID {:02x?}", algorithm.oid))
    })
}

fn unexpected_parameters(name: &str) -> Error {
    Error::AlgorithmError(AlgorithmError::UnexpectedParameters(name.to_string()))
}

// =============================================================================
// Naming
// =============================================================================

/// Name of the digest half of a signature algorithm.
pub fn signature_algorithm_digest_to_name(algorithm: &SignatureAlgorithm) -> &'static str {
    algorithm.digest().name()
}

/// Name of the scheme half of a signature algorithm.
pub fn signature_algorithm_id_to_name(algorithm: &SignatureAlgorithm) -> &'static str {
    algorithm.algorithm().name()
}

/// Name for a raw [`DigestAlgorithm`] code, or `""` when the code is unknown.
pub fn digest_name_from_raw(raw: u8) -> &'static str {
    DigestAlgorithm::from_raw(raw).map_or("", |d| d.name())
}

/// Name for a raw [`SignatureAlgorithmId`] code, or `""` when the code is unknown.
pub fn algorithm_id_name_from_raw(raw: u8) -> &'static str {
    SignatureAlgorithmId::from_raw(raw).map_or("", |a| a.name())
}
