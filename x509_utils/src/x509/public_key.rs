// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! SubjectPublicKeyInfo and RSAPublicKey splitting.
//!
//! Neither parser checks for bytes after its last field, at either the outer
//! or the inner level. This is the long-standing accepted set for these two
//! routines and differs from the AlgorithmIdentifier and NULL parsers, which
//! are strict. Do not tighten it without auditing callers.

use der::Tag;

use super::algorithm::{parse_algorithm_sequence, AlgorithmIdentifierRef};
use super::parser::Parser;
use crate::error::{Error, Result};

/// Borrowed view of a SubjectPublicKeyInfo.
///
/// ```asn1
/// SubjectPublicKeyInfo  ::=  SEQUENCE  {
///     algorithm            AlgorithmIdentifier,
///     subjectPublicKey     BIT STRING  }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectPublicKeyInfoRef<'a> {
    /// Contents of the AlgorithmIdentifier SEQUENCE (outer tag stripped)
    pub algorithm: &'a [u8],
    /// Contents of the subjectPublicKey BIT STRING, unused-bits octet first
    pub subject_public_key: &'a [u8],
}

impl<'a> SubjectPublicKeyInfoRef<'a> {
    /// Split the `algorithm` field into OID and parameters.
    pub fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierRef<'a>> {
        parse_algorithm_sequence(self.algorithm)
    }

    /// Key bytes of the BIT STRING, requiring zero unused bits.
    pub fn public_key_bytes(&self) -> Result<&'a [u8]> {
        match self.subject_public_key.split_first() {
            Some((0, key)) => Ok(key),
            Some((unused, _)) => Err(Error::invalid_parameters(alloc::format!(
                "subjectPublicKey has {} unused bit(s)",
                unused
            ))),
            None => Err(Error::missing_field("subjectPublicKey unused-bits octet")),
        }
    }
}

/// Borrowed view of an RSAPublicKey.
///
/// ```asn1
/// RSAPublicKey  ::=  SEQUENCE  {
///     modulus            INTEGER,
///     publicExponent     INTEGER  }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKeyRef<'a> {
    /// Big-endian modulus, possibly with a leading zero sign octet
    pub modulus: &'a [u8],
    /// Big-endian public exponent, possibly with a leading zero sign octet
    pub public_exponent: &'a [u8],
}

impl<'a> RsaPublicKeyRef<'a> {
    /// Modulus size in bits, ignoring leading zero octets.
    pub fn modulus_bits(&self) -> usize {
        let magnitude = strip_leading_zeros(self.modulus);
        match magnitude.first() {
            Some(first) => magnitude.len() * 8 - first.leading_zeros() as usize,
            None => 0,
        }
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[first_nonzero..]
}

/// Split a DER SubjectPublicKeyInfo.
///
/// Reads the algorithm SEQUENCE, requires another field after it, then reads
/// the BIT STRING. Anything after the BIT STRING is ignored.
pub fn parse_subject_public_key_info(input: &[u8]) -> Result<SubjectPublicKeyInfoRef<'_>> {
    let mut parser = Parser::new(input)?;
    let mut spki_parser = parser.read_sequence()?;

    let algorithm = spki_parser.read_tag(Tag::Sequence)?;

    if !spki_parser.has_more() {
        log::trace!("parse_subject_public_key_info: no subjectPublicKey after algorithm");
        return Err(Error::missing_field("subjectPublicKey"));
    }

    let subject_public_key = spki_parser.read_tag(Tag::BitString)?;

    Ok(SubjectPublicKeyInfoRef {
        algorithm,
        subject_public_key,
    })
}

/// Split a DER RSAPublicKey into modulus and public exponent.
///
/// Anything after the exponent is ignored.
pub fn parse_rsa_public_key(input: &[u8]) -> Result<RsaPublicKeyRef<'_>> {
    let mut parser = Parser::new(input)?;
    let mut rsa_parser = parser.read_sequence()?;

    let modulus = rsa_parser.read_tag(Tag::Integer)?;

    if !rsa_parser.has_more() {
        log::trace!("parse_rsa_public_key: no publicExponent after modulus");
        return Err(Error::missing_field("publicExponent"));
    }

    let public_exponent = rsa_parser.read_tag(Tag::Integer)?;

    Ok(RsaPublicKeyRef {
        modulus,
        public_exponent,
    })
}
