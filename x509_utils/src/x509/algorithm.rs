// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! AlgorithmIdentifier splitting and NULL validation.
//!
//! ```asn1
//! AlgorithmIdentifier  ::=  SEQUENCE  {
//!     algorithm               OBJECT IDENTIFIER,
//!     parameters              ANY DEFINED BY algorithm OPTIONAL  }
//! ```
//!
//! Two entry points exist and they do NOT accept the same inputs:
//!
//! - [`parse_algorithm_identifier`] takes the SEQUENCE TLV and accepts an
//!   OID with no parameters.
//! - [`parse_algorithm_sequence`] takes the SEQUENCE *contents* (as returned
//!   for the SPKI `algorithm` field) and rejects an OID with no parameters.
//!
//! Callers rely on this exact accepted set; keep the asymmetry.

use der::Tag;

use super::parser::Parser;
use crate::error::{Error, ParseError, Result};

/// Borrowed view of an AlgorithmIdentifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmIdentifierRef<'a> {
    /// Value bytes of the algorithm OBJECT IDENTIFIER
    pub oid: &'a [u8],
    /// Complete TLV of the parameters, empty when absent
    pub parameters: &'a [u8],
}

impl<'a> AlgorithmIdentifierRef<'a> {
    /// Whether a parameters TLV was present.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Whether the parameters are absent or exactly a DER NULL.
    pub fn parameters_absent_or_null(&self) -> bool {
        !self.has_parameters() || is_null(self.parameters)
    }
}

/// Split a DER AlgorithmIdentifier SEQUENCE into its OID and parameters.
///
/// The input must be exactly one SEQUENCE. Inside it, one OID is required and
/// at most one parameters TLV may follow; nothing may trail at either level.
pub fn parse_algorithm_identifier(input: &[u8]) -> Result<AlgorithmIdentifierRef<'_>> {
    let mut parser = Parser::new(input)?;
    let mut algorithm_parser = parser.read_sequence()?;

    if parser.has_more() {
        log::trace!(
            "parse_algorithm_identifier: {} trailing byte(s) after SEQUENCE",
            parser.remaining()
        );
        return Err(Error::trailing_data(parser.remaining()));
    }

    let oid = algorithm_parser.read_tag(Tag::ObjectIdentifier)?;

    let mut parameters: &[u8] = &[];
    if algorithm_parser.has_more() {
        parameters = algorithm_parser.read_raw_tlv()?;
    }

    if algorithm_parser.has_more() {
        return Err(Error::trailing_data(algorithm_parser.remaining()));
    }

    Ok(AlgorithmIdentifierRef { oid, parameters })
}

/// Split the contents of an AlgorithmIdentifier SEQUENCE whose outer tag the
/// caller has already consumed.
///
/// Unlike [`parse_algorithm_identifier`], a field must follow the OID: an
/// OID-only input is rejected. Exactly one parameters TLV is then consumed and
/// nothing may follow it.
pub fn parse_algorithm_sequence(input: &[u8]) -> Result<AlgorithmIdentifierRef<'_>> {
    let mut parser = Parser::new(input)?;

    let oid = parser.read_tag(Tag::ObjectIdentifier)?;

    if !parser.has_more() {
        log::trace!("parse_algorithm_sequence: OID without a following field");
        return Err(Error::missing_field("parameters"));
    }

    let parameters = parser.read_raw_tlv()?;

    if parser.has_more() {
        return Err(Error::trailing_data(parser.remaining()));
    }

    Ok(AlgorithmIdentifierRef { oid, parameters })
}

/// Check that `input` is exactly one DER NULL (`05 00`) with nothing after it.
pub fn is_null(input: &[u8]) -> bool {
    check_null(input).is_ok()
}

fn check_null(input: &[u8]) -> Result<()> {
    let mut parser = Parser::new(input)?;
    let value = parser.read_tag(Tag::Null)?;

    if !value.is_empty() {
        return Err(Error::ParseError(ParseError::NonEmptyNull));
    }

    if parser.has_more() {
        return Err(Error::trailing_data(parser.remaining()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // 1.2.840.113549.1.1.11 (sha256WithRSAEncryption)
    const SHA256_RSA_OID: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b];

    fn oid_tlv(oid: &[u8]) -> Vec<u8> {
        let mut out = Vec::from([0x06, oid.len() as u8]);
        out.extend_from_slice(oid);
        out
    }

    fn sequence(contents: &[u8]) -> Vec<u8> {
        let mut out = Vec::from([0x30, contents.len() as u8]);
        out.extend_from_slice(contents);
        out
    }

    #[test]
    fn test_wrapped_with_null_parameters() {
        let mut contents = oid_tlv(SHA256_RSA_OID);
        contents.extend_from_slice(&[0x05, 0x00]);
        let input = sequence(&contents);

        let algorithm = parse_algorithm_identifier(&input).unwrap();
        assert_eq!(algorithm.oid, SHA256_RSA_OID);
        assert_eq!(algorithm.parameters, &[0x05, 0x00]);
        assert!(algorithm.parameters_absent_or_null());
    }

    #[test]
    fn test_wrapped_without_parameters() {
        let input = sequence(&oid_tlv(SHA256_RSA_OID));
        let algorithm = parse_algorithm_identifier(&input).unwrap();
        assert_eq!(algorithm.oid, SHA256_RSA_OID);
        assert!(algorithm.parameters.is_empty());
        assert!(!algorithm.has_parameters());
    }

    #[test]
    fn test_wrapped_roundtrip_reproduces_input() {
        let params = [0x30, 0x03, 0x02, 0x01, 0x14];
        for with_params in [false, true] {
            let mut contents = oid_tlv(SHA256_RSA_OID);
            if with_params {
                contents.extend_from_slice(&params);
            }
            let input = sequence(&contents);

            let algorithm = parse_algorithm_identifier(&input).unwrap();
            let mut rebuilt = oid_tlv(algorithm.oid);
            rebuilt.extend_from_slice(algorithm.parameters);
            assert_eq!(sequence(&rebuilt), input);
        }
    }

    #[test]
    fn test_wrapped_rejects_trailing_after_sequence() {
        let mut input = sequence(&oid_tlv(SHA256_RSA_OID));
        input.extend_from_slice(&[0x05, 0x00]);
        assert!(matches!(
            parse_algorithm_identifier(&input),
            Err(Error::ParseError(ParseError::TrailingData { remaining: 2 }))
        ));
    }

    #[test]
    fn test_wrapped_rejects_two_parameters() {
        let mut contents = oid_tlv(SHA256_RSA_OID);
        contents.extend_from_slice(&[0x05, 0x00, 0x05, 0x00]);
        let input = sequence(&contents);
        assert!(parse_algorithm_identifier(&input).is_err());
    }

    #[test]
    fn test_wrapped_rejects_missing_oid() {
        let input = sequence(&[0x05, 0x00]);
        assert!(parse_algorithm_identifier(&input).is_err());
        assert!(parse_algorithm_identifier(&sequence(&[])).is_err());
    }

    #[test]
    fn test_wrapped_rejects_non_sequence() {
        let input = oid_tlv(SHA256_RSA_OID);
        assert!(parse_algorithm_identifier(&input).is_err());
        assert!(parse_algorithm_identifier(&[]).is_err());
    }

    #[test]
    fn test_unwrapped_with_parameters() {
        let mut contents = oid_tlv(SHA256_RSA_OID);
        contents.extend_from_slice(&[0x05, 0x00]);

        let algorithm = parse_algorithm_sequence(&contents).unwrap();
        assert_eq!(algorithm.oid, SHA256_RSA_OID);
        assert_eq!(algorithm.parameters, &[0x05, 0x00]);
    }

    #[test]
    fn test_unwrapped_rejects_oid_only() {
        // Accepted by the wrapped form, rejected here.
        let contents = oid_tlv(SHA256_RSA_OID);
        assert!(parse_algorithm_identifier(&sequence(&contents)).is_ok());
        assert!(matches!(
            parse_algorithm_sequence(&contents),
            Err(Error::ParseError(ParseError::MissingField(_)))
        ));
    }

    #[test]
    fn test_unwrapped_rejects_trailing_field() {
        let mut contents = oid_tlv(SHA256_RSA_OID);
        contents.extend_from_slice(&[0x05, 0x00, 0x02, 0x01, 0x00]);
        assert!(matches!(
            parse_algorithm_sequence(&contents),
            Err(Error::ParseError(ParseError::TrailingData { remaining: 3 }))
        ));
    }

    #[test]
    fn test_unwrapped_rejects_wrapped_input() {
        let input = sequence(&oid_tlv(SHA256_RSA_OID));
        assert!(parse_algorithm_sequence(&input).is_err());
    }

    #[test]
    fn test_parameters_with_unassigned_universal_tag() {
        let mut contents = oid_tlv(&[0x2a, 0x03, 0x04]);
        contents.extend_from_slice(&[0x0b, 0x00]);

        let algorithm = parse_algorithm_sequence(&contents).unwrap();
        assert_eq!(algorithm.oid, &[0x2a, 0x03, 0x04]);
        assert_eq!(algorithm.parameters, &[0x0b, 0x00]);
        assert!(!algorithm.parameters_absent_or_null());

        let der = sequence(&contents);
        let algorithm = parse_algorithm_identifier(&der).unwrap();
        assert_eq!(algorithm.parameters, &[0x0b, 0x00]);
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(&[0x05, 0x00]));
        assert!(!is_null(&[0x05, 0x01, 0x00]));
        assert!(!is_null(&[0x05, 0x00, 0x00]));
        assert!(!is_null(&[0x05, 0x00, 0x05, 0x00]));
        assert!(!is_null(&[0x04, 0x00]));
        assert!(!is_null(&[0x05]));
        assert!(!is_null(&[]));
    }
}
