// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 certificate extension catalog.
//!
//! The catalog is the fixed, ordered list of extension (and access method)
//! OIDs that certificate viewers in this stack know how to interpret. This
//! module does not decode extension values, with one exception: the embedded
//! SCT list extension, whose OCTET STRING wrapper is unwrapped here for the
//! [`crate::sct`] decoder.

use const_oid::ObjectIdentifier;
use der::Tag;

use super::oids::CT_PRECERT_SCTS;
use super::parser::Parser;
use crate::error::{Error, Result, SctError};

pub use crate::certificate::{Extension, Extensions};

// ============================================================================
// Extension OIDs - RFC 5280 Section 4.2
// ============================================================================

/// Subject Key Identifier - 2.5.29.14
pub const SUBJECT_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.14");

/// Key Usage - 2.5.29.15
pub const KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.15");

/// Subject Alternative Name - 2.5.29.17
pub const SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");

/// Issuer Alternative Name - 2.5.29.18
pub const ISSUER_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.18");

/// Basic Constraints - 2.5.29.19
pub const BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");

/// Name Constraints - 2.5.29.30
pub const NAME_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.30");

/// CRL Distribution Points - 2.5.29.31
pub const CRL_DISTRIBUTION_POINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.31");

/// Certificate Policies - 2.5.29.32
pub const CERTIFICATE_POLICIES: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.32");

/// Authority Key Identifier - 2.5.29.35
pub const AUTHORITY_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.35");

/// Policy Constraints - 2.5.29.36
pub const POLICY_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.36");

/// Extended Key Usage - 2.5.29.37
pub const EXTENDED_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.37");

/// Authority Information Access - 1.3.6.1.5.5.7.1.1
pub const AUTHORITY_INFO_ACCESS: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.1.1");

/// OCSP access method - 1.3.6.1.5.5.7.48.1
pub const AD_OCSP: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.48.1");

/// CA Issuers access method - 1.3.6.1.5.5.7.48.2
pub const AD_CA_ISSUERS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.48.2");

// ============================================================================
// Catalog
// ============================================================================

static SUPPORTED_EXTENSION_OIDS: [ObjectIdentifier; 13] = [
    SUBJECT_KEY_IDENTIFIER,
    KEY_USAGE,
    SUBJECT_ALT_NAME,
    BASIC_CONSTRAINTS,
    NAME_CONSTRAINTS,
    CERTIFICATE_POLICIES,
    AUTHORITY_KEY_IDENTIFIER,
    POLICY_CONSTRAINTS,
    EXTENDED_KEY_USAGE,
    AUTHORITY_INFO_ACCESS,
    AD_CA_ISSUERS,
    AD_OCSP,
    CRL_DISTRIBUTION_POINTS,
];

/// The extension OIDs callers may interpret, in display order.
pub fn supported_extension_oids() -> &'static [ObjectIdentifier] {
    &SUPPORTED_EXTENSION_OIDS
}

/// Whether the OID value bytes (no tag or length) name a cataloged extension.
pub fn is_supported_extension(oid_bytes: &[u8]) -> bool {
    SUPPORTED_EXTENSION_OIDS
        .iter()
        .any(|oid| oid.as_bytes() == oid_bytes)
}

// ============================================================================
// Embedded SCT list - RFC 6962 Section 3.3
// ============================================================================

/// Return the TLS-encoded SCT list carried by an embedded SCT list extension.
///
/// The extnValue of this extension is itself a DER OCTET STRING wrapping the
/// list, so the content of that inner OCTET STRING is returned.
pub fn embedded_sct_list(ext: &Extension) -> Result<&[u8]> {
    if ext.extn_id != CT_PRECERT_SCTS {
        return Err(Error::SctError(SctError::MissingExtension));
    }

    let malformed = |e: Error| {
        log::debug!("embedded SCT list extension: {}", e);
        Error::SctError(SctError::MalformedExtension(alloc::format!("{}", e)))
    };

    let mut parser = Parser::new(ext.value()).map_err(malformed)?;
    let list = parser.read_tag(Tag::OctetString).map_err(malformed)?;
    if parser.has_more() {
        return Err(malformed(Error::trailing_data(parser.remaining())));
    }

    Ok(list)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_catalog_order() {
        let expected = [
            "2.5.29.14",
            "2.5.29.15",
            "2.5.29.17",
            "2.5.29.19",
            "2.5.29.30",
            "2.5.29.32",
            "2.5.29.35",
            "2.5.29.36",
            "2.5.29.37",
            "1.3.6.1.5.5.7.1.1",
            "1.3.6.1.5.5.7.48.2",
            "1.3.6.1.5.5.7.48.1",
            "2.5.29.31",
        ];
        let catalog = supported_extension_oids();
        assert_eq!(catalog.len(), expected.len());
        for (oid, text) in catalog.iter().zip(expected) {
            assert_eq!(oid.to_string(), text);
        }
    }

    #[test]
    fn test_is_supported_extension() {
        assert!(is_supported_extension(KEY_USAGE.as_bytes()));
        assert!(is_supported_extension(AD_OCSP.as_bytes()));
        assert!(!is_supported_extension(ISSUER_ALT_NAME.as_bytes()));
        assert!(!is_supported_extension(CT_PRECERT_SCTS.as_bytes()));
        assert!(!is_supported_extension(&[]));
    }

    #[test]
    fn test_embedded_sct_list_unwraps_octet_string() {
        let ext = Extension::new(CT_PRECERT_SCTS, false, vec![0x04, 0x03, 0x00, 0x01, 0xaa])
            .unwrap();
        assert_eq!(embedded_sct_list(&ext).unwrap(), &[0x00, 0x01, 0xaa]);
    }

    #[test]
    fn test_embedded_sct_list_wrong_extension() {
        let ext = Extension::new(KEY_USAGE, true, vec![0x03, 0x02, 0x05, 0xa0]).unwrap();
        assert!(matches!(
            embedded_sct_list(&ext),
            Err(Error::SctError(SctError::MissingExtension))
        ));
    }

    #[test]
    fn test_embedded_sct_list_malformed() {
        for value in [vec![0x30, 0x00], vec![0x04, 0x05, 0x00], vec![0x04, 0x00, 0x00]] {
            let ext = Extension::new(CT_PRECERT_SCTS, false, value).unwrap();
            assert!(matches!(
                embedded_sct_list(&ext),
                Err(Error::SctError(SctError::MalformedExtension(_)))
            ));
        }
    }
}
