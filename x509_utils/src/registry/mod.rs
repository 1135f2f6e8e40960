// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Process-wide OID ↔ NID registry.
//!
//! A NID is a small integer handle for a well-known object identifier. The
//! numbering and the short and long names are BoringSSL's, so values can be
//! exchanged with code linked against it (for example `rsaEncryption` is 6).
//! Objects BoringSSL assigns no NID to, such as the Certificate Transparency
//! extensions and the EV jurisdiction attributes, are not registered.
//!
//! The registry is built from a static table the first time it is used and is
//! read-only afterwards. Initialization goes through [`spin::Once`], so
//! concurrent first calls are safe and build it exactly once.
//!
//! Lookups that find nothing return `None` (or an empty string for the text
//! helpers). A miss is not an error and leaves no state behind.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use const_oid::db::{rfc2256, rfc3280, rfc4519, rfc5280};
use const_oid::ObjectIdentifier;

use crate::x509::{extensions as ext, oids};

/// Well-known NIDs.
pub mod nid {
    pub const MD2: i32 = 3;
    pub const MD5: i32 = 4;
    pub const RSA_ENCRYPTION: i32 = 6;
    pub const MD2_WITH_RSA: i32 = 7;
    pub const MD5_WITH_RSA: i32 = 8;
    pub const COMMON_NAME: i32 = 13;
    pub const COUNTRY_NAME: i32 = 14;
    pub const LOCALITY_NAME: i32 = 15;
    pub const STATE_OR_PROVINCE_NAME: i32 = 16;
    pub const ORGANIZATION_NAME: i32 = 17;
    pub const ORGANIZATIONAL_UNIT_NAME: i32 = 18;
    pub const EMAIL_ADDRESS: i32 = 48;
    pub const SHA1: i32 = 64;
    pub const SHA1_WITH_RSA: i32 = 65;
    pub const SUBJECT_KEY_IDENTIFIER: i32 = 82;
    pub const KEY_USAGE: i32 = 83;
    pub const PRIVATE_KEY_USAGE_PERIOD: i32 = 84;
    pub const SUBJECT_ALT_NAME: i32 = 85;
    pub const ISSUER_ALT_NAME: i32 = 86;
    pub const BASIC_CONSTRAINTS: i32 = 87;
    pub const CRL_NUMBER: i32 = 88;
    pub const CERTIFICATE_POLICIES: i32 = 89;
    pub const AUTHORITY_KEY_IDENTIFIER: i32 = 90;
    pub const GIVEN_NAME: i32 = 99;
    pub const SURNAME: i32 = 100;
    pub const INITIALS: i32 = 101;
    pub const CRL_DISTRIBUTION_POINTS: i32 = 103;
    pub const MD5_WITH_RSA_OIW: i32 = 104;
    pub const SERIAL_NUMBER: i32 = 105;
    pub const TITLE: i32 = 106;
    pub const DESCRIPTION: i32 = 107;
    pub const DSA_WITH_SHA1: i32 = 113;
    pub const SHA1_WITH_RSA_OIW: i32 = 115;
    pub const DSA: i32 = 116;
    pub const EXT_KEY_USAGE: i32 = 126;
    pub const SERVER_AUTH: i32 = 129;
    pub const CLIENT_AUTH: i32 = 130;
    pub const CODE_SIGN: i32 = 131;
    pub const EMAIL_PROTECT: i32 = 132;
    pub const TIME_STAMP: i32 = 133;
    pub const ID_QT_CPS: i32 = 164;
    pub const ID_QT_UNOTICE: i32 = 165;
    pub const NAME: i32 = 173;
    pub const DN_QUALIFIER: i32 = 174;
    pub const INFO_ACCESS: i32 = 177;
    pub const AD_OCSP: i32 = 178;
    pub const AD_CA_ISSUERS: i32 = 179;
    pub const OCSP_SIGN: i32 = 180;
    pub const MD4: i32 = 257;
    pub const DOMAIN_COMPONENT: i32 = 391;
    pub const MD4_WITH_RSA: i32 = 396;
    pub const SINFO_ACCESS: i32 = 398;
    pub const POLICY_CONSTRAINTS: i32 = 401;
    pub const X9_62_ID_EC_PUBLIC_KEY: i32 = 408;
    pub const X9_62_PRIME192V1: i32 = 409;
    pub const X9_62_PRIME256V1: i32 = 415;
    pub const ECDSA_WITH_SHA1: i32 = 416;
    pub const USER_ID: i32 = 458;
    pub const GENERATION_QUALIFIER: i32 = 509;
    pub const PSEUDONYM: i32 = 510;
    pub const STREET_ADDRESS: i32 = 660;
    pub const POSTAL_CODE: i32 = 661;
    pub const NAME_CONSTRAINTS: i32 = 666;
    pub const SHA256_WITH_RSA: i32 = 668;
    pub const SHA384_WITH_RSA: i32 = 669;
    pub const SHA512_WITH_RSA: i32 = 670;
    pub const SHA224_WITH_RSA: i32 = 671;
    pub const SHA256: i32 = 672;
    pub const SHA384: i32 = 673;
    pub const SHA512: i32 = 674;
    pub const SHA224: i32 = 675;
    pub const SECP224R1: i32 = 713;
    pub const SECP256K1: i32 = 714;
    pub const SECP384R1: i32 = 715;
    pub const SECP521R1: i32 = 716;
    pub const ANY_POLICY: i32 = 746;
    pub const POLICY_MAPPINGS: i32 = 747;
    pub const INHIBIT_ANY_POLICY: i32 = 748;
    pub const ECDSA_WITH_SHA224: i32 = 793;
    pub const ECDSA_WITH_SHA256: i32 = 794;
    pub const ECDSA_WITH_SHA384: i32 = 795;
    pub const ECDSA_WITH_SHA512: i32 = 796;
    pub const DSA_WITH_SHA256: i32 = 803;
    pub const FRESHEST_CRL: i32 = 857;
    pub const BUSINESS_CATEGORY: i32 = 860;
    pub const POSTAL_ADDRESS: i32 = 861;
    pub const POST_OFFICE_BOX: i32 = 862;
    pub const ANY_EXTENDED_KEY_USAGE: i32 = 910;
    pub const MGF1: i32 = 911;
    pub const RSASSA_PSS: i32 = 912;
    pub const RSAES_OAEP: i32 = 919;
    pub const X25519: i32 = 948;
    pub const ED25519: i32 = 949;
    pub const ED448: i32 = 960;
    pub const X448: i32 = 961;
}

/// One registered object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// BoringSSL NID
    pub nid: i32,
    pub oid: ObjectIdentifier,
    /// Short name, e.g. `CN`
    pub short_name: &'static str,
    /// Long name, e.g. `commonName`
    pub long_name: &'static str,
}

const fn entry(
    nid: i32,
    oid: ObjectIdentifier,
    short_name: &'static str,
    long_name: &'static str,
) -> ObjectEntry {
    ObjectEntry {
        nid,
        oid,
        short_name,
        long_name,
    }
}

#[rustfmt::skip]
static OBJECTS: [ObjectEntry; 95] = [
    // Digests
    entry(nid::MD2, oids::MD2, "MD2", "md2"),
    entry(nid::MD4, oids::MD4, "MD4", "md4"),
    entry(nid::MD5, oids::MD5, "MD5", "md5"),
    entry(nid::SHA1, oids::SHA1, "SHA1", "sha1"),
    entry(nid::SHA224, oids::SHA224, "SHA224", "sha224"),
    entry(nid::SHA256, oids::SHA256, "SHA256", "sha256"),
    entry(nid::SHA384, oids::SHA384, "SHA384", "sha384"),
    entry(nid::SHA512, oids::SHA512, "SHA512", "sha512"),
    // RSA
    entry(nid::RSA_ENCRYPTION, oids::RSA_ENCRYPTION, "rsaEncryption", "rsaEncryption"),
    entry(nid::MD2_WITH_RSA, oids::MD2_WITH_RSA, "RSA-MD2", "md2WithRSAEncryption"),
    entry(nid::MD4_WITH_RSA, oids::MD4_WITH_RSA, "RSA-MD4", "md4WithRSAEncryption"),
    entry(nid::MD5_WITH_RSA, oids::MD5_WITH_RSA, "RSA-MD5", "md5WithRSAEncryption"),
    entry(nid::SHA1_WITH_RSA, oids::SHA1_WITH_RSA, "RSA-SHA1", "sha1WithRSAEncryption"),
    entry(nid::RSAES_OAEP, oids::RSAES_OAEP, "RSAES-OAEP", "rsaesOaep"),
    entry(nid::MGF1, oids::MGF1, "MGF1", "mgf1"),
    entry(nid::RSASSA_PSS, oids::RSASSA_PSS, "RSASSA-PSS", "rsassaPss"),
    entry(nid::SHA256_WITH_RSA, oids::SHA256_WITH_RSA, "RSA-SHA256", "sha256WithRSAEncryption"),
    entry(nid::SHA384_WITH_RSA, oids::SHA384_WITH_RSA, "RSA-SHA384", "sha384WithRSAEncryption"),
    entry(nid::SHA512_WITH_RSA, oids::SHA512_WITH_RSA, "RSA-SHA512", "sha512WithRSAEncryption"),
    entry(nid::SHA224_WITH_RSA, oids::SHA224_WITH_RSA, "RSA-SHA224", "sha224WithRSAEncryption"),
    entry(nid::MD5_WITH_RSA_OIW, oids::MD5_WITH_RSA_SIGNATURE, "RSA-NP-MD5", "md5WithRSA"),
    entry(nid::SHA1_WITH_RSA_OIW, oids::SHA1_WITH_RSA_SIGNATURE, "RSA-SHA1-2", "sha1WithRSA"),
    // Elliptic curves
    entry(nid::X9_62_ID_EC_PUBLIC_KEY, oids::EC_PUBLIC_KEY, "id-ecPublicKey", "id-ecPublicKey"),
    entry(nid::X9_62_PRIME192V1, oids::PRIME192V1, "prime192v1", "prime192v1"),
    entry(nid::X9_62_PRIME256V1, oids::SECP256R1, "prime256v1", "prime256v1"),
    entry(nid::SECP224R1, oids::SECP224R1, "secp224r1", "secp224r1"),
    entry(nid::SECP256K1, oids::SECP256K1, "secp256k1", "secp256k1"),
    entry(nid::SECP384R1, oids::SECP384R1, "secp384r1", "secp384r1"),
    entry(nid::SECP521R1, oids::SECP521R1, "secp521r1", "secp521r1"),
    entry(nid::ECDSA_WITH_SHA1, oids::ECDSA_WITH_SHA1, "ecdsa-with-SHA1", "ecdsa-with-SHA1"),
    entry(nid::ECDSA_WITH_SHA224, oids::ECDSA_WITH_SHA224, "ecdsa-with-SHA224", "ecdsa-with-SHA224"),
    entry(nid::ECDSA_WITH_SHA256, oids::ECDSA_WITH_SHA256, "ecdsa-with-SHA256", "ecdsa-with-SHA256"),
    entry(nid::ECDSA_WITH_SHA384, oids::ECDSA_WITH_SHA384, "ecdsa-with-SHA384", "ecdsa-with-SHA384"),
    entry(nid::ECDSA_WITH_SHA512, oids::ECDSA_WITH_SHA512, "ecdsa-with-SHA512", "ecdsa-with-SHA512"),
    // DSA, EdDSA, XDH
    entry(nid::DSA, oids::DSA, "DSA", "dsaEncryption"),
    entry(nid::DSA_WITH_SHA1, oids::DSA_WITH_SHA1, "DSA-SHA1", "dsaWithSHA1"),
    entry(nid::DSA_WITH_SHA256, oids::DSA_WITH_SHA256, "dsa_with_SHA256", "dsa_with_SHA256"),
    entry(nid::X25519, oids::X25519, "X25519", "X25519"),
    entry(nid::X448, oids::X448, "X448", "X448"),
    entry(nid::ED25519, oids::ED25519, "ED25519", "ED25519"),
    entry(nid::ED448, oids::ED448, "ED448", "ED448"),
    // Name attributes
    entry(nid::COMMON_NAME, rfc4519::COMMON_NAME, "CN", "commonName"),
    entry(nid::SURNAME, rfc4519::SURNAME, "SN", "surname"),
    entry(nid::SERIAL_NUMBER, rfc4519::SERIAL_NUMBER, "serialNumber", "serialNumber"),
    entry(nid::COUNTRY_NAME, rfc4519::COUNTRY_NAME, "C", "countryName"),
    entry(nid::LOCALITY_NAME, rfc4519::LOCALITY_NAME, "L", "localityName"),
    entry(nid::STATE_OR_PROVINCE_NAME, rfc2256::STATE_OR_PROVINCE_NAME, "ST", "stateOrProvinceName"),
    entry(nid::STREET_ADDRESS, rfc2256::STREET_ADDRESS, "street", "streetAddress"),
    entry(nid::ORGANIZATION_NAME, rfc4519::ORGANIZATION_NAME, "O", "organizationName"),
    entry(nid::ORGANIZATIONAL_UNIT_NAME, rfc4519::ORGANIZATIONAL_UNIT_NAME, "OU", "organizationalUnitName"),
    entry(nid::TITLE, rfc4519::TITLE, "title", "title"),
    entry(nid::DESCRIPTION, rfc4519::DESCRIPTION, "description", "description"),
    entry(nid::BUSINESS_CATEGORY, rfc4519::BUSINESS_CATEGORY, "businessCategory", "businessCategory"),
    entry(nid::POSTAL_ADDRESS, rfc4519::POSTAL_ADDRESS, "postalAddress", "postalAddress"),
    entry(nid::POSTAL_CODE, rfc4519::POSTAL_CODE, "postalCode", "postalCode"),
    entry(nid::POST_OFFICE_BOX, rfc4519::POST_OFFICE_BOX, "postOfficeBox", "postOfficeBox"),
    entry(nid::NAME, rfc4519::NAME, "name", "name"),
    entry(nid::GIVEN_NAME, rfc4519::GIVEN_NAME, "GN", "givenName"),
    entry(nid::INITIALS, rfc4519::INITIALS, "initials", "initials"),
    entry(nid::GENERATION_QUALIFIER, rfc4519::GENERATION_QUALIFIER, "generationQualifier", "generationQualifier"),
    entry(nid::DN_QUALIFIER, rfc4519::DN_QUALIFIER, "dnQualifier", "dnQualifier"),
    entry(nid::PSEUDONYM, rfc3280::PSEUDONYM, "pseudonym", "pseudonym"),
    entry(nid::DOMAIN_COMPONENT, rfc4519::DOMAIN_COMPONENT, "DC", "domainComponent"),
    entry(nid::USER_ID, rfc4519::USER_ID, "UID", "userId"),
    entry(nid::EMAIL_ADDRESS, rfc3280::EMAIL_ADDRESS, "emailAddress", "emailAddress"),
    // Certificate extensions
    entry(nid::SUBJECT_KEY_IDENTIFIER, ext::SUBJECT_KEY_IDENTIFIER, "subjectKeyIdentifier", "X509v3 Subject Key Identifier"),
    entry(nid::KEY_USAGE, ext::KEY_USAGE, "keyUsage", "X509v3 Key Usage"),
    entry(nid::PRIVATE_KEY_USAGE_PERIOD, rfc5280::ID_CE_PRIVATE_KEY_USAGE_PERIOD, "privateKeyUsagePeriod", "X509v3 Private Key Usage Period"),
    entry(nid::SUBJECT_ALT_NAME, ext::SUBJECT_ALT_NAME, "subjectAltName", "X509v3 Subject Alternative Name"),
    entry(nid::ISSUER_ALT_NAME, ext::ISSUER_ALT_NAME, "issuerAltName", "X509v3 Issuer Alternative Name"),
    entry(nid::BASIC_CONSTRAINTS, ext::BASIC_CONSTRAINTS, "basicConstraints", "X509v3 Basic Constraints"),
    entry(nid::CRL_NUMBER, rfc5280::ID_CE_CRL_NUMBER, "crlNumber", "X509v3 CRL Number"),
    entry(nid::NAME_CONSTRAINTS, ext::NAME_CONSTRAINTS, "nameConstraints", "X509v3 Name Constraints"),
    entry(nid::CRL_DISTRIBUTION_POINTS, ext::CRL_DISTRIBUTION_POINTS, "crlDistributionPoints", "X509v3 CRL Distribution Points"),
    entry(nid::CERTIFICATE_POLICIES, ext::CERTIFICATE_POLICIES, "certificatePolicies", "X509v3 Certificate Policies"),
    entry(nid::ANY_POLICY, rfc5280::ANY_POLICY, "anyPolicy", "X509v3 Any Policy"),
    entry(nid::POLICY_MAPPINGS, rfc5280::ID_CE_POLICY_MAPPINGS, "policyMappings", "X509v3 Policy Mappings"),
    entry(nid::AUTHORITY_KEY_IDENTIFIER, ext::AUTHORITY_KEY_IDENTIFIER, "authorityKeyIdentifier", "X509v3 Authority Key Identifier"),
    entry(nid::POLICY_CONSTRAINTS, ext::POLICY_CONSTRAINTS, "policyConstraints", "X509v3 Policy Constraints"),
    entry(nid::EXT_KEY_USAGE, ext::EXTENDED_KEY_USAGE, "extendedKeyUsage", "X509v3 Extended Key Usage"),
    entry(nid::FRESHEST_CRL, rfc5280::ID_CE_FRESHEST_CRL, "freshestCRL", "X509v3 Freshest CRL"),
    entry(nid::INHIBIT_ANY_POLICY, rfc5280::ID_CE_INHIBIT_ANY_POLICY, "inhibitAnyPolicy", "X509v3 Inhibit Any Policy"),
    entry(nid::INFO_ACCESS, ext::AUTHORITY_INFO_ACCESS, "authorityInfoAccess", "Authority Information Access"),
    entry(nid::SINFO_ACCESS, rfc5280::ID_PE_SUBJECT_INFO_ACCESS, "subjectInfoAccess", "Subject Information Access"),
    entry(nid::AD_OCSP, ext::AD_OCSP, "OCSP", "OCSP"),
    entry(nid::AD_CA_ISSUERS, ext::AD_CA_ISSUERS, "caIssuers", "CA Issuers"),
    // Policy qualifiers
    entry(nid::ID_QT_CPS, rfc5280::ID_QT_CPS, "id-qt-cps", "Policy Qualifier CPS"),
    entry(nid::ID_QT_UNOTICE, rfc5280::ID_QT_UNOTICE, "id-qt-unotice", "Policy Qualifier User Notice"),
    // Extended key usage purposes
    entry(nid::ANY_EXTENDED_KEY_USAGE, rfc5280::ANY_EXTENDED_KEY_USAGE, "anyExtendedKeyUsage", "Any Extended Key Usage"),
    entry(nid::SERVER_AUTH, rfc5280::ID_KP_SERVER_AUTH, "serverAuth", "TLS Web Server Authentication"),
    entry(nid::CLIENT_AUTH, rfc5280::ID_KP_CLIENT_AUTH, "clientAuth", "TLS Web Client Authentication"),
    entry(nid::CODE_SIGN, rfc5280::ID_KP_CODE_SIGNING, "codeSigning", "Code Signing"),
    entry(nid::EMAIL_PROTECT, rfc5280::ID_KP_EMAIL_PROTECTION, "emailProtection", "E-mail Protection"),
    entry(nid::TIME_STAMP, rfc5280::ID_KP_TIME_STAMPING, "timeStamping", "Time Stamping"),
    entry(nid::OCSP_SIGN, rfc5280::ID_KP_OCSP_SIGNING, "OCSPSigning", "OCSP Signing"),
];

/// Read-only OID ↔ NID lookup service.
pub struct ObjectRegistry {
    by_oid: BTreeMap<&'static [u8], &'static ObjectEntry>,
    by_nid: BTreeMap<i32, &'static ObjectEntry>,
}

static REGISTRY: spin::Once<ObjectRegistry> = spin::Once::new();

/// The process-wide registry, built on first use.
pub fn registry() -> &'static ObjectRegistry {
    REGISTRY.call_once(ObjectRegistry::build)
}

impl ObjectRegistry {
    fn build() -> Self {
        let mut by_oid = BTreeMap::new();
        let mut by_nid = BTreeMap::new();
        for object in OBJECTS.iter() {
            by_oid.insert(object.oid.as_bytes(), object);
            by_nid.insert(object.nid, object);
        }
        log::trace!("OID registry initialized with {} object(s)", by_nid.len());
        Self { by_oid, by_nid }
    }

    /// NID for the OID value bytes (no tag or length).
    pub fn nid_for_oid(&self, oid_bytes: &[u8]) -> Option<i32> {
        self.by_oid.get(oid_bytes).map(|object| object.nid)
    }

    /// Registered object for a NID.
    pub fn object(&self, nid: i32) -> Option<&'static ObjectEntry> {
        self.by_nid.get(&nid).copied()
    }

    /// Short name of a NID, e.g. `"RSA-SHA256"`.
    pub fn short_name(&self, nid: i32) -> Option<&'static str> {
        self.object(nid).map(|object| object.short_name)
    }

    /// Long name of a NID, e.g. `"sha256WithRSAEncryption"`.
    pub fn long_name(&self, nid: i32) -> Option<&'static str> {
        self.object(nid).map(|object| object.long_name)
    }

    /// Text form of a NID's OID.
    ///
    /// With `no_name` set the dotted-decimal form is always returned;
    /// otherwise the long name is preferred.
    pub fn nid_to_text(&self, nid: i32, no_name: bool) -> Option<String> {
        let object = self.object(nid)?;
        if no_name {
            Some(object.oid.to_string())
        } else {
            Some(object.long_name.to_string())
        }
    }

    /// All registered objects in ascending NID order.
    pub fn objects(&self) -> impl Iterator<Item = &'static ObjectEntry> + '_ {
        self.by_nid.values().copied()
    }
}

/// Resolve OID value bytes to a NID.
///
/// Returns `None` when the bytes are not a registered OID, including when they
/// are not a valid OID encoding at all.
pub fn oid_to_nid(oid_bytes: &[u8]) -> Option<i32> {
    registry().nid_for_oid(oid_bytes)
}

/// Dotted-decimal text for OID value bytes, e.g. `"1.2.840.113549.1.1.1"`.
///
/// Returns an empty string when the OID is not registered.
pub fn nid_to_absolute_oid(oid_bytes: &[u8]) -> String {
    let registry = registry();
    registry
        .nid_for_oid(oid_bytes)
        .and_then(|nid| registry.nid_to_text(nid, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    const RSA_ENCRYPTION_BYTES: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01];

    #[test]
    fn test_rsa_encryption_lookup() {
        assert_eq!(oid_to_nid(RSA_ENCRYPTION_BYTES), Some(nid::RSA_ENCRYPTION));
        assert_eq!(nid_to_absolute_oid(RSA_ENCRYPTION_BYTES), "1.2.840.113549.1.1.1");
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let first = oid_to_nid(RSA_ENCRYPTION_BYTES);
        let second = oid_to_nid(RSA_ENCRYPTION_BYTES);
        assert_eq!(first, second);
        assert!(core::ptr::eq(registry(), registry()));
    }

    #[test]
    fn test_unknown_oid() {
        assert_eq!(oid_to_nid(&[0xff, 0xff, 0xff]), None);
        assert_eq!(nid_to_absolute_oid(&[0xff, 0xff, 0xff]), "");
        assert_eq!(oid_to_nid(&[]), None);
        assert_eq!(nid_to_absolute_oid(&[]), "");
        // 1.2.3.4: well formed but not registered
        assert_eq!(oid_to_nid(&[0x2a, 0x03, 0x04]), None);
    }

    #[test]
    fn test_names() {
        let registry = registry();
        assert_eq!(registry.short_name(nid::SHA256), Some("SHA256"));
        assert_eq!(registry.long_name(nid::COMMON_NAME), Some("commonName"));
        assert_eq!(
            registry.nid_to_text(nid::SHA256_WITH_RSA, false).as_deref(),
            Some("sha256WithRSAEncryption")
        );
        assert_eq!(
            registry.nid_to_text(nid::SHA256_WITH_RSA, true).as_deref(),
            Some("1.2.840.113549.1.1.11")
        );
        assert_eq!(registry.nid_to_text(0, true), None);
    }

    #[test]
    fn test_table_has_unique_keys() {
        let registry = registry();
        assert_eq!(registry.objects().count(), OBJECTS.len());
        let oids: BTreeSet<_> = OBJECTS.iter().map(|o| o.oid.as_bytes()).collect();
        assert_eq!(oids.len(), OBJECTS.len());
    }

    #[test]
    fn test_extension_catalog_is_registered() {
        for oid in crate::x509::extensions::supported_extension_oids() {
            assert!(oid_to_nid(oid.as_bytes()).is_some(), "{} not registered", oid);
        }
    }

    #[test]
    fn test_distinguished_name_attributes() {
        let registry = registry();
        let cases: [(&[u8], i32, &str, &str); 7] = [
            (&[0x55, 0x04, 0x0f], nid::BUSINESS_CATEGORY, "businessCategory", "2.5.4.15"),
            (&[0x55, 0x04, 0x09], nid::STREET_ADDRESS, "street", "2.5.4.9"),
            (&[0x55, 0x04, 0x11], nid::POSTAL_CODE, "postalCode", "2.5.4.17"),
            (&[0x55, 0x04, 0x2a], nid::GIVEN_NAME, "GN", "2.5.4.42"),
            (&[0x55, 0x04, 0x04], nid::SURNAME, "SN", "2.5.4.4"),
            (&[0x55, 0x04, 0x0c], nid::TITLE, "title", "2.5.4.12"),
            (
                &[0x09, 0x92, 0x26, 0x89, 0x93, 0xf2, 0x2c, 0x64, 0x01, 0x19],
                nid::DOMAIN_COMPONENT,
                "DC",
                "0.9.2342.19200300.100.1.25",
            ),
        ];
        for (bytes, expected, short_name, dotted) in cases {
            assert_eq!(oid_to_nid(bytes), Some(expected), "{}", dotted);
            assert_eq!(registry.short_name(expected), Some(short_name));
            assert_eq!(nid_to_absolute_oid(bytes), dotted);
        }
    }

    #[test]
    fn test_policy_and_algorithm_objects() {
        // 2.5.29.32.0
        assert_eq!(oid_to_nid(&[0x55, 0x1d, 0x20, 0x00]), Some(nid::ANY_POLICY));
        // 1.2.840.113549.1.1.7
        assert_eq!(
            oid_to_nid(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x07]),
            Some(nid::RSAES_OAEP)
        );
        // 1.3.132.0.10
        assert_eq!(oid_to_nid(&[0x2b, 0x81, 0x04, 0x00, 0x0a]), Some(714));
        assert_eq!(registry().long_name(nid::ANY_POLICY), Some("X509v3 Any Policy"));
    }

    #[test]
    fn test_boringssl_numbering() {
        assert_eq!(oid_to_nid(oids::X25519.as_bytes()), Some(948));
        assert_eq!(oid_to_nid(oids::ED25519.as_bytes()), Some(949));
        assert_eq!(oid_to_nid(oids::ED448.as_bytes()), Some(960));
        assert_eq!(oid_to_nid(oids::X448.as_bytes()), Some(961));
    }

    #[test]
    fn test_objects_without_nid_are_unresolved() {
        // 1.3.6.1.4.1.311.60.2.1.3 (EV jurisdictionOfIncorporationCountryName)
        let jurisdiction_country = [0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x3c, 0x02, 0x01, 0x03];
        assert_eq!(oid_to_nid(&jurisdiction_country), None);
        assert_eq!(nid_to_absolute_oid(&jurisdiction_country), "");
        assert_eq!(oid_to_nid(oids::CT_PRECERT_SCTS.as_bytes()), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_concurrent_first_use() {
        let handles: std::vec::Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| (registry(), oid_to_nid(RSA_ENCRYPTION_BYTES)))
            })
            .collect();
        let results: std::vec::Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        for (shared, nid) in results {
            assert!(core::ptr::eq(shared, registry()));
            assert_eq!(nid, Some(nid::RSA_ENCRYPTION));
        }
    }
}
