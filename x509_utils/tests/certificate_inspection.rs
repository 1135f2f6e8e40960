// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use std::sync::Arc;
use std::time::Duration;

use const_oid::ObjectIdentifier;
use der::asn1::{BitString, OctetString, UtcTime};
use der::{Decode, Encode, Tag};
use spki::AlgorithmIdentifier;

use x509_utils::certificate::{SpkiInfo, TBSCertificate};
use x509_utils::error::{EncodingError, SctError};
use x509_utils::registry::{nid, registry};
use x509_utils::sct::{extract_embedded_scts_from_certificate, HashAlgorithm, LOG_ID_LEN};
use x509_utils::time::{Time, Validity};
use x509_utils::x509::oids;
use x509_utils::x509::signature::{
    signature_algorithm_digest_to_name, signature_algorithm_id_to_name,
};
use x509_utils::{
    extract_embedded_scts, nid_to_absolute_oid, oid_to_nid, parse_rsa_public_key,
    parse_subject_public_key_info, Certificate, Error, Extension, Extensions,
    SignedCertificateTimestamp,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// RSAPublicKey { modulus 0x00b5, publicExponent 65537 }
const RSA_PUBLIC_KEY: [u8; 11] = [
    0x30, 0x09, 0x02, 0x02, 0x00, 0xb5, 0x02, 0x03, 0x01, 0x00, 0x01,
];

fn null() -> der::Any {
    der::Any::new(Tag::Null, Vec::new()).unwrap()
}

fn common_name(cn: &str) -> der::Any {
    let attr_value = der::asn1::Utf8StringRef::new(cn).unwrap().to_der().unwrap();
    let mut atv = oids_common_name_tlv();
    atv.extend_from_slice(&attr_value);
    let atv = wrap(0x30, &atv);
    let rdn = wrap(0x31, &atv);
    der::Any::from_der(&wrap(0x30, &rdn)).unwrap()
}

fn oids_common_name_tlv() -> Vec<u8> {
    vec![0x06, 0x03, 0x55, 0x04, 0x03]
}

fn wrap(tag: u8, contents: &[u8]) -> Vec<u8> {
    assert!(contents.len() < 0x80);
    let mut out = vec![tag, contents.len() as u8];
    out.extend_from_slice(contents);
    out
}

fn certificate(extensions: Vec<Extension>) -> Certificate {
    certificate_with_serial(vec![0x10, 0x20, 0x30], extensions)
}

fn certificate_with_serial(serial: Vec<u8>, extensions: Vec<Extension>) -> Certificate {
    let signature = AlgorithmIdentifier {
        oid: oids::SHA256_WITH_RSA,
        parameters: Some(null()),
    };
    let spki = SpkiInfo {
        algorithm: AlgorithmIdentifier {
            oid: oids::RSA_ENCRYPTION,
            parameters: Some(null()),
        },
        subject_public_key: BitString::from_bytes(&RSA_PUBLIC_KEY).unwrap(),
    };
    let validity = Validity::new(
        Time::UtcTime(UtcTime::from_unix_duration(Duration::from_secs(1_700_000_000)).unwrap()),
        Time::UtcTime(UtcTime::from_unix_duration(Duration::from_secs(1_800_000_000)).unwrap()),
    );
    let mut tbs = TBSCertificate::new(
        serial,
        signature.clone(),
        common_name("Test CA"),
        validity,
        common_name("leaf.example"),
        spki,
    );
    if !extensions.is_empty() {
        tbs = tbs.with_extensions(Extensions::from_vec(extensions));
    }
    Certificate::new(tbs, signature, BitString::from_bytes(&[0x5a; 16]).unwrap())
}

fn sct(hash: u8, timestamp: u64) -> Vec<u8> {
    let mut out = vec![0x00];
    out.extend_from_slice(&[0xab; LOG_ID_LEN]);
    out.extend_from_slice(&timestamp.to_be_bytes());
    out.extend_from_slice(&[0x00, 0x00]);
    out.push(hash);
    out.push(0x03);
    out.extend_from_slice(&[0x00, 0x04, 0x30, 0x02, 0x01, 0x00]);
    out
}

fn sct_extension(items: &[Vec<u8>]) -> Extension {
    let mut body = Vec::new();
    for item in items {
        body.extend_from_slice(&(item.len() as u16).to_be_bytes());
        body.extend_from_slice(item);
    }
    let mut list = (body.len() as u16).to_be_bytes().to_vec();
    list.extend_from_slice(&body);
    let value = OctetString::new(list).unwrap().to_der().unwrap();
    Extension::new(oids::CT_PRECERT_SCTS, false, value).unwrap()
}

#[test]
fn spki_resolves_through_registry() {
    init_logger();
    let cert = Certificate::from_der(&certificate(Vec::new()).to_der().unwrap()).unwrap();

    let spki_der = cert.subject_public_key_info_der().unwrap();
    let spki = parse_subject_public_key_info(&spki_der).unwrap();
    let algorithm = spki.algorithm_identifier().unwrap();
    assert_eq!(algorithm.oid, oids::RSA_ENCRYPTION.as_bytes());
    assert!(algorithm.parameters_absent_or_null());

    assert_eq!(oid_to_nid(algorithm.oid), Some(nid::RSA_ENCRYPTION));
    assert_eq!(nid_to_absolute_oid(algorithm.oid), "1.2.840.113549.1.1.1");
    assert_eq!(
        registry().long_name(nid::RSA_ENCRYPTION),
        Some("rsaEncryption")
    );

    let key = parse_rsa_public_key(spki.public_key_bytes().unwrap()).unwrap();
    assert_eq!(key.modulus, &[0x00, 0xb5]);
    assert_eq!(key.public_exponent, &[0x01, 0x00, 0x01]);
    assert_eq!(key.modulus_bits(), 8);
}

#[test]
fn signature_algorithm_is_named() {
    init_logger();
    let cert = certificate(Vec::new());
    let algorithm = cert.signature_algorithm().unwrap();
    assert_eq!(signature_algorithm_id_to_name(&algorithm), "RSA");
    assert_eq!(signature_algorithm_digest_to_name(&algorithm), "SHA-256");
}

#[test]
fn pem_roundtrip_and_wrong_label() {
    init_logger();
    let cert = certificate(vec![sct_extension(&[sct(4, 1)])]);
    let pem = cert.to_pem().unwrap();
    assert_eq!(Certificate::from_pem(&pem).unwrap(), cert);

    let wrong = pem.replace("CERTIFICATE", "X509 CRL");
    match Certificate::from_pem(&wrong) {
        Err(Error::EncodingError(EncodingError::InvalidPemLabel { expected, found })) => {
            assert_eq!(expected, "CERTIFICATE");
            assert_eq!(found, "X509 CRL");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn scts_absent_extension_fails() {
    init_logger();
    let der = certificate(Vec::new()).to_der().unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        extract_embedded_scts(&der, &mut out),
        Err(Error::SctError(SctError::MissingExtension))
    ));
    assert!(out.is_empty());
}

#[test]
fn scts_empty_list_fails() {
    init_logger();
    let der = certificate(vec![sct_extension(&[])]).to_der().unwrap();
    let mut out = Vec::new();
    assert!(matches!(
        extract_embedded_scts(&der, &mut out),
        Err(Error::SctError(SctError::EmptyList))
    ));
    assert!(out.is_empty());
}

#[test]
fn scts_all_valid() {
    init_logger();
    let items = [sct(4, 1_000), sct(5, 2_000), sct(6, 3_000)];
    let der = certificate(vec![sct_extension(&items)]).to_der().unwrap();
    let mut out = Vec::new();
    extract_embedded_scts(&der, &mut out).unwrap();

    assert_eq!(out.len(), 3);
    let timestamps: Vec<u64> = out.iter().map(|s| s.timestamp).collect();
    assert_eq!(timestamps, vec![1_000, 2_000, 3_000]);
    assert_eq!(out[0].signature.hash_algorithm, HashAlgorithm::Sha256);
    assert_eq!(out[2].signature.hash_algorithm, HashAlgorithm::Sha512);

    let shared = Arc::clone(&out[1]);
    drop(out);
    assert_eq!(shared.log_id, [0xab; LOG_ID_LEN]);
}

#[test]
fn scts_one_malformed_fails_batch() {
    init_logger();
    let items = [sct(4, 1_000), sct(9, 2_000), sct(4, 3_000)];
    let cert = certificate(vec![sct_extension(&items)]);
    let mut out = Vec::new();
    assert!(matches!(
        extract_embedded_scts_from_certificate(&cert, &mut out),
        Err(Error::SctError(SctError::EntriesFailedToDecode {
            failed: 1,
            total: 3
        }))
    ));
    assert_eq!(out.len(), 3);
    assert_eq!(*out[1], SignedCertificateTimestamp::default());
    assert_eq!(out[2].timestamp, 3_000);
}

#[test]
fn scts_from_negative_serial_certificate() {
    init_logger();
    let der = certificate_with_serial(vec![0xf9], vec![sct_extension(&[sct(4, 7)])])
        .to_der()
        .unwrap();
    let cert = Certificate::from_der(&der).unwrap();
    assert_eq!(cert.serial_number(), &[0xf9]);

    let mut out = Vec::new();
    extract_embedded_scts(&der, &mut out).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].timestamp, 7);
}

#[test]
fn duplicate_sct_extension_rejected() {
    init_logger();
    let ext = sct_extension(&[sct(4, 1)]);
    let cert = certificate(vec![ext.clone(), ext]);
    let mut out = Vec::new();
    assert!(extract_embedded_scts_from_certificate(&cert, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn unrelated_extensions_are_catalogued() {
    init_logger();
    let basic_constraints = ObjectIdentifier::new_unwrap("2.5.29.19");
    assert!(x509_utils::x509::is_supported_extension(
        basic_constraints.as_bytes()
    ));
    assert!(!x509_utils::x509::is_supported_extension(
        oids::CT_PRECERT_SCTS.as_bytes()
    ));
}
