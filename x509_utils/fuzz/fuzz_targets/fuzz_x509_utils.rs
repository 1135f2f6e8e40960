// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use x509_utils::{
    is_null, nid_to_absolute_oid, oid_to_nid, parse_algorithm_identifier,
    parse_algorithm_sequence, parse_rsa_public_key, parse_subject_public_key_info,
    sct::{decode_sct_list, decode_signed_certificate_timestamp},
    x509::signature::SignatureAlgorithm,
    GeneralizedTimeFields,
};

fuzz_target!(|data: &[u8]| {
    // Byte-level parsers
    let _ = parse_algorithm_identifier(data);
    let _ = parse_algorithm_sequence(data);
    let _ = is_null(data);
    let _ = oid_to_nid(data);
    let _ = nid_to_absolute_oid(data);
    let _ = SignatureAlgorithm::from_der(data);
    let _ = parse_rsa_public_key(data);

    if let Ok(spki) = parse_subject_public_key_info(data) {
        let _ = spki.algorithm_identifier();
        let _ = spki.public_key_bytes();
    }

    if let Ok(items) = decode_sct_list(data) {
        for item in items {
            let _ = decode_signed_certificate_timestamp(item);
        }
    }

    if let Ok(time) = GeneralizedTimeFields::from_der(data) {
        let _ = x509_utils::generalized_time_to_time(&time);
    }

    // Full certificate path
    let mut scts = Vec::new();
    let _ = x509_utils::extract_embedded_scts(data, &mut scts);
});
