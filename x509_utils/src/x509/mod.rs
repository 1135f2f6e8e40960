// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Byte-level X.509 structure parsers and algorithm tables.
//!
//! The parsers here borrow from their input and hand back value spans; they
//! do not copy or interpret key material.

pub mod algorithm;
pub mod extensions;
pub mod oids;
pub(crate) mod parser;
pub mod public_key;
pub mod signature;

pub use algorithm::{is_null, parse_algorithm_identifier, parse_algorithm_sequence};
pub use extensions::{is_supported_extension, supported_extension_oids};
pub use public_key::{
    parse_rsa_public_key, parse_subject_public_key_info, RsaPublicKeyRef,
    SubjectPublicKeyInfoRef,
};
pub use signature::{
    signature_algorithm_digest_to_name, signature_algorithm_id_to_name, DigestAlgorithm,
    SignatureAlgorithm, SignatureAlgorithmId,
};
