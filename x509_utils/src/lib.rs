// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DER decoding helpers for X.509 certificate inspection
//!
//! A no_std-compatible set of byte-level parsers and lookup tables used when
//! taking apart X.509 certificates. Uses `der` for ASN.1 and `tls_codec` for
//! the TLS encoding of Certificate Transparency data.
//!
//! # Features
//! - Borrowing parsers for AlgorithmIdentifier, SubjectPublicKeyInfo and
//!   RSAPublicKey
//! - OID to NID resolution and dotted-decimal rendering
//! - Signature algorithm and digest naming
//! - Embedded SCT list extraction (RFC 6962)
//! - GeneralizedTime to UNIX time conversion
//!
//! # Example
//! ```no_run
//! use x509_utils::x509::public_key::parse_subject_public_key_info;
//! use x509_utils::registry::oid_to_nid;
//!
//! # fn example(cert_der: &[u8]) -> x509_utils::Result<()> {
//! let cert = x509_utils::Certificate::from_der(cert_der)?;
//! let spki_der = cert.subject_public_key_info_der()?;
//! let spki = parse_subject_public_key_info(&spki_der)?;
//! let nid = oid_to_nid(spki.algorithm_identifier()?.oid);
//! # let _ = nid;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod error;
pub mod registry;
pub mod sct;
pub mod time;
pub mod x509;

pub use certificate::Certificate;
pub use error::{Error, Result};
pub use registry::{nid_to_absolute_oid, oid_to_nid};
pub use sct::{extract_embedded_scts, SignedCertificateTimestamp};
pub use time::{generalized_time_to_time, GeneralizedTimeFields};
pub use x509::algorithm::{
    is_null, parse_algorithm_identifier, parse_algorithm_sequence, AlgorithmIdentifierRef,
};
pub use x509::extensions::{Extension, Extensions};
pub use x509::public_key::{parse_rsa_public_key, parse_subject_public_key_info};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::x509::signature::{DigestAlgorithm, SignatureAlgorithm, SignatureAlgorithmId};
    pub use crate::{Certificate, Error, Result};
}
