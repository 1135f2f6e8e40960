// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Embedded Signed Certificate Timestamps (RFC 6962 Section 3.3).
//!
//! A certificate may carry its SCTs in the `1.3.6.1.4.1.11129.2.4.2`
//! extension. The extnValue wraps an OCTET STRING whose contents are a
//! TLS-encoded list:
//!
//! ```text
//! opaque SerializedSCT<1..2^16-1>;
//!
//! struct {
//!     SerializedSCT sct_list <1..2^16-1>;
//! } SignedCertificateTimestampList;
//!
//! struct {
//!     Version sct_version;            // v1(0)
//!     LogID id;                       // opaque key_id[32]
//!     uint64 timestamp;
//!     CtExtensions extensions;        // opaque <0..2^16-1>
//!     digitally-signed struct { ... };
//! } SignedCertificateTimestamp;
//! ```
//!
//! Decoded entries are handed out as `Arc` so several holders can keep the
//! same record.

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;

use tls_codec::{DeserializeBytes, TlsByteVecU16};

use crate::certificate::Certificate;
use crate::error::{Result, SctError};
use crate::x509::extensions::embedded_sct_list;
use crate::x509::oids::CT_PRECERT_SCTS;

/// Length of a CT log ID (SHA-256 of the log key).
pub const LOG_ID_LEN: usize = 32;

/// TLS `HashAlgorithm` (RFC 5246 Section 7.4.1.4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HashAlgorithm {
    #[default]
    None = 0,
    Md5 = 1,
    Sha1 = 2,
    Sha224 = 3,
    Sha256 = 4,
    Sha384 = 5,
    Sha512 = 6,
}

impl HashAlgorithm {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Md5),
            2 => Some(Self::Sha1),
            3 => Some(Self::Sha224),
            4 => Some(Self::Sha256),
            5 => Some(Self::Sha384),
            6 => Some(Self::Sha512),
            _ => None,
        }
    }
}

/// TLS `SignatureAlgorithm` (RFC 5246 Section 7.4.1.4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SctSignatureAlgorithm {
    #[default]
    Anonymous = 0,
    Rsa = 1,
    Dsa = 2,
    Ecdsa = 3,
}

impl SctSignatureAlgorithm {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Anonymous),
            1 => Some(Self::Rsa),
            2 => Some(Self::Dsa),
            3 => Some(Self::Ecdsa),
            _ => None,
        }
    }
}

/// The `digitally-signed` element of an SCT.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitallySigned {
    pub hash_algorithm: HashAlgorithm,
    pub signature_algorithm: SctSignatureAlgorithm,
    pub signature_data: Vec<u8>,
}

/// A decoded v1 SCT.
///
/// `Default` is the placeholder pushed for entries that fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignedCertificateTimestamp {
    pub version: u8,
    pub log_id: [u8; LOG_ID_LEN],
    /// Milliseconds since the UNIX epoch
    pub timestamp: u64,
    pub extensions: Vec<u8>,
    pub signature: DigitallySigned,
}

fn malformed_list(what: &str) -> SctError {
    SctError::MalformedList(what.into())
}

fn malformed_entry(what: &str) -> SctError {
    SctError::MalformedEntry(what.into())
}

/// Split a `uint16` length prefixed opaque off the front of `bytes`.
fn split_u16_prefixed(bytes: &[u8]) -> core::result::Result<(&[u8], &[u8]), tls_codec::Error> {
    let (len, rest) = u16::tls_deserialize_bytes(bytes)?;
    let len = usize::from(len);
    if rest.len() < len {
        return Err(tls_codec::Error::EndOfStream);
    }
    Ok(rest.split_at(len))
}

/// Split a `SignedCertificateTimestampList` into its serialized SCTs.
///
/// The list and each item must be non-empty and the outer length must cover
/// the input exactly.
pub fn decode_sct_list(bytes: &[u8]) -> Result<Vec<&[u8]>> {
    let (mut body, rest) =
        split_u16_prefixed(bytes).map_err(|_| malformed_list("truncated list length"))?;
    if !rest.is_empty() {
        return Err(malformed_list("trailing data after list").into());
    }

    let mut items = Vec::new();
    while !body.is_empty() {
        let (item, rest) =
            split_u16_prefixed(body).map_err(|_| malformed_list("truncated list item"))?;
        if item.is_empty() {
            return Err(malformed_list("empty list item").into());
        }
        items.push(item);
        body = rest;
    }

    if items.is_empty() {
        return Err(SctError::EmptyList.into());
    }
    Ok(items)
}

/// Decode one serialized SCT.
pub fn decode_signed_certificate_timestamp(bytes: &[u8]) -> Result<SignedCertificateTimestamp> {
    let (version, rest) = u8::tls_deserialize_bytes(bytes)?;
    if version != 0 {
        return Err(SctError::UnsupportedVersion(version).into());
    }

    if rest.len() < LOG_ID_LEN {
        return Err(malformed_entry("truncated log id").into());
    }
    let (id, rest) = rest.split_at(LOG_ID_LEN);
    let mut log_id = [0u8; LOG_ID_LEN];
    log_id.copy_from_slice(id);

    let (timestamp, rest) = u64::tls_deserialize_bytes(rest)?;
    let (extensions, rest) = TlsByteVecU16::tls_deserialize_bytes(rest)?;

    let (hash, rest) = u8::tls_deserialize_bytes(rest)?;
    let hash_algorithm = HashAlgorithm::from_u8(hash)
        .ok_or_else(|| SctError::MalformedEntry(format!("unknown hash algorithm {}", hash)))?;
    let (sig, rest) = u8::tls_deserialize_bytes(rest)?;
    let signature_algorithm = SctSignatureAlgorithm::from_u8(sig)
        .ok_or_else(|| SctError::MalformedEntry(format!("unknown signature algorithm {}", sig)))?;
    let (signature_data, rest) = TlsByteVecU16::tls_deserialize_bytes(rest)?;

    if !rest.is_empty() {
        return Err(malformed_entry("trailing data after signature").into());
    }

    Ok(SignedCertificateTimestamp {
        version,
        log_id,
        timestamp,
        extensions: extensions.as_slice().to_vec(),
        signature: DigitallySigned {
            hash_algorithm,
            signature_algorithm,
            signature_data: signature_data.as_slice().to_vec(),
        },
    })
}

/// TLS-encoded SCT list carried by `cert`.
pub fn extract_embedded_sct_list(cert: &Certificate) -> Result<&[u8]> {
    match cert.find_extension(&CT_PRECERT_SCTS)? {
        Some(extension) => embedded_sct_list(extension),
        None => Err(SctError::MissingExtension.into()),
    }
}

/// Decode every embedded SCT of a DER certificate into `out`.
///
/// See [`extract_embedded_scts_from_certificate`].
pub fn extract_embedded_scts(
    cert_der: &[u8],
    out: &mut Vec<Arc<SignedCertificateTimestamp>>,
) -> Result<()> {
    let cert = Certificate::from_der(cert_der)?;
    extract_embedded_scts_from_certificate(&cert, out)
}

/// Decode every embedded SCT of `cert` into `out`.
///
/// A missing extension and an empty list both fail before anything is
/// appended. Otherwise one entry is appended per list item, a default
/// placeholder standing in for each item that does not decode, and the call
/// fails with [`SctError::EntriesFailedToDecode`] if any did not. Callers must
/// discard the appended entries on error.
pub fn extract_embedded_scts_from_certificate(
    cert: &Certificate,
    out: &mut Vec<Arc<SignedCertificateTimestamp>>,
) -> Result<()> {
    let list = extract_embedded_sct_list(cert)?;
    let items = decode_sct_list(list)?;

    let total = items.len();
    let mut failed = 0;
    for item in items {
        match decode_signed_certificate_timestamp(item) {
            Ok(sct) => out.push(Arc::new(sct)),
            Err(e) => {
                log::warn!("failed to decode embedded SCT: {}", e);
                failed += 1;
                out.push(Arc::new(SignedCertificateTimestamp::default()));
            }
        }
    }

    if failed > 0 {
        return Err(SctError::EntriesFailedToDecode { failed, total }.into());
    }
    log::debug!("decoded {} embedded SCT(s)", total);
    Ok(())
}
