// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for DER structure decoding
//!
//! Structural parsers in this crate report failure through [`Error`]. Lookups
//! that may legitimately find nothing (OID registry, name tables) use `Option`
//! or empty strings instead and never produce an `Error`.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

/// Result type alias for decoding operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for all fallible operations in this crate
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Structural DER violation
    ParseError(ParseError),

    /// Errors during DER/ASN.1 parsing (from der crate)
    Asn1(der::Error),

    /// Unsupported or malformed algorithm identifiers
    AlgorithmError(AlgorithmError),

    /// Signed Certificate Timestamp decoding errors
    SctError(SctError),

    /// Certificate extension lookup errors
    ExtensionError(ExtensionError),

    /// Certificate encoding errors (PEM/DER conversion)
    EncodingError(EncodingError),
}

/// Structural violations found while walking DER input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid tag encountered
    InvalidTag { expected: u8, found: u8 },

    /// Unexpected end of input
    UnexpectedEof,

    /// Bytes remain where the structure must be fully consumed
    TrailingData { remaining: usize },

    /// Missing required field
    MissingField(String),

    /// NULL value with non-empty contents
    NonEmptyNull,
}

/// Errors related to AlgorithmIdentifier interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Algorithm OID is not one this crate understands
    UnknownOid(String),

    /// Algorithm parameters are not allowed for this algorithm
    UnexpectedParameters(String),

    /// Algorithm parameters invalid
    InvalidParameters(String),
}

/// Errors related to Signed Certificate Timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SctError {
    /// Certificate has no embedded SCT list extension
    MissingExtension,

    /// The extension value is not a well-formed OCTET STRING
    MalformedExtension(String),

    /// The TLS-encoded list container is malformed
    MalformedList(String),

    /// The list decoded to zero entries
    EmptyList,

    /// A single serialized SCT could not be decoded
    MalformedEntry(String),

    /// Unsupported SCT version
    UnsupportedVersion(u8),

    /// One or more entries of a batch failed to decode
    EntriesFailedToDecode { failed: usize, total: usize },
}

/// Errors related to certificate extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// Duplicate extension
    DuplicateExtension(String),
}

/// Errors related to certificate encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Invalid PEM format
    InvalidPem(String),

    /// PEM label mismatch
    InvalidPemLabel { expected: String, found: String },
}

// ============================================================================
// Error Display Implementation (works in both std and no_std)
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::Asn1(e) => write!(f, "ASN.1 error: {}", e),
            Error::AlgorithmError(e) => write!(f, "Algorithm error: {}", e),
            Error::SctError(e) => write!(f, "SCT error: {}", e),
            Error::ExtensionError(e) => write!(f, "Extension error: {}", e),
            Error::EncodingError(e) => write!(f, "Encoding error: {}", e),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidTag { expected, found } => {
                write!(
                    f,
                    "Invalid tag: expected 0x{:02x}, found 0x{:02x}",
                    expected, found
                )
            }
            ParseError::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseError::TrailingData { remaining } => {
                write!(f, "Trailing data: {} byte(s) left unconsumed", remaining)
            }
            ParseError::MissingField(field) => write!(f, "Missing required field: {}", field),
            ParseError::NonEmptyNull => write!(f, "NULL value has non-empty contents"),
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::UnknownOid(oid) => write!(f, "Unknown algorithm OID: {}", oid),
            AlgorithmError::UnexpectedParameters(algo) => {
                write!(f, "Unexpected parameters for {}", algo)
            }
            AlgorithmError::InvalidParameters(msg) => {
                write!(f, "Invalid algorithm parameters: {}", msg)
            }
        }
    }
}

impl fmt::Display for SctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SctError::MissingExtension => write!(f, "No embedded SCT list extension"),
            SctError::MalformedExtension(msg) => {
                write!(f, "Malformed SCT list extension: {}", msg)
            }
            SctError::MalformedList(msg) => write!(f, "Malformed SCT list: {}", msg),
            SctError::EmptyList => write!(f, "SCT list is empty"),
            SctError::MalformedEntry(msg) => write!(f, "Malformed SCT: {}", msg),
            SctError::UnsupportedVersion(v) => write!(f, "Unsupported SCT version: {}", v),
            SctError::EntriesFailedToDecode { failed, total } => {
                write!(f, "{} of {} SCT(s) failed to decode", failed, total)
            }
        }
    }
}

impl fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionError::DuplicateExtension(oid) => write!(f, "Duplicate extension: {}", oid),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPem(msg) => write!(f, "Invalid PEM: {}", msg),
            EncodingError::InvalidPemLabel { expected, found } => {
                write!(
                    f,
                    "Invalid PEM label: expected '{}', found '{}'",
                    expected, found
                )
            }
        }
    }
}

// ============================================================================
// std::error::Error implementation (when std feature is enabled)
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// ============================================================================
// Conversions from external crate errors
// ============================================================================

/// Convert from der crate errors
impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

/// Convert from PEM decoding errors
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::EncodingError(EncodingError::InvalidPem(err.to_string()))
    }
}

/// Convert from TLS presentation-language decoding errors
impl From<tls_codec::Error> for Error {
    fn from(err: tls_codec::Error) -> Self {
        Error::SctError(SctError::MalformedEntry(alloc::format!("{:?}", err)))
    }
}

impl From<SctError> for Error {
    fn from(err: SctError) -> Self {
        Error::SctError(err)
    }
}

// ============================================================================
// Helper constructors for common error cases
// ============================================================================

impl Error {
    /// Create an unexpected tag error
    pub fn invalid_tag(expected: der::Tag, found: der::Tag) -> Self {
        Error::ParseError(ParseError::InvalidTag {
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Create a trailing data error
    pub fn trailing_data(remaining: usize) -> Self {
        Error::ParseError(ParseError::TrailingData { remaining })
    }

    /// Create a missing field error
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Error::ParseError(ParseError::MissingField(field.into()))
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm<S: Into<String>>(oid: S) -> Self {
        Error::AlgorithmError(AlgorithmError::UnknownOid(oid.into()))
    }

    /// Create an invalid algorithm parameters error
    pub fn invalid_parameters<S: Into<String>>(msg: S) -> Self {
        Error::AlgorithmError(AlgorithmError::InvalidParameters(msg.into()))
    }
}

// ============================================================================
// Tests
// ============================================================================
