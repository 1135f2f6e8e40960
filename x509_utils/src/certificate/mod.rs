// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 certificate container.
//!
//! Holds a certificate decoded from DER or PEM with just enough structure for
//! inspection: the names are kept as raw DER, the key and signature algorithm
//! as `spki` types, and the extensions as a typed list. The byte-level
//! parsers in [`crate::x509`] operate on the DER pieces this container hands
//! out.
//!
//! # Examples
//!
//! ```no_run
//! use x509_utils::Certificate;
//!
//! # fn example(pem_string: &str) -> x509_utils::Result<()> {
//! let cert = Certificate::from_pem(pem_string)?;
//! let spki = cert.subject_public_key_info_der()?;
//! let info = x509_utils::x509::public_key::parse_subject_public_key_info(&spki)?;
//! # let _ = info;
//! # Ok(())
//! # }
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use const_oid::ObjectIdentifier;
use der::{
    asn1::{BitString, ContextSpecificRef, IntRef, UintRef},
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Tag, TagMode,
    TagNumber, Tagged, Writer,
};
use spki::{AlgorithmIdentifier, SubjectPublicKeyInfo};

use crate::error::{EncodingError, Error, ExtensionError, Result};
use crate::time::Validity;
use crate::x509::signature::SignatureAlgorithm;

/// SubjectPublicKeyInfo with opaque algorithm parameters.
pub type SpkiInfo = SubjectPublicKeyInfo<der::Any, BitString>;

const PEM_LABEL: &str = "CERTIFICATE";

// ============================================================================
// Version - RFC 5280 Section 4.1.2.1
// ============================================================================

/// X.509 certificate version.
///
/// ```asn1
/// Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Version {
    V1 = 0,
    V2 = 1,
    #[default]
    V3 = 2,
}

impl Version {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2),
            2 => Ok(Version::V3),
            _ => Err(Error::Asn1(der::Error::from(der::ErrorKind::Value {
                tag: Tag::Integer,
            }))),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.value() + 1)
    }
}

// ============================================================================
// Extensions - RFC 5280 Section 4.1.2.9
// ============================================================================

/// A single X.509 v3 extension.
///
/// ```asn1
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct Extension {
    pub extn_id: ObjectIdentifier,

    #[asn1(default = "default_false")]
    pub critical: bool,

    /// Contents of the extnValue OCTET STRING
    pub extn_value: der::asn1::OctetString,
}

fn default_false() -> bool {
    false
}

impl Extension {
    pub fn new(extn_id: ObjectIdentifier, critical: bool, extn_value: Vec<u8>) -> Result<Self> {
        Ok(Self {
            extn_id,
            critical,
            extn_value: der::asn1::OctetString::new(extn_value)?,
        })
    }

    /// The extnValue contents.
    pub fn value(&self) -> &[u8] {
        self.extn_value.as_bytes()
    }
}

/// `Extensions ::= SEQUENCE SIZE (1..MAX) OF Extension`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extensions {
    pub extensions: Vec<Extension>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(extensions: Vec<Extension>) -> Self {
        Self { extensions }
    }

    pub fn push(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Extension> {
        self.extensions.iter()
    }

    /// Find the extension with `oid`.
    ///
    /// RFC 5280 allows each extension at most once, so more than one match is
    /// an error rather than a silent first-wins.
    pub fn find(&self, oid: &ObjectIdentifier) -> Result<Option<&Extension>> {
        let mut matches = self.extensions.iter().filter(|e| &e.extn_id == oid);
        let found = matches.next();
        if matches.next().is_some() {
            log::warn!("certificate carries extension {} more than once", oid);
            return Err(Error::ExtensionError(ExtensionError::DuplicateExtension(
                oid.to_string(),
            )));
        }
        Ok(found)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }
}

impl<'a> DecodeValue<'a> for Extensions {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let mut extensions = Vec::new();
            while !reader.is_finished() {
                extensions.push(Extension::decode(reader)?);
            }
            Ok(Self { extensions })
        })
    }
}

impl EncodeValue for Extensions {
    fn value_len(&self) -> der::Result<Length> {
        self.extensions
            .iter()
            .try_fold(Length::ZERO, |len, ext| len + ext.encoded_len()?)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        for ext in &self.extensions {
            ext.encode(writer)?;
        }
        Ok(())
    }
}

impl der::FixedTag for Extensions {
    const TAG: Tag = Tag::Sequence;
}

// ============================================================================
// TBSCertificate - RFC 5280 Section 4.1
// ============================================================================

/// The signed portion of a certificate.
///
/// ```asn1
/// TBSCertificate  ::=  SEQUENCE  {
///     version         [0]  EXPLICIT Version DEFAULT v1,
///     serialNumber         CertificateSerialNumber,
///     signature            AlgorithmIdentifier,
///     issuer               Name,
///     validity             Validity,
///     subject              Name,
///     subjectPublicKeyInfo SubjectPublicKeyInfo,
///     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
///     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
///     extensions      [3]  EXPLICIT Extensions OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TBSCertificate {
    pub version: Version,

    serial_number: Vec<u8>,

    pub signature: AlgorithmIdentifier<der::Any>,

    /// Issuer Name, kept as its DER SEQUENCE
    pub issuer: der::Any,

    pub validity: Validity,

    /// Subject Name, kept as its DER SEQUENCE
    pub subject: der::Any,

    pub subject_public_key_info: SpkiInfo,

    pub issuer_unique_id: Option<BitString>,

    pub subject_unique_id: Option<BitString>,

    pub extensions: Option<Extensions>,
}

impl TBSCertificate {
    /// Create a v3 TBSCertificate without unique IDs or extensions.
    pub fn new(
        serial_number: Vec<u8>,
        signature: AlgorithmIdentifier<der::Any>,
        issuer: der::Any,
        validity: Validity,
        subject: der::Any,
        subject_public_key_info: SpkiInfo,
    ) -> Self {
        Self {
            version: Version::V3,
            serial_number,
            signature,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions: None,
        }
    }

    /// Serial number as the two's-complement contents of its DER INTEGER.
    ///
    /// A set high bit on the first byte means the serial is negative.
    pub fn serial_number(&self) -> &[u8] {
        &self.serial_number
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(Encode::to_der(self)?)
    }

    fn serial_number_ref(&self) -> der::Result<IntRef<'_>> {
        IntRef::new(&self.serial_number)
    }

    fn version_field(&self) -> Option<u8> {
        (self.version != Version::V1).then(|| self.version.value())
    }
}

fn explicit<T>(tag_number: TagNumber, value: &T) -> ContextSpecificRef<'_, T> {
    ContextSpecificRef {
        tag_number,
        tag_mode: TagMode::Explicit,
        value,
    }
}

fn implicit<T>(tag_number: TagNumber, value: &T) -> ContextSpecificRef<'_, T> {
    ContextSpecificRef {
        tag_number,
        tag_mode: TagMode::Implicit,
        value,
    }
}

impl<'a> DecodeValue<'a> for TBSCertificate {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let version = match reader
                .context_specific::<UintRef<'a>>(TagNumber::N0, TagMode::Explicit)?
            {
                Some(v) => match v.as_bytes() {
                    [value] => Version::from_value(*value).map_err(|_| {
                        der::Error::from(der::ErrorKind::Value { tag: Tag::Integer })
                    })?,
                    _ => return Err(der::ErrorKind::Value { tag: Tag::Integer }.into()),
                },
                None => Version::V1,
            };

            // RFC 5280 forbids negative serials but deployed CAs issued them.
            let serial_number = IntRef::decode(reader)?.as_bytes().to_vec();
            if serial_number.first().map_or(false, |b| b & 0x80 != 0) {
                log::warn!("negative certificate serial number {:02x?}", serial_number);
            }
            let signature = AlgorithmIdentifier::decode(reader)?;
            let issuer = der::Any::decode(reader)?;
            issuer.tag().assert_eq(Tag::Sequence)?;
            let validity = Validity::decode(reader)?;
            let subject = der::Any::decode(reader)?;
            subject.tag().assert_eq(Tag::Sequence)?;
            let subject_public_key_info = SpkiInfo::decode(reader)?;

            let issuer_unique_id =
                reader.context_specific::<BitString>(TagNumber::N1, TagMode::Implicit)?;
            let subject_unique_id =
                reader.context_specific::<BitString>(TagNumber::N2, TagMode::Implicit)?;
            let extensions =
                reader.context_specific::<Extensions>(TagNumber::N3, TagMode::Explicit)?;

            Ok(Self {
                version,
                serial_number,
                signature,
                issuer,
                validity,
                subject,
                subject_public_key_info,
                issuer_unique_id,
                subject_unique_id,
                extensions,
            })
        })
    }
}

impl EncodeValue for TBSCertificate {
    fn value_len(&self) -> der::Result<Length> {
        let mut len = Length::ZERO;

        if let Some(version) = self.version_field() {
            let version_bytes = [version];
            len = (len + explicit(TagNumber::N0, &UintRef::new(&version_bytes)?).encoded_len()?)?;
        }

        len = (len + self.serial_number_ref()?.encoded_len()?)?;
        len = (len + self.signature.encoded_len()?)?;
        len = (len + self.issuer.encoded_len()?)?;
        len = (len + self.validity.encoded_len()?)?;
        len = (len + self.subject.encoded_len()?)?;
        len = (len + self.subject_public_key_info.encoded_len()?)?;

        if let Some(ref uid) = self.issuer_unique_id {
            len = (len + implicit(TagNumber::N1, uid).encoded_len()?)?;
        }
        if let Some(ref uid) = self.subject_unique_id {
            len = (len + implicit(TagNumber::N2, uid).encoded_len()?)?;
        }
        if let Some(ref extensions) = self.extensions {
            len = (len + explicit(TagNumber::N3, extensions).encoded_len()?)?;
        }

        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        if let Some(version) = self.version_field() {
            let version_bytes = [version];
            explicit(TagNumber::N0, &UintRef::new(&version_bytes)?).encode(writer)?;
        }

        self.serial_number_ref()?.encode(writer)?;
        self.signature.encode(writer)?;
        self.issuer.encode(writer)?;
        self.validity.encode(writer)?;
        self.subject.encode(writer)?;
        self.subject_public_key_info.encode(writer)?;

        if let Some(ref uid) = self.issuer_unique_id {
            implicit(TagNumber::N1, uid).encode(writer)?;
        }
        if let Some(ref uid) = self.subject_unique_id {
            implicit(TagNumber::N2, uid).encode(writer)?;
        }
        if let Some(ref extensions) = self.extensions {
            explicit(TagNumber::N3, extensions).encode(writer)?;
        }

        Ok(())
    }
}

impl der::FixedTag for TBSCertificate {
    const TAG: Tag = Tag::Sequence;
}

// ============================================================================
// Certificate - RFC 5280 Section 4.1
// ============================================================================

/// X.509 Certificate.
///
/// ```asn1
/// Certificate  ::=  SEQUENCE  {
///     tbsCertificate       TBSCertificate,
///     signatureAlgorithm   AlgorithmIdentifier,
///     signatureValue       BIT STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub tbs_certificate: TBSCertificate,
    pub signature_algorithm: AlgorithmIdentifier<der::Any>,
    pub signature_value: BitString,
}

impl Certificate {
    pub fn new(
        tbs_certificate: TBSCertificate,
        signature_algorithm: AlgorithmIdentifier<der::Any>,
        signature_value: BitString,
    ) -> Self {
        Self {
            tbs_certificate,
            signature_algorithm,
            signature_value,
        }
    }

    /// Parse a DER certificate. Trailing bytes are rejected.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        Ok(<Self as Decode>::from_der(bytes)?)
    }

    /// Parse a PEM `CERTIFICATE` block.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let (label, der_bytes) = pem_rfc7468::decode_vec(pem.as_bytes())?;
        if label != PEM_LABEL {
            log::debug!("rejecting PEM block labelled {}", label);
            return Err(Error::EncodingError(EncodingError::InvalidPemLabel {
                expected: PEM_LABEL.to_string(),
                found: label.to_string(),
            }));
        }
        Self::from_der(&der_bytes)
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(Encode::to_der(self)?)
    }

    /// PEM `CERTIFICATE` block with LF line endings.
    pub fn to_pem(&self) -> Result<String> {
        let der = self.to_der()?;
        Ok(pem_rfc7468::encode_string(
            PEM_LABEL,
            pem_rfc7468::LineEnding::LF,
            &der,
        )?)
    }

    /// DER of the signed portion.
    pub fn tbs_certificate_der(&self) -> Result<Vec<u8>> {
        self.tbs_certificate.to_der()
    }

    /// DER SubjectPublicKeyInfo, the input of
    /// [`parse_subject_public_key_info`](crate::x509::public_key::parse_subject_public_key_info).
    pub fn subject_public_key_info_der(&self) -> Result<Vec<u8>> {
        Ok(self.tbs_certificate.subject_public_key_info.to_der()?)
    }

    /// DER of the outer signatureAlgorithm AlgorithmIdentifier.
    pub fn signature_algorithm_der(&self) -> Result<Vec<u8>> {
        Ok(self.signature_algorithm.to_der()?)
    }

    /// Resolve the outer signatureAlgorithm.
    pub fn signature_algorithm(&self) -> Result<SignatureAlgorithm> {
        SignatureAlgorithm::from_der(&self.signature_algorithm_der()?)
    }

    /// Raw bits of the outer signatureValue.
    pub fn signature_bytes(&self) -> &[u8] {
        self.signature_value.raw_bytes()
    }

    /// See [`TBSCertificate::serial_number`].
    pub fn serial_number(&self) -> &[u8] {
        self.tbs_certificate.serial_number()
    }

    /// notBefore and notAfter.
    pub fn validity(&self) -> &Validity {
        &self.tbs_certificate.validity
    }

    /// Version, `V1` when the field is omitted.
    pub fn version(&self) -> Version {
        self.tbs_certificate.version
    }

    /// All extensions in encoded order, `None` when the field is absent.
    pub fn extensions(&self) -> Option<&Extensions> {
        self.tbs_certificate.extensions.as_ref()
    }

    /// Look up a single extension by OID.
    ///
    /// `Ok(None)` when the certificate has no such extension (or none at all);
    /// an error when it appears more than once.
    pub fn find_extension(&self, oid: &ObjectIdentifier) -> Result<Option<&Extension>> {
        match self.extensions() {
            Some(extensions) => extensions.find(oid),
            None => Ok(None),
        }
    }
}

impl<'a> DecodeValue<'a> for Certificate {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let tbs_certificate = TBSCertificate::decode(reader)?;
            let signature_algorithm = AlgorithmIdentifier::decode(reader)?;
            let signature_value = BitString::decode(reader)?;

            Ok(Self {
                tbs_certificate,
                signature_algorithm,
                signature_value,
            })
        })
    }
}

impl EncodeValue for Certificate {
    fn value_len(&self) -> der::Result<Length> {
        self.tbs_certificate.encoded_len()?
            + self.signature_algorithm.encoded_len()?
            + self.signature_value.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.tbs_certificate.encode(writer)?;
        self.signature_algorithm.encode(writer)?;
        self.signature_value.encode(writer)?;
        Ok(())
    }
}

impl der::FixedTag for Certificate {
    const TAG: Tag = Tag::Sequence;
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = crate::registry::registry();
        let sig_oid = &self.signature_algorithm.oid;
        let sig_name = registry
            .nid_for_oid(sig_oid.as_bytes())
            .and_then(|nid| registry.long_name(nid));

        writeln!(f, "Certificate:")?;
        writeln!(f, "  Version: {}", self.version())?;
        writeln!(f, "  Serial Number: {:02x?}", self.serial_number())?;
        match sig_name {
            Some(name) => writeln!(f, "  Signature Algorithm: {}", name)?,
            None => writeln!(f, "  Signature Algorithm: {}", sig_oid)?,
        }
        writeln!(
            f,
            "  Validity: {:?} .. {:?}",
            self.validity().not_before.to_unix_duration(),
            self.validity().not_after.to_unix_duration()
        )?;

        if let Some(extensions) = self.extensions() {
            writeln!(f, "  Extensions: {} extension(s)", extensions.len())?;
        }

        Ok(())
    }
}
