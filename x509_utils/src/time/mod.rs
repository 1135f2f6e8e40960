// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate time values and GeneralizedTime conversion.
//!
//! [`Time`] and [`Validity`] are the DER forms carried by a certificate.
//! [`GeneralizedTimeFields`] holds the calendar fields of a GeneralizedTime as
//! decoded, without range checks, and [`generalized_time_to_time`] turns them
//! into a point in time.
//!
//! # UTCTime Y2K Conversion
//!
//! UTCTime values are interpreted according to RFC 5280:
//! - Years 50-99 are interpreted as 1950-1999
//! - Years 00-49 are interpreted as 2000-2049

use core::time::Duration;

use der::{
    asn1::{GeneralizedTime, UtcTime},
    DateTime, Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Tag, Writer,
};

/// A timestamp that can be either UTCTime or GeneralizedTime.
///
/// RFC 5280 mandates:
/// - UTCTime for dates through 2049
/// - GeneralizedTime for dates in 2050 or later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Time {
    /// UTCTime format (YYMMDDHHMMSSZ)
    UtcTime(UtcTime),
    /// GeneralizedTime format (YYYYMMDDHHMMSSZ)
    GeneralizedTime(GeneralizedTime),
}

impl Time {
    /// Calendar representation.
    pub fn to_date_time(&self) -> DateTime {
        match self {
            Time::UtcTime(utc) => utc.to_date_time(),
            Time::GeneralizedTime(gen) => gen.to_date_time(),
        }
    }

    /// Time since the UNIX epoch.
    pub fn to_unix_duration(&self) -> Duration {
        self.to_date_time().unix_duration()
    }
}

impl<'a> DecodeValue<'a> for Time {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        match header.tag {
            Tag::UtcTime => Ok(Time::UtcTime(UtcTime::decode_value(reader, header)?)),
            Tag::GeneralizedTime => Ok(Time::GeneralizedTime(GeneralizedTime::decode_value(
                reader, header,
            )?)),
            tag => Err(der::Error::from(der::ErrorKind::TagUnexpected {
                expected: Some(Tag::UtcTime),
                actual: tag,
            })),
        }
    }
}

impl<'a> Decode<'a> for Time {
    fn decode<R: Reader<'a>>(reader: &mut R) -> der::Result<Self> {
        let header = Header::decode(reader)?;
        Self::decode_value(reader, header)
    }
}

impl Encode for Time {
    fn encoded_len(&self) -> der::Result<Length> {
        match self {
            Time::UtcTime(utc) => utc.encoded_len(),
            Time::GeneralizedTime(gen) => gen.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> der::Result<()> {
        match self {
            Time::UtcTime(utc) => utc.encode(writer),
            Time::GeneralizedTime(gen) => gen.encode(writer),
        }
    }
}

/// Certificate validity period.
///
/// ```text
/// Validity ::= SEQUENCE {
///     notBefore      Time,
///     notAfter       Time
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub not_before: Time,
    pub not_after: Time,
}

impl Validity {
    pub const fn new(not_before: Time, not_after: Time) -> Self {
        Validity {
            not_before,
            not_after,
        }
    }
}

impl<'a> DecodeValue<'a> for Validity {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let not_before = Time::decode(reader)?;
            let not_after = Time::decode(reader)?;
            Ok(Validity {
                not_before,
                not_after,
            })
        })
    }
}

impl EncodeValue for Validity {
    fn value_len(&self) -> der::Result<Length> {
        self.not_before.encoded_len()? + self.not_after.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.not_before.encode(writer)?;
        self.not_after.encode(writer)?;
        Ok(())
    }
}

impl der::Sequence<'_> for Validity {}

/// Calendar fields of a GeneralizedTime, UTC, whole seconds.
///
/// The fields are not range checked on construction; a value such as month 13
/// is representable and simply fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GeneralizedTimeFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl GeneralizedTimeFields {
    /// Decode a DER GeneralizedTime TLV.
    pub fn from_der(bytes: &[u8]) -> crate::Result<Self> {
        let time = GeneralizedTime::from_der(bytes)?;
        Ok(time.into())
    }

    /// Checked conversion to a calendar date.
    pub fn to_date_time(&self) -> der::Result<DateTime> {
        DateTime::new(
            self.year,
            self.month,
            self.day,
            self.hours,
            self.minutes,
            self.seconds,
        )
    }
}

impl From<DateTime> for GeneralizedTimeFields {
    fn from(date_time: DateTime) -> Self {
        Self {
            year: date_time.year(),
            month: date_time.month(),
            day: date_time.day(),
            hours: date_time.hour(),
            minutes: date_time.minutes(),
            seconds: date_time.seconds(),
        }
    }
}

impl From<GeneralizedTime> for GeneralizedTimeFields {
    fn from(time: GeneralizedTime) -> Self {
        time.to_date_time().into()
    }
}

impl From<Time> for GeneralizedTimeFields {
    fn from(time: Time) -> Self {
        time.to_date_time().into()
    }
}

/// Convert GeneralizedTime fields to time since the UNIX epoch.
///
/// Never fails: fields that do not name a valid instant at or after
/// 1970-01-01T00:00:00Z yield `Duration::ZERO`, the epoch itself. Use
/// [`GeneralizedTimeFields::to_date_time`] to detect the failure.
pub fn generalized_time_to_time(time: &GeneralizedTimeFields) -> Duration {
    match time.to_date_time() {
        Ok(date_time) => date_time.unix_duration(),
        Err(e) => {
            log::debug!("GeneralizedTime {:?} not convertible: {}", time, e);
            Duration::ZERO
        }
    }
}

/// Convert GeneralizedTime fields to a `SystemTime`, `UNIX_EPOCH` on failure.
#[cfg(feature = "std")]
pub fn generalized_time_to_system_time(time: &GeneralizedTimeFields) -> std::time::SystemTime {
    let epoch = std::time::UNIX_EPOCH;
    epoch
        .checked_add(generalized_time_to_time(time))
        .unwrap_or(epoch)
}
