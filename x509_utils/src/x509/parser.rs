// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Minimal tag-checked DER reader.
//!
//! [`Parser`] walks a borrowed byte slice one TLV at a time on top of
//! `der::SliceReader`, which enforces definite, minimally encoded lengths.
//! Every span it hands out borrows from the original input, so the
//! structural parsers built on it never copy.
//!
//! Identifier octets are read raw: any single-octet tag is accepted, including
//! universal tags `der::Tag` has no variant for. High tag number form
//! (low five bits all set) is rejected.

use der::{Decode, Length, Reader, SliceReader, Tag};

use crate::error::{Error, ParseError, Result};

const HIGH_TAG_NUMBER: u8 = 0x1f;

/// Sequential reader over the TLVs of a DER byte slice.
pub struct Parser<'a> {
    input: &'a [u8],
    reader: SliceReader<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `input`.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Ok(Self {
            input,
            reader: SliceReader::new(input)?,
        })
    }

    /// Returns `true` while unread bytes remain.
    pub fn has_more(&self) -> bool {
        !self.reader.is_finished()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        usize::try_from(self.reader.remaining_len()).unwrap_or(0)
    }

    /// Tag of the next TLV without consuming it.
    pub fn peek_tag(&self) -> Result<Tag> {
        let byte = self
            .reader
            .peek_byte()
            .ok_or(Error::ParseError(ParseError::UnexpectedEof))?;
        Ok(Tag::try_from(byte)?)
    }

    /// Read the next TLV, requiring `tag`, and return its value bytes.
    pub fn read_tag(&mut self, tag: Tag) -> Result<&'a [u8]> {
        let expected = u8::from(tag);
        let (found, value, _) = self.read_tlv()?;
        if found != expected {
            return Err(Error::ParseError(ParseError::InvalidTag { expected, found }));
        }
        Ok(value)
    }

    /// Read the next TLV's value only when its tag is `tag`.
    ///
    /// Returns `Ok(None)` at end of input or when the next tag differs.
    pub fn read_optional_tag(&mut self, tag: Tag) -> Result<Option<&'a [u8]>> {
        match self.reader.peek_byte() {
            Some(byte) if byte == u8::from(tag) => self.read_tag(tag).map(Some),
            _ => Ok(None),
        }
    }

    /// Read the next TLV whatever its tag and return the complete encoding
    /// (tag, length and value).
    pub fn read_raw_tlv(&mut self) -> Result<&'a [u8]> {
        let (_, _, tlv) = self.read_tlv()?;
        Ok(tlv)
    }

    /// Read a SEQUENCE and return a parser over its contents.
    pub fn read_sequence(&mut self) -> Result<Parser<'a>> {
        let contents = self.read_tag(Tag::Sequence)?;
        Parser::new(contents)
    }

    fn read_tlv(&mut self) -> Result<(u8, &'a [u8], &'a [u8])> {
        if !self.has_more() {
            return Err(Error::ParseError(ParseError::UnexpectedEof));
        }
        let start = self.offset()?;
        let tag = self.reader.read_byte()?;
        if tag & HIGH_TAG_NUMBER == HIGH_TAG_NUMBER {
            return Err(der::Error::from(der::ErrorKind::TagNumberInvalid).into());
        }
        let length = Length::decode(&mut self.reader)?;
        let value = self.reader.read_slice(length)?;
        let end = self.offset()?;
        let tlv = self
            .input
            .get(start..end)
            .ok_or(Error::ParseError(ParseError::UnexpectedEof))?;
        Ok((tag, value, tlv))
    }

    fn offset(&self) -> Result<usize> {
        let position: Length = self.reader.position();
        Ok(usize::try_from(position)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tag_returns_value() {
        let input = [0x02, 0x01, 0x05, 0x05, 0x00];
        let mut parser = Parser::new(&input).unwrap();
        assert_eq!(parser.read_tag(Tag::Integer).unwrap(), &[0x05]);
        assert!(parser.has_more());
        assert_eq!(parser.read_tag(Tag::Null).unwrap(), &[] as &[u8]);
        assert!(!parser.has_more());
    }

    #[test]
    fn test_read_tag_wrong_tag() {
        let input = [0x05, 0x00];
        let mut parser = Parser::new(&input).unwrap();
        assert!(matches!(
            parser.read_tag(Tag::Integer),
            Err(Error::ParseError(ParseError::InvalidTag {
                expected: 0x02,
                found: 0x05
            }))
        ));
    }

    #[test]
    fn test_read_raw_tlv_keeps_header() {
        let input = [0x30, 0x03, 0x02, 0x01, 0x01, 0x05, 0x00];
        let mut parser = Parser::new(&input).unwrap();
        assert_eq!(parser.read_raw_tlv().unwrap(), &input[..5]);
        assert_eq!(parser.read_raw_tlv().unwrap(), &input[5..]);
        assert!(parser.read_raw_tlv().is_err());
    }

    #[test]
    fn test_read_sequence_nested() {
        let input = [0x30, 0x03, 0x02, 0x01, 0x07];
        let mut parser = Parser::new(&input).unwrap();
        let mut inner = parser.read_sequence().unwrap();
        assert!(!parser.has_more());
        assert_eq!(inner.read_tag(Tag::Integer).unwrap(), &[0x07]);
        assert!(!inner.has_more());
    }

    #[test]
    fn test_truncated_value_rejected() {
        let input = [0x04, 0x05, 0x01, 0x02];
        let mut parser = Parser::new(&input).unwrap();
        assert!(parser.read_tag(Tag::OctetString).is_err());
    }

    #[test]
    fn test_optional_tag() {
        let input = [0x02, 0x01, 0x01];
        let mut parser = Parser::new(&input).unwrap();
        assert_eq!(parser.read_optional_tag(Tag::Null).unwrap(), None);
        assert_eq!(
            parser.read_optional_tag(Tag::Integer).unwrap(),
            Some(&[0x01][..])
        );
        assert_eq!(parser.read_optional_tag(Tag::Integer).unwrap(), None);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn test_read_raw_tlv_any_low_tag() {
        // 0x0b (EXTERNAL) has no der::Tag variant
        let input = [0x0b, 0x00, 0x1e, 0x02, 0x00, 0x41];
        let mut parser = Parser::new(&input).unwrap();
        assert_eq!(parser.read_raw_tlv().unwrap(), &input[..2]);
        assert_eq!(parser.read_raw_tlv().unwrap(), &input[2..]);
        assert!(!parser.has_more());
    }

    #[test]
    fn test_high_tag_number_rejected() {
        let input = [0x1f, 0x81, 0x00, 0x00];
        let mut parser = Parser::new(&input).unwrap();
        assert!(parser.read_raw_tlv().is_err());
    }

    #[test]
    fn test_optional_tag_skips_unknown_tag() {
        let input = [0x0b, 0x00];
        let mut parser = Parser::new(&input).unwrap();
        assert_eq!(parser.read_optional_tag(Tag::Integer).unwrap(), None);
        assert_eq!(parser.remaining(), 2);
    }

    #[test]
    fn test_empty_input() {
        let parser = Parser::new(&[]).unwrap();
        assert!(!parser.has_more());
        assert!(parser.peek_tag().is_err());
    }
}
