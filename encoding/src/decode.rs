//! Decoding of data elements from a byte stream.
//!
//! The [`ElementParser`] reads one data element per call,
//! dispatching on the transfer syntax for the header layout
//! and on the value representation for the value.
//! Sequences are skipped over and yield an empty placeholder,
//! while encapsulated pixel data is retained verbatim.

use crate::io::{ByteReader, ReadError};
use crate::transfer_syntax::TransferSyntax;
use dcmkit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmkit_core::header::{Length, VrClass};
use dcmkit_core::value::C;
use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::tags;
use dcmkit_dictionary_std::StandardDataDictionary;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::io::Read;
use tracing::warn;

/// Item (FFFE,E000)
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// Item Delimitation Item (FFFE,E00D)
pub const ITEM_DELIMITATION: Tag = Tag(0xFFFE, 0xE00D);
/// Sequence Delimitation Item (FFFE,E0DD)
pub const SEQUENCE_DELIMITATION: Tag = Tag(0xFFFE, 0xE0DD);

/// Module-level error type:
/// for errors which may occur while decoding data elements.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read element tag at position {}", position))]
    ReadTag { position: u64, source: ReadError },
    #[snafu(display("Could not read header of element {} at position {}", tag, position))]
    ReadHeader {
        tag: Tag,
        position: u64,
        source: ReadError,
    },
    #[snafu(display(
        "Invalid value representation {:?} in element {} at position {}",
        String::from_utf8_lossy(code),
        tag,
        position
    ))]
    InvalidVr {
        tag: Tag,
        code: [u8; 2],
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Invalid length {} for {} element {} at position {}",
        length,
        vr,
        tag,
        position
    ))]
    InvalidLength {
        tag: Tag,
        vr: VR,
        length: Length,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read value of element {} at position {}", tag, position))]
    ReadValue {
        tag: Tag,
        position: u64,
        source: ReadError,
    },
    #[snafu(display("Could not read item of sequence {} at position {}", tag, position))]
    ReadItem {
        tag: Tag,
        position: u64,
        source: ReadError,
    },
    #[snafu(display(
        "Unexpected {} in sequence {} at position {}",
        found,
        tag,
        position
    ))]
    BadSequenceItem {
        tag: Tag,
        found: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected item marker {} at position {}", tag, position))]
    UnexpectedItem {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether the stream ended in the middle of an element.
    pub fn is_unexpected_eof(&self) -> bool {
        match self {
            Error::ReadTag { source, .. }
            | Error::ReadHeader { source, .. }
            | Error::ReadValue { source, .. }
            | Error::ReadItem { source, .. } => {
                source.is_unexpected_eof() || source.is_end_of_stream()
            }
            _ => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A parser of data elements.
///
/// The attribute dictionary is used to resolve
/// value representations in implicit VR transfer syntaxes.
pub struct ElementParser<D = StandardDataDictionary> {
    dict: D,
}

impl<D> fmt::Debug for ElementParser<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementParser")
            .field("dict", &"«omitted»")
            .finish()
    }
}

impl ElementParser<StandardDataDictionary> {
    /// Create an element parser using the standard data dictionary.
    pub fn new() -> Self {
        ElementParser {
            dict: StandardDataDictionary,
        }
    }
}

impl Default for ElementParser<StandardDataDictionary> {
    fn default() -> Self {
        ElementParser::new()
    }
}

impl<D> ElementParser<D>
where
    D: DataDictionary,
{
    /// Create an element parser using a custom data dictionary.
    pub fn with_dict(dict: D) -> Self {
        ElementParser { dict }
    }

    /// Read the next data element from the source.
    ///
    /// Returns `Ok(None)` if the stream ended cleanly
    /// right before the element.
    pub fn read_element<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
    ) -> Result<Option<DataElement>>
    where
        R: Read,
    {
        let position = source.position();
        let tag = match source.read_tag() {
            Ok(tag) => tag,
            Err(e) if e.is_end_of_stream() => return Ok(None),
            Err(e) => return Err(e).context(ReadTagSnafu { position }),
        };
        ensure!(tag.group() != 0xFFFE, UnexpectedItemSnafu { tag, position });
        self.read_element_after_tag(source, ts, tag, position)
            .map(Some)
    }

    fn read_element_after_tag<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
        tag: Tag,
        position: u64,
    ) -> Result<DataElement>
    where
        R: Read,
    {
        let (vr, length) = self.read_header(source, ts, tag, position)?;
        let value = self.read_value(source, ts, tag, vr, length)?;
        Ok(DataElement::from_value(tag, value))
    }

    /// Read the rest of an element header, after the tag.
    fn read_header<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
        tag: Tag,
        position: u64,
    ) -> Result<(VR, Length)>
    where
        R: Read,
    {
        if ts.is_explicit_vr() {
            let bytes = source
                .read_bytes(2)
                .context(ReadHeaderSnafu { tag, position })?;
            let code = [bytes[0], bytes[1]];
            let vr = match VR::from_binary(code) {
                Some(vr) => vr,
                None => return InvalidVrSnafu { tag, code, position }.fail(),
            };
            let length = if vr.uses_long_length() {
                let reserved = source
                    .read_u16()
                    .context(ReadHeaderSnafu { tag, position })?;
                if reserved != 0 {
                    warn!(
                        "Non-zero reserved bytes {:#06X} in element {} at position {}",
                        reserved, tag, position
                    );
                }
                source
                    .read_u32()
                    .context(ReadHeaderSnafu { tag, position })?
            } else {
                u32::from(
                    source
                        .read_u16()
                        .context(ReadHeaderSnafu { tag, position })?,
                )
            };
            Ok((vr, Length(length)))
        } else {
            let length = source
                .read_u32()
                .context(ReadHeaderSnafu { tag, position })?;
            Ok((self.implicit_vr(tag), Length(length)))
        }
    }

    /// Resolve the value representation of an element in implicit VR.
    fn implicit_vr(&self, tag: Tag) -> VR {
        // Pixel Data and Overlay Data are OW in implicit VR
        if tag == tags::PIXEL_DATA || (tag.group() >> 8 == 0x60 && tag.element() == 0x3000) {
            return VR::OW;
        }
        self.dict
            .by_tag(tag)
            .map(|entry| entry.vr().relaxed())
            .unwrap_or(VR::UN)
    }

    fn read_value<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
        tag: Tag,
        vr: VR,
        length: Length,
    ) -> Result<Value>
    where
        R: Read,
    {
        let position = source.position();
        let len = match length.get() {
            Some(0) => return Ok(Value::empty(vr)),
            Some(len) => len,
            None if vr == VR::SQ => {
                self.skip_sequence(source, ts, tag)?;
                return Ok(Value::Bytes(VR::SQ, Vec::new()));
            }
            None if tag == tags::PIXEL_DATA && (vr == VR::OB || vr == VR::OW) => {
                let fragments = read_encapsulated(source, tag)?;
                return Ok(Value::Bytes(vr, fragments));
            }
            None => {
                return InvalidLengthSnafu {
                    tag,
                    vr,
                    length,
                    position,
                }
                .fail()
            }
        };

        match vr.class() {
            VrClass::String => {
                let text = source
                    .read_string(len as usize)
                    .context(ReadValueSnafu { tag, position })?;
                Ok(Value::Strs(vr, split_strings(&text)))
            }
            VrClass::Integer => {
                let size = vr.element_size().unwrap_or(4);
                ensure!(
                    len % size == 0,
                    InvalidLengthSnafu {
                        tag,
                        vr,
                        length,
                        position
                    }
                );
                let mut values = C::with_capacity((len / size) as usize);
                for _ in 0..len / size {
                    let v = read_int(source, vr).context(ReadValueSnafu { tag, position })?;
                    values.push(v);
                }
                Ok(Value::Ints(vr, values))
            }
            VrClass::Float => {
                let size = vr.element_size().unwrap_or(8);
                ensure!(
                    len % size == 0,
                    InvalidLengthSnafu {
                        tag,
                        vr,
                        length,
                        position
                    }
                );
                let mut values = C::with_capacity((len / size) as usize);
                for _ in 0..len / size {
                    let v = if vr == VR::FL {
                        f64::from(f32::from_bits(
                            source
                                .read_u32()
                                .context(ReadValueSnafu { tag, position })?,
                        ))
                    } else {
                        f64::from_bits(
                            source
                                .read_u64()
                                .context(ReadValueSnafu { tag, position })?,
                        )
                    };
                    values.push(v);
                }
                Ok(Value::Floats(vr, values))
            }
            VrClass::Binary | VrClass::Unknown => {
                let data = source
                    .read_bytes(len as usize)
                    .context(ReadValueSnafu { tag, position })?;
                Ok(Value::Bytes(vr, data))
            }
            VrClass::Sequence => {
                source
                    .skip(u64::from(len))
                    .context(ReadValueSnafu { tag, position })?;
                Ok(Value::Bytes(VR::SQ, Vec::new()))
            }
        }
    }

    /// Consume the items of a sequence of undefined length,
    /// up to and including the sequence delimitation item.
    fn skip_sequence<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
        tag: Tag,
    ) -> Result<()>
    where
        R: Read,
    {
        loop {
            let position = source.position();
            let item_tag = source.read_tag().context(ReadItemSnafu { tag, position })?;
            let item_len = source.read_u32().context(ReadItemSnafu { tag, position })?;
            match item_tag {
                ITEM if item_len == Length::UNDEFINED.0 => self.skip_item(source, ts, tag)?,
                ITEM => source
                    .skip(u64::from(item_len))
                    .context(ReadItemSnafu { tag, position })?,
                SEQUENCE_DELIMITATION => return Ok(()),
                found => {
                    return BadSequenceItemSnafu {
                        tag,
                        found,
                        position,
                    }
                    .fail()
                }
            }
        }
    }

    /// Consume the elements of an item of undefined length,
    /// up to and including the item delimitation item.
    fn skip_item<R>(
        &self,
        source: &mut ByteReader<R>,
        ts: &TransferSyntax,
        tag: Tag,
    ) -> Result<()>
    where
        R: Read,
    {
        loop {
            let position = source.position();
            let inner = source.read_tag().context(ReadItemSnafu { tag, position })?;
            if inner == ITEM_DELIMITATION {
                source.read_u32().context(ReadItemSnafu { tag, position })?;
                return Ok(());
            }
            ensure!(
                inner.group() != 0xFFFE,
                BadSequenceItemSnafu {
                    tag,
                    found: inner,
                    position
                }
            );
            // nested sequences are handled by the element reader
            self.read_element_after_tag(source, ts, inner, position)?;
        }
    }
}

/// Capture the fragments of encapsulated pixel data,
/// including the sequence delimitation item,
/// as little endian bytes.
fn read_encapsulated<R>(source: &mut ByteReader<R>, tag: Tag) -> Result<Vec<u8>>
where
    R: Read,
{
    let mut out = Vec::new();
    loop {
        let position = source.position();
        let item_tag = source.read_tag().context(ReadItemSnafu { tag, position })?;
        let item_len = source.read_u32().context(ReadItemSnafu { tag, position })?;
        out.extend_from_slice(&item_tag.group().to_le_bytes());
        out.extend_from_slice(&item_tag.element().to_le_bytes());
        out.extend_from_slice(&item_len.to_le_bytes());
        match item_tag {
            ITEM => {
                ensure!(
                    item_len != Length::UNDEFINED.0,
                    InvalidLengthSnafu {
                        tag,
                        vr: VR::OB,
                        length: Length::UNDEFINED,
                        position
                    }
                );
                let fragment = source
                    .read_bytes(item_len as usize)
                    .context(ReadItemSnafu { tag, position })?;
                out.extend(fragment);
            }
            SEQUENCE_DELIMITATION => return Ok(out),
            found => {
                return BadSequenceItemSnafu {
                    tag,
                    found,
                    position,
                }
                .fail()
            }
        }
    }
}

fn read_int<R>(source: &mut ByteReader<R>, vr: VR) -> Result<i64, ReadError>
where
    R: Read,
{
    Ok(match vr {
        VR::SS => i64::from(source.read_u16()? as i16),
        VR::US => i64::from(source.read_u16()?),
        VR::SL => i64::from(source.read_u32()? as i32),
        VR::AT => {
            let group = source.read_u16()?;
            let element = source.read_u16()?;
            i64::from((u32::from(group) << 16) | u32::from(element))
        }
        VR::SV | VR::UV => source.read_u64()? as i64,
        _ => i64::from(source.read_u32()?),
    })
}

/// Trim the trailing padding of a textual value
/// and split it into its backslash separated components.
fn split_strings(text: &str) -> C<String> {
    let trimmed = text.trim_end_matches(|c: char| c == '\0' || c == ' ');
    if trimmed.is_empty() {
        return C::new();
    }
    trimmed.split('\\').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN, JPEG_BASELINE,
    };
    use byteordered::Endianness;

    fn read_all(raw: &[u8], ts: &TransferSyntax) -> Result<Vec<DataElement>> {
        let parser = ElementParser::new();
        let mut source = ByteReader::new(raw, ts.endianness());
        let mut out = Vec::new();
        while let Some(elem) = parser.read_element(&mut source, ts)? {
            out.push(elem);
        }
        Ok(out)
    }

    #[rustfmt::skip]
    const RAW_EXPLICIT_LE: &[u8] = &[
        // (0008,0060) CS, len 2, "CT"
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
        // (0010,0010) PN, len 8, "Doe^John"
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
        b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        // (0020,0013) IS, len 2, "7 " (padded)
        0x20, 0x00, 0x13, 0x00, b'I', b'S', 0x02, 0x00, b'7', b' ',
        // (0028,0010) US, len 4, [512, 256]
        0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x04, 0x00, 0x00, 0x02, 0x00, 0x01,
        // (0028,0030) DS, len 0
        0x28, 0x00, 0x30, 0x00, b'D', b'S', 0x00, 0x00,
        // (7FE0,0010) OB, reserved, len 4
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn read_explicit_vr_le_elements() {
        let elements = read_all(RAW_EXPLICIT_LE, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(elements.len(), 6);

        assert_eq!(elements[0].tag(), Tag(0x0008, 0x0060));
        assert_eq!(elements[0].vr(), VR::CS);
        assert_eq!(elements[0].value().strings(), Some(&["CT".to_string()][..]));

        assert_eq!(elements[1].value().first_str(), Some("Doe^John"));
        assert_eq!(elements[2].value().first_str(), Some("7"));
        assert_eq!(elements[3].value().ints_slice(), Some(&[512, 256][..]));

        assert_eq!(elements[4].vr(), VR::DS);
        assert!(elements[4].value().is_empty());

        assert_eq!(elements[5].vr(), VR::OB);
        assert_eq!(elements[5].value().as_bytes(), Some(&[1, 2, 3, 4][..]));
    }

    #[rustfmt::skip]
    const RAW_IMPLICIT_LE: &[u8] = &[
        // (0008,0018) len 6, "1.2.3\0"
        0x08, 0x00, 0x18, 0x00, 0x06, 0x00, 0x00, 0x00,
        b'1', b'.', b'2', b'.', b'3', 0x00,
        // (0009,1001) private, len 2
        0x09, 0x00, 0x01, 0x10, 0x02, 0x00, 0x00, 0x00, 0xAB, 0xCD,
        // (0018,0088) DS, len 4, "1.5\\2" would be odd so "1\\2 "
        0x18, 0x00, 0x88, 0x00, 0x04, 0x00, 0x00, 0x00, b'1', b'\\', b'2', b' ',
    ];

    #[test]
    fn read_implicit_vr_le_uses_dictionary() {
        let elements = read_all(RAW_IMPLICIT_LE, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].vr(), VR::UI);
        assert_eq!(elements[0].value().first_str(), Some("1.2.3"));
        // unknown private attribute
        assert_eq!(elements[1].vr(), VR::UN);
        assert_eq!(elements[1].value().as_bytes(), Some(&[0xAB, 0xCD][..]));
        assert_eq!(elements[2].vr(), VR::DS);
        assert_eq!(
            elements[2].value().strings(),
            Some(&["1".to_string(), "2".to_string()][..])
        );
    }

    #[rustfmt::skip]
    const RAW_EXPLICIT_BE: &[u8] = &[
        // (0028,0010) US, len 2, 512
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
        // (0018,0050) FD, len 8, 2.5
        0x00, 0x18, 0x00, 0x50, b'F', b'D', 0x00, 0x08,
        0x40, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        // (0020,5000) AT, len 4, (0010,0020)
        0x00, 0x20, 0x50, 0x00, b'A', b'T', 0x00, 0x04, 0x00, 0x10, 0x00, 0x20,
        // (0018,1310) SS, len 2, -1
        0x00, 0x18, 0x13, 0x10, b'S', b'S', 0x00, 0x02, 0xFF, 0xFF,
    ];

    #[test]
    fn read_explicit_vr_be_numbers() {
        let elements = read_all(RAW_EXPLICIT_BE, &EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0].value().ints_slice(), Some(&[512][..]));
        assert_eq!(elements[1].value().floats_slice(), Some(&[2.5][..]));
        assert_eq!(elements[2].value().ints_slice(), Some(&[0x0010_0020][..]));
        assert_eq!(elements[3].value().ints_slice(), Some(&[-1][..]));
    }

    #[rustfmt::skip]
    const RAW_SEQUENCE: &[u8] = &[
        // (0008,1140) SQ, reserved, undefined length
        0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // item, defined length 10
        0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00,
            // (0008,0060) CS, len 2, "MR"
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
        // item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // nested (0040,A730) SQ, undefined length, no items
            0x40, 0x00, 0x30, 0xA7, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // (0008,0060) CS, len 2, "CT"
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
        // item delimitation
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // sequence delimitation
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // (0020,0011) IS, len 2, "4 "
        0x20, 0x00, 0x11, 0x00, b'I', b'S', 0x02, 0x00, b'4', b' ',
        // (0040,0260) SQ, defined length 8: one empty item
        0x40, 0x00, 0x60, 0x02, b'S', b'Q', 0x00, 0x00, 0x08, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn sequences_are_skipped() {
        let elements = read_all(RAW_SEQUENCE, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].tag(), Tag(0x0008, 0x1140));
        assert_eq!(elements[0].value(), &Value::Bytes(VR::SQ, vec![]));
        assert_eq!(elements[1].value().first_str(), Some("4"));
        assert_eq!(elements[2].tag(), Tag(0x0040, 0x0260));
        assert_eq!(elements[2].value(), &Value::Bytes(VR::SQ, vec![]));
    }

    #[rustfmt::skip]
    const RAW_ENCAPSULATED: &[u8] = &[
        // (7FE0,0010) OB, undefined length
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // basic offset table, empty
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // fragment of 4 bytes
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 0xFF, 0xD8, 0xFF, 0xD9,
        // sequence delimitation
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn encapsulated_pixel_data_is_kept_verbatim() {
        let elements = read_all(RAW_ENCAPSULATED, &JPEG_BASELINE).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag(), tags::PIXEL_DATA);
        assert_eq!(elements[0].vr(), VR::OB);
        assert_eq!(elements[0].value().as_bytes(), Some(&RAW_ENCAPSULATED[12..]));
    }

    #[test]
    fn undefined_length_on_other_vr_is_invalid() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            // (0010,0010) UT, undefined length
            0x10, 0x00, 0x10, 0x00, b'U', b'T', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let err = read_all(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength { tag: Tag(0x0010, 0x0010), vr: VR::UT, .. }
        ));
    }

    #[test]
    fn bad_integer_length_is_invalid() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            // (0028,0010) US, len 3
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x03, 0x00, 0x00, 0x02, 0x00,
        ];
        let err = read_all(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { vr: VR::US, .. }));
    }

    #[test]
    fn invalid_vr_is_rejected() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'Z', b'Z', 0x00, 0x00,
        ];
        let err = read_all(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        match err {
            Error::InvalidVr { tag, code, position, .. } => {
                assert_eq!(tag, Tag(0x0010, 0x0010));
                assert_eq!(&code, b"ZZ");
                assert_eq!(position, 0);
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn truncated_value_is_unexpected_eof() {
        let truncated = &RAW_EXPLICIT_LE[..RAW_EXPLICIT_LE.len() - 2];
        let err = read_all(truncated, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(err.is_unexpected_eof());
        assert!(matches!(err, Error::ReadValue { tag: Tag(0x7FE0, 0x0010), .. }));

        // stream ending inside a tag
        let err = read_all(&RAW_EXPLICIT_LE[..12], &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, Error::ReadTag { position: 10, .. }));
    }

    #[test]
    fn stray_item_marker_is_rejected() {
        let raw: &[u8] = &[0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00];
        let err = read_all(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, Error::UnexpectedItem { .. }));
    }

    #[test]
    fn non_zero_reserved_bytes_are_tolerated() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, b'O', b'B', 0x12, 0x34, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
        ];
        let elements = read_all(raw, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(elements[0].value().as_bytes(), Some(&[1, 2][..]));
    }

    #[test]
    fn reader_endianness_follows_caller() {
        let mut source = ByteReader::new(RAW_EXPLICIT_BE, Endianness::Big);
        let elem = ElementParser::new()
            .read_element(&mut source, &EXPLICIT_VR_BIG_ENDIAN)
            .unwrap()
            .unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(source.position(), 10);
    }
}
