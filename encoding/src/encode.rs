//! Encoding of data elements into a byte stream.

use crate::io::{ByteWriter, WriteError};
use crate::transfer_syntax::TransferSyntax;
use dcmkit_core::header::Length;
use dcmkit_core::{DataElement, Tag, Value, VR};
use dcmkit_dictionary_std::tags;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::convert::TryFrom;
use std::io::Write;

/// Module-level error type:
/// for errors which may occur while encoding data elements.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write header of element {}", tag))]
    WriteHeader { tag: Tag, source: WriteError },
    #[snafu(display("Could not write value of element {}", tag))]
    WriteValue { tag: Tag, source: WriteError },
    #[snafu(display(
        "Value of {} element {} is too long ({} bytes) for its length field",
        vr,
        tag,
        length
    ))]
    ValueTooLong {
        tag: Tag,
        vr: VR,
        length: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Write a data element in the given transfer syntax.
///
/// The writer's byte order is expected to match the transfer syntax.
/// Pixel data under an encapsulated transfer syntax
/// is written with undefined length,
/// followed by its stored fragments and sequence delimiter.
pub fn write_element<W>(
    to: &mut ByteWriter<W>,
    element: &DataElement,
    ts: &TransferSyntax,
) -> Result<()>
where
    W: Write,
{
    let tag = element.tag();
    let vr = element.vr();

    let (bytes, length) = match element.value() {
        Value::Bytes(_, fragments)
            if tag == tags::PIXEL_DATA && ts.is_encapsulated() && !fragments.is_empty() =>
        {
            (fragments.clone(), Length::UNDEFINED.0)
        }
        value => {
            let bytes = value.to_bytes(ts.endianness());
            let length = match u32::try_from(bytes.len()) {
                Ok(len) if len != Length::UNDEFINED.0 => len,
                _ => {
                    return ValueTooLongSnafu {
                        tag,
                        vr,
                        length: bytes.len(),
                    }
                    .fail()
                }
            };
            (bytes, length)
        }
    };

    to.write_tag(tag).context(WriteHeaderSnafu { tag })?;
    if ts.is_explicit_vr() {
        to.write_bytes(&vr.to_bytes())
            .context(WriteHeaderSnafu { tag })?;
        if vr.uses_long_length() {
            to.write_u16(0).context(WriteHeaderSnafu { tag })?;
            to.write_u32(length).context(WriteHeaderSnafu { tag })?;
        } else {
            ensure!(
                bytes.len() <= usize::from(u16::MAX),
                ValueTooLongSnafu {
                    tag,
                    vr,
                    length: bytes.len()
                }
            );
            to.write_u16(length as u16)
                .context(WriteHeaderSnafu { tag })?;
        }
    } else {
        to.write_u32(length).context(WriteHeaderSnafu { tag })?;
    }
    to.write_bytes(&bytes).context(WriteValueSnafu { tag })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ElementParser;
    use crate::io::ByteReader;
    use crate::transfer_syntax::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN, JPEG_BASELINE,
    };
    use dcmkit_core::value::C;

    fn encode(elements: &[DataElement], ts: &TransferSyntax) -> Vec<u8> {
        let mut writer = ByteWriter::new(Vec::new(), ts.endianness());
        for e in elements {
            write_element(&mut writer, e, ts).unwrap();
        }
        writer.into_inner()
    }

    #[test]
    fn write_explicit_vr_le() {
        let text = |vr, s: &str| Value::Strs(vr, C::from_elem(s.to_string(), 1));
        let elements = [
            DataElement::from_value(Tag(0x0008, 0x0060), text(VR::CS, "CT")),
            DataElement::from_value(Tag(0x0008, 0x0018), text(VR::UI, "1.2.3")),
            DataElement::from_value(
                Tag(0x0028, 0x0010),
                Value::Ints(VR::US, C::from_slice(&[512])),
            ),
            DataElement::from_value(Tag(0x0009, 0x1010), Value::Bytes(VR::OB, vec![1, 2, 3])),
        ];
        #[rustfmt::skip]
        let expected: &[u8] = &[
            // (0008,0060) CS, len 2, "CT"
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'C', b'T',
            // (0008,0018) UI, len 6, "1.2.3\0"
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x06, 0x00,
            b'1', b'.', b'2', b'.', b'3', 0x00,
            // (0028,0010) US, len 2, 512
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
            // (0009,1010) OB, reserved, len 4, padded with NUL
            0x09, 0x00, 0x10, 0x10, b'O', b'B', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03, 0x00,
        ];
        assert_eq!(encode(&elements, &EXPLICIT_VR_LITTLE_ENDIAN), expected);
    }

    #[test]
    fn write_implicit_vr_le() {
        let elements = [DataElement::from_value(
            Tag(0x0010, 0x0010),
            Value::Strs(VR::PN, C::from_elem("Doe".into(), 1)),
        )];
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'D', b'o', b'e', b' ',
        ];
        assert_eq!(encode(&elements, &IMPLICIT_VR_LITTLE_ENDIAN), expected);
    }

    #[test]
    fn write_explicit_vr_be() {
        let elements = [DataElement::from_value(
            Tag(0x0028, 0x0010),
            Value::Ints(VR::US, C::from_slice(&[512])),
        )];
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
        ];
        assert_eq!(encode(&elements, &EXPLICIT_VR_BIG_ENDIAN), expected);
    }

    #[test]
    fn short_length_overflow_is_an_error() {
        let long = "A".repeat(70_000);
        let element = DataElement::from_value(
            Tag(0x0010, 0x4000),
            Value::Strs(VR::LT, C::from_elem(long, 1)),
        );
        let mut writer = ByteWriter::le(Vec::new());
        let err = write_element(&mut writer, &element, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(err, Error::ValueTooLong { length: 70_000, .. }));

        // fine with a 32-bit length
        write_element(&mut writer, &element, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
    }

    #[test]
    fn encapsulated_pixel_data_round_trip() {
        #[rustfmt::skip]
        let fragments: Vec<u8> = vec![
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0xFF, 0xD8,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        let element =
            DataElement::from_value(tags::PIXEL_DATA, Value::Bytes(VR::OB, fragments.clone()));
        let raw = encode(std::slice::from_ref(&element), &JPEG_BASELINE);
        assert_eq!(&raw[8..12], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(&raw[12..], &fragments[..]);

        let mut source = ByteReader::le(&raw[..]);
        let back = ElementParser::new()
            .read_element(&mut source, &JPEG_BASELINE)
            .unwrap()
            .unwrap();
        assert_eq!(back, element);
    }
}
