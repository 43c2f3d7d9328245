//! Declaration and implementation of a DICOM element value.
//!
//! A [`Value`] is a tagged union over the four in-memory shapes
//! that an element value may take in this library.
//! Every variant carries its value representation,
//! so that a value always knows how it must be encoded.
//!
//! Sequences and encapsulated pixel data are held as opaque bytes
//! (see [`Value::Bytes`]).

use crate::header::{VrClass, VR};
use byteordered::Endianness;
use itertools::Itertools;
use smallvec::SmallVec;
use snafu::{ensure, Backtrace, Snafu};
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An error which may occur when building a value with a checked constructor.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ValueError {
    /// The value representation is not of the class required by the constructor.
    #[snafu(display("VR {} is not {}", vr, expected))]
    UnexpectedVr {
        vr: VR,
        expected: &'static str,
        backtrace: Backtrace,
    },
    /// A string value exceeds the maximum length allowed by its VR.
    #[snafu(display(
        "value {:?} exceeds maximum length {} for VR {}",
        value,
        max,
        vr
    ))]
    ValueTooLong {
        value: String,
        max: usize,
        vr: VR,
        backtrace: Backtrace,
    },
    /// An integer value does not fit in the range of its VR.
    #[snafu(display("value {} out of range for {}", value, vr))]
    OutOfRange {
        value: i64,
        vr: VR,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = ValueError> = std::result::Result<T, E>;

/// A DICOM element value.
///
/// Values built through the checked constructors
/// ([`strs`](Value::strs), [`ints`](Value::ints),
/// [`floats`](Value::floats), [`bytes`](Value::bytes))
/// are guaranteed to respect the constraints of their VR.
/// Decoders may build the variants directly.
///
/// # Example
///
/// ```
/// # use dcmkit_core::{Value, VR};
/// let value = Value::strs(VR::CS, ["ORIGINAL", "PRIMARY"])?;
/// assert_eq!(value.to_str(), "ORIGINAL\\PRIMARY");
/// assert_eq!(value.multiplicity(), 2);
/// # Ok::<(), dcmkit_core::value::ValueError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// A sequence of strings, for the string-like VRs.
    Strs(VR, C<String>),
    /// A sequence of integers, for SS, US, SL, UL, SV, UV and AT.
    ///
    /// Attribute tags are kept packed in a single integer,
    /// group in the upper 16 bits.
    Ints(VR, C<i64>),
    /// A sequence of floating point numbers, for FL and FD.
    Floats(VR, C<f64>),
    /// Raw bytes, for the binary VRs, unknown content,
    /// sequence placeholders and encapsulated pixel data.
    Bytes(VR, Vec<u8>),
}

impl Value {
    /// Create a checked multi-valued string value.
    ///
    /// Fails if `vr` is not string-like
    /// or any of the values is longer than the VR allows.
    pub fn strs<I, T>(vr: VR, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        ensure!(
            vr.is_string(),
            UnexpectedVrSnafu {
                vr,
                expected: "a string type"
            }
        );
        let values: C<String> = values.into_iter().map(Into::into).collect();
        if let Some(max) = vr.max_length() {
            if let Some(value) = values.iter().find(|v| v.len() > max) {
                return ValueTooLongSnafu {
                    value: value.clone(),
                    max,
                    vr,
                }
                .fail();
            }
        }
        Ok(Value::Strs(vr, values))
    }

    /// Create a checked single string value.
    pub fn str(vr: VR, value: impl Into<String>) -> Result<Self> {
        Value::strs(vr, std::iter::once(value.into()))
    }

    /// Create a checked integer value.
    ///
    /// Fails if `vr` is not an integer type
    /// or any of the values does not fit in its range.
    pub fn ints<I>(vr: VR, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        ensure!(
            vr.is_integer(),
            UnexpectedVrSnafu {
                vr,
                expected: "an integer type"
            }
        );
        let values: C<i64> = values.into_iter().collect();
        for &value in &values {
            ensure!(int_in_range(vr, value), OutOfRangeSnafu { value, vr });
        }
        Ok(Value::Ints(vr, values))
    }

    /// Create a checked floating point value.
    pub fn floats<I>(vr: VR, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        ensure!(
            vr.is_float(),
            UnexpectedVrSnafu {
                vr,
                expected: "a floating-point type"
            }
        );
        Ok(Value::Floats(vr, values.into_iter().collect()))
    }

    /// Create a checked byte value.
    ///
    /// Accepted for the binary VRs, UN, and SQ (as an opaque placeholder).
    pub fn bytes(vr: VR, data: impl Into<Vec<u8>>) -> Result<Self> {
        ensure!(
            matches!(
                vr.class(),
                VrClass::Binary | VrClass::Unknown | VrClass::Sequence
            ),
            UnexpectedVrSnafu {
                vr,
                expected: "a binary type"
            }
        );
        Ok(Value::Bytes(vr, data.into()))
    }

    /// Create the empty value of the class of the given VR.
    pub fn empty(vr: VR) -> Self {
        match vr.class() {
            VrClass::String => Value::Strs(vr, C::new()),
            VrClass::Integer => Value::Ints(vr, C::new()),
            VrClass::Float => Value::Floats(vr, C::new()),
            VrClass::Binary | VrClass::Sequence | VrClass::Unknown => Value::Bytes(vr, Vec::new()),
        }
    }

    /// The value representation of this value.
    pub fn vr(&self) -> VR {
        match self {
            Value::Strs(vr, _) | Value::Ints(vr, _) | Value::Floats(vr, _) | Value::Bytes(vr, _) => {
                *vr
            }
        }
    }

    /// The string values, if this is a string value.
    pub fn strings(&self) -> Option<&[String]> {
        match self {
            Value::Strs(_, v) => Some(v),
            _ => None,
        }
    }

    /// The integer values, if this is an integer value.
    pub fn ints_slice(&self) -> Option<&[i64]> {
        match self {
            Value::Ints(_, v) => Some(v),
            _ => None,
        }
    }

    /// The floating point values, if this is a float value.
    pub fn floats_slice(&self) -> Option<&[f64]> {
        match self {
            Value::Floats(_, v) => Some(v),
            _ => None,
        }
    }

    /// The raw bytes, if this is a byte value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(_, v) => Some(v),
            _ => None,
        }
    }

    /// The first string of a string value.
    pub fn first_str(&self) -> Option<&str> {
        self.strings().and_then(|v| v.first()).map(String::as_str)
    }

    /// The number of individual values.
    /// A byte value counts as a single value unless it is empty.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Strs(_, v) => v.len() as u32,
            Value::Ints(_, v) => v.len() as u32,
            Value::Floats(_, v) => v.len() as u32,
            Value::Bytes(_, v) => u32::from(!v.is_empty()),
        }
    }

    /// Whether this value holds no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Strs(_, v) => v.is_empty(),
            Value::Ints(_, v) => v.is_empty(),
            Value::Floats(_, v) => v.is_empty(),
            Value::Bytes(_, v) => v.is_empty(),
        }
    }

    /// Retrieve a textual representation of the value.
    ///
    /// Multiple values are joined with a backslash (`'\\'`).
    /// Byte values are printed in hexadecimal.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            Value::Strs(_, values) if values.len() == 1 => Cow::from(values[0].as_str()),
            Value::Strs(_, values) => Cow::from(values.iter().join("\\")),
            other => Cow::from(other.to_string()),
        }
    }

    /// Encode this value as it would be laid out on the wire,
    /// under the given byte order.
    ///
    /// Strings are joined with a backslash and padded to an even length
    /// with the VR's padding byte.
    /// Byte values are padded to an even length with NUL.
    /// Attribute tags are written as the group followed by the element.
    pub fn to_bytes(&self, endianness: Endianness) -> Vec<u8> {
        match self {
            Value::Strs(vr, values) => {
                let mut out = values.iter().join("\\").into_bytes();
                if out.len() % 2 == 1 {
                    out.push(vr.padding());
                }
                out
            }
            Value::Ints(vr, values) => {
                let size = vr.element_size().unwrap_or(4) as usize;
                let mut out = Vec::with_capacity(values.len() * size);
                for &v in values {
                    match vr {
                        VR::SS | VR::US => out.extend(u16_bytes(v as u16, endianness)),
                        VR::AT => {
                            out.extend(u16_bytes((v >> 16) as u16, endianness));
                            out.extend(u16_bytes(v as u16, endianness));
                        }
                        VR::SV | VR::UV => out.extend(u64_bytes(v as u64, endianness)),
                        _ => out.extend(u32_bytes(v as u32, endianness)),
                    }
                }
                out
            }
            Value::Floats(vr, values) => {
                let mut out = Vec::new();
                for &v in values {
                    if *vr == VR::FL {
                        out.extend(u32_bytes((v as f32).to_bits(), endianness));
                    } else {
                        out.extend(u64_bytes(v.to_bits(), endianness));
                    }
                }
                out
            }
            Value::Bytes(_, data) => {
                let mut out = data.clone();
                if out.len() % 2 == 1 {
                    out.push(0);
                }
                out
            }
        }
    }
}

fn int_in_range(vr: VR, value: i64) -> bool {
    match vr {
        VR::SS => i16::try_from(value).is_ok(),
        VR::US => u16::try_from(value).is_ok(),
        VR::SL => i32::try_from(value).is_ok(),
        VR::UL | VR::AT => u32::try_from(value).is_ok(),
        VR::UV => value >= 0,
        _ => true,
    }
}

fn u16_bytes(v: u16, endianness: Endianness) -> [u8; 2] {
    match endianness {
        Endianness::Little => v.to_le_bytes(),
        Endianness::Big => v.to_be_bytes(),
    }
}

fn u32_bytes(v: u32, endianness: Endianness) -> [u8; 4] {
    match endianness {
        Endianness::Little => v.to_le_bytes(),
        Endianness::Big => v.to_be_bytes(),
    }
}

fn u64_bytes(v: u64, endianness: Endianness) -> [u8; 8] {
    match endianness {
        Endianness::Little => v.to_le_bytes(),
        Endianness::Big => v.to_be_bytes(),
    }
}

/// Format a float in the shortest form that reads back the same value,
/// switching to exponent notation for very large or very small magnitudes.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0. { "+Inf" } else { "-Inf" }.to_string();
    }
    let abs = v.abs();
    if abs != 0. && !(1e-4..1e21).contains(&abs) {
        // Rust prints `1e21`, we want `1e+21` and a two digit exponent
        let s = format!("{:e}", v);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => s,
        }
    } else {
        v.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Strs(_, values) => f.write_str(&values.iter().join("\\")),
            Value::Ints(_, values) => f.write_str(&values.iter().join("\\")),
            Value::Floats(_, values) => {
                f.write_str(&values.iter().map(|v| format_float(*v)).join("\\"))
            }
            Value::Bytes(_, data) => {
                const MAX_DISPLAY_BYTES: usize = 16;
                if data.is_empty() {
                    return f.write_str("[]");
                }
                let shown = data
                    .iter()
                    .take(MAX_DISPLAY_BYTES)
                    .map(|b| format!("{:02X}", b))
                    .join(" ");
                if data.len() > MAX_DISPLAY_BYTES {
                    write!(f, "[{} ... ({} bytes)]", shown, data.len())
                } else {
                    write!(f, "[{}]", shown)
                }
            }
        }
    }
}

/// Values are equal when they have the same shape, the same VR
/// and the same items. NaN is considered equal to NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Strs(vr1, a), Value::Strs(vr2, b)) => vr1 == vr2 && a == b,
            (Value::Ints(vr1, a), Value::Ints(vr2, b)) => vr1 == vr2 && a == b,
            (Value::Floats(vr1, a), Value::Floats(vr2, b)) => {
                vr1 == vr2
                    && a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
            }
            (Value::Bytes(vr1, a), Value::Bytes(vr2, b)) => vr1 == vr2 && a == b,
            _ => false,
        }
    }
}
