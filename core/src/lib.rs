#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmkit containing the basic concepts
//! and data structures for DICOM content.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations and lengths.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//! - [`value`] holds the in-memory representation of element values.
//! - [`element`] pairs a tag with its value.
//! - [`uid`] validates and generates unique identifiers.

pub mod dictionary;
pub mod element;
pub mod header;
pub mod uid;
pub mod value;

pub use dictionary::DataDictionary;
pub use element::DataElement;
pub use header::{Length, Tag, VrClass, VR};
pub use value::Value;

// re-export crates that are part of the public API
pub use byteordered::Endianness;
pub use smallvec;
