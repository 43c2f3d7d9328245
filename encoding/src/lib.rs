#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM encoding and decoding primitives.
//!
//! This crate provides the byte level machinery
//! for reading and writing data elements in accordance to the DICOM standard:
//!
//! - [`io`] holds byte readers and writers with a run-time byte order;
//! - [`transfer_syntax`] describes the known [transfer syntaxes](TransferSyntax);
//! - [`decode`] reads data elements one at a time;
//! - [`encode`] writes data elements.
//!
//! For the time being, all APIs are based on synchronous I/O.

pub mod decode;
pub mod encode;
pub mod io;
pub mod transfer_syntax;

pub use decode::ElementParser;
pub use encode::write_element;
pub use io::{ByteReader, ByteWriter};
pub use transfer_syntax::TransferSyntax;
