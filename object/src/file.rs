//! Reading DICOM files.
//!
//! A DICOM file starts with a 128-byte preamble and the magic code `DICM`,
//! followed by the file meta group in explicit VR little endian
//! and then the data set in the transfer syntax declared in the meta group.

use crate::DataSet;
use dcmkit_core::header::META_GROUP;
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::decode::{self, ElementParser};
use dcmkit_encoding::io::{ByteReader, ReadError as ByteReadError};
use dcmkit_encoding::transfer_syntax::{self, TransferSyntax, EXPLICIT_VR_LITTLE_ENDIAN};
use flate2::read::DeflateDecoder;
use snafu::{Backtrace, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// The size of the file preamble in bytes.
pub const PREAMBLE_LENGTH: usize = 128;

/// The magic code following the preamble.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// An error which may occur when reading a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read the preamble bytes
    ReadPreambleBytes { source: ByteReadError },
    #[snafu(display("Invalid preamble: missing DICM magic code"))]
    InvalidPreamble { backtrace: Backtrace },
    #[snafu(display("Could not read file meta group"))]
    ReadMetaGroup { source: ByteReadError },
    #[snafu(display("Could not parse file meta group element"))]
    ParseMetaElement {
        #[snafu(backtrace)]
        source: decode::Error,
    },
    #[snafu(display("Missing transfer syntax UID in file meta group"))]
    MissingTransferSyntax { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    InvalidTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not parse data set element"))]
    ParseElement {
        #[snafu(backtrace)]
        source: decode::Error,
    },
}

impl ReadError {
    /// Whether the file ended in the middle of an element.
    pub fn is_unexpected_eof(&self) -> bool {
        match self {
            ReadError::ParseMetaElement { source } | ReadError::ParseElement { source } => {
                source.is_unexpected_eof()
            }
            _ => false,
        }
    }
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// Read a DICOM file from the file system.
pub fn open_file<P>(path: P) -> Result<DataSet>
where
    P: AsRef<Path>,
{
    ReadOptions::new().open_file(path)
}

/// Read a DICOM file from a byte source,
/// starting at the preamble.
pub fn read_from<R>(source: R) -> Result<DataSet>
where
    R: Read,
{
    ReadOptions::new().read_from(source)
}

/// A builder type for reading a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmkit_object::ReadOptions;
/// use dcmkit_encoding::transfer_syntax::IMPLICIT_VR_LITTLE_ENDIAN;
///
/// let ds = ReadOptions::new()
///     .default_transfer_syntax(&IMPLICIT_VR_LITTLE_ENDIAN)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct ReadOptions {
    default_transfer_syntax: Option<&'static TransferSyntax>,
}

impl ReadOptions {
    pub fn new() -> Self {
        ReadOptions::default()
    }

    /// Set the transfer syntax to assume
    /// when the file meta group does not declare one.
    ///
    /// By default, a missing transfer syntax is an error.
    pub fn default_transfer_syntax(mut self, ts: &'static TransferSyntax) -> Self {
        self.default_transfer_syntax = Some(ts);
        self
    }

    /// Read a DICOM file from the file system.
    pub fn open_file<P>(&self, path: P) -> Result<DataSet>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        self.read_from(BufReader::new(file))
    }

    /// Read a DICOM file from a byte source,
    /// starting at the preamble.
    ///
    /// The returned data set includes the file meta group elements.
    pub fn read_from<R>(&self, source: R) -> Result<DataSet>
    where
        R: Read,
    {
        let mut reader = ByteReader::le(source);
        read_preamble(&mut reader)?;

        let parser = ElementParser::new();
        let meta = read_meta_group(&mut reader, &parser)?;

        let ts = match meta.string(tags::TRANSFER_SYNTAX_UID) {
            Some(uid) => transfer_syntax::lookup(uid)
                .ok_or_else(|| InvalidTransferSyntaxSnafu { uid }.build())?,
            None => match self.default_transfer_syntax {
                Some(ts) => ts,
                None => return MissingTransferSyntaxSnafu.fail(),
            },
        };
        debug!("Using transfer syntax {} ({})", ts.name(), ts.uid());

        reader.set_endianness(ts.endianness());
        if ts.is_deflated() {
            read_body(reader.wrap(DeflateDecoder::new), &parser, ts, meta)
        } else {
            read_body(reader, &parser, ts, meta)
        }
    }
}

fn read_preamble<R>(reader: &mut ByteReader<R>) -> Result<()>
where
    R: Read,
{
    let bytes = match reader.read_bytes(PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()) {
        Ok(bytes) => bytes,
        Err(e) if e.is_end_of_stream() || e.is_unexpected_eof() => {
            return InvalidPreambleSnafu.fail()
        }
        Err(e) => return Err(e).context(ReadPreambleBytesSnafu),
    };
    if bytes[PREAMBLE_LENGTH..] != DICM_MAGIC_CODE {
        return InvalidPreambleSnafu.fail();
    }
    Ok(())
}

/// Read the file meta group.
///
/// If the group starts with _File Meta Information Group Length_,
/// exactly that many bytes are read.
/// Otherwise elements are read for as long as they belong to group 0002.
fn read_meta_group<R>(reader: &mut ByteReader<R>, parser: &ElementParser) -> Result<DataSet>
where
    R: Read,
{
    let ts = &EXPLICIT_VR_LITTLE_ENDIAN;
    let mut meta = DataSet::new();
    let mut group_end: Option<u64> = None;

    loop {
        match group_end {
            Some(end) if reader.position() >= end => break,
            Some(_) => {}
            None => match reader.peek_u16() {
                Ok(META_GROUP) => {}
                Ok(_) => break,
                Err(e) if e.is_end_of_stream() => break,
                Err(e) => return Err(e).context(ReadMetaGroupSnafu),
            },
        }

        let elem = match parser.read_element(reader, ts).context(ParseMetaElementSnafu)? {
            Some(elem) => elem,
            None => break,
        };
        if elem.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH && meta.is_empty() {
            if let Some(&len) = elem.value().ints_slice().and_then(|v| v.first()) {
                debug!("File meta group length: {}", len);
                group_end = Some(reader.position() + len as u64);
            }
        }
        meta.put(elem);
    }
    Ok(meta)
}

fn read_body<R>(
    mut reader: ByteReader<R>,
    parser: &ElementParser,
    ts: &TransferSyntax,
    mut dataset: DataSet,
) -> Result<DataSet>
where
    R: Read,
{
    while let Some(elem) = parser.read_element(&mut reader, ts).context(ParseElementSnafu)? {
        dataset.put(elem);
    }
    Ok(dataset)
}
