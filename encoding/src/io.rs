//! Byte level reading and writing with a run-time byte order
//! and a cumulative byte position.
//!
//! [`ByteReader`] distinguishes a stream which ends cleanly
//! before a read (see [`ReadError::EndOfStream`])
//! from a stream which ends in the middle of one
//! (see [`ReadError::UnexpectedEof`]).

use byteordered::{ByteOrdered, Endianness};
use dcmkit_core::Tag;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Chain, Cursor, Read, Write};

/// Upper bound of the capacity reserved up front by [`ByteReader::read_bytes`].
const READ_BYTES_CAPACITY: usize = 64 * 1024;

/// An error which may occur while reading bytes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    /// The stream ended before the first byte of the read.
    #[snafu(display("End of stream at position {}", position))]
    EndOfStream { position: u64, backtrace: Backtrace },
    /// The stream ended after part of the read.
    #[snafu(display(
        "Unexpected end of stream at position {}: expected {} bytes, got {}",
        position,
        expected,
        got
    ))]
    UnexpectedEof {
        position: u64,
        expected: usize,
        got: usize,
        backtrace: Backtrace,
    },
    /// The underlying stream failed.
    #[snafu(display("Could not read from source at position {}", position))]
    ReadSource {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

impl ReadError {
    /// Whether the stream ended cleanly before the read.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadError::EndOfStream { .. })
    }

    /// Whether the stream ended in the middle of the read.
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, ReadError::UnexpectedEof { .. })
    }
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A reader of binary data with a swappable byte order.
///
/// Bytes obtained by look-ahead (see [`peek_u16`](ByteReader::peek_u16))
/// are kept in a push-back buffer
/// and are served before any further bytes of the inner source.
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    pending: Vec<u8>,
    endianness: Endianness,
    position: u64,
}

impl<R> ByteReader<R>
where
    R: Read,
{
    /// Create a new reader with the given byte order.
    pub fn new(inner: R, endianness: Endianness) -> Self {
        ByteReader {
            inner,
            pending: Vec::new(),
            endianness,
            position: 0,
        }
    }

    /// Create a new little endian reader.
    pub fn le(inner: R) -> Self {
        ByteReader::new(inner, Endianness::Little)
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The byte order of subsequent reads.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Change the byte order of subsequent reads.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Substitute the source with a transformation of itself,
    /// such as a decompressor.
    ///
    /// The function receives the bytes still pending followed by
    /// the rest of the original source.
    /// The byte position and the byte order are preserved.
    pub fn wrap<F, S>(self, f: F) -> ByteReader<S>
    where
        F: FnOnce(Chain<Cursor<Vec<u8>>, R>) -> S,
        S: Read,
    {
        let chained = Cursor::new(self.pending).chain(self.inner);
        ByteReader {
            inner: f(chained),
            pending: Vec::new(),
            endianness: self.endianness,
            position: self.position,
        }
    }

    /// Retrieve the inner source,
    /// discarding any bytes pending in the push-back buffer.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill as much of `buf` as possible,
    /// returning the number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        if !self.pending.is_empty() {
            let n = self.pending.len().min(buf.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending.drain(..n);
            filled = n;
        }
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let position = self.position;
        let got = self.fill(buf).context(ReadSourceSnafu { position })?;
        self.position += got as u64;
        if got == buf.len() {
            Ok(())
        } else if got == 0 {
            EndOfStreamSnafu { position }.fail()
        } else {
            UnexpectedEofSnafu {
                position,
                expected: buf.len(),
                got,
            }
            .fail()
        }
    }

    /// Read an unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_into(&mut buf)?;
        let position = self.position;
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_u16()
            .context(ReadSourceSnafu { position })
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_into(&mut buf)?;
        let position = self.position;
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_u32()
            .context(ReadSourceSnafu { position })
    }

    /// Read an unsigned 64-bit integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_into(&mut buf)?;
        let position = self.position;
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_u64()
            .context(ReadSourceSnafu { position })
    }

    /// Read an attribute tag, group first.
    ///
    /// The four bytes are read at once,
    /// so that a stream ending right before the tag
    /// yields [`ReadError::EndOfStream`]
    /// and one ending inside it yields [`ReadError::UnexpectedEof`].
    pub fn read_tag(&mut self) -> Result<Tag> {
        let mut buf = [0u8; 4];
        self.read_into(&mut buf)?;
        let position = self.position;
        let mut src = ByteOrdered::runtime(&buf[..], self.endianness);
        let group = src.read_u16().context(ReadSourceSnafu { position })?;
        let element = src.read_u16().context(ReadSourceSnafu { position })?;
        Ok(Tag(group, element))
    }

    /// Read exactly `n` bytes.
    ///
    /// The buffer grows with the bytes actually read,
    /// so a bogus length declared by a corrupt file
    /// fails with [`ReadError::UnexpectedEof`] without allocating it.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let position = self.position;
        let mut buf = Vec::with_capacity(n.min(READ_BYTES_CAPACITY));
        let from_pending = self.pending.len().min(n);
        buf.extend(self.pending.drain(..from_pending));
        let rest = (n - from_pending) as u64;
        (&mut self.inner)
            .take(rest)
            .read_to_end(&mut buf)
            .context(ReadSourceSnafu { position })?;
        let got = buf.len();
        self.position += got as u64;
        if got == n {
            Ok(buf)
        } else if got == 0 {
            EndOfStreamSnafu { position }.fail()
        } else {
            UnexpectedEofSnafu {
                position,
                expected: n,
                got,
            }
            .fail()
        }
    }

    /// Read exactly `n` bytes as text.
    /// Invalid UTF-8 sequences are replaced.
    pub fn read_string(&mut self, n: usize) -> Result<String> {
        let bytes = self.read_bytes(n)?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Skip exactly `n` bytes.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        let position = self.position;
        let from_pending = (self.pending.len() as u64).min(n) as usize;
        self.pending.drain(..from_pending);
        let rest = n - from_pending as u64;
        let copied = io::copy(&mut (&mut self.inner).take(rest), &mut io::sink())
            .context(ReadSourceSnafu { position })?;
        let got = from_pending as u64 + copied;
        self.position += got;
        if got == n {
            Ok(())
        } else if got == 0 {
            EndOfStreamSnafu { position }.fail()
        } else {
            UnexpectedEofSnafu {
                position,
                expected: n as usize,
                got: got as usize,
            }
            .fail()
        }
    }

    /// Look at the next unsigned 16-bit integer without consuming it.
    pub fn peek_u16(&mut self) -> Result<u16> {
        let position = self.position;
        let mut buf = [0u8; 2];
        let got = self.fill(&mut buf).context(ReadSourceSnafu { position })?;
        // put back whatever was read, in order
        let mut restored = buf[..got].to_vec();
        restored.append(&mut self.pending);
        self.pending = restored;
        match got {
            2 => ByteOrdered::runtime(&buf[..], self.endianness)
                .read_u16()
                .context(ReadSourceSnafu { position }),
            0 => EndOfStreamSnafu { position }.fail(),
            got => UnexpectedEofSnafu {
                position,
                expected: 2_usize,
                got,
            }
            .fail(),
        }
    }
}

/// An error which may occur while writing bytes.
#[derive(Debug, Snafu)]
#[snafu(display("Could not write to destination at position {}", position))]
pub struct WriteError {
    position: u64,
    source: io::Error,
    backtrace: Backtrace,
}

/// A writer of binary data with a swappable byte order.
#[derive(Debug)]
pub struct ByteWriter<W> {
    inner: W,
    endianness: Endianness,
    position: u64,
}

impl<W> ByteWriter<W>
where
    W: Write,
{
    /// Create a new writer with the given byte order.
    pub fn new(inner: W, endianness: Endianness) -> Self {
        ByteWriter {
            inner,
            endianness,
            position: 0,
        }
    }

    /// Create a new little endian writer.
    pub fn le(inner: W) -> Self {
        ByteWriter::new(inner, Endianness::Little)
    }

    /// The number of bytes written so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The byte order of subsequent writes.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Change the byte order of subsequent writes.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Write an unsigned 16-bit integer.
    pub fn write_u16(&mut self, value: u16) -> Result<(), WriteError> {
        let position = self.position;
        ByteOrdered::runtime(&mut self.inner, self.endianness)
            .write_u16(value)
            .context(WriteSnafu { position })?;
        self.position += 2;
        Ok(())
    }

    /// Write an unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32) -> Result<(), WriteError> {
        let position = self.position;
        ByteOrdered::runtime(&mut self.inner, self.endianness)
            .write_u32(value)
            .context(WriteSnafu { position })?;
        self.position += 4;
        Ok(())
    }

    /// Write an attribute tag, group first.
    pub fn write_tag(&mut self, tag: Tag) -> Result<(), WriteError> {
        self.write_u16(tag.group())?;
        self.write_u16(tag.element())
    }

    /// Write all of the given bytes as is.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        let position = self.position;
        self.inner
            .write_all(bytes)
            .context(WriteSnafu { position })?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Flush the destination.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        let position = self.position;
        self.inner.flush().context(WriteSnafu { position })
    }

    /// Retrieve the inner destination.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
