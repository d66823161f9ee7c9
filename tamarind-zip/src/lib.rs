//! Streaming ZIP archive writer for Office document packages.
//!
//! This crate covers exactly the half of the ZIP format a package *generator*
//! needs: writing stored and Deflate-compressed entries followed by a central
//! directory. There is no reading support; consumers that need to open the
//! resulting archives (tests, mostly) should use a full ZIP implementation.
//!
//! Entries are stamped with a fixed modification time, so writing the same
//! members with the same content always produces byte-identical archives.
//!
//! # Example
//!
//! ```rust
//! use tamarind_zip::StreamingArchiveWriter;
//!
//! let mut writer = StreamingArchiveWriter::new();
//! writer.write_deflated("content.xml", b"<root/>")?;
//! let bytes = writer.finish_to_bytes()?;
//! # Ok::<(), tamarind_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Cursor, Write};
use thiserror::Error;

const LOCAL_FILE_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_HEADER_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;

/// Minimum ZIP version required to extract Deflate entries (2.0).
const VERSION_NEEDED: u16 = 20;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATED: u16 = 8;

// Fixed MS-DOS timestamp: 1980-01-01 00:00:00. Identical input must yield
// identical archives, so entries never carry wall-clock time.
const DOS_TIME: u16 = 0;
const DOS_DATE: u16 = 0x0021;

/// Compute the CRC32 (IEEE) of a byte slice.
///
/// Uses `crc32fast`, which provides hardware-accelerated CRC32 when the CPU
/// supports it and a fast software fallback otherwise.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Errors produced while writing an archive.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entry name invalid for a ZIP member: {0:?}")]
    InvalidName(String),

    #[error("archive exceeds 32-bit ZIP limits")]
    ArchiveTooLarge,
}

/// Per-entry bookkeeping for the central directory.
struct CentralRecord {
    name: String,
    method: u16,
    crc: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    header_offset: u32,
}

/// Streaming ZIP archive writer.
///
/// Entries are written to the underlying writer as they are added; the
/// central directory is emitted by [`finish`](Self::finish). The writer never
/// seeks, so it works against any `Write` sink.
pub struct StreamingArchiveWriter<W: Write> {
    out: W,
    offset: u64,
    records: Vec<CentralRecord>,
}

impl StreamingArchiveWriter<Cursor<Vec<u8>>> {
    /// Create a writer that builds the archive in memory.
    pub fn new() -> Self {
        Self::with_writer(Cursor::new(Vec::new()))
    }

    /// Finish writing and return the complete archive bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>, Error> {
        Ok(self.finish()?.into_inner())
    }
}

impl Default for StreamingArchiveWriter<Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StreamingArchiveWriter<W> {
    /// Create a writer that writes the archive to `writer`.
    pub fn with_writer(writer: W) -> Self {
        Self {
            out: writer,
            offset: 0,
            records: Vec::new(),
        }
    }

    /// Write an entry without compression.
    pub fn write_stored(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        self.write_entry(name, METHOD_STORED, data, data)
    }

    /// Write an entry with Deflate compression.
    pub fn write_deflated(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        let mut encoder = DeflateEncoder::new(
            Vec::with_capacity(data.len() / 2 + 64),
            Compression::default(),
        );
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        self.write_entry(name, METHOD_DEFLATED, data, &compressed)
    }

    /// Finish the archive (central directory + end record) and return the
    /// underlying writer.
    pub fn finish(mut self) -> Result<W, Error> {
        let central_offset = to_u32(self.offset)?;
        let entry_count =
            u16::try_from(self.records.len()).map_err(|_| Error::ArchiveTooLarge)?;

        for record in std::mem::take(&mut self.records) {
            self.put_u32(CENTRAL_DIR_HEADER_SIG)?;
            self.put_u16(VERSION_NEEDED)?; // version made by
            self.put_u16(VERSION_NEEDED)?; // version needed to extract
            self.put_u16(0)?; // general purpose flags
            self.put_u16(record.method)?;
            self.put_u16(DOS_TIME)?;
            self.put_u16(DOS_DATE)?;
            self.put_u32(record.crc)?;
            self.put_u32(record.compressed_size)?;
            self.put_u32(record.uncompressed_size)?;
            self.put_u16(record.name.len() as u16)?;
            self.put_u16(0)?; // extra field length
            self.put_u16(0)?; // comment length
            self.put_u16(0)?; // disk number start
            self.put_u16(0)?; // internal attributes
            self.put_u32(0)?; // external attributes
            self.put_u32(record.header_offset)?;
            self.put_bytes(record.name.as_bytes())?;
        }

        let central_size = to_u32(self.offset - u64::from(central_offset))?;

        self.put_u32(END_OF_CENTRAL_DIR_SIG)?;
        self.put_u16(0)?; // this disk
        self.put_u16(0)?; // disk with central directory
        self.put_u16(entry_count)?;
        self.put_u16(entry_count)?;
        self.put_u32(central_size)?;
        self.put_u32(central_offset)?;
        self.put_u16(0)?; // comment length

        self.out.flush()?;
        Ok(self.out)
    }

    /// Write one local header + payload and record it for the central directory.
    fn write_entry(
        &mut self,
        name: &str,
        method: u16,
        raw: &[u8],
        payload: &[u8],
    ) -> Result<(), Error> {
        if name.is_empty() || name.starts_with('/') || name.len() > usize::from(u16::MAX) {
            return Err(Error::InvalidName(name.to_string()));
        }

        let crc = crc32(raw);
        let uncompressed_size = to_u32(raw.len() as u64)?;
        let compressed_size = to_u32(payload.len() as u64)?;
        let header_offset = to_u32(self.offset)?;

        self.put_u32(LOCAL_FILE_HEADER_SIG)?;
        self.put_u16(VERSION_NEEDED)?;
        self.put_u16(0)?; // general purpose flags
        self.put_u16(method)?;
        self.put_u16(DOS_TIME)?;
        self.put_u16(DOS_DATE)?;
        self.put_u32(crc)?;
        self.put_u32(compressed_size)?;
        self.put_u32(uncompressed_size)?;
        self.put_u16(name.len() as u16)?;
        self.put_u16(0)?; // extra field length
        self.put_bytes(name.as_bytes())?;
        self.put_bytes(payload)?;

        self.records.push(CentralRecord {
            name: name.to_string(),
            method,
            crc,
            compressed_size,
            uncompressed_size,
            header_offset,
        });

        Ok(())
    }

    fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.out.write_all(bytes)?;
        self.offset += bytes.len() as u64;
        Ok(())
    }

    fn put_u16(&mut self, value: u16) -> Result<(), Error> {
        self.put_bytes(&value.to_le_bytes())
    }

    fn put_u32(&mut self, value: u32) -> Result<(), Error> {
        self.put_bytes(&value.to_le_bytes())
    }
}

#[inline]
fn to_u32(value: u64) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| Error::ArchiveTooLarge)
}
