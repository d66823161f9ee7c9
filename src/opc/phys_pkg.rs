//! Physical packaging: the ZIP archive a package serializes into.
//!
//! Thin wrapper over `tamarind-zip` that maps partnames to ZIP membernames
//! and collects the finished archive bytes.

use crate::opc::error::Result;
use crate::opc::packuri::PackURI;
use std::io::Cursor;
use tamarind_zip::StreamingArchiveWriter;

/// Physical package writer for creating OPC packages.
///
/// Writes parts to an in-memory ZIP archive with Deflate compression.
pub struct PhysPkgWriter {
    archive: StreamingArchiveWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: StreamingArchiveWriter::new(),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.write_deflated(pack_uri.membername(), blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish_to_bytes()?)
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}
