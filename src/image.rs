use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{FirmwareError, Result};

const CHUNK_SIZE: usize = 64 * 1024;

/// Files cannot extend past a signed 64-bit offset.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A firmware image opened read-only.
///
/// Reads are positioned: they never move a shared cursor, so any number of
/// reads may be issued through `&self` in any order.
#[derive(Debug)]
pub struct Image {
    file: fs::File,
    path: PathBuf,
    len: u64,
}

impl Image {
    /// Opens the image at `path` and records its current length.
    ///
    /// # Errors
    ///
    /// Returns `FirmwareError::NotFound` if the file does not exist and
    /// `FirmwareError::PermissionDenied` if it cannot be opened for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|e| FirmwareError::from_io(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| FirmwareError::from_io(path, e))?
            .len();

        Ok(Self {
            file,
            path: path.to_path_buf(),
            len,
        })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Length of the image in bytes, as observed when it was opened.
    ///
    /// Reads are not limited to this length.
    pub fn len(&self) -> u64 { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Reads up to `len` bytes starting at `offset`.
    ///
    /// Reading stops at the end of the file as it is now, not as it was when
    /// the image was opened. If `offset` is at or beyond the end, returns an
    /// empty vector; if the requested range extends beyond it, returns as
    /// much data as is present. `offset + len` saturates rather than
    /// overflowing.
    ///
    /// # Errors
    ///
    /// Returns `FirmwareError::Io` if the underlying read fails.
    pub fn read(&self, offset: u64, len: u64) -> Result<Vec<u8>> {
        let end_pos = std::cmp::min(offset.saturating_add(len), MAX_OFFSET);

        let mut data = Vec::new();
        let chunk_len = std::cmp::min(end_pos.saturating_sub(offset), CHUNK_SIZE as u64);
        let mut chunk = vec![0; chunk_len as usize];
        let mut pos = offset;
        while pos < end_pos {
            let wanted = std::cmp::min(end_pos - pos, chunk.len() as u64) as usize;
            match read_at(&self.file, &mut chunk[..wanted], pos) {
                Ok(0) => break,
                Ok(n) => {
                    data.extend_from_slice(&chunk[..n]);
                    pos += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(FirmwareError::from_io(&self.path, e)),
            }
        }

        Ok(data)
    }

    /// Reads everything from `offset` to the current end of the image.
    pub fn read_to_end(&self, offset: u64) -> Result<Vec<u8>> { self.read(offset, u64::MAX) }
}

#[cfg(unix)]
fn read_at(file: &fs::File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::unix::fs::FileExt::read_at(file, buf, offset)
}

#[cfg(windows)]
fn read_at(file: &fs::File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    std::os::windows::fs::FileExt::seek_read(file, buf, offset)
}
