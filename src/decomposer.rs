use std::{fs, io::Write, path::Path};

use log::{debug, info};

use crate::{FirmwareError, Image, Result};

/// Size in bytes of one vector-table entry (a 32-bit address).
pub const VECTOR_ENTRY_SIZE: u64 = 4;

/// Splits a firmware image into the region before the vector table, the
/// vector table itself, and the region after it.
///
/// Ranges are not checked against the image length. A vector table that
/// runs past the end of the image is saved short, and regions that start
/// past the end are saved empty.
///
/// # Examples
///
/// ```rust,no_run
/// use fwtools::Decomposer;
///
/// let fw = Decomposer::open(48, 0x100, "firmware.bin")?;
/// fw.save_vector_table("vectors.bin")?;
/// fw.save_part1("part1.bin")?;
/// fw.save_part2("part2.bin")?;
/// # Ok::<(), fwtools::FirmwareError>(())
/// ```
#[derive(Debug)]
pub struct Decomposer {
    element_count: u64,
    address: u64,
    size: u64,
    image: Image,
}

impl Decomposer {
    /// Opens `input` and describes a vector table of `element_count`
    /// entries starting at byte `address`.
    ///
    /// # Errors
    ///
    /// Returns `FirmwareError::NotFound` if `input` does not exist and
    /// `FirmwareError::PermissionDenied` if it cannot be read.
    pub fn open(element_count: u64, address: u64, input: impl AsRef<Path>) -> Result<Self> {
        let image = Image::open(input)?;
        let size = element_count.saturating_mul(VECTOR_ENTRY_SIZE);

        debug!(
            "opened {} ({} bytes), vector table at {address:#x}, {size} bytes",
            image.path().display(),
            image.len()
        );

        Ok(Self {
            element_count,
            address,
            size,
            image,
        })
    }

    pub fn element_count(&self) -> u64 { self.element_count }

    pub fn address(&self) -> u64 { self.address }

    /// Vector-table size in bytes.
    pub fn vector_table_size(&self) -> u64 { self.size }

    pub fn image(&self) -> &Image { &self.image }

    /// Saves bytes `[address, address + size)`.
    pub fn save_vector_table(&self, output: impl AsRef<Path>) -> Result<()> {
        save(output.as_ref(), "vector table", self.address, || {
            self.image.read(self.address, self.size)
        })
    }

    /// Saves bytes `[0, address)`.
    pub fn save_part1(&self, output: impl AsRef<Path>) -> Result<()> {
        save(output.as_ref(), "part1", 0, || self.image.read(0, self.address))
    }

    /// Saves bytes from `address + size` to the end of the image.
    pub fn save_part2(&self, output: impl AsRef<Path>) -> Result<()> {
        let start = self.address.saturating_add(self.size);
        save(output.as_ref(), "part2", start, || self.image.read_to_end(start))
    }

    /// Saves all three regions: vector table, then part1, then part2.
    pub fn save_all(
        &self,
        vector_table: impl AsRef<Path>,
        part1: impl AsRef<Path>,
        part2: impl AsRef<Path>,
    ) -> Result<()> {
        self.save_vector_table(vector_table)?;
        self.save_part1(part1)?;
        self.save_part2(part2)?;

        info!("decomposed {}", self.image.path().display());
        Ok(())
    }
}

/// Creates `output`, then fills it with the region produced by `read`.
///
/// The output is truncated before the input is read, so an output path that
/// names the input itself reads back as empty.
fn save(
    output: &Path,
    region: &str,
    offset: u64,
    read: impl FnOnce() -> Result<Vec<u8>>,
) -> Result<()> {
    let mut out = fs::File::create(output).map_err(|e| FirmwareError::from_io(output, e))?;
    let data = read()?;
    out.write_all(&data).map_err(|e| FirmwareError::from_io(output, e))?;

    debug!(
        "saved {region} ({} bytes from {offset:#x}) to {}",
        data.len(),
        output.display()
    );
    Ok(())
}
