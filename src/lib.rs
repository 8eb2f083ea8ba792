//! Byte-range tools for firmware images.
//!
//! Two independent operations, neither of which interprets the firmware
//! format:
//!
//! * [`merge`] concatenates two files into a third.
//! * [`Decomposer`] splits an image into the bytes before its vector table,
//!   the vector table (`element_count * 4` bytes at `address`), and the bytes
//!   after it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fwtools::{Decomposer, merge};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fw = Decomposer::open(48, 0x100, "firmware.bin")?;
//!     fw.save_all("vectors.bin", "part1.bin", "part2.bin")?;
//!
//!     merge("part1.bin", "vectors.bin", "head.bin")?;
//!     merge("head.bin", "part2.bin", "rebuilt.bin")?;
//!
//!     Ok(())
//! }
//! ```

pub use decomposer::{Decomposer, VECTOR_ENTRY_SIZE};
pub use error::FirmwareError;
pub use image::Image;
pub use merger::merge;

mod decomposer;
pub mod error;
mod image;
mod merger;

#[cfg(test)]
mod test_support;

pub type Result<T> = std::result::Result<T, FirmwareError>;
