use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use log::{debug, info};

use crate::{FirmwareError, Result};

/// Writes the concatenation of `input_a` and `input_b` to `output`.
///
/// Both inputs are opened before `output` is created, so a missing input is
/// reported without touching the output. Once writing has started there is
/// no cleanup: a failure while reading `input_b` or writing its bytes leaves
/// `output` holding whatever was written so far.
///
/// # Errors
///
/// Returns `FirmwareError::NotFound` if either input does not exist,
/// `FirmwareError::PermissionDenied` if a path cannot be opened, and
/// `FirmwareError::Io` on any other read or write fault.
///
/// # Examples
///
/// ```rust,no_run
/// fwtools::merge("bootloader.bin", "app.bin", "full.bin")?;
/// # Ok::<(), fwtools::FirmwareError>(())
/// ```
pub fn merge(
    input_a: impl AsRef<Path>,
    input_b: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let (input_a, input_b, output) = (input_a.as_ref(), input_b.as_ref(), output.as_ref());

    let mut file_a = fs::File::open(input_a).map_err(|e| FirmwareError::from_io(input_a, e))?;
    let mut file_b = fs::File::open(input_b).map_err(|e| FirmwareError::from_io(input_b, e))?;
    let mut out = fs::File::create(output).map_err(|e| FirmwareError::from_io(output, e))?;

    let len_a = append(&mut file_a, input_a, &mut out, output)?;
    let len_b = append(&mut file_b, input_b, &mut out, output)?;
    out.flush().map_err(|e| FirmwareError::from_io(output, e))?;

    info!(
        "merged {} ({len_a} bytes) and {} ({len_b} bytes) into {} ({} bytes)",
        input_a.display(),
        input_b.display(),
        output.display(),
        len_a + len_b
    );
    Ok(())
}

/// Reads all of `input` and writes it to `out`, returning the byte count.
fn append(
    input: &mut fs::File,
    input_path: &Path,
    out: &mut fs::File,
    out_path: &Path,
) -> Result<usize> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(|e| FirmwareError::from_io(input_path, e))?;
    out.write_all(&data).map_err(|e| FirmwareError::from_io(out_path, e))?;

    debug!("appended {} bytes from {}", data.len(), input_path.display());
    Ok(data.len())
}
