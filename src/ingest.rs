//! Reading uploaded email files from disk

use crate::error::{Error, Result};
use crate::parser::parse_email_file;
use crate::types::EmailInput;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Largest accepted upload, in bytes (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a `.eml` or text file and parse it into an [`EmailInput`].
///
/// Oversized or non-UTF-8 files are rejected rather than parsed.
pub fn read_email_file(path: &Path) -> Result<EmailInput> {
    let content = read_text(path)?;
    Ok(parse_email_file(&content))
}

/// Read a file as UTF-8 text, enforcing [`MAX_FILE_SIZE`].
///
/// A leading byte order mark is dropped.
pub fn read_text(path: &Path) -> Result<String> {
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let too_large = |size: u64| {
        warn!("Rejecting {}: {size} bytes", path.display());
        Error::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE,
        }
    };

    let file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > MAX_FILE_SIZE {
        return Err(too_large(size));
    }

    // The file may grow after the metadata check; never read past the limit
    let mut bytes = Vec::new();
    file.take(MAX_FILE_SIZE + 1)
        .read_to_end(&mut bytes)
        .map_err(io_err)?;
    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > MAX_FILE_SIZE {
        return Err(too_large(size));
    }

    let text = String::from_utf8(bytes).map_err(|_| {
        warn!("Rejecting {}: not valid UTF-8", path.display());
        Error::Decode {
            path: path.to_path_buf(),
        }
    })?;

    debug!("Read {} ({size} bytes)", path.display());

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
