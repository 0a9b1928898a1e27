//! Turning outside input into message bytes
//!
//! The hash only accepts bytes. Anything arriving from the command line or
//! the filesystem is converted here, and conversion fails instead of
//! guessing an encoding.

use std::ffi::OsStr;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::InputError;

/// Path name that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Returns the exact bytes of a raw OS argument.
///
/// On Unix every `OsStr` is a byte string and is returned as is. Elsewhere
/// the argument must be valid Unicode and is encoded as UTF-8; anything
/// else is rejected with `InputError::NotUtf8`.
pub fn os_arg_bytes(
    #[cfg_attr(unix, allow(unused_variables))] index: usize,
    arg: &OsStr,
) -> Result<Vec<u8>, InputError> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;

        Ok(arg.as_bytes().to_vec())
    }

    #[cfg(not(unix))]
    {
        arg.to_str()
            .map(|s| s.as_bytes().to_vec())
            .ok_or(InputError::NotUtf8 { index })
    }
}

/// Reads a whole file, or all of `stdin` for `-`.
pub fn read_message<R: Read>(path: &Path, mut stdin: R) -> Result<Vec<u8>, InputError> {
    let result = if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).map(|_| buf)
    } else {
        fs::read(path)
    };

    let bytes = result.map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), len = bytes.len(), "read message");
    Ok(bytes)
}
