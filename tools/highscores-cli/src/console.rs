//! Line-based operator prompt over any reader/writer pair.
//!
//! Input lines are raw bytes: record names need not be UTF-8.

use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line without its line ending.
    ///
    /// Returns `None` once the input is closed.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<Vec<u8>>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Ok(Some(line))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Raw bytes of an OS string (lossy outside unix).
pub fn os_bytes(value: &OsStr) -> Vec<u8> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        value.as_bytes().to_vec()
    }

    #[cfg(not(unix))]
    {
        value.to_string_lossy().into_owned().into_bytes()
    }
}

/// Path typed at the prompt (lossy outside unix).
pub fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        PathBuf::from(OsString::from_vec(bytes))
    }

    #[cfg(not(unix))]
    {
        PathBuf::from(OsString::from(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
