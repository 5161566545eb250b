use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::encoding::decode_text;
use crate::error::{Result, SplitError};

/// Line terminator written between output lines.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Read a whole text file into lines, auto-detecting its encoding.
///
/// Line terminators are not retained. Returns the lines together with
/// the name of the encoding that was used, so callers can report it.
pub fn read_lines(path: &Path) -> Result<(Vec<String>, &'static str)> {
    let bytes = fs::read(path).map_err(|e| SplitError::io(path, e))?;
    let (text, encoding) = decode_text(&bytes);
    let lines = text.lines().map(str::to_string).collect();
    Ok((lines, encoding.name()))
}

/// Write lines to `path` as UTF-8, one element per line, creating or
/// overwriting the target. The handle is released when this returns,
/// on success and on error alike.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_bytes())
            .map_err(|e| SplitError::io(path, e))?;
        writer
            .write_all(LINE_ENDING.as_bytes())
            .map_err(|e| SplitError::io(path, e))?;
    }
    writer.flush().map_err(|e| SplitError::io(path, e))
}
