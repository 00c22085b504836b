// Shared fixture helpers for the cracking tests

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `lines` to a fresh temporary file, one per line with a trailing
/// newline, and return the handle (the file is removed on drop)
pub fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}
