// Line source
// Buffered, forward-only line reading with terminator stripping

use std::io::{self, BufRead};

/// Lazy line reader over any buffered stream. Yields each line with
/// trailing newline/carriage-return characters stripped, reusing a single
/// buffer across calls; end of stream is reported as `Ok(None)`.
pub struct LineReader<R: BufRead> {
    inner: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: String::new(),
        }
    }

    /// Read the next line, stripped of trailing `\r`/`\n`
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        let bytes_read = self.inner.read_line(&mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        while self.buffer.ends_with('\n') || self.buffer.ends_with('\r') {
            self.buffer.pop();
        }

        Ok(Some(&self.buffer))
    }
}
