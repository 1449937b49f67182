use std::io::BufRead;

use indexmap::IndexSet;

/// Build log lines, unique by exact string equality, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DeduplicatedLog {
    lines: IndexSet<String>,
    lines_read: usize,
}

impl DeduplicatedLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-split lines. Later duplicates are dropped.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut log = Self::new();
        for line in lines {
            log.push(line.into());
        }
        log
    }

    /// Build from a buffered reader. `\n`, `\r\n` and a lone `\r` all end a line.
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or a line is not valid UTF-8.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut log = Self::new();
        let mut chunk = Vec::new();
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            let text = std::str::from_utf8(&chunk)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            let text = text.strip_suffix('\n').unwrap_or(text);
            let text = text.strip_suffix('\r').unwrap_or(text);
            for line in text.split('\r') {
                log.push(line.to_string());
            }
        }
        Ok(log)
    }

    fn push(&mut self, line: String) {
        self.lines_read += 1;
        self.lines.insert(line);
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of raw lines consumed, duplicates included.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;
