//! Line-oriented terminal front end for a game session.
//!
//! The turn loop only talks to a [`Console`], so it runs the same against a
//! real terminal or an in-memory script.

pub mod handler;
pub mod messages;

use std::io::{self, BufRead, Write};

pub use handler::run_game;

/// Where the turn loop reads player lines and writes output
pub trait Console {
    /// Show a prompt and read one line. `None` means input has ended.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Console over any buffered reader and writer (stdin/stdout in the binary)
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and get rejected as malformed words
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}
