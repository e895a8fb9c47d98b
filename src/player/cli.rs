#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use super::{GameDisplay, InputSource};

/// Line-oriented input over any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<io::StdinLock<'static>> {
    /// Input read from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(anyhow::anyhow!("input closed before the game finished"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Text display over any writer.
pub struct WriterDisplay<W> {
    writer: W,
}

impl<W: Write> WriterDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GameDisplay for WriterDisplay<W> {
    fn show_board(&mut self, rendered: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}
