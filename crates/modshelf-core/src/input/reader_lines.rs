//! Line source over any buffered reader.

use std::io::{BufRead, Write};

use crate::ports::{LineSource, TerminalError};

/// Reads lines from `R`, echoing prompts to `W`.
///
/// Used when input is piped rather than typed at a terminal.
#[derive(Debug)]
pub struct ReaderLines<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderLines<R, W> {
    pub const fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, TerminalError> {
        if !prompt.is_empty() {
            write!(self.prompt_out, "{prompt}")?;
            self.prompt_out.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_and_echoes_prompt() {
        let input = b"first line\r\nsecond\n\nlast" as &[u8];
        let mut prompts = Vec::new();
        {
            let mut source = ReaderLines::new(input, &mut prompts);
            assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("first line"));
            assert_eq!(source.read_line("").unwrap().as_deref(), Some("second"));
            assert_eq!(source.read_line("").unwrap().as_deref(), Some(""));
            assert_eq!(source.read_line("> ").unwrap().as_deref(), Some("last"));
            assert_eq!(source.read_line("> ").unwrap(), None);
        }
        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
    }
}
