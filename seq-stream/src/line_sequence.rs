use std::io::{BufRead, Seek, SeekFrom};

use stream_error::{Result, StreamError};

use crate::traversable::Traversable;

/// A lazy sequence of newline-delimited lines pulled from seekable byte
/// input.
///
/// At most one line is buffered ahead; the first probe pulls the first
/// line. Line terminators are stripped from the produced elements. The
/// total line count is unknown until the input is exhausted, so the
/// countable capability is absent.
pub struct LineSequence<R> {
    reader: R,
    line: Option<String>,
    consumed: u64,
    primed: bool,
}

impl<R: BufRead + Seek> LineSequence<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: None,
            consumed: 0,
            primed: false,
        }
    }

    /// Hand the underlying reader back, e.g. after detaching a stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn pull(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let bytes = self.reader.read_line(&mut buf)?;
        if bytes == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn prime(&mut self) -> Result<()> {
        if !self.primed {
            self.line = self.pull()?;
            self.primed = true;
        }
        Ok(())
    }
}

impl<R: BufRead + Seek> Traversable for LineSequence<R> {
    type Item = String;

    fn valid(&mut self) -> Result<bool> {
        self.prime()?;
        Ok(self.line.is_some())
    }

    fn current(&mut self) -> Result<String> {
        self.prime()?;
        self.line.clone().ok_or_else(|| {
            StreamError::Sequence("no current line".to_owned())
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.prime()?;
        if self.line.is_some() {
            self.consumed += 1;
        }
        self.line = self.pull()?;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line = None;
        self.consumed = 0;
        self.primed = false;
        Ok(())
    }

    fn key(&mut self) -> Result<Option<u64>> {
        self.prime()?;
        if self.line.is_some() {
            Ok(Some(self.consumed))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufReader, Cursor, Write};

    use tempdir::TempDir;

    use super::*;
    use crate::adapter::SequenceStream;
    use crate::stream::{ReadableStream, Whence};

    fn input() -> Cursor<Vec<u8>> {
        Cursor::new(b"alpha\nbeta\ngamma\n".to_vec())
    }

    #[test]
    fn test_pulls_lines_without_terminators() {
        let mut sequence = LineSequence::new(input());
        assert_eq!(sequence.current().unwrap(), "alpha");
        sequence.advance().unwrap();
        assert_eq!(sequence.current().unwrap(), "beta");
        assert_eq!(sequence.key().unwrap(), Some(1));
    }

    #[test]
    fn test_exhausts_and_resets() {
        let mut sequence = LineSequence::new(input());
        while sequence.valid().unwrap() {
            sequence.advance().unwrap();
        }
        assert_eq!(sequence.key().unwrap(), None);

        sequence.reset().unwrap();
        assert_eq!(sequence.key().unwrap(), Some(0));
        assert_eq!(sequence.current().unwrap(), "alpha");
    }

    #[test]
    fn test_line_count_is_unknown() {
        let sequence = LineSequence::new(input());
        assert_eq!(sequence.total(), None);
    }

    #[test]
    fn test_streams_lines() {
        let mut stream = SequenceStream::new(LineSequence::new(input()));
        assert_eq!(stream.size(), None);
        assert_eq!(stream.get_contents().unwrap(), "alphabetagamma");
        assert_eq!(stream.tell(), 3);
        assert!(stream.eof().unwrap());
    }

    #[test]
    fn test_seeks_to_a_line() {
        let mut stream = SequenceStream::new(LineSequence::new(input()));
        assert!(stream.seek(1, Whence::Start).unwrap());
        assert_eq!(stream.read(1).unwrap(), "beta");
    }

    #[test]
    fn test_streams_lines_from_a_file() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        let file_path = temp_dir.path().join("lines.txt");
        let mut file = File::create(&file_path)
            .expect("Failed to create temporary file");
        file.write_all(b"one\ntwo\n")
            .expect("Failed to write temporary file");
        drop(file);

        let reader = BufReader::new(
            File::open(&file_path).expect("Failed to open temporary file"),
        );
        let mut stream = SequenceStream::new(LineSequence::new(reader))
            .with_stringify(|line: &String| format!("{}\n", line));

        assert_eq!(stream.to_text().unwrap(), "one\ntwo\n");
        assert!(stream.rewind().unwrap());
        assert_eq!(stream.read(1).unwrap(), "one\n");
    }
}
