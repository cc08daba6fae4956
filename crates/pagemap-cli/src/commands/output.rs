//! Writing command output to stdout.

use std::io::{self, Write};

use crate::error::Result;

/// Write `text` to stdout. A closed pipe surfaces as `CliError::Io` instead of
/// a panic.
pub fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    write_to(&mut stdout.lock(), text)
}

/// Write `text` to `writer` and flush it.
pub fn write_to(writer: &mut impl Write, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf, "main\t/site/index.html\n").unwrap();
        assert_eq!(buf, b"main\t/site/index.html\n");
    }

    #[test]
    fn test_closed_pipe_is_an_io_error() {
        match write_to(&mut ClosedPipe, "{}\n").unwrap_err() {
            CliError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
