use crate::utils::error::{FlipError, Result};
use std::io::{self, BufRead, Seek, SeekFrom};

/// Pulls base-10 integers off the front of a buffered byte stream.
///
/// Each token is optional whitespace, an optional sign and at least one
/// digit. The byte after the last digit is left in the stream, so `12abc`
/// yields `12` and then stops. The first failed token, or end of stream,
/// stops the scanner for good (until [`rewind`](Self::rewind)).
#[derive(Debug)]
pub struct IntScanner<R> {
    inner: R,
    stopped: bool,
}

impl<R: BufRead> IntScanner<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            stopped: false,
        }
    }

    /// `Ok(None)` means no further integer is available.
    pub fn next_int(&mut self) -> Result<Option<i32>> {
        if self.stopped {
            return Ok(None);
        }
        let parsed = self.scan_token().map_err(FlipError::Read)?;
        if parsed.is_none() {
            self.stopped = true;
        }
        Ok(parsed)
    }

    fn scan_token(&mut self) -> io::Result<Option<i32>> {
        while let Some(byte) = self.peek()? {
            if !is_space(byte) {
                break;
            }
            self.inner.consume(1);
        }

        let negative = match self.peek()? {
            Some(b'-') => {
                self.inner.consume(1);
                true
            }
            Some(b'+') => {
                self.inner.consume(1);
                false
            }
            _ => false,
        };

        // one past i32::MAX so that i32::MIN still fits
        const LIMIT: i64 = i32::MAX as i64 + 1;
        let mut magnitude: i64 = 0;
        let mut digits = 0usize;
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            self.inner.consume(1);
            digits += 1;
            magnitude = magnitude * 10 + i64::from(byte - b'0');
            if magnitude > LIMIT {
                return Ok(None);
            }
        }

        if digits == 0 {
            return Ok(None);
        }
        let value = if negative { -magnitude } else { magnitude };
        Ok(i32::try_from(value).ok())
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead + Seek> IntScanner<R> {
    /// Seeks back to the start of the stream and clears the stopped state.
    pub fn rewind(&mut self) -> Result<()> {
        self.inner.seek(SeekFrom::Start(0)).map_err(FlipError::Seek)?;
        self.stopped = false;
        Ok(())
    }
}

// C `isspace` also counts vertical tab
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}
