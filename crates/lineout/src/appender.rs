use core::fmt;
use std::io;

use crate::LineBuffer;

/// Byte-level writer borrowed from a [`LineBuffer`].
///
/// Exposes only "append these bytes": no prefix, no auto-newline, and the
/// continuation state is left alone. In buffered mode the bytes land in the
/// buffer, in direct mode they go straight to the destination. This lets a
/// buffer sit behind APIs that take a generic writer, such as `write!` or
/// `serde_json::to_writer`.
///
/// ```rust
/// use std::io::Write;
///
/// use lineout::LineBuffer;
///
/// let mut buf = LineBuffer::new(1);
/// buf.set_prefix("never used: ");
/// write!(buf.appender(), "{}-{}", 1, 2).unwrap();
/// assert_eq!(buf.content_view(), "1-2");
/// ```
#[derive(Debug)]
pub struct Appender<'a> {
    buf: &'a mut LineBuffer,
}

impl<'a> Appender<'a> {
    pub(crate) fn new(buf: &'a mut LineBuffer) -> Self {
        Self { buf }
    }
}

impl io::Write for Appender<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.append_raw(bytes)?;
        Ok(bytes.len())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buf.append_raw(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for Appender<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.append_raw(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
