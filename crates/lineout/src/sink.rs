//! Destinations a [`LineBuffer`](crate::LineBuffer) flushes into.
//!
//! A [`Sink`] is a cloneable handle to a writer owned elsewhere. The buffer
//! only ever writes through it; it never closes or drops the writer behind
//! the caller's back. [`Capture`] is an in-memory writer whose bytes can be
//! read back, handy for redirecting one buffer's output into a test or into
//! another stage of a pipeline.
use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};

use bstr::ByteSlice;
use parking_lot::Mutex;

/// Shared handle to a writable destination.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<dyn Write + Send>>,
    label: &'static str,
}

impl Sink {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
            label: "writer",
        }
    }

    /// The process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            inner: Arc::new(Mutex::new(io::stdout())),
            label: "stdout",
        }
    }

    /// The process standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            inner: Arc::new(Mutex::new(io::stderr())),
            label: "stderr",
        }
    }

    /// Whether both handles point at the same writer.
    #[must_use]
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    pub(crate) fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl From<Capture> for Sink {
    fn from(capture: Capture) -> Self {
        Self {
            inner: Arc::new(Mutex::new(capture)),
            label: "capture",
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sink").field(&self.label).finish()
    }
}

/// In-memory writer. Clones share the same storage.
///
/// ```rust
/// use lineout::{Capture, LineBuffer, Sink};
///
/// let capture = Capture::new();
/// let mut buf = LineBuffer::new(1);
/// buf.set_destination(Some(Sink::from(capture.clone()))).unwrap();
/// buf.write_text("hello\n");
/// buf.flush().unwrap();
/// assert_eq!(capture.contents(), "hello\n");
/// ```
#[derive(Clone, Default)]
pub struct Capture {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        self.bytes.lock().to_str_lossy().into_owned()
    }

    /// Everything written so far, as raw bytes.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Return the captured bytes and start over empty.
    #[must_use]
    pub fn take(&self) -> Vec<u8> {
        core::mem::take(&mut *self.bytes.lock())
    }

    /// Number of captured bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// Whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capture")
            .field(&self.bytes.lock().as_bstr())
            .finish()
    }
}
