use core::{fmt, iter};
use std::io;

use bstr::{BStr, ByteSlice};

use crate::{
    Appender, DividerOptions, LineBufferError, LineBufferOptions, Sink, defaults,
    trim::trim_trailing_spaces,
};

/// Growable text buffer with line discipline.
///
/// Writes go through a single path that optionally emits the prefix, appends
/// the formatted text, optionally terminates the line and finally records
/// whether the template ended in a space (a *continuation*). Nothing leaves
/// the buffer until [`flush`](Self::flush), which can strip trailing spaces
/// line by line on the way out.
///
/// A buffer created with size `0` is in *direct mode*: it stores nothing and
/// every write goes straight to the destination. Direct mode cannot look back
/// at earlier output, so auto-newline and trimming do nothing there, while
/// [`ensure_newline`](Self::ensure_newline) and
/// [`ensure_blank_line`](Self::ensure_blank_line) emit unconditionally.
///
/// ```rust
/// use lineout::{Capture, LineBuffer, Sink, lprint};
///
/// let out = Capture::new();
/// let mut buf = LineBuffer::new(1);
/// buf.set_destination(Some(Sink::from(out.clone()))).unwrap();
/// buf.trim_trailing_space = true;
/// buf.set_prefix("| ");
///
/// lprint!(buf, "{} items: ", 3);
/// lprint!(buf, "a b c   \n");
/// lprint!(buf, "done\n");
/// buf.flush().unwrap();
///
/// assert_eq!(out.contents(), "| 3 items: a b c\n| done\n");
/// ```
#[derive(Debug)]
pub struct LineBuffer {
    content: Vec<u8>,
    start_capacity: usize,
    /// Terminate writes whose template does not end in a newline or a space.
    /// Buffered mode only.
    pub auto_newline: bool,
    /// Strip spaces before each newline and at the end when flushing.
    pub trim_trailing_space: bool,
    prefix: String,
    continuation: bool,
    destination: Sink,
}

impl LineBuffer {
    /// Create a buffer. `0` selects direct mode; any other size yields a
    /// buffered instance of at least [`defaults::min_size`] bytes.
    ///
    /// The destination is [`defaults::default_destination`] as of this call.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_options(size, LineBufferOptions::default())
    }

    /// Like [`new`](Self::new), with the line discipline preconfigured.
    #[must_use]
    pub fn with_options(size: usize, options: LineBufferOptions) -> Self {
        let start_capacity = match size {
            0 => 0,
            n => n.max(defaults::min_size()),
        };
        Self {
            content: Vec::with_capacity(start_capacity),
            start_capacity,
            auto_newline: options.auto_newline,
            trim_trailing_space: options.trim_trailing_space,
            prefix: options.prefix,
            continuation: false,
            destination: defaults::default_destination(),
        }
    }

    /// Write `args`, using `template` (the unexpanded format string) to drive
    /// the line discipline.
    ///
    /// An empty template is a no-op. The prefix is written first unless the
    /// previous template ended in a space or this one starts with a newline.
    /// With [`auto_newline`](Self::auto_newline) a newline follows unless the
    /// template ends in a newline or a space.
    ///
    /// Most callers go through [`lprint!`](crate::lprint), which passes the
    /// same literal as both arguments.
    pub fn write_template(&mut self, template: &str, args: fmt::Arguments<'_>) {
        let Some(&last) = template.as_bytes().last() else {
            return;
        };
        let prefixed =
            !self.prefix.is_empty() && !self.continuation && !template.starts_with('\n');

        if self.is_direct() {
            let mut scratch = Vec::new();
            if prefixed {
                scratch.extend_from_slice(self.prefix.as_bytes());
            }
            format_into(&mut scratch, args);
            self.write_direct(&scratch);
        } else {
            if prefixed {
                self.content.extend_from_slice(self.prefix.as_bytes());
            }
            format_into(&mut self.content, args);
            if self.auto_newline && last != b'\n' && last != b' ' {
                self.ensure_newline();
            }
        }

        self.continuation = last == b' ';
    }

    /// Write `text` as-is; it is its own template.
    pub fn write_text(&mut self, text: &str) {
        self.write_template(text, format_args!("{text}"));
    }

    /// Write only if `cond` holds. Returns `cond`.
    pub fn write_if(&mut self, cond: bool, template: &str, args: fmt::Arguments<'_>) -> bool {
        if cond {
            self.write_template(template, args);
        }
        cond
    }

    /// Write only if `cond` does not hold. Returns `cond`.
    pub fn write_if_not(&mut self, cond: bool, template: &str, args: fmt::Arguments<'_>) -> bool {
        if !cond {
            self.write_template(template, args);
        }
        cond
    }

    /// Append a newline unless the content is empty or already ends in one.
    ///
    /// In direct mode the newline is always written.
    pub fn ensure_newline(&mut self) {
        if self.is_direct() {
            self.write_direct(b"\n");
            self.continuation = false;
        } else if self.content.last().is_some_and(|&b| b != b'\n') {
            self.content.push(b'\n');
            self.continuation = false;
        }
    }

    /// Make non-empty content end in two newlines, so that a blank line
    /// follows it.
    ///
    /// Only the last two bytes are inspected: when the second-to-last byte is
    /// already a newline nothing is appended. In direct mode two newlines are
    /// always written.
    pub fn ensure_blank_line(&mut self) {
        if self.is_direct() {
            self.write_direct(b"\n\n");
            self.continuation = false;
            return;
        }
        let (before, last) = match self.content.as_slice() {
            [] => return,
            [last] => (None, *last),
            [.., before, last] => (Some(*before), *last),
        };
        if before == Some(b'\n') {
            return;
        }
        let fill: &[u8] = if last == b'\n' { b"\n" } else { b"\n\n" };
        self.content.extend_from_slice(fill);
        self.continuation = false;
    }

    /// [`ensure_newline`](Self::ensure_newline) if `cond` holds. Returns `cond`.
    pub fn ensure_newline_if(&mut self, cond: bool) -> bool {
        if cond {
            self.ensure_newline();
        }
        cond
    }

    /// [`ensure_newline`](Self::ensure_newline) if `cond` does not hold.
    /// Returns `cond`.
    pub fn ensure_newline_if_not(&mut self, cond: bool) -> bool {
        if !cond {
            self.ensure_newline();
        }
        cond
    }

    /// [`ensure_blank_line`](Self::ensure_blank_line) if `cond` holds.
    /// Returns `cond`.
    pub fn ensure_blank_line_if(&mut self, cond: bool) -> bool {
        if cond {
            self.ensure_blank_line();
        }
        cond
    }

    /// [`ensure_blank_line`](Self::ensure_blank_line) if `cond` does not hold.
    /// Returns `cond`.
    pub fn ensure_blank_line_if_not(&mut self, cond: bool) -> bool {
        if !cond {
            self.ensure_blank_line();
        }
        cond
    }

    /// Write a divider line through the regular write path.
    ///
    /// The fill is computed so that prefix, title and fill together span
    /// `options.width` columns, never going negative.
    pub fn divider(&mut self, options: &DividerOptions) {
        if options.width == 0 {
            return;
        }
        let title: &str = if options.title.is_empty() {
            "="
        } else {
            &options.title
        };
        let fill_len = options
            .width
            .saturating_sub(title.len())
            .saturating_sub(self.prefix.len());
        let fill: String = title
            .chars()
            .next()
            .map(|c| iter::repeat_n(c, fill_len).collect())
            .unwrap_or_default();

        self.write_template("{title}{fill}\n", format_args!("{title}{fill}\n"));
    }

    /// Send the buffered content to the destination and clear the buffer.
    ///
    /// With [`trim_trailing_space`](Self::trim_trailing_space) every line
    /// loses its trailing spaces, and with
    /// [`auto_newline`](Self::auto_newline) as well the output is newline
    /// terminated. Direct-mode and empty buffers have nothing to flush.
    ///
    /// # Errors
    ///
    /// Returns [`LineBufferError::Io`] if the destination fails. The content
    /// is kept in that case.
    pub fn flush(&mut self) -> Result<(), LineBufferError> {
        if self.is_direct() || self.content.is_empty() {
            return Ok(());
        }

        if self.trim_trailing_space {
            let mut out = Vec::with_capacity(self.content.len() + 1);
            trim_trailing_spaces(&self.content, self.auto_newline, &mut out);
            self.destination.write_all(&out)?;
            tracing::debug!(
                buffered = self.content.len(),
                written = out.len(),
                destination = self.destination.label(),
                "flushed trimmed content"
            );
        } else {
            self.destination.write_all(&self.content)?;
            tracing::debug!(
                buffered = self.content.len(),
                destination = self.destination.label(),
                "flushed content"
            );
        }

        self.clear();
        Ok(())
    }

    /// Drop the content and reserve the starting capacity again. Settings,
    /// the prefix and the continuation state are kept.
    pub fn clear(&mut self) {
        self.content = Vec::with_capacity(self.start_capacity);
    }

    /// Set the text written at the start of each logical line. An empty
    /// string turns prefixing off.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Current prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replace the destination used by [`flush`](Self::flush) and by
    /// direct-mode writes.
    ///
    /// # Errors
    ///
    /// Returns [`LineBufferError::MissingDestination`] for `None`, leaving
    /// the current destination in place.
    pub fn set_destination(&mut self, sink: Option<Sink>) -> Result<(), LineBufferError> {
        let sink = sink.ok_or(LineBufferError::MissingDestination)?;
        tracing::trace!(destination = sink.label(), "destination replaced");
        self.destination = sink;
        Ok(())
    }

    /// Current destination.
    #[must_use]
    pub fn destination(&self) -> &Sink {
        &self.destination
    }

    /// Buffered, not yet flushed text. Does not copy.
    #[must_use]
    pub fn content_view(&self) -> &BStr {
        self.content.as_bstr()
    }

    /// Buffered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Capacity of the underlying storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.content.capacity()
    }

    /// Capacity reserved after every flush or clear; `0` in direct mode.
    #[must_use]
    pub fn start_capacity(&self) -> usize {
        self.start_capacity
    }

    /// Whether writes bypass the buffer.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.start_capacity == 0
    }

    /// Raw byte writer into this buffer, for collaborators that expect
    /// [`std::io::Write`] or [`core::fmt::Write`].
    pub fn appender(&mut self) -> Appender<'_> {
        Appender::new(self)
    }

    pub(crate) fn append_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.is_direct() {
            self.destination.write_all(bytes)
        } else {
            self.content.extend_from_slice(bytes);
            Ok(())
        }
    }

    fn write_direct(&self, bytes: &[u8]) {
        if let Err(err) = self.destination.write_all(bytes) {
            tracing::warn!(
                %err,
                destination = self.destination.label(),
                dropped = bytes.len(),
                "direct write failed"
            );
        }
    }
}

impl Default for LineBuffer {
    /// A direct-mode buffer bound to the current default destination.
    fn default() -> Self {
        Self::new(0)
    }
}

/// `fmt::Write` over a byte vector. Unlike `io::Write::write_fmt`, a failing
/// `Display` surfaces as `Err` and the bytes written before it stay.
struct ByteSink<'a>(&'a mut Vec<u8>);

impl fmt::Write for ByteSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

fn format_into(out: &mut Vec<u8>, args: fmt::Arguments<'_>) {
    if fmt::Write::write_fmt(&mut ByteSink(out), args).is_err() {
        tracing::warn!("formatting trait returned an error, output may be partial");
    }
}
