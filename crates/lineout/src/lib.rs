//! A growable text buffer with line discipline.
//!
//! [`LineBuffer`] accumulates formatted text and keeps the line structure of
//! that text deterministic no matter how the individual writes were split:
//! it can prefix every logical line, terminate writes with a newline, make
//! sure a newline or a blank line ends the content, and strip trailing spaces
//! from every line when the buffer is flushed to its [`Sink`].
//!
//! A template that ends in a space marks a *continuation*: the next write is
//! glued to it without a prefix, and auto-newline leaves it open.
//!
//! ```rust
//! use lineout::{Capture, DividerOptions, LineBuffer, LineBufferOptions, Sink, lprint};
//!
//! let out = Capture::new();
//! let mut buf = LineBuffer::with_options(
//!     1,
//!     LineBufferOptions {
//!         auto_newline: true,
//!         trim_trailing_space: true,
//!         ..Default::default()
//!     },
//! );
//! buf.set_destination(Some(Sink::from(out.clone()))).unwrap();
//!
//! buf.divider(&DividerOptions::new(10, "# "));
//! lprint!(buf, "total: ");
//! lprint!(buf, "{}  ", 42);
//! lprint!(buf, "");
//! buf.flush().unwrap();
//!
//! assert_eq!(out.contents(), "# ########\ntotal: 42\n");
//! ```
mod appender;
pub mod defaults;
mod error;
mod line_buffer;
mod options;
mod sink;
mod trim;

#[cfg(test)]
mod tests;

pub use appender::Appender;
pub use error::LineBufferError;
pub use line_buffer::LineBuffer;
pub use options::{DividerOptions, LineBufferOptions};
pub use sink::{Capture, Sink};

#[cfg(feature = "fuzzing")]
pub use trim::trim_trailing_spaces;

/// Formatted write into a [`LineBuffer`].
///
/// The literal is handed over twice: once unexpanded, so the buffer can
/// inspect its first and last characters, and once as `format_args!`.
///
/// ```rust
/// use lineout::{LineBuffer, lprint};
///
/// let mut buf = LineBuffer::new(1);
/// buf.set_prefix("> ");
/// lprint!(buf, "{} + {} = ", 1, 2);
/// lprint!(buf, "{}\n", 1 + 2);
/// assert_eq!(buf.content_view(), "> 1 + 2 = 3\n");
/// ```
#[macro_export]
macro_rules! lprint {
    ($buf:expr, $template:literal $($arg:tt)*) => {
        $buf.write_template($template, ::core::format_args!($template $($arg)*))
    };
}

/// [`lprint!`] gated on a condition; evaluates to the condition.
///
/// ```rust
/// use lineout::{LineBuffer, lprint_if};
///
/// let mut buf = LineBuffer::new(1);
/// let hit = lprint_if!(buf, 3 < 4, "{} is less\n", 3);
/// assert!(hit);
/// assert_eq!(buf.content_view(), "3 is less\n");
/// ```
#[macro_export]
macro_rules! lprint_if {
    ($buf:expr, $cond:expr, $template:literal $($arg:tt)*) => {
        $buf.write_if($cond, $template, ::core::format_args!($template $($arg)*))
    };
}

/// [`lprint!`] gated on the negation of a condition; evaluates to the
/// condition.
#[macro_export]
macro_rules! lprint_if_not {
    ($buf:expr, $cond:expr, $template:literal $($arg:tt)*) => {
        $buf.write_if_not($cond, $template, ::core::format_args!($template $($arg)*))
    };
}
