use std::borrow::Cow;

/// Line-discipline settings applied to a [`LineBuffer`](crate::LineBuffer)
/// at construction time.
///
/// The same knobs stay reachable afterwards: `auto_newline` and
/// `trim_trailing_space` are public fields of the buffer and the prefix is
/// changed with [`LineBuffer::set_prefix`](crate::LineBuffer::set_prefix).
///
/// # Examples
///
/// ```rust
/// use lineout::{LineBuffer, LineBufferOptions};
///
/// let buf = LineBuffer::with_options(
///     1,
///     LineBufferOptions {
///         trim_trailing_space: true,
///         prefix: "> ".into(),
///         ..Default::default()
///     },
/// );
/// assert_eq!(buf.prefix(), "> ");
/// ```
///
/// # Default
///
/// Both flags default to `false` and the prefix to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBufferOptions {
    /// Terminate every write whose template lacks a trailing newline.
    ///
    /// A template ending in a space is a continuation and is left open.
    /// Only buffered mode can look back at what was written, so this flag
    /// has no effect on a direct-mode buffer.
    ///
    /// # Default
    ///
    /// `false`
    pub auto_newline: bool,

    /// Strip spaces that precede each newline, and the end of the content,
    /// when the buffer is flushed.
    ///
    /// # Default
    ///
    /// `false`
    pub trim_trailing_space: bool,

    /// Text written in front of every new logical line.
    ///
    /// # Default
    ///
    /// `""`
    pub prefix: String,
}

/// Shape of a divider line written by
/// [`LineBuffer::divider`](crate::LineBuffer::divider).
///
/// The line is `title` followed by repetitions of the first character of
/// `title`, so that the printed line (prefix included) is `width` columns.
///
/// ```rust
/// use lineout::{DividerOptions, LineBuffer};
///
/// let mut buf = LineBuffer::new(1);
/// buf.divider(&DividerOptions::new(12, "~~ x "));
/// assert_eq!(buf.content_view(), "~~ x ~~~~~~~\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerOptions {
    /// Total width of the line, including an active prefix. `0` disables
    /// the divider entirely.
    ///
    /// # Default
    ///
    /// `79`
    pub width: usize,

    /// Leading text of the line. Its first character is used as the fill.
    /// An empty title is replaced by `"="`.
    ///
    /// # Default
    ///
    /// `"-"`
    pub title: Cow<'static, str>,
}

impl DividerOptions {
    /// Default divider width.
    pub const DEFAULT_WIDTH: usize = 79;

    /// Build options from a width and a title.
    #[must_use]
    pub fn new(width: usize, title: impl Into<Cow<'static, str>>) -> Self {
        Self {
            width,
            title: title.into(),
        }
    }

    /// Default title with a custom width.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

impl Default for DividerOptions {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            title: Cow::Borrowed("-"),
        }
    }
}
