//! Trailing-space removal applied by [`LineBuffer::flush`](crate::LineBuffer::flush).
//!
//! Only the ASCII space is considered. Every run of spaces that directly
//! precedes a newline is dropped, as is the run of spaces at the very end of
//! the input. A newline preceded by anything other than a space is never
//! touched.
use bstr::ByteSlice;

const SPACE_NL: &[u8] = b" \n";

/// Append `input` to `out` with trailing spaces removed from every line.
///
/// With `auto_newline`, a final newline is appended when the trimmed tail
/// does not already end in one. An input made only of spaces therefore
/// becomes a single `"\n"`.
pub fn trim_trailing_spaces(mut input: &[u8], auto_newline: bool, out: &mut Vec<u8>) {
    out.reserve(input.len() + usize::from(auto_newline));

    while let Some(at) = input.find(SPACE_NL) {
        // `input[at]` is a space, so the segment always loses at least it.
        out.extend_from_slice(strip_spaces(&input[..at]));
        // The newline stays at the front of the rest and heads the next line.
        input = &input[at + 1..];
    }

    let tail = strip_spaces(input);
    out.extend_from_slice(tail);
    if auto_newline && tail.last() != Some(&b'\n') {
        out.push(b'\n');
    }
}

fn strip_spaces(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != b' ').map_or(0, |at| at + 1);
    &bytes[..end]
}
