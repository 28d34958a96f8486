#![allow(missing_docs, dead_code)]

use lineout::{Capture, LineBuffer, Sink};

/// Buffer of the given size flushing into a fresh capture.
pub fn captured(size: usize) -> (LineBuffer, Capture) {
    let capture = Capture::new();
    let mut buf = LineBuffer::new(size);
    buf.set_destination(Some(Sink::from(capture.clone())))
        .expect("sink is present");
    (buf, capture)
}

/// Number every line and fence it with `|` so blank lines and trailing
/// spaces stay visible in snapshots.
pub fn numbered(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:02}|{line}|", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
