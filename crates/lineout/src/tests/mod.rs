mod sessions;

use crate::{Capture, LineBuffer, Sink};

/// Buffer of the given size whose destination is a fresh [`Capture`].
pub(crate) fn captured(size: usize) -> (LineBuffer, Capture) {
    let capture = Capture::new();
    let mut buf = LineBuffer::new(size);
    buf.set_destination(Some(Sink::from(capture.clone())))
        .expect("sink is present");
    (buf, capture)
}
