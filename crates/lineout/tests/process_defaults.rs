#![expect(missing_docs)]

use lineout::{Capture, LineBuffer, Sink, defaults, lprint};

// Process-wide defaults are shared by every test in this binary, so the
// whole lifecycle is exercised from a single test.
#[test]
fn defaults_apply_to_buffers_created_afterwards() {
    assert_eq!(defaults::min_size(), defaults::DEFAULT_MIN_SIZE);

    let before = LineBuffer::new(1);
    assert!(before.capacity() >= defaults::DEFAULT_MIN_SIZE);

    let captured = Capture::new();
    defaults::set_default_destination(Some(Sink::from(captured.clone())));
    defaults::set_min_size(4096);

    let mut buffered = LineBuffer::new(1);
    assert_eq!(buffered.start_capacity(), 4096);
    assert!(buffered.destination().same_as(&defaults::default_destination()));
    lprint!(buffered, "buffered\n");
    assert!(captured.is_empty());
    buffered.flush().unwrap();
    assert!(buffered.capacity() >= 4096);

    let mut direct = LineBuffer::default();
    lprint!(direct, "direct\n");
    direct.ensure_blank_line();
    // Direct mode cannot look back, so the blank line is written in full.
    assert_eq!(captured.contents(), "buffered\ndirect\n\n\n");

    // Existing buffers keep what they read at construction.
    assert_eq!(before.start_capacity(), defaults::DEFAULT_MIN_SIZE);
    assert!(!before.destination().same_as(buffered.destination()));

    defaults::set_min_size(0);
    assert_eq!(defaults::min_size(), 1);
    assert_eq!(LineBuffer::new(1).start_capacity(), 1);

    defaults::set_default_destination(None);
    defaults::set_min_size(defaults::DEFAULT_MIN_SIZE);
    let restored = LineBuffer::new(1);
    assert!(!restored.destination().same_as(buffered.destination()));
}
