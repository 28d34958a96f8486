#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lineout::{Capture, DividerOptions, LineBuffer, Sink, trim_trailing_spaces};

#[derive(Arbitrary, Debug)]
enum Op {
    Write(String),
    EnsureNewline,
    EnsureBlankLine,
    Divider(u8, String),
    Prefix(String),
    AutoNewline(bool),
}

#[derive(Arbitrary, Debug)]
struct Session {
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let out = Capture::new();
    let mut buf = LineBuffer::new(1);
    buf.trim_trailing_space = true;
    buf.set_destination(Some(Sink::from(out.clone())))
        .expect("sink is present");

    for op in session.ops {
        match op {
            Op::Write(text) => buf.write_text(&text),
            Op::EnsureNewline => buf.ensure_newline(),
            Op::EnsureBlankLine => {
                buf.ensure_blank_line();
                let once = buf.as_bytes().to_vec();
                buf.ensure_blank_line();
                assert_eq!(buf.as_bytes(), once.as_slice(), "blank line not idempotent");
            }
            Op::Divider(width, title) => {
                buf.divider(&DividerOptions::new(usize::from(width), title));
            }
            Op::Prefix(prefix) => buf.set_prefix(prefix),
            Op::AutoNewline(on) => buf.auto_newline = on,
        }
    }

    let auto_newline = buf.auto_newline;
    buf.flush().expect("capture never fails");
    assert!(buf.is_empty());

    let flushed = out.to_vec();
    assert!(
        !flushed.windows(2).any(|w| w == b" \n"),
        "space before newline survived: {flushed:?}"
    );
    let mut again = Vec::new();
    trim_trailing_spaces(&flushed, auto_newline, &mut again);
    if !flushed.is_empty() {
        assert_eq!(again, flushed, "trim is not a fixed point");
    }
});
