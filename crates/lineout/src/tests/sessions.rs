use bstr::ByteSlice;

use super::captured;
use crate::{DividerOptions, lprint, lprint_if, lprint_if_not};

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

#[test]
fn auto_newline_joins_continuations() {
    let (mut buf, _) = captured(1);
    buf.auto_newline = true;
    let mut joiner = "-- now all joined: ";
    for _ in 0..2 {
        lprint!(buf, "[1] This should be a separate line [1]");
        lprint!(buf, "[2] This should be a separate line too");
        lprint!(buf, "[3] This is leading part of the ");
        lprint!(buf, "whole line [3].");
        buf.write_text(joiner);
        joiner = "\n";
        buf.auto_newline = false;
    }
    assert_eq!(count_newlines(buf.as_bytes()), 4);
}

#[test]
fn prefix_with_and_without_auto_newline() {
    let (mut buf, _) = captured(1);
    buf.set_prefix("Anl: ");
    buf.auto_newline = true;
    let mut joiner = "-- now all joined: ";
    for _ in 0..2 {
        lprint!(buf, "[1] This should be a separate line [1] with prefix");
        lprint!(buf, "[2] This should be a separate line too");
        lprint!(buf, "[3] This is leading part of the ");
        lprint!(buf, "whole line [3].");
        lprint!(buf, "\n!!! But this line should have no prefix as it starts with a newline!");
        buf.set_prefix("NoAnl: ");
        buf.write_text(joiner);
        joiner = "\n";
        buf.auto_newline = false;
    }
    assert_eq!(count_newlines(buf.as_bytes()), 7);
}

#[test]
fn dividers_fill_to_width() {
    let (mut buf, _) = captured(1);
    buf.divider(&DividerOptions::default());
    buf.divider(&DividerOptions::with_width(40));
    buf.divider(&DividerOptions::new(60, "~~~ sixty tildes "));
    buf.set_prefix("Pfx: ");
    buf.divider(&DividerOptions::default());
    buf.divider(&DividerOptions::with_width(40));
    buf.divider(&DividerOptions::new(60, "~~~ prefixed sixty tildes "));
    buf.divider(&DividerOptions::new(0, "~~~ do not print "));
    buf.divider(&DividerOptions::new(10, "~~~ *ten* prefixed tildes "));
    buf.divider(&DividerOptions::new(30, ""));
    assert_eq!(buf.len(), 427);
    for line in buf.content_view().lines().take(6) {
        assert!(matches!(line.len(), 79 | 40 | 60), "{:?}", line);
    }
}

#[test]
fn conditional_macros_evaluate_to_the_condition() {
    let (mut buf, out) = captured(1);
    let (x, y) = (3, 4);
    assert!(!lprint_if!(buf, x > y, "Not printed!"));
    assert!(lprint_if_not!(buf, x < y, "Not printed!"));
    assert!(buf.is_empty());
    assert!(lprint_if!(buf, x < y, "{} < {}\n", x, y));
    assert!(!lprint_if_not!(buf, x > y, "{} > {} is false\n", x, y));
    buf.flush().unwrap();
    assert_eq!(out.contents(), "3 < 4\n3 > 4 is false\n");
}

#[test]
fn rudimentary_session() {
    let (mut buf, out) = captured(1);
    let m = "This should print to our buffer!\n";
    buf.write_text(m);
    assert_eq!(buf.len(), m.len());
    buf.ensure_newline();
    buf.ensure_blank_line();
    buf.ensure_newline_if(true);
    buf.set_prefix("Pfx2: ");
    lprint!(buf, "This should print out with prefix!\n\n");
    buf.flush().unwrap();
    assert!(buf.is_empty());
    assert_eq!(
        out.contents(),
        "This should print to our buffer!\n\nPfx2: This should print out with prefix!\n\n"
    );
}

#[test]
fn fmt_write_goes_through_the_appender() {
    let (mut buf, _) = captured(1);
    core::fmt::Write::write_str(&mut buf.appender(), "via fmt").unwrap();
    assert_eq!(buf.content_view(), "via fmt");
}
