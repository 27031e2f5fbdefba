//! Tests for build_string.

use crate::build_string;
use crate::text::Chars;

#[test]
fn build_string_collects_lines() {
    let s = build_string(|p| {
        p.println(&[&"Tho", &"mas ", &1976]);
        p.println(&[&"Mause ", &1971]);
    });

    assert_eq!(s, "Thomas 1976\nMause 1971\n");
}

#[test]
fn build_string_renders_numbers_and_text() {
    let s = build_string(|p| {
        p.println(&[&10, &" + ", &10, &" = ", &(10 + 10)]);
    });

    assert_eq!(s, "10 + 10 = 20\n");
}

#[test]
fn build_string_with_no_operations_is_empty() {
    assert_eq!(build_string(|_| {}), "");
}

#[test]
fn build_string_keeps_text_when_closed_inside() {
    let s = build_string(|p| {
        p.print(&[&'o', &Chars(&['k'])]);
        p.close().unwrap();
        p.print(&[&"ignored"]);
    });

    assert_eq!(s, "ok");
}
