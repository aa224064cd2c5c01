use alloc::borrow::Cow;
use alloc::string::String;

use crate::language::{LineProcessor, RealLineCounter};
use crate::stats::AnalysisResult;

/// Count physical and real lines in a byte slice.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Invalid UTF-8 sequences are
/// dropped, so they never fail the count and never make a line count as code.
#[must_use]
pub fn count_bytes(input: &[u8]) -> AnalysisResult {
    let mut counter = RealLineCounter::new();
    let mut lines = 0;

    for line_bytes in split_lines(input) {
        lines += 1;
        counter.process_line(&decode_line(line_bytes));
    }

    AnalysisResult {
        lines,
        real_lines: counter.real_lines(),
        ends_in_block_comment: counter.is_in_block_comment(),
    }
}

/// Split on `\n`, `\r\n` and a bare `\r`, removing the terminators.
///
/// A trailing terminator does not produce an extra empty line.
#[must_use]
pub const fn split_lines(input: &[u8]) -> SplitLines<'_> {
    SplitLines { rest: input }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.iter().position(|&b| b == b'\n' || b == b'\r') else {
            let line = self.rest;
            self.rest = &[];
            return Some(line);
        };
        let line = &self.rest[..end];
        let crlf = self.rest[end] == b'\r' && self.rest.get(end + 1) == Some(&b'\n');
        self.rest = &self.rest[end + if crlf { 2 } else { 1 }..];
        Some(line)
    }
}

/// バイト列を文字列にする（不正な UTF-8 は捨てる）
#[must_use]
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match core::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(
            bytes
                .utf8_chunks()
                .map(|chunk| chunk.valid())
                .collect::<String>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(count_bytes(b""), AnalysisResult::new());
    }

    #[test]
    fn test_last_line_without_newline() {
        let r = count_bytes(b"int a;\nint b;");
        assert_eq!(r.lines, 2);
        assert_eq!(r.real_lines, 2);
    }

    #[test]
    fn test_crlf_input() {
        let r = count_bytes(b"/* a\r\n*/ int x;\r\n// c\r\n\r\n");
        assert_eq!(r.lines, 4);
        assert_eq!(r.real_lines, 1);
        assert!(!r.ends_in_block_comment);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let r = count_bytes(b"char c = '\xff';\n/* \xfe\xfd */\n");
        assert_eq!(r.lines, 2);
        assert_eq!(r.real_lines, 1);
    }

    #[test]
    fn test_ends_in_block_comment() {
        let r = count_bytes(b"int x;\n/* license\n * text\n");
        assert_eq!(r.real_lines, 1);
        assert!(r.ends_in_block_comment);
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let r = count_bytes(b"\xff\n\xfe\xfd// note\n");
        assert_eq!(r.lines, 2);
        assert_eq!(r.real_lines, 0);
        let r = count_bytes(b"  \x80\x81  \n/*\xc3*/\n");
        assert_eq!(r.real_lines, 0);
    }

    #[test]
    fn test_bare_carriage_return_ends_a_line() {
        let r = count_bytes(b"int a;\rint b;\r");
        assert_eq!(r.lines, 2);
        assert_eq!(r.real_lines, 2);
        let r = count_bytes(b"/* a\r*/ int x;\r// c");
        assert_eq!(r.lines, 3);
        assert_eq!(r.real_lines, 1);
    }

    #[test]
    fn test_split_lines() {
        let parts: alloc::vec::Vec<&[u8]> = split_lines(b"a\r\nb\rc\n\r\nd").collect();
        assert_eq!(parts, [&b"a"[..], &b"b"[..], &b"c"[..], &b""[..], &b"d"[..]]);
        assert_eq!(split_lines(b"a\r\r\n").count(), 2);
        assert_eq!(split_lines(b"").count(), 0);
        assert_eq!(split_lines(b"\n").collect::<alloc::vec::Vec<_>>(), [&b""[..]]);
    }

    #[test]
    fn test_decode_line() {
        assert!(matches!(decode_line(b"int x;"), Cow::Borrowed("int x;")));
        assert_eq!(decode_line(b"a\xffb\xe2\x82"), "ab");
        assert_eq!(decode_line(b"\xe6\x97\xa5\xff"), "\u{65e5}");
    }
}
