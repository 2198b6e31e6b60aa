/// A placeholder segment as written in a route declaration.
///
/// Five forms are recognised, where `T` is `[A-Za-z0-9]+` and the label is
/// `[A-Za-z0-9_-]+`:
///
/// - `{T}`
/// - `{T label}`
/// - `{T} label`
/// - `{T...}`, `{T ...}`, `{T...} label` (spaces around the ellipsis optional)
/// - `{T... label}`, `{T ... label}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicSegment<'a> {
    pub type_token: &'a str,
    pub array: bool,
    pub label: Option<&'a str>,
}

const ELLIPSIS: &[u8] = b"...";

/// Returns `None` for anything that is not one of the dynamic forms; such
/// segments are literals.
#[tracing::instrument(level = "trace", fields(segment=%seg))]
pub fn parse_segment(seg: &str) -> Option<DynamicSegment<'_>> {
    let mut scanner = SegmentScanner::new(seg);
    if !scanner.eat(b'{') {
        return None;
    }

    let type_token = scanner.take_while(|b| b.is_ascii_alphanumeric());
    if type_token.is_empty() {
        return None;
    }

    let spaces = scanner.skip_spaces();

    if scanner.eat_slice(ELLIPSIS) {
        if scanner.eat(b'}') {
            scanner.skip_spaces();
            let label = scanner.take_while(is_label_byte);
            return scanner.finish(type_token, true, label);
        }

        if scanner.skip_spaces() == 0 {
            return None;
        }
        let label = scanner.take_while(is_label_byte);
        if !scanner.eat(b'}') {
            return None;
        }
        return scanner.finish(type_token, true, label);
    }

    if scanner.eat(b'}') {
        if spaces > 0 {
            return None;
        }
        if scanner.at_end() {
            return Some(DynamicSegment {
                type_token,
                array: false,
                label: None,
            });
        }
        if scanner.skip_spaces() == 0 {
            return None;
        }
        let label = scanner.take_while(is_label_byte);
        if label.is_empty() {
            return None;
        }
        return scanner.finish(type_token, false, label);
    }

    if spaces == 0 {
        return None;
    }

    let label = scanner.take_while(is_label_byte);
    if label.is_empty() || !scanner.eat(b'}') {
        return None;
    }
    scanner.finish(type_token, false, label)
}

#[inline]
fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

struct SegmentScanner<'a> {
    seg: &'a str,
    pos: usize,
}

impl<'a> SegmentScanner<'a> {
    fn new(seg: &'a str) -> Self {
        Self { seg, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.seg.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.seg.len()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_slice(&mut self, expected: &[u8]) -> bool {
        if self.seg.as_bytes()[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) -> usize {
        self.take_while(|b| b == b' ').len()
    }

    // only ASCII predicates are used, so slicing stays on char boundaries
    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.seg[start..self.pos]
    }

    fn finish(
        &self,
        type_token: &'a str,
        array: bool,
        label: &'a str,
    ) -> Option<DynamicSegment<'a>> {
        if !self.at_end() {
            return None;
        }
        Some(DynamicSegment {
            type_token,
            array,
            label: (!label.is_empty()).then_some(label),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(
        type_token: &'static str,
        label: Option<&'static str>,
    ) -> Option<DynamicSegment<'static>> {
        Some(DynamicSegment {
            type_token,
            array: false,
            label,
        })
    }

    #[test]
    fn parses_bare_placeholder() {
        assert_eq!(parse_segment("{Integer}"), scalar("Integer", None));
    }

    #[test]
    fn parses_inline_and_trailing_labels() {
        assert_eq!(parse_segment("{Integer id}"), scalar("Integer", Some("id")));
        assert_eq!(parse_segment("{String} user_name"), scalar("String", Some("user_name")));
    }

    #[test]
    fn parses_array_forms() {
        for (text, label) in [
            ("{Integer...}", None),
            ("{Integer ...}", None),
            ("{Integer   ...}", None),
            ("{Integer...} ids", Some("ids")),
            ("{Integer...}ids", Some("ids")),
            ("{Integer ...} ids", Some("ids")),
            ("{Integer... ids}", Some("ids")),
            ("{Integer ... ids}", Some("ids")),
            ("{Integer ... }", None),
        ] {
            let parsed = parse_segment(text).unwrap_or_else(|| panic!("{text:?} should parse"));
            assert_eq!(parsed.type_token, "Integer", "{text:?}");
            assert!(parsed.array, "{text:?}");
            assert_eq!(parsed.label, label, "{text:?}");
        }
    }

    #[test]
    fn near_misses_are_literals() {
        for text in [
            "users",
            "{}",
            "{Integer",
            "Integer}",
            "{Integer }",
            "{Integer}x",
            "{Integer} ",
            "{Integer...ids}",
            "{Integer..}",
            "{Int-eger}",
            "{Integer id} extra",
            "x{Integer}",
        ] {
            assert_eq!(parse_segment(text), None, "{text:?} should be literal");
        }
    }

    #[test]
    fn non_ascii_text_is_literal() {
        assert_eq!(parse_segment("{Intéger}"), None);
        assert_eq!(parse_segment("こんにちは"), None);
    }
}
