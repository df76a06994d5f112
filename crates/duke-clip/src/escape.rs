//! Quote escaping shared by the decoder and encoder.
//!
//! Inside a quoted span a literal `"` is written as `""`. [`escape`] and
//! [`unescape`] are exact inverses: `unescape(&escape(s)) == s` for every `s`.

use std::borrow::Cow;
use std::iter::Peekable;

/// The quote character opening and closing a quoted span
pub const QUOTE: char = '"';

const ESCAPED_QUOTE: &str = "\"\"";

/// Double every literal quote character.
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.contains(QUOTE) {
        Cow::Owned(s.replace(QUOTE, ESCAPED_QUOTE))
    } else {
        Cow::Borrowed(s)
    }
}

/// Collapse each `""` pair back to a single `"`, scanning left to right.
///
/// A quote that is not part of a pair is kept as is.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPED_QUOTE) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == QUOTE {
            take_escaped_quote(&mut chars);
        }
    }
    Cow::Owned(out)
}

/// Called right after a quote has been read: if the next character is the
/// second quote of an escaped pair, consume it and return `true`.
pub(crate) fn take_escaped_quote<I>(chars: &mut Peekable<I>) -> bool
where
    I: Iterator<Item = char>,
{
    chars.next_if_eq(&QUOTE).is_some()
}

/// Wrap a cell value in quotes, escaping any quotes it contains.
pub fn quote(s: &str) -> String {
    let escaped = escape(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push(QUOTE);
    out.push_str(&escaped);
    out.push(QUOTE);
    out
}
