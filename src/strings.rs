//! String helpers that work in characters rather than bytes.

use core::ops::Range;

/// Reverses `s` by Unicode scalar value.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Joins `words` with `separator` between each pair.
pub fn concat_words<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(word.as_ref());
    }
    out
}

/// The substring covering characters `range.start..range.end`, or `None`
/// if the range is inverted or runs past the end of `s`.
pub fn char_slice(s: &str, range: Range<usize>) -> Option<&str> {
    if range.start > range.end {
        return None;
    }
    let mut boundaries = s
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(core::iter::once(s.len()));
    let start = boundaries.nth(range.start)?;
    let end = if range.end == range.start {
        start
    } else {
        boundaries.nth(range.end - range.start - 1)?
    };
    s.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_by_char() {
        assert_eq!(reverse("Hello, World!"), "!dlroW ,olleH");
        assert_eq!(reverse("héllo"), "olléh");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn concat() {
        assert_eq!(concat_words(&["Hello", "World"], " "), "Hello World");
        assert_eq!(concat_words::<&str>(&[], " "), "");
        assert_eq!(concat_words(&[String::from("a")], "-"), "a");
    }

    #[test]
    fn slicing() {
        assert_eq!(char_slice("Hello, World!", 0..5), Some("Hello"));
        assert_eq!(char_slice("héllo", 1..3), Some("él"));
        assert_eq!(char_slice("abc", 3..3), Some(""));
        assert_eq!(char_slice("abc", 0..3), Some("abc"));
        assert_eq!(char_slice("abc", 2..5), None);
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = char_slice("abc", 2..1);
        assert_eq!(inverted, None);
    }
}
