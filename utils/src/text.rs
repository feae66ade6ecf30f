//! Helpers for text shown to users, mostly around Discord's length limits.

use std::borrow::Cow;

/// Truncates a string to the given `len` (in terms of [`char`], not [`u8`]).
/// If a truncation happens, the last kept character is replaced by an ellipsis.
///
/// # Panics
///
/// Panics if `len` is zero. `len` must be at least 1.
///
/// # Examples
///
/// ```
/// let long = utils::text::truncate("hello world", 11);
/// let short = utils::text::truncate("hello world", 6);
/// assert!(long == "hello world");
/// assert!(short == "hello…");
/// ```
pub fn truncate(text: &str, len: usize) -> Cow<'_, str> {
    match find_truncate_at(text, len) {
        None => Cow::Borrowed(text),
        Some(end_at) => {
            let mut result = String::with_capacity(end_at + '…'.len_utf8());
            result.push_str(&text[..end_at]);
            result.push('…');
            Cow::Owned(result)
        }
    }
}

/// In-place equivalent of [`truncate`].
pub fn truncate_in_place(text: &mut String, len: usize) {
    if let Some(end_at) = find_truncate_at(text, len) {
        text.truncate(end_at);
        text.push('…');
    }
}

/// Finds the byte index the text needs to be cut at so that, with a trailing
/// ellipsis, it holds at most `len` characters. [`None`] if it already fits.
fn find_truncate_at(text: &str, len: usize) -> Option<usize> {
    assert!(len >= 1, "cannot truncate to less than 1 character");

    if text.len() <= len {
        return None;
    }

    let mut indices = text.char_indices();
    let (end_at, _) = indices.nth(len - 1)?;
    indices.next().and(Some(end_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_is_borrowed() {
        assert!(matches!(truncate("hello", 5), Cow::Borrowed("hello")));
        assert!(matches!(truncate("hello", 32), Cow::Borrowed("hello")));
    }

    #[test]
    fn truncate_long_appends_ellipsis() {
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("hello world", 10), "hello wor…");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert_eq!(truncate("éééé", 4), "éééé");
        assert_eq!(truncate("ééééé", 4), "ééé…");
    }

    #[test]
    fn truncate_in_place_matches() {
        let mut text = String::from("hello world");
        truncate_in_place(&mut text, 11);
        assert_eq!(text, "hello world");
        truncate_in_place(&mut text, 6);
        assert_eq!(text, "hello…");
    }

    #[test]
    #[should_panic = "cannot truncate"]
    fn truncate_to_zero_panics() {
        let _ = truncate("hello", 0);
    }
}
