use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Limit a string to `max_chars` characters.
///
/// Longer strings keep their first `max_chars - 1` characters followed by `…`,
/// so the result is exactly `max_chars` characters long.
///
/// # Examples
/// ```
/// use utilkit_core::utils::text::limit;
/// assert_eq!(limit("Subscribe to technoblade", 20), "Subscribe to techno…");
/// assert_eq!(limit("short", 20), "short");
/// ```
pub fn limit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut result: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    result.push(ELLIPSIS);
    result
}

/// Like [`limit`], but measured in terminal display columns.
pub fn limit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit() {
        assert_eq!(limit("Subscribe to technoblade", 20), "Subscribe to techno…");
        assert_eq!(limit("Subscribe to technoblade", 20).chars().count(), 20);
        assert_eq!(limit("Hello", 5), "Hello");
        assert_eq!(limit("Hello", 10), "Hello");
        assert_eq!(limit("Hello", 1), "…");
        assert_eq!(limit("Hello", 0), "…");
        assert_eq!(limit("", 0), "");
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        assert_eq!(limit("héllo wörld", 6), "héllo…");
        assert_eq!(limit("日本語テキスト", 3), "日本…");
    }

    #[test]
    fn test_limit_width() {
        assert_eq!(limit_width("Hello", 10), "Hello");
        assert_eq!(limit_width("Hello World!", 8), "Hello W…");
        // Wide characters take two columns each
        assert_eq!(limit_width("日本語テキスト", 7), "日本語…");
        assert_eq!(limit_width("", 5), "");
    }
}
