use unicode_segmentation::UnicodeSegmentation;

pub mod contact_email;
pub mod contact_message;
pub mod contact_name;
pub mod contact_subject;
pub mod contact_submission;
pub mod validation;

/// Counts grapheme clusters, ignoring surrounding whitespace.
pub(crate) fn visible_length(s: &str) -> usize {
    s.trim().graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::visible_length;

    #[test]
    fn surrounding_whitespace_is_not_counted() {
        assert_eq!(visible_length("  Jo \n"), 2);
        assert_eq!(visible_length("   "), 0);
    }

    #[test]
    fn combined_characters_count_once() {
        // "e" followed by a combining acute accent.
        assert_eq!(visible_length("e\u{301}e\u{301}"), 2);
    }
}
