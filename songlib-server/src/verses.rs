//! Verse pagination over song lyrics
//!
//! Verses are separated by a blank line (`"\n\n"`). Pages are 1-indexed.

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Split lyrics into verses
///
/// Empty lyrics have no verses.
pub fn split_verses(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split("\n\n").collect()
}

/// Parse a page or size parameter, falling back to `default` when the value
/// is absent, non-numeric or below 1
pub fn parse_page_param(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(default)
}

/// One page of verses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersePage<'a> {
    pub verses: Vec<&'a str>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

/// Select page `page` of `size` verses from `text`
///
/// A page past the end is empty rather than an error.
pub fn paginate(text: &str, page: usize, size: usize) -> VersePage<'_> {
    let page = page.max(1);
    let size = size.max(1);
    let all = split_verses(text);
    let total = all.len();

    let start = (page - 1).saturating_mul(size);
    let verses = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(size).min(total);
        all[start..end].to_vec()
    };

    VersePage {
        verses,
        total,
        page,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LYRICS: &str = "a\n\nb\n\nc";

    #[test]
    fn test_first_page_default_size() {
        let p = paginate(LYRICS, DEFAULT_PAGE, DEFAULT_PAGE_SIZE);
        assert_eq!(p.verses, vec!["a", "b"]);
        assert_eq!(p.total, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let p = paginate(LYRICS, 2, 2);
        assert_eq!(p.verses, vec!["c"]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let p = paginate(LYRICS, 3, 2);
        assert!(p.verses.is_empty());
        assert_eq!(p.total, 3);
        assert_eq!(p.page, 3);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let p = paginate(LYRICS, usize::MAX, usize::MAX);
        assert!(p.verses.is_empty());
    }

    #[test]
    fn test_single_newlines_stay_inside_a_verse() {
        let verses = split_verses("line one\nline two\n\nline three");
        assert_eq!(verses, vec!["line one\nline two", "line three"]);
    }

    #[test]
    fn test_empty_text_has_no_verses() {
        assert!(split_verses("").is_empty());
        assert_eq!(paginate("", 1, 2).total, 0);
    }

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param(Some("3"), DEFAULT_PAGE), 3);
        assert_eq!(parse_page_param(Some("0"), DEFAULT_PAGE), DEFAULT_PAGE);
        assert_eq!(parse_page_param(Some("-1"), DEFAULT_PAGE_SIZE), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_param(Some("abc"), DEFAULT_PAGE_SIZE), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_param(None, DEFAULT_PAGE), DEFAULT_PAGE);
    }
}
