//! Pagination window over a list's entries.

use std::fmt;

/// A `[start, start + count)` window requested by a reader.
///
/// `count` defaults to the full list length when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub start: usize,
    pub count: Option<usize>,
}

impl PageRequest {
    #[must_use]
    pub fn new(start: usize, count: Option<usize>) -> Self {
        Self { start, count }
    }

    /// Slice `items` to this window.
    ///
    /// The end is clamped to `items.len()`; a window starting at or past the
    /// end yields an empty slice.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let total = items.len();
        let start = self.start.min(total);
        let end = self.requested_end(total).min(total);
        &items[start..end]
    }

    /// The `Content-Range` advertised for this window over `total` entries.
    ///
    /// The range echoes the request and is not clamped to what was returned.
    #[must_use]
    pub fn content_range(&self, total: usize) -> ContentRange {
        ContentRange {
            start: self.start,
            end: self.requested_end(total),
            total,
        }
    }

    fn requested_end(&self, total: usize) -> usize {
        self.start.saturating_add(self.count.unwrap_or(total))
    }
}

/// Value of the `Content-Range: items <start>-<end>/<total>` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "items {}-{}/{}", self.start, self.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: [&str; 3] = ["555-0100", "555-0200", "555-0300"];

    #[test]
    fn should_return_everything_by_default() {
        let page = PageRequest::default();
        assert_eq!(page.window(&ENTRIES), &ENTRIES);
    }

    #[test]
    fn should_return_contiguous_subsequence() {
        for start in 0..=ENTRIES.len() {
            for count in 0..=ENTRIES.len() - start {
                let page = PageRequest::new(start, Some(count));
                assert_eq!(page.window(&ENTRIES), &ENTRIES[start..start + count]);
            }
        }
    }

    #[test]
    fn should_return_empty_when_start_past_end() {
        assert!(PageRequest::new(3, Some(1)).window(&ENTRIES).is_empty());
        assert!(PageRequest::new(10, None).window(&ENTRIES).is_empty());
    }

    #[test]
    fn should_clamp_when_count_overruns() {
        let page = PageRequest::new(1, Some(50));
        assert_eq!(page.window(&ENTRIES), &ENTRIES[1..]);
    }

    #[test]
    fn should_not_overflow_on_huge_count() {
        let page = PageRequest::new(2, Some(usize::MAX));
        assert_eq!(page.window(&ENTRIES), &ENTRIES[2..]);
        assert_eq!(page.content_range(3).end, usize::MAX);
    }

    #[test]
    fn should_format_requested_window_as_content_range() {
        let range = PageRequest::new(1, Some(1)).content_range(3);
        assert_eq!(range.to_string(), "items 1-2/3");
    }

    #[test]
    fn should_not_clamp_content_range_to_total() {
        let range = PageRequest::new(2, Some(10)).content_range(3);
        assert_eq!(range.to_string(), "items 2-12/3");
    }

    #[test]
    fn should_default_content_range_count_to_total() {
        let range = PageRequest::default().content_range(3);
        assert_eq!(range.to_string(), "items 0-3/3");
    }
}
