//! Text layout cache
//!
//! Greedy character wrapping with a single most-recent entry, so the reply text
//! is measured once per change instead of once per frame.

use std::sync::Arc;

use tracing::trace;

use super::measure::TextMeasure;

/// Cache key: the text plus the exact bit patterns of width and font size
#[derive(Debug, Clone, PartialEq, Eq)]
struct LayoutKey {
    text: String,
    max_width_bits: u32,
    font_size_bits: u32,
}

impl LayoutKey {
    fn matches(&self, text: &str, max_width: f32, font_size: f32) -> bool {
        self.max_width_bits == max_width.to_bits()
            && self.font_size_bits == font_size.to_bits()
            && self.text == text
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    key: LayoutKey,
    lines: Arc<Vec<String>>,
}

/// Single-entry wrap cache
#[derive(Debug, Default)]
pub struct TextLayoutCache {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl TextLayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `text` into lines no wider than `max_width`.
    ///
    /// Returns the cached lines when the key matches the previous call.
    pub fn wrap(
        &mut self,
        text: &str,
        max_width: f32,
        font_size: f32,
        measure: &dyn TextMeasure,
    ) -> Arc<Vec<String>> {
        if let Some(entry) = &self.entry {
            if entry.key.matches(text, max_width, font_size) {
                self.hits += 1;
                return Arc::clone(&entry.lines);
            }
        }

        self.misses += 1;
        let lines = Arc::new(wrap_greedy(text, max_width, font_size, measure));
        trace!(
            chars = text.len(),
            lines = lines.len(),
            max_width,
            "Text layout recomputed"
        );
        self.entry = Some(CacheEntry {
            key: LayoutKey {
                text: text.to_string(),
                max_width_bits: max_width.to_bits(),
                font_size_bits: font_size.to_bits(),
            },
            lines: Arc::clone(&lines),
        });
        lines
    }

    /// Drop the cached entry; the next `wrap` recomputes
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of calls answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that had to re-measure
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Greedy per-character wrap.
///
/// A character that alone exceeds `max_width` still gets its own line.
/// `'\n'` always ends the current line; `'\r'` is dropped.
pub fn wrap_greedy(
    text: &str,
    max_width: f32,
    font_size: f32,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for ch in text.chars() {
        match ch {
            '\r' => continue,
            '\n' => {
                lines.push(std::mem::take(&mut current));
                current_chars = 0;
                continue;
            }
            _ => {}
        }

        current.push(ch);
        current_chars += 1;
        if current_chars > 1 && measure.measure(&current, font_size) > max_width {
            current.pop();
            lines.push(std::mem::take(&mut current));
            current.push(ch);
            current_chars = 1;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingMeasure;
    use crate::text::FixedWidthMeasure;

    #[test]
    fn test_wrap_respects_width() {
        let measure = FixedWidthMeasure::new(1.0);
        let lines = wrap_greedy("abcdefghij", 4.0, 1.0, &measure);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        for line in &lines {
            assert!(measure.measure(line, 1.0) <= 4.0);
        }
    }

    #[test]
    fn test_oversized_char_gets_own_line() {
        let measure = FixedWidthMeasure::new(1.0);
        // Every char is 3 wide, limit is 2
        let lines = wrap_greedy("xyz", 2.0, 3.0, &measure);
        assert_eq!(lines, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_line_length_restarts_after_break() {
        let measure = FixedWidthMeasure::new(1.0);
        let lines = wrap_greedy("x\nyz\nw", 2.0, 3.0, &measure);
        assert_eq!(lines, vec!["x", "y", "z", "w"]);

        let lines = wrap_greedy("abcde\nfgh", 3.0, 1.0, &measure);
        assert_eq!(lines, vec!["abc", "de", "fgh"]);
    }

    #[test]
    fn test_newlines_split_paragraphs() {
        let measure = FixedWidthMeasure::new(1.0);
        let lines = wrap_greedy("ab\n\ncd\r\n", 10.0, 1.0, &measure);
        assert_eq!(lines, vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let measure = FixedWidthMeasure::new(1.0);
        assert!(wrap_greedy("", 10.0, 1.0, &measure).is_empty());
    }

    #[test]
    fn test_no_line_exceeds_width_for_mixed_text() {
        let measure = FixedWidthMeasure::new(0.6);
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(12);
        let lines = wrap_greedy(&text, 120.0, 14.0, &measure);
        assert!(!lines.is_empty());
        for line in &lines {
            let width = measure.measure(line, 14.0);
            assert!(width <= 120.0 || line.chars().count() == 1);
        }
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_cache_hit_does_not_remeasure() {
        let measure = CountingMeasure::new(1.0);
        let mut cache = TextLayoutCache::new();

        let first = cache.wrap("hello world", 5.0, 1.0, &measure);
        let calls_after_first = measure.calls();
        let second = cache.wrap("hello world", 5.0, 1.0, &measure);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(measure.calls(), calls_after_first);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_any_key_change_recomputes() {
        let measure = CountingMeasure::new(1.0);
        let mut cache = TextLayoutCache::new();

        cache.wrap("hello", 5.0, 1.0, &measure);
        cache.wrap("hello", 4.0, 1.0, &measure);
        cache.wrap("hello", 4.0, 2.0, &measure);
        cache.wrap("hellp", 4.0, 2.0, &measure);
        assert_eq!(cache.misses(), 4);

        cache.invalidate();
        cache.wrap("hellp", 4.0, 2.0, &measure);
        assert_eq!(cache.misses(), 5);
    }
}
