// Turns search records into table rows.

use crate::api::ArticleRecord;

/// Titles are broken every this many characters (code points, not bytes).
pub const TITLE_WIDTH: usize = 40;

/// One table row: like count, wrapped title and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub likes: String,
    pub title: String,
    pub url: String,
}

impl ArticleRow {
    pub fn from_record(record: &ArticleRecord) -> Self {
        ArticleRow {
            likes: record.likes_count.to_string(),
            title: wrap_title(&record.title, TITLE_WIDTH),
            url: record.url.clone(),
        }
    }

    /// Cells in header order.
    pub fn into_cells(self) -> Vec<String> {
        vec![self.likes, self.title, self.url]
    }
}

/// Rows in the order the API returned the records.
pub fn format_rows(records: &[ArticleRecord]) -> Vec<ArticleRow> {
    records.iter().map(ArticleRow::from_record).collect()
}

/// Split `title` into chunks of `width` characters; the last one may be
/// shorter. An empty title has no segments.
pub fn title_segments(title: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = title.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Title with a line break after every full chunk, none after the last.
pub fn wrap_title(title: &str, width: usize) -> String {
    title_segments(title, width).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, likes: i64, url: &str) -> ArticleRecord {
        ArticleRecord {
            url: url.into(),
            title: title.into(),
            likes_count: likes,
            ..Default::default()
        }
    }

    #[test]
    fn short_record_formats_as_is() {
        let rows = format_rows(&[record("T", 5, "u1")]);
        assert_eq!(
            rows,
            vec![ArticleRow {
                likes: "5".into(),
                title: "T".into(),
                url: "u1".into(),
            }]
        );
        assert_eq!(rows[0].clone().into_cells(), vec!["5", "T", "u1"]);
    }

    #[test]
    fn segment_count_is_ceiling_of_length() {
        for n in [0usize, 1, 39, 40, 41, 80, 81, 123] {
            let title: String = "a".repeat(n);
            let segments = title_segments(&title, TITLE_WIDTH);
            assert_eq!(segments.len(), n.div_ceil(TITLE_WIDTH), "length {n}");
            assert_eq!(segments.concat(), title, "length {n}");
            assert!(segments.iter().all(|s| s.chars().count() <= TITLE_WIDTH));
        }
    }

    #[test]
    fn empty_title_has_no_segments() {
        assert!(title_segments("", TITLE_WIDTH).is_empty());
        assert_eq!(wrap_title("", TITLE_WIDTH), "");
    }

    #[test]
    fn wraps_on_code_points_not_bytes() {
        // 45 three-byte characters: one full line of 40 and a tail of 5.
        let title = "あ".repeat(45);
        let wrapped = wrap_title(&title, TITLE_WIDTH);
        let lines: Vec<&str> = wrapped.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 40);
        assert_eq!(lines[1], "あ".repeat(5));
        assert_eq!(wrapped.replace('\n', ""), title);
    }

    #[test]
    fn exact_multiple_has_no_trailing_break() {
        let title = "b".repeat(80);
        let wrapped = wrap_title(&title, TITLE_WIDTH);
        assert_eq!(wrapped.matches('\n').count(), 1);
        assert!(!wrapped.ends_with('\n'));
    }

    #[test]
    fn zero_width_does_not_loop() {
        assert_eq!(title_segments("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_api_order() {
        let rows = format_rows(&[record("b", 1, "u2"), record("a", 99, "u1")]);
        let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["u2", "u1"]);
    }
}
