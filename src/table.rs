// Bordered text tables.
//
// Widths are measured in terminal columns, so wide (CJK) characters keep
// the borders aligned. With `auto_merge` on, a cell equal to the one right
// above it is left blank and the rule between the two stays open.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    auto_merge: bool,
    row_lines: bool,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            header: header.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn auto_merge(mut self, on: bool) -> Self {
        self.auto_merge = on;
        self
    }

    /// Draw a rule between every pair of body rows.
    pub fn row_lines(mut self, on: bool) -> Self {
        self.row_lines = on;
        self
    }

    /// Append a row; it is cut or padded to the header's column count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    pub fn extend_rows<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for row in rows {
            self.push_row(row);
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        let closed = vec![false; widths.len()];

        writeln!(out, "{}", rule(&widths, &closed))?;
        write_cells(out, &widths, &self.header, &closed, |_| Align::Center)?;
        writeln!(out, "{}", rule(&widths, &closed))?;

        for (r, row) in self.rows.iter().enumerate() {
            let merged = self.merged_cells(r);
            if r > 0 && self.row_lines {
                writeln!(out, "{}", rule(&widths, &merged))?;
            }
            write_cells(out, &widths, row, &merged, |cell| {
                if is_number(cell) {
                    Align::Right
                } else {
                    Align::Left
                }
            })?;
        }

        writeln!(out, "{}", rule(&widths, &closed))
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.header.len())
            .map(|c| {
                std::iter::once(&self.header)
                    .chain(self.rows.iter())
                    .flat_map(|row| row[c].lines())
                    .map(UnicodeWidthStr::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn merged_cells(&self, r: usize) -> Vec<bool> {
        let row = &self.rows[r];
        match r.checked_sub(1).map(|p| &self.rows[p]) {
            Some(above) if self.auto_merge => row
                .iter()
                .zip(above)
                .map(|(cell, prev)| !cell.is_empty() && cell == prev)
                .collect(),
            _ => vec![false; row.len()],
        }
    }
}

/// Horizontal rule, left open (blank) over merged columns.
fn rule(widths: &[usize], merged: &[bool]) -> String {
    let mut line = String::new();
    for (c, w) in widths.iter().enumerate() {
        let open_left = c > 0 && merged[c - 1];
        line.push(match (c, open_left, merged[c]) {
            (0, _, true) | (_, true, true) => '|',
            _ => '+',
        });
        let fill = if merged[c] { " " } else { "-" };
        line.push_str(&fill.repeat(w + 2));
    }
    line.push(if merged.last().copied().unwrap_or(false) {
        '|'
    } else {
        '+'
    });
    line
}

fn write_cells<W, F>(
    out: &mut W,
    widths: &[usize],
    cells: &[String],
    merged: &[bool],
    align_of: F,
) -> io::Result<()>
where
    W: Write,
    F: Fn(&str) -> Align,
{
    let lines: Vec<Vec<&str>> = cells
        .iter()
        .zip(merged)
        .map(|(cell, &m)| if m { Vec::new() } else { cell.lines().collect() })
        .collect();
    let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for i in 0..height {
        let mut line = String::from("|");
        for (c, w) in widths.iter().enumerate() {
            let text = lines[c].get(i).copied().unwrap_or("");
            line.push(' ');
            line.push_str(&pad(text, *w, align_of(&cells[c])));
            line.push_str(" |");
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn is_number(cell: &str) -> bool {
    let digits = cell.strip_prefix('-').unwrap_or(cell);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn article_table() -> Table {
        Table::new(["LIKES", "TITLE", "URL"])
            .auto_merge(true)
            .row_lines(true)
    }

    #[test]
    fn single_row() {
        let mut table = article_table();
        table.push_row(cells(&["5", "T", "u1"]));

        let expected = "\
+-------+-------+-----+
| LIKES | TITLE | URL |
+-------+-------+-----+
|     5 | T     | u1  |
+-------+-------+-----+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn empty_table_has_header_only() {
        let expected = "\
+-------+-------+-----+
| LIKES | TITLE | URL |
+-------+-------+-----+
+-------+-------+-----+
";
        assert_eq!(render(&article_table()), expected);
    }

    #[test]
    fn equal_cells_merge_and_leave_rule_open() {
        let mut table = article_table();
        table.extend_rows([cells(&["5", "A", "u1"]), cells(&["5", "B", "u2"])]);

        let expected = "\
+-------+-------+-----+
| LIKES | TITLE | URL |
+-------+-------+-----+
|     5 | A     | u1  |
|       +-------+-----+
|       | B     | u2  |
+-------+-------+-----+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn without_merge_equal_cells_repeat() {
        let mut table = Table::new(["LIKES", "TITLE", "URL"]).row_lines(true);
        table.extend_rows([cells(&["5", "A", "u1"]), cells(&["5", "B", "u2"])]);

        let output = render(&table);
        assert_eq!(output.matches("|     5 |").count(), 2);
        assert!(!output.contains("|       +"));
    }

    #[test]
    fn multi_line_cells_grow_the_row() {
        let mut table = article_table();
        table.push_row(cells(&["12", "abc\nd", "u"]));

        let expected = "\
+-------+-------+-----+
| LIKES | TITLE | URL |
+-------+-------+-----+
|    12 | abc   | u   |
|       | d     |     |
+-------+-------+-----+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn wide_characters_keep_borders_aligned() {
        let mut table = article_table();
        table.push_row(cells(&["1", "日本語", "u"]));

        let output = render(&table);
        let widths: Vec<usize> = output.lines().map(UnicodeWidthStr::width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{output}");
        assert!(output.contains("| 日本語 |"));
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = article_table();
        table.push_row(cells(&["7"]));
        assert!(render(&table).contains("|     7 |       |     |"));
    }

    #[test]
    fn runs_of_equal_rows_stay_open_across_columns() {
        let mut table = article_table();
        table.extend_rows([
            cells(&["5", "A\nB", "u"]),
            cells(&["5", "A\nB", "u"]),
            cells(&["5", "C\nD", "v"]),
        ]);

        let expected = "\
+-------+-------+-----+
| LIKES | TITLE | URL |
+-------+-------+-----+
|     5 | A     | u   |
|       | B     |     |
|       |       |     |
|       |       |     |
|       +-------+-----+
|       | C     | v   |
|       | D     |     |
+-------+-------+-----+
";
        assert_eq!(render(&table), expected);
    }
}
