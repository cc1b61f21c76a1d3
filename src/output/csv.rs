//! CSV output formatter

use super::common::escape_csv;

/// Render headers and rows as CSV lines
pub fn render(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    if !no_header {
        lines.push(
            headers
                .iter()
                .map(|h| escape_csv(&h.to_lowercase().replace(' ', "_")))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| escape_csv(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}
