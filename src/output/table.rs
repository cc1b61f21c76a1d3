//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

/// Render headers and rows as a borderless table
pub fn render(headers: &[&str], rows: &[Vec<String>], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    if !no_header {
        table.set_header(headers.to_vec());
    }

    for row in rows {
        table.add_row(row.clone());
    }

    table.to_string()
}
