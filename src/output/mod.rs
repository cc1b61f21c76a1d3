//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod json;
mod resources;
mod table;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Output options shared by every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Omit the header line in table and CSV output
    pub no_header: bool,
    /// Suppress spinners
    pub quiet: bool,
}

/// A value that can be rendered as rows of a table
pub trait Tabular: Serialize {
    /// Column headers, in row order
    fn headers() -> &'static [&'static str];
    /// Cell values for one row
    fn row(&self) -> Vec<String>;
}

/// Render a list of items; JSON and YAML produce an array
pub fn render_list<T: Tabular>(items: &[T], options: &OutputOptions) -> Result<String> {
    let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
    render_with(&items, T::headers(), &rows, options)
}

/// Render a single item; JSON and YAML produce an object
pub fn render_one<T: Tabular>(item: &T, options: &OutputOptions) -> Result<String> {
    render_with(item, T::headers(), &[item.row()], options)
}

/// Print a list of items to stdout
pub fn output_list<T: Tabular>(items: &[T], options: &OutputOptions) -> Result<()> {
    println!("{}", render_list(items, options)?);
    Ok(())
}

/// Print a single item to stdout
pub fn output_one<T: Tabular>(item: &T, options: &OutputOptions) -> Result<()> {
    println!("{}", render_one(item, options)?);
    Ok(())
}

fn render_with<S: Serialize + ?Sized>(
    structured: &S,
    headers: &[&str],
    rows: &[Vec<String>],
    options: &OutputOptions,
) -> Result<String> {
    match options.format {
        OutputFormat::Table => Ok(table::render(headers, rows, options.no_header)),
        OutputFormat::Csv => Ok(csv::render(headers, rows, options.no_header)),
        OutputFormat::Json => json::render_json(structured),
        OutputFormat::Yaml => json::render_yaml(structured),
    }
}
