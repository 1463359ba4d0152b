//! Terminal interaction: prompts, confirmations and parameter summaries.

pub mod console;
pub mod summary;

pub use console::Console;

/// Render a float the same way Python would print it (`1.0`, not `1`).
pub fn format_num(value: f64) -> String {
    format!("{value:?}")
}

pub fn format_triple(a: f64, b: f64, c: f64) -> String {
    format!("({}, {}, {})", format_num(a), format_num(b), format_num(c))
}

/// Format an optional axis value, `None` when unset.
pub fn format_opt(value: Option<f64>) -> String {
    value.map(format_num).unwrap_or_else(|| "None".to_string())
}
