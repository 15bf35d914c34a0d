//! # Delimiter Splitting
//!
//! Splits text on a single character without ever collapsing empty runs.
//! A delimiter at either end or two delimiters in a row yield empty fields.

/// Splits `text` on every occurrence of `delimiter`.
///
/// The result always has exactly one more element than the number of
/// delimiters in `text`, so empty input gives `[""]`.
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter).collect()
}

/// Returns the first field of `text`, or the whole text when `delimiter`
/// does not occur.
pub fn first_field(text: &str, delimiter: char) -> &str {
    match text.split_once(delimiter) {
        Some((head, _)) => head,
        None => text,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
