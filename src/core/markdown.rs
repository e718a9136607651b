use crate::core::selector::LinkEntry;

/// Escape `|` so a title can't open a Markdown table cell.
///
/// Nothing else is touched: `[`, `]` and backslashes pass through as-is.
pub fn escape_title(title: &str) -> String {
    title.replace('|', "\\|")
}

/// `- [title](link)`, link inserted verbatim
pub fn link_line(entry: &LinkEntry) -> String {
    format!("- [{}]({})", escape_title(&entry.title), entry.original_link)
}

/// Bullet list, every line newline-terminated
pub fn bullet_list(entries: &[LinkEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", link_line(entry)))
        .collect()
}
