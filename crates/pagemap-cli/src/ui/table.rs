//! Aligned key/path table for `pagemap list`.

use console::measure_text_width;
use pagemap_config::EntryMap;

/// One line per entry: the key padded to the widest key, then its path.
///
/// With `relative`, the declared path is shown instead of the resolved one.
pub fn render_table(entries: &EntryMap, relative: bool) -> String {
    let width = entries
        .keys()
        .map(measure_text_width)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let path = if relative {
            &entry.relative
        } else {
            &entry.path
        };
        let pad = width - measure_text_width(&entry.key);
        out.push_str(&entry.key);
        out.push_str(&" ".repeat(pad + 2));
        out.push_str(&path.display().to_string());
        out.push('\n');
    }
    out
}
