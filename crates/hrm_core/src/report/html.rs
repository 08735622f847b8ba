//! Minimal HTML helpers shared by report renderers.


/// Escapes text for use in element content and quoted attributes.
pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Appends a two-column label/value table.
pub(crate) fn push_label_table<'a, I>(out: &mut String, rows: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    out.push_str("<table class=\"table\"><tbody>");
    for (label, value) in rows {
        out.push_str(&format!(
            "<tr><td class=\"tdLabel\">{}</td><td class=\"tdValue\">{}</td></tr>",
            escape(label),
            escape(value)
        ));
    }
    out.push_str("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use super::{escape, push_label_table};

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("<b>\"R&D\"</b>"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn label_table_escapes_cells() {
        let mut out = String::new();
        push_label_table(&mut out, [("Name", "A & B")]);
        assert!(out.contains("<td class=\"tdValue\">A &amp; B</td>"));
    }
}
