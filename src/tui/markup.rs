//! # Table Markup
//!
//! Serializes the cells the table widget drew into an HTML `<table>`
//! fragment. The row table records this on every render so that print
//! always sees exactly what is on screen, in on-screen order.

use crate::core::print::escape_html;

/// Build a `<table>` fragment from header labels and row cells.
pub fn table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut out = String::from("<table><thead><tr>");
    for header in headers {
        out.push_str("<th>");
        out.push_str(&escape_html(header));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for cells in rows {
        out.push_str("<tr>");
        for cell in cells {
            out.push_str("<td>");
            out.push_str(&escape_html(cell.as_ref()));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_fragment_layout() {
        let rows = vec![vec!["Alice", "alice@example.com", "Admin"]];
        assert_eq!(
            table(&["Name", "Email", "Role"], &rows),
            "<table><thead><tr><th>Name</th><th>Email</th><th>Role</th></tr></thead>\
             <tbody><tr><td>Alice</td><td>alice@example.com</td><td>Admin</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_table_escapes_cells() {
        let rows = vec![vec!["<b>Eve</b> & co".to_string()]];
        let html = table(&["Name"], &rows);
        assert!(html.contains("<td>&lt;b&gt;Eve&lt;/b&gt; &amp; co</td>"));
    }

    #[test]
    fn test_table_with_no_rows_keeps_header() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(
            table(&["Name"], &rows),
            "<table><thead><tr><th>Name</th></tr></thead><tbody></tbody></table>"
        );
    }
}
