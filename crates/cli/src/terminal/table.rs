//! Fixed-width table furniture for the inventory view.

/// Total rendered width of the product table.
pub const TABLE_WIDTH: usize = 60;

/// Column header matching the row layout of `Product`'s `Display`.
pub fn header() -> String {
    format!(
        "| {:<8} | {:<20} | {:<10} | {:<8} |",
        "ID", "NAME", "PRICE", "QTY"
    )
}

/// Horizontal rule spanning the table.
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(TABLE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_columns_line_up_with_product_rows() {
        let header = header();
        assert!(header.starts_with("| ID"));
        // Same column widths as a rendered product row.
        assert_eq!(header.len(), "| AB1      | Widget               | 9.99       | 10       |".len());
    }

    #[test]
    fn rule_spans_the_table() {
        assert_eq!(rule('=').chars().count(), TABLE_WIDTH);
        assert_eq!(rule('-').chars().count(), TABLE_WIDTH);
    }
}
