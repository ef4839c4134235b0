use crate::attributes::Attributes;
use crate::environment::XhtmlEnvironment;
use crate::table::TableAccumulator;
use crate::tags::HtmlTag;
use log::{debug, warn};

impl XhtmlEnvironment<'_> {
    pub(crate) fn start_table(&mut self) {
        self.tables.push(TableAccumulator::new());
        let table = &self.ns.table;
        let markup = format!(r#"<{}:table {}:style-name="podTable">"#, table, table);
        self.dump(&markup);
    }

    /// Moves the finished table into whatever encloses it.
    pub(crate) fn end_table(&mut self) {
        if let Some(accumulator) = self.tables.pop() {
            if !accumulator.first_row_closed() {
                warn!("Table without a complete row, no columns declared");
            }
            let body = accumulator.finish();
            self.dump(&body);
        }
        let closing = format!("</{}:table>", self.ns.table);
        self.dump(&closing);
    }

    pub(crate) fn start_table_head(&mut self) {
        let markup = format!("<{}:table-header-rows>", self.ns.table);
        self.dump(&markup);
    }

    pub(crate) fn end_table_head(&mut self) {
        let markup = format!("</{}:table-header-rows>", self.ns.table);
        self.dump(&markup);
    }

    pub(crate) fn start_table_row(&mut self) {
        let markup = format!("<{}:table-row>", self.ns.table);
        self.dump(&markup);
    }

    pub(crate) fn end_table_row(&mut self) {
        let declaration = format!("<{}:table-column/>", self.ns.table);
        if let Some(accumulator) = self.tables.last_mut() {
            if accumulator.on_row_end(&declaration) {
                debug!("Table has {} column(s)", accumulator.column_count());
            }
        }
        let closing = format!("</{}:table-row>", self.ns.table);
        self.dump(&closing);
    }

    pub(crate) fn start_table_cell(&mut self, tag: HtmlTag, attributes: &Attributes) {
        let colspan = attributes.get("colspan").and_then(parse_colspan);
        if let Some(accumulator) = self.tables.last_mut() {
            accumulator.on_cell_open(colspan.unwrap_or(1));
        }
        let table = &self.ns.table;
        let style = tag.default_style().unwrap_or("podCell");
        let mut markup = format!(r#"<{}:table-cell {}:style-name="{}""#, table, table, style);
        if let Some(span) = colspan {
            markup.push_str(&format!(r#" {}:number-columns-spanned="{}""#, table, span));
        }
        markup.push('>');
        self.dump(&markup);
    }

    pub(crate) fn end_table_cell(&mut self) {
        let closing = format!("</{}:table-cell>", self.ns.table);
        self.dump(&closing);
    }
}

fn parse_colspan(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(span) if span > 0 => Some(span),
        _ => {
            warn!("Ignoring invalid colspan '{}'", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_colspan;
    use crate::converter::{Unstyled, Xhtml2OdtConverter};

    fn convert(xhtml: &str) -> String {
        let _ = env_logger::builder().is_test(true).try_init();
        Xhtml2OdtConverter::new(&Unstyled).convert(xhtml).unwrap()
    }

    #[test]
    fn test_columns_declared_from_first_row() {
        let odt = convert("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
        assert_eq!(odt.matches("<table:table-column/>").count(), 2);
        assert!(odt.starts_with(
            r#"<table:table table:style-name="podTable"><table:table-column/><table:table-column/><table:table-row>"#
        ));
        assert!(odt.ends_with("</table:table-row></table:table>"));
    }

    #[test]
    fn test_colspan_counts_towards_columns() {
        let odt = convert(r#"<table><tr><th colspan="3">h</th></tr></table>"#);
        assert_eq!(odt.matches("<table:table-column/>").count(), 3);
        assert!(odt.contains(
            r#"<table:table-cell table:style-name="podHeaderCell" table:number-columns-spanned="3"><text:p>h</text:p></table:table-cell>"#
        ));
    }

    #[test]
    fn test_header_rows() {
        let odt = convert("<table><thead><tr><th>h</th></tr></thead><tr><td>d</td></tr></table>");
        assert!(odt.contains("<table:table-column/><table:table-header-rows><table:table-row>"));
        assert!(odt.contains("</table:table-header-rows><table:table-row>"));
    }

    #[test]
    fn test_nested_table_is_buffered_into_its_cell() {
        let odt = convert(
            "<table><tr><td><table><tr><td>i</td><td>j</td></tr></table></td></tr></table>",
        );
        assert_eq!(
            odt,
            concat!(
                r#"<table:table table:style-name="podTable"><table:table-column/><table:table-row>"#,
                r#"<table:table-cell table:style-name="podCell">"#,
                r#"<table:table table:style-name="podTable"><table:table-column/><table:table-column/><table:table-row>"#,
                r#"<table:table-cell table:style-name="podCell"><text:p>i</text:p></table:table-cell>"#,
                r#"<table:table-cell table:style-name="podCell"><text:p>j</text:p></table:table-cell>"#,
                "</table:table-row></table:table>",
                "</table:table-cell></table:table-row></table:table>"
            )
        );
    }

    #[test]
    fn test_cell_outside_table_is_transparent() {
        assert_eq!(convert("<p><td>x</td></p>"), "<text:p>x</text:p>");
    }

    #[test]
    fn test_invalid_colspan() {
        assert_eq!(parse_colspan(" 2 "), Some(2));
        assert_eq!(parse_colspan("0"), None);
        assert_eq!(parse_colspan("wide"), None);
    }
}
