//! XHTML fragments shared by the integration tests.

pub const SINGLE_RUN: &str = "Just some text";

pub const PARAGRAPH_WITH_BOLD: &str = "<p>Hello <b>world</b></p>";

pub const TWO_BY_TWO_TABLE: &str =
    "<table><tr><td>A</td><td>B</td></tr><tr><td>C</td><td>D</td></tr></table>";

pub const TABLE_IN_LIST_ITEM: &str =
    "<ul><li>one<table><tr><td>cell</td></tr></table></li></ul>";

pub const ENTITIES: &str = "<p>&nbsp;&rsquo;</p>";

/// A table whose first row has `cells` cells, followed by a wider row.
pub fn table_with_first_row(cells: usize) -> String {
    let first: String = (0..cells).map(|i| format!("<td>{}</td>", i)).collect();
    let second: String = (0..cells + 2).map(|i| format!("<td>{}</td>", i)).collect();
    format!("<table><tr>{}</tr><tr>{}</tr></table>", first, second)
}

/// An editor-like document mixing every supported construct.
pub fn rich_document() -> String {
    [
        "<h1>Report</h1>",
        r#"<p class="quote">Intro with <i>emphasis</i>, <a href="https://example.org/?a=1&amp;b=2">a link</a><br/>and a break.</p>"#,
        "<p>Items:<ol><li>first</li><li>second<ul><li>nested</li></ul></li></ol>after</p>",
        r#"<table><thead><tr><th colspan="2">Head</th></tr></thead>"#,
        "<tr><td>a</td><td><b>b</b></td></tr></table>",
        "trailing text",
    ]
    .concat()
}

/// Many distinct fragments for batch conversion.
pub fn numbered_fragments(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("<p>Fragment {}</p><ul><li>item {}</li></ul>", i, i))
        .collect()
}
