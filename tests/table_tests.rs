mod common;

use common::fixtures::*;
use common::odt_assertions::inside_paragraph;
use common::{TestResult, render};

#[test]
fn test_columns_follow_first_row_only() -> TestResult {
    for cells in 1..=5 {
        let odt = render(&table_with_first_row(cells))?;
        assert_odt_count!(odt, "<table:table-column/>", cells);
        assert_odt_count!(odt, "<table:table-row>", 2);
    }
    Ok(())
}

#[test]
fn test_colspans_are_summed() -> TestResult {
    let odt = render(r#"<table><tr><td colspan="2">a</td><td>b</td><th colspan="3">c</th></tr></table>"#)?;
    assert_odt_count!(odt, "<table:table-column/>", 6);
    assert_odt_contains!(
        odt,
        r#"<table:table-cell table:style-name="podCell" table:number-columns-spanned="2">"#
    );
    assert_odt_contains!(
        odt,
        r#"<table:table-cell table:style-name="podHeaderCell" table:number-columns-spanned="3">"#
    );
    Ok(())
}

#[test]
fn test_columns_declared_before_header_rows() -> TestResult {
    let odt = render("<table><thead><tr><th>h1</th><th>h2</th></tr></thead><tr><td>a</td><td>b</td></tr></table>")?;
    assert!(odt.starts_with(concat!(
        r#"<table:table table:style-name="podTable">"#,
        "<table:table-column/><table:table-column/>",
        "<table:table-header-rows><table:table-row>"
    )));
    assert_odt_contains!(
        odt,
        "</table:table-row></table:table-header-rows><table:table-row>"
    );
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_cell_with_only_a_table_is_not_wrapped() -> TestResult {
    let odt = render("<table><tr><td><table><tr><td>x</td></tr></table></td></tr></table>")?;
    assert_odt_contains!(
        odt,
        r#"<table:table-cell table:style-name="podCell"><table:table table:style-name="podTable">"#
    );
    assert_odt_count!(odt, "<text:p>", 1);
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_nested_table_columns_are_independent() -> TestResult {
    let odt = render(concat!(
        "<table><tr><td>outer</td><td>",
        "<table><tr><td>1</td><td>2</td><td>3</td></tr></table>",
        "</td></tr></table>"
    ))?;
    assert_odt_count!(odt, "<table:table-column/>", 5);
    assert!(odt.starts_with(concat!(
        r#"<table:table table:style-name="podTable">"#,
        "<table:table-column/><table:table-column/><table:table-row>"
    )));
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_inline_content_in_cell_shares_one_paragraph() -> TestResult {
    let odt = render("<table><tr><td>a <b>b</b> c</td></tr></table>")?;
    assert_odt_contains!(
        odt,
        r#"<text:p>a <text:span text:style-name="podBold">b</text:span> c</text:p>"#
    );
    Ok(())
}

#[test]
fn test_table_without_rows() -> TestResult {
    let odt = render("<table></table>")?;
    assert_eq!(odt, r#"<table:table table:style-name="podTable"></table:table>"#);
    Ok(())
}

#[test]
fn test_rows_outside_tables_are_ignored() -> TestResult {
    let odt = render("<tr><td>lost</td></tr>")?;
    assert_eq!(odt, "<text:p>lost</text:p>");
    Ok(())
}

#[test]
fn test_table_inside_orphan_cell_is_not_in_a_paragraph() -> TestResult {
    let odt = render("<td>x<table><tr><td>y</td></tr></table></td>")?;
    assert!(!inside_paragraph(&odt, "<table:table "), "{odt}");
    assert!(odt.starts_with("<text:p>x</text:p><table:table "));
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_table_inside_unknown_element_splits_root_paragraph() -> TestResult {
    let odt = render("<font>x<table><tr><td>y</td></tr></table>z</font>")?;
    assert!(!inside_paragraph(&odt, "<table:table "), "{odt}");
    assert!(odt.ends_with("</table:table><text:p>z</text:p>"));
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_paragraph_inside_cell_after_text() -> TestResult {
    let odt = render("<table><tr><td>a<p>b</p></td></tr></table>")?;
    assert_odt_contains!(odt, "<text:p>a</text:p><text:p>b</text:p></table:table-cell>");
    assert_odt_balanced!(odt);
    Ok(())
}

#[test]
fn test_indentation_before_cell_text_is_kept() -> TestResult {
    let odt = render("<table>\n  <tr>\n    <td>A</td></tr></table>")?;
    assert_odt_contains!(odt, "<text:p>  \n    A</text:p>");
    Ok(())
}
