mod common;

use common::fixtures::ENTITIES;
use common::{TestResult, render};

#[test]
fn test_named_entities_decode_to_characters() -> TestResult {
    let odt = render(ENTITIES)?;
    assert_eq!(odt, "<text:p>\u{a0}\u{2019}</text:p>");
    Ok(())
}

#[test]
fn test_typographic_entities() -> TestResult {
    let odt = render("<p>&laquo;&euro;&hellip;&raquo; &mdash; &copy; &eacute;&ccedil;&oelig;</p>")?;
    assert_eq!(
        odt,
        "<text:p>\u{ab}\u{20ac}\u{2026}\u{bb} \u{2014} \u{a9} \u{e9}\u{e7}\u{153}</text:p>"
    );
    Ok(())
}

#[test]
fn test_markup_characters_stay_escaped() -> TestResult {
    let odt = render("<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>")?;
    assert_eq!(odt, "<text:p>1 &lt; 2 &amp;&amp; 3 &gt; 2</text:p>");
    Ok(())
}

#[test]
fn test_default_inline_styles() -> TestResult {
    let odt = render("<p><b>b</b><strong>s</strong><i>i</i><em>e</em><sup>p</sup><sub>d</sub></p>")?;
    assert_eq!(
        odt,
        concat!(
            "<text:p>",
            r#"<text:span text:style-name="podBold">b</text:span>"#,
            r#"<text:span text:style-name="podBold">s</text:span>"#,
            r#"<text:span text:style-name="podItalic">i</text:span>"#,
            r#"<text:span text:style-name="podItalic">e</text:span>"#,
            r#"<text:span text:style-name="podSup">p</text:span>"#,
            r#"<text:span text:style-name="podSub">d</text:span>"#,
            "</text:p>"
        )
    );
    Ok(())
}

#[test]
fn test_nested_inline_elements() -> TestResult {
    let odt = render("<p><b>bold <i>both</i></b></p>")?;
    assert_eq!(
        odt,
        concat!(
            r#"<text:p><text:span text:style-name="podBold">bold "#,
            r#"<text:span text:style-name="podItalic">both</text:span></text:span></text:p>"#
        )
    );
    Ok(())
}

#[test]
fn test_line_breaks() -> TestResult {
    let odt = render("<p>one<br/>two<br></br>three</p>")?;
    assert_eq!(
        odt,
        "<text:p>one<text:line-break/>two<text:line-break/>three</text:p>"
    );
    Ok(())
}

#[test]
fn test_div_renders_as_span() -> TestResult {
    let odt = render("<p><div>d</div></p>")?;
    assert_eq!(odt, "<text:p><text:span>d</text:span></text:p>");
    Ok(())
}

#[test]
fn test_space_between_inline_elements_moves_into_next_run() -> TestResult {
    let odt = render("<p><b>a</b> <i>b</i></p>")?;
    assert_odt_contains!(odt, r#"</text:span><text:span text:style-name="podItalic"> b</text:span>"#);
    Ok(())
}

#[test]
fn test_leading_and_trailing_newlines_are_stripped() -> TestResult {
    let odt = render("<p>\nline\n</p>")?;
    assert_eq!(odt, "<text:p>line</text:p>");
    Ok(())
}
