/// Counts non-overlapping occurrences of `needle`.
pub fn count(odt: &str, needle: &str) -> usize {
    odt.matches(needle).count()
}

/// Checks that every ODF element opened in `odt` is closed in order.
pub fn is_balanced(odt: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();
    let mut rest = odt;
    while let Some(start) = rest.find('<') {
        let Some(end) = rest[start..].find('>') else {
            return false;
        };
        let tag = &rest[start + 1..start + end];
        rest = &rest[start + end + 1..];
        if tag.ends_with('/') {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            if open.pop() != Some(name) {
                return false;
            }
        } else {
            let name = tag.split_whitespace().next().unwrap_or(tag);
            open.push(name);
        }
    }
    open.is_empty()
}

/// Whether a `text:p` or `text:h` is open at the first occurrence of
/// `needle`.
pub fn inside_paragraph(odt: &str, needle: &str) -> bool {
    let Some(position) = odt.find(needle) else {
        return false;
    };
    let before = &odt[..position];
    let opened = count(before, "<text:p>") + count(before, "<text:p ") + count(before, "<text:h ")
        + count(before, "<text:h>");
    let closed = count(before, "</text:p>") + count(before, "</text:h>");
    opened > closed
}

/// Assert that ODF output contains a snippet
#[macro_export]
macro_rules! assert_odt_contains {
    ($odt:expr, $snippet:expr) => {
        assert!(
            $odt.contains($snippet),
            "ODT should contain '{}', but was:\n{}",
            $snippet,
            $odt
        );
    };
}

/// Assert that ODF output is well nested
#[macro_export]
macro_rules! assert_odt_balanced {
    ($odt:expr) => {
        assert!(
            $crate::common::odt_assertions::is_balanced(&$odt),
            "ODT is not well nested:\n{}",
            $odt
        );
    };
}

/// Assert the number of occurrences of a snippet
#[macro_export]
macro_rules! assert_odt_count {
    ($odt:expr, $snippet:expr, $expected:expr) => {
        let found = $crate::common::odt_assertions::count(&$odt, $snippet);
        assert_eq!(
            found, $expected,
            "Expected {} occurrence(s) of '{}', got {} in:\n{}",
            $expected, $snippet, found, $odt
        );
    };
}
