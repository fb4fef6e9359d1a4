//! String-level helpers for tokens the grammar captures verbatim.

/// Segment-aligned prefix test for dotted/bracketed property paths.
///
/// True when `path` starts with `prefix` and the next character is the end
/// of the path, a `.`, or a `[` — so `.addr` does not match `.address`.
pub fn has_path_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

/// Strips leading and trailing ASCII whitespace from a raw token.
pub fn trim(input: &str) -> &str {
    input.trim_ascii()
}

/// Collapses doubled quote characters (`''` or `""`) back to one.
///
/// Doubling is the only escaping convention in quoted literals and quoted
/// identifiers; backslashes pass through untouched.
pub fn unquote(text: &str, quote_char: char) -> String {
    let quote = quote_char.to_string();
    text.replace(&format!("{quote}{quote}"), &quote)
}

/// Escapes a bare identifier into a well-formed property-path segment.
///
/// Literal `.` and `$` get a backslash so they cannot be read as a path
/// separator or variable sigil, then the name is prefixed with `.`.
pub fn quote_property(name: &str) -> String {
    let mut path = String::with_capacity(name.len() + 1);
    path.push('.');
    for ch in name.chars() {
        if ch == '.' || ch == '$' {
            path.push('\\');
        }
        path.push(ch);
    }
    path
}

#[test]
fn test_path_prefix_is_segment_aligned() {
    assert!(has_path_prefix(".address", ".address"));
    assert!(has_path_prefix(".address.city", ".address"));
    assert!(has_path_prefix(".address[0]", ".address"));
    assert!(!has_path_prefix(".addr", ".address"));
    assert!(!has_path_prefix(".addresses", ".address"));
}

#[test]
fn test_trim_ascii_whitespace() {
    assert_eq!(trim("  db.name \t\n"), "db.name");
    assert_eq!(trim("name"), "name");
    assert_eq!(trim("   "), "");
}

#[test]
fn test_unquote_doubled_quotes() {
    assert_eq!(unquote("it''s", '\''), "it's");
    assert_eq!(unquote("say \"\"hi\"\"", '"'), "say \"hi\"");
    assert_eq!(unquote("plain", '\''), "plain");
}

#[test]
fn test_unquote_leaves_backslashes_alone() {
    assert_eq!(unquote("a\\nb", '\''), "a\\nb");
}

#[test]
fn test_quote_property_escapes_dot_and_dollar() {
    assert_eq!(quote_property("a.b$c"), ".a\\.b\\$c");
    assert_eq!(quote_property("name"), ".name");
}
