//! The N1QL reserved-word table.

/// Keywords a bare identifier may not shadow. The grammar driver consults
/// this before accepting an unquoted identifier as a property name; quoted
/// identifiers bypass the check.
const RESERVED_WORDS: &[&str] = &[
    "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CROSS", "DESC", "DISTINCT",
    "ELSE", "END", "EVERY", "FALSE", "FROM", "GROUP", "HAVING", "IN", "INNER", "IS",
    "JOIN", "LEFT", "LIKE", "LIMIT", "MATCH", "META", "MISSING", "NATURAL", "NOT",
    "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "REGEX", "RIGHT",
    "SATISFIES", "SELECT", "THEN", "TRUE", "USING", "WHEN", "WHERE",
    "COLLATE",
];

/// Case-insensitive membership test against the reserved-word table.
pub fn is_reserved_word(ident: &str) -> bool {
    RESERVED_WORDS.iter().any(|word| word.eq_ignore_ascii_case(ident))
}

#[test]
fn test_reserved_in_any_case() {
    assert!(is_reserved_word("select"));
    assert!(is_reserved_word("Select"));
    assert!(is_reserved_word("SELECT"));
    assert!(is_reserved_word("satisfies"));
    assert!(is_reserved_word("collate"));
}

#[test]
fn test_near_misses_are_not_reserved() {
    assert!(!is_reserved_word("selected"));
    assert!(!is_reserved_word("sel"));
    assert!(!is_reserved_word("name"));
    assert!(!is_reserved_word(""));
}
