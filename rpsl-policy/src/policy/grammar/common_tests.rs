use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_keyword_needs_a_boundary() {
    let span = from_str2(" AND AS2", "");
    let (rest, matched) = keyword("and")(span).unwrap();
    assert_eq!(*matched.fragment(), "AND");
    assert_eq!(*rest.fragment(), " AS2");

    assert!(keyword("and")(from_str2("ANDES", "")).is_err());
    assert!(keyword("and")(from_str2("and(AS1)", "")).is_ok());
}

#[test]
fn test_word_stops_at_delimiters() {
    let (rest, matched) = word(from_str2("  AS-FOO^+{10.0.0.0/8}", "")).unwrap();
    assert_eq!(matched, "AS-FOO^+");
    assert_eq!(*rest.fragment(), "{10.0.0.0/8}");

    assert!(word(from_str2(" (AS1", "")).is_err());
    assert!(word(from_str2("   ", "")).is_err());
}

#[test]
fn test_set_items() {
    let (rest, items) = set_items(from_str2("{ 65000:1,65000:2 , no-export }^-", "")).unwrap();
    assert_eq!(items, vec!["65000:1", "65000:2", "no-export"]);
    assert_eq!(*rest.fragment(), "^-");

    let (_rest, items) = set_items(from_str2("{}", "")).unwrap();
    assert!(items.is_empty());

    assert!(set_items(from_str2("{65000:1", "")).is_err());
}

#[test]
fn test_call_args() {
    let (rest, args) = call_args(from_str2("(AS1, AS1);", "")).unwrap();
    assert_eq!(args, vec!["AS1", "AS1"]);
    assert_eq!(*rest.fragment(), ";");

    assert!(call_args(from_str2("AS1, AS1)", "")).is_err());
}

#[test]
fn test_is_one_of() {
    assert!(is_one_of("Except", &["and", "or", "except"]));
    assert!(!is_one_of("exception", &["and", "or", "except"]));
}

#[test]
fn test_parse_all_reports_location() {
    let err = parse_all("as-expression", "AS1\n  )", |span| word(span)).unwrap_err();
    assert_eq!(err.grammar, "as-expression");
    assert_eq!(err.fragment, ")");
    assert_eq!(err.input, "AS1\n  )");
    assert!(err
        .message
        .starts_with("Error parsing as-expression at line 2 at column 3"));
}

#[test]
fn test_parse_all_allows_trailing_white_space() {
    assert_eq!(
        parse_all("as-expression", " AS1 \n", |span| word(span)).unwrap(),
        "AS1"
    );
}
