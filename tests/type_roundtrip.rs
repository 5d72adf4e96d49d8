//! Round-trip property: for every valid type string, rendering the parsed
//! type reproduces its canonical form (equal up to whitespace normalization).

use cppforge::codegen::render_type;
use cppforge::error::ParseError;
use cppforge::parser::parse_type;
use rstest::rstest;

/// Parse `input`, render it back, and compare against the canonical form.
fn assert_round_trip(input: &str, canonical: &str) {
    let ty = parse_type(input).unwrap_or_else(|e| panic!("failed to parse '{input}': {e}"));
    let rendered = render_type(&ty).unwrap_or_else(|e| panic!("failed to render '{input}': {e}"));
    assert_eq!(rendered, canonical, "round trip mismatch for '{input}'");
}

#[rstest]
#[case("void")]
#[case("bool")]
#[case("char")]
#[case("int")]
#[case("unsigned int")]
#[case("short")]
#[case("unsigned short")]
#[case("long")]
#[case("unsigned long")]
#[case("long long")]
#[case("unsigned long long")]
#[case("float")]
#[case("double")]
#[case("string")]
#[case("auto")]
fn primitive_spellings_are_fixed_points(#[case] spelling: &str) {
    assert_round_trip(spelling, spelling);
}

#[rstest]
#[case("int*", "int*")]
#[case("int**", "int**")]
#[case("int&", "int&")]
#[case("int&&", "int&&")]
#[case("int*&", "int*&")]
#[case("int*[5]", "int*[5]")]
#[case("int[2][3]", "int[2][3]")]
#[case("char[]", "char[]")]
#[case("const int", "const int")]
#[case("volatile double", "volatile double")]
#[case("const volatile double", "const volatile double")]
#[case("Hero", "Hero")]
#[case("const Hero&", "const Hero&")]
#[case("map<int, string>", "map<int, string>")]
fn declared_types_round_trip(#[case] input: &str, #[case] canonical: &str) {
    assert_round_trip(input, canonical);
}

#[rstest]
#[case("int * &", "int*&")]
#[case("volatile  const  int", "const volatile int")]
#[case("unsigned   long   long", "unsigned long long")]
#[case("int [ 5 ]", "int[5]")]
fn round_trip_normalizes_whitespace(#[case] input: &str, #[case] canonical: &str) {
    assert_round_trip(input, canonical);
}

#[rstest]
#[case("int&&&")]
#[case("int&& &")]
fn triple_references_are_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_type(input),
        Err(ParseError::TripleReference(_))
    ));
}

#[rstest]
#[case("int[5")]
#[case("int]")]
#[case("int[5]]")]
fn unmatched_brackets_are_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_type(input),
        Err(ParseError::UnmatchedBracket(_))
    ));
}

#[rstest]
#[case("int[five]")]
#[case("int[-1]")]
#[case("int[1.5]")]
fn non_numeric_dimensions_are_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_type(input),
        Err(ParseError::BadArrayDimension(_))
    ));
}
