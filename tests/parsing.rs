use bst_steps::{parse_values, Operation, Palette, ParseError};
use test_case::test_case;

#[test_case("search 37", Operation::Search(37) ; "spaced")]
#[test_case("search:37", Operation::Search(37) ; "colon")]
#[test_case("Search(37)", Operation::Search(37) ; "label form")]
#[test_case("lower_bound -4", Operation::LowerBound(-4) ; "negative key")]
#[test_case("FindMax()", Operation::Max ; "bare label")]
#[test_case("  min  ", Operation::Min ; "padded")]
#[test_case("delete 5", Operation::Remove(5) ; "alias")]
#[test_case("pred 9", Operation::Predecessor(9) ; "short predecessor")]
#[test_case("succ 9", Operation::Successor(9) ; "short successor")]
#[test_case("select 0", Operation::Select(0) ; "select keeps out of range k")]
#[test_case("POSTORDER", Operation::Postorder ; "case insensitive")]
fn parses_operation(input: &str, expected: Operation) {
    assert_eq!(input.parse::<Operation>(), Ok(expected));
}

#[test_case("", ParseError::Empty ; "empty")]
#[test_case("rotate 3", ParseError::UnknownOperation("rotate".into()) ; "unknown verb")]
#[test_case("insert", ParseError::MissingArgument("insert".into()) ; "missing key")]
#[test_case("insert x", ParseError::InvalidNumber("x".into()) ; "bad key")]
#[test_case("insert 2.5", ParseError::InvalidNumber("2.5".into()) ; "fractional key")]
#[test_case("min 3", ParseError::UnexpectedArgument { op: "min".into(), extra: "3".into() } ; "surplus argument")]
#[test_case("search 1 2", ParseError::UnexpectedArgument { op: "search".into(), extra: "2".into() } ; "two keys")]
fn rejects_operation(input: &str, expected: ParseError) {
    assert_eq!(input.parse::<Operation>(), Err(expected));
}

#[test_case("50,25,75", vec![50, 25, 75] ; "commas")]
#[test_case("50 25\t75", vec![50, 25, 75] ; "whitespace")]
#[test_case("50, 25 ,75,", vec![50, 25, 75] ; "trailing comma")]
#[test_case("", vec![] ; "empty")]
fn parses_value_lists(input: &str, expected: Vec<i64>) {
    assert_eq!(parse_values(input), Ok(expected));
}

#[test_case("lime-green", Palette::LimeGreen ; "kebab")]
#[test_case("MEDIUM_PURPLE", Palette::MediumPurple ; "shouty snake")]
fn parses_palette(input: &str, expected: Palette) {
    assert_eq!(input.parse::<Palette>(), Ok(expected));
}

#[test]
fn error_messages_name_the_token() {
    let err = "insert nine".parse::<Operation>().unwrap_err();
    assert_eq!(err.to_string(), "invalid number 'nine'");
}
