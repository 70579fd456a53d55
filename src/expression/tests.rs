use crate::corpus::DigitCorpus;
use crate::expression::{Operator, ParseError, Spanned, Token, evaluate, tokenize};

fn corpus(digits: &[u8]) -> DigitCorpus {
    DigitCorpus::new(digits).unwrap_or_default()
}

fn eval_with(digits: &[u8], expression: &str) -> Result<f64, ParseError> {
    let mut corpus = corpus(digits);
    evaluate(&mut corpus, expression)
}

fn assert_value(digits: &[u8], expression: &str, expected: f64) {
    let result = eval_with(digits, expression);
    assert!(
        result.is_ok(),
        "'{}' should evaluate but got: {:?}",
        expression,
        result.err()
    );
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "'{}': expected {}, got {}",
            expression,
            expected,
            value
        );
    }
}

#[test]
fn test_tokenize_skips_whitespace_and_keeps_positions() {
    let tokens: Vec<Spanned> = tokenize(" 4 *(3)");
    let kinds: Vec<Token> = tokens.iter().map(|t| t.token).collect();
    assert_eq!(
        kinds,
        vec![
            Token::Digit(4),
            Token::Operator(Operator::Mul),
            Token::Open,
            Token::Digit(3),
            Token::Close,
        ]
    );
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 3, 4, 5, 6]);
}

#[test]
fn test_tokenize_marks_unknown_characters_invalid() {
    let tokens = tokenize("1^0");
    assert_eq!(tokens.get(1).map(|t| t.token), Some(Token::Invalid('^')));
    assert_eq!(tokens.get(2).map(|t| t.token), Some(Token::Invalid('0')));
}

#[test]
fn test_operator_symbols_and_precedence() {
    for symbol in ['+', '-', '*', '/'] {
        let op = Operator::from_symbol(symbol);
        assert_eq!(op.map(Operator::symbol), Some(symbol));
    }
    assert_eq!(Operator::from_symbol('%'), None);
    assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    assert_eq!(Operator::Div.precedence(), Operator::Mul.precedence());
    assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    assert_eq!(format!("{}", Operator::Div), "/");
}

#[test]
fn test_multiset_correctness() {
    assert_value(&[1, 2, 3, 4], "(4 * 3 * 2) + 1", 25.0);
}

#[test]
fn test_precedence_inside_brackets() {
    assert_value(&[1, 2, 3, 4], "(4 * 3 + 2) + 1", 15.0);
}

#[test]
fn test_precedence_without_brackets() {
    assert_value(&[1, 2, 3, 4], "1 + 2 * 3 + 4", 11.0);
    assert_value(&[1, 2, 3, 4], "4 + 3 * 2 / 1", 10.0);
}

#[test]
fn test_division_preserves_remainder() {
    assert_value(&[8, 8, 7, 4], "(7 - (8 / 8)) * 4", 24.0);
    assert_value(&[1, 2, 3, 4], "3 / 2 + 1 + 4", 6.5);
}

#[test]
fn test_classic_fractional_solution() {
    assert_value(&[3, 3, 8, 8], "8 / (3 - 8 / 3)", 24.0);
}

#[test]
fn test_left_associativity_of_equal_precedence() {
    assert_value(&[8, 4, 2, 1], "8 - 4 - 2 - 1", 1.0);
    assert_value(&[8, 4, 2, 1], "8 / 4 / 2 * 1", 1.0);
    assert_value(&[8, 4, 2, 1], "8 - 4 + 2 - 1", 5.0);
}

#[test]
fn test_sibling_bracket_groups() {
    assert_value(&[1, 2, 3, 4], "(1 + 2) * (3 + 4)", 21.0);
    assert_value(&[1, 2, 3, 4], "(1+2)+(3+4)", 10.0);
}

#[test]
fn test_deeply_nested_brackets() {
    assert_value(&[1, 2, 3, 4], "((((1 + 2))) * (3 + (4)))", 21.0);
}

#[test]
fn test_duplicate_digits_are_independent() {
    assert_value(&[4, 4, 4, 4], "4 * 4 + 4 + 4", 24.0);
}

#[test]
fn test_digit_reuse_rejected() {
    let result = eval_with(&[1, 2, 3, 4], "4 * 3 * (1 + 1)");
    assert_eq!(
        result,
        Err(ParseError::DigitNotAvailable {
            digit: 1,
            position: 13
        })
    );
}

#[test]
fn test_digit_outside_corpus_rejected() {
    let result = eval_with(&[1, 2, 3, 4], "5 + 1 + 2 + 3");
    assert!(matches!(
        result,
        Err(ParseError::DigitNotAvailable { digit: 5, .. })
    ));
}

#[test]
fn test_multi_digit_number_rejected() {
    assert_eq!(
        eval_with(&[1, 2], "12"),
        Err(ParseError::MultiDigitNumber { position: 0 })
    );
}

#[test]
fn test_whitespace_separated_digits_need_operator() {
    assert_eq!(
        eval_with(&[1, 2], "1 2"),
        Err(ParseError::MissingOperator { position: 2 })
    );
}

#[test]
fn test_value_after_bracket_group_needs_operator() {
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "(1 + 2) 3 + 4"),
        Err(ParseError::MissingOperator { .. })
    ));
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "(1 + 2)(3 + 4)"),
        Err(ParseError::MissingOperator { .. })
    ));
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "1 * 2 (3 + 4)"),
        Err(ParseError::MissingOperator { .. })
    ));
}

#[test]
fn test_unused_digits_rejected() {
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "1 + 2 + 3"),
        Err(ParseError::UnusedDigits { remaining: vec![4] })
    );
}

#[test]
fn test_nested_group_does_not_require_full_corpus() {
    // Only the outermost call checks that every digit was spent.
    assert_value(&[1, 2, 3, 4], "(1 + 2) + 3 + 4", 10.0);
}

#[test]
fn test_malformed_brackets() {
    assert_eq!(
        eval_with(&[], "("),
        Err(ParseError::UnmatchedParenthesis { position: 0 })
    );
    assert_eq!(
        eval_with(&[], ")"),
        Err(ParseError::InvalidToken {
            token: ')',
            position: 0
        })
    );
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "((1 + 2) * 3 + 4"),
        Err(ParseError::UnmatchedParenthesis { position: 0 })
    ));
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "(1 + 2)) * 3 + 4"),
        Err(ParseError::InvalidToken { token: ')', .. })
    ));
}

#[test]
fn test_empty_brackets_rejected() {
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "1 + () + 2"),
        Err(ParseError::EmptyExpression)
    );
}

#[test]
fn test_empty_input_rejected() {
    for input in ["", "   ", "\t\n"] {
        assert_eq!(
            eval_with(&[1, 2, 3, 4], input),
            Err(ParseError::EmptyExpression),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_invalid_characters_rejected() {
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "1 + 2 + 3 ^ 4"),
        Err(ParseError::InvalidToken {
            token: '^',
            position: 10
        })
    );
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "1 + 2 + 3 + 0"),
        Err(ParseError::InvalidToken { token: '0', .. })
    ));
}

#[test]
fn test_errors_reported_in_scan_order() {
    // The unavailable digit precedes the invalid character.
    assert!(matches!(
        eval_with(&[1, 2, 3, 4], "9 + x"),
        Err(ParseError::DigitNotAvailable { digit: 9, .. })
    ));
}

#[test]
fn test_operator_without_operand_rejected() {
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "-1 + 2 + 3 + 4"),
        Err(ParseError::MissingOperand { position: 0 })
    );
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "1 + 2 * / 3 + 4"),
        Err(ParseError::MissingOperand { position: 8 })
    );
    assert_eq!(
        eval_with(&[1, 2, 3, 4], "1 + 2 + 3 + 4 +"),
        Err(ParseError::MissingOperand { position: 14 })
    );
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    // (1 - 1) is zero: dividing by it gives a non-finite value, not a failure.
    let result = eval_with(&[1, 1, 2, 3], "(2 * 3) / (1 - 1)");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_infinite());
    }

    let result = eval_with(&[1, 1, 2, 2], "(1 - 1) / (2 - 2)");
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!(value.is_nan());
    }
}

#[test]
fn test_failure_is_idempotent_on_fresh_corpus() {
    let inputs = ["4 * 3 * (1 + 1)", "12", "1 + 2 + 3", "(", "1 2 3 4", ""];
    for input in inputs {
        let first = eval_with(&[1, 2, 3, 4], input);
        let second = eval_with(&[1, 2, 3, 4], input);
        assert!(first.is_err());
        assert_eq!(first, second, "input {:?}", input);
    }
}

#[test]
fn test_corpus_is_drained_on_success() {
    let mut corpus = corpus(&[8, 8, 7, 4]);
    let result = evaluate(&mut corpus, "(7 - (8 / 8)) * 4");
    assert!(result.is_ok());
    assert!(corpus.is_empty());
}
