use std::time::{Duration, Instant};

use lispy::{
    Expression, Node, Operator, ParseError, TreeStats, Value,
    error::{Expected, Found},
    evaluate_line,
    interpreter::{lexer::tokenize, parser::core::MAX_DEPTH},
    parse,
};

fn assert_parses(src: &str, expected: &str) {
    match parse(src) {
        Ok(tree) => assert_eq!(tree.to_string(), expected, "line: {src}"),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

fn assert_rejected(src: &str) -> ParseError {
    match parse(src) {
        Ok(tree) => panic!("Line {src:?} parsed as {tree} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn programs_are_operator_applications() {
    assert_parses("+ 1 2", "(+ 1 2)");
    assert_parses("- 5", "(- 5)");
    assert_parses("+ 1 (* 2 3) 4", "(+ 1 (* 2 3) 4)");
    assert_parses("* (+ 1 (- 2 (/ 3 4))) 5", "(* (+ 1 (- 2 (/ 3 4))) 5)");
}

#[test]
fn every_grammar_operator_is_accepted() {
    for op in Operator::ALL {
        let src = format!("{op} 1 2");
        match parse(&src) {
            Ok(Node::Expression(expr)) => assert_eq!(expr.operator, op),
            other => panic!("unexpected parse of {src:?}: {other:?}"),
        }
    }
}

#[test]
fn numbers_are_kept_as_text() {
    let tree = parse("+ 007 -42").unwrap();
    let expected = Node::from(Expression::new(Operator::Add,
                                              Node::number("007"),
                                              vec![Node::number("-42")]));
    assert_eq!(tree, expected);

    assert_parses("+ 123456789012345678901234567890", "(+ 123456789012345678901234567890)");
}

#[test]
fn sign_must_touch_its_digits() {
    assert_parses("+ -1", "(+ -1)");
    assert_parses("-1 2", "(- 1 2)");

    let err = assert_rejected("+ - 1");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::Digits,
                                        found:    Found::Token("1".to_string()),
                                        column:   5, });
}

#[test]
fn groups_need_an_operand() {
    let err = assert_rejected("()");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::Operator,
                                        found:    Found::Token("(".to_string()),
                                        column:   1, });

    let err = assert_rejected("+ (+)");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::Operand,
                                        found:    Found::Token(")".to_string()),
                                        column:   5, });

    let err = assert_rejected("+");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::Operand,
                                        found:    Found::EndOfInput,
                                        column:   2, });

    assert_rejected("+ 1 ()");
}

#[test]
fn unclosed_groups_are_rejected() {
    let err = assert_rejected("+ (+ 1");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::OperandOrClose,
                                        found:    Found::EndOfInput,
                                        column:   7, });
    assert_rejected("+ 1 (* 2 (- 3)");
}

#[test]
fn programs_are_not_parenthesized() {
    assert_rejected("(+ 1 2)");
    let err = assert_rejected("+ 1 2)");
    assert_eq!(err,
               ParseError::Unexpected { expected: Expected::OperandOrEnd,
                                        found:    Found::Token(")".to_string()),
                                        column:   6, });
}

#[test]
fn empty_and_blank_lines_are_rejected() {
    for src in ["", "   "] {
        match assert_rejected(src) {
            ParseError::Unexpected { expected: Expected::Operator,
                                     found: Found::EndOfInput,
                                     .. } => {},
            other => panic!("unexpected error for {src:?}: {other:?}"),
        }
    }
}

#[test]
fn unknown_characters_are_rejected() {
    let err = assert_rejected("+ 1 x");
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: 'x',
                                                 column:    5, });
    assert_rejected("+ 1.5 2");
    assert_rejected("& 1 2");
}

#[test]
fn diagnostics_are_one_line() {
    let err = assert_rejected("+ (+ 1");
    assert_eq!(err.to_string(),
               "<stdin>:1:7: error: expected a number, '(' or ')' at end of input");

    let err = assert_rejected("x");
    assert_eq!(err.to_string(), "<stdin>:1:1: error: unexpected character 'x'");

    let err = assert_rejected("? 1");
    assert!(!err.to_string().contains('\n'));
}

#[test]
fn columns_count_characters() {
    let err = assert_rejected("+ é");
    assert_eq!(err.column(), 3);

    let err = assert_rejected("+ ééé )");
    assert_eq!(err.column(), 3);
}

#[test]
fn render_points_at_the_column() {
    let src = "+ 1 )";
    let err = assert_rejected(src);
    assert_eq!(err.render(src),
               "+ 1 )\n    ^\n<stdin>:1:5: error: expected a number, '(' or end of input at ')'");
}

#[test]
fn nesting_is_limited() {
    let deep_ok = format!("+ {}1{}", "(+ ".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(parse(&deep_ok).is_ok());

    let too_deep = format!("+ {}1{}", "(+ ".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    let err = assert_rejected(&too_deep);
    match &err {
        ParseError::NestingTooDeep { limit, .. } => assert_eq!(*limit, MAX_DEPTH),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(),
               format!("<stdin>:1:{}: error: parentheses nested deeper than {MAX_DEPTH} levels",
                       3 + 3 * MAX_DEPTH));
}

#[test]
fn tree_statistics() {
    let tree = parse("+ 1 (* 2 3) 4").unwrap();
    assert_eq!(tree.stats(),
               TreeStats { nodes:     6,
                           leaves:    4,
                           branches:  2,
                           max_arity: 3, });

    let tree = parse("- 5").unwrap();
    assert_eq!(tree.stats(),
               TreeStats { nodes:     2,
                           leaves:    1,
                           branches:  1,
                           max_arity: 1, });

    let tree = parse("+ 1 (* 1 2 3 4 5)").unwrap();
    assert_eq!(tree.max_arity(), 5);

    assert_eq!(Node::number("3").max_arity(), 0);
    assert_eq!(Node::number("3").node_count(), 1);
}

#[test]
fn long_lines_are_handled_in_linear_time() {
    let operands = 200_000;
    let source = format!("+{}", " 1".repeat(operands));

    let start = Instant::now();
    let tokens = tokenize(&source).unwrap();
    let value = evaluate_line(&source).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(tokens.len(), operands + 1);
    assert_eq!(tokens.last().map(|t| t.column), Some(2 * operands + 1));
    assert_eq!(value, Value::Number(200_000));
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");

    let err = assert_rejected(&format!("{source} )"));
    assert_eq!(err.column(), 2 * operands + 3);
}
