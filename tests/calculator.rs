use pretty_assertions::assert_eq;
use spancomb::and::AndExt;
use spancomb::ascii::{is_byte, u64};
use spancomb::commit::expect;
use spancomb::filter::FilterExt;
use spancomb::map::MapExt;
use spancomb::or::OrExt;
use spancomb::{Deferred, Parser, Precedence, TryParseError, op, token};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// expr  := sum
/// sum   := product (('+' | '-') product)*
/// product := unary (('*' | '/') unary)*
/// unary := '-' unary | atom
/// atom  := number | '(' expr ')'
fn calculator() -> Deferred<i64> {
    let expr = Deferred::<i64>::new();

    let group = token(is_byte(b'('))
        .then(expr.clone())
        .skip(expect(token(is_byte(b')')), "expected `)`"));
    let literal = token(u64())
        .filter(|&n| i64::try_from(n).is_ok())
        .map(|n| n as i64);
    let atom = literal.or(group);

    let unary = Deferred::<i64>::recursive(|unary| {
        token(is_byte(b'-'))
            .then(unary)
            .map(|n: i64| -n)
            .or(atom)
    })
    .unwrap();

    let table = Precedence::new(unary)
        .level([
            op(token(is_byte(b'*')), |a: i64, b: i64| a * b),
            op(token(is_byte(b'/')), |a: i64, b: i64| a / b),
        ])
        .level([
            op(token(is_byte(b'+')), |a: i64, b: i64| a + b),
            op(token(is_byte(b'-')), |a: i64, b: i64| a - b),
        ])
        .build()
        .unwrap();

    expr.set(table).unwrap();
    expr
}

#[test]
fn test_sum() {
    init_tracing();
    assert_eq!(calculator().try_parse("123 + 123").unwrap(), 246);
}

#[test]
fn test_grouping_and_precedence() {
    init_tracing();
    let calc = calculator();

    assert_eq!(calc.try_parse("(3 + 1) * 2").unwrap(), 8);
    assert_eq!(calc.try_parse("3 + 1 * 2").unwrap(), 5);
    assert_eq!(calc.try_parse("((((7))))").unwrap(), 7);
}

#[test]
fn test_unary_minus() {
    init_tracing();
    let calc = calculator();

    assert_eq!(calc.try_parse("-(1+2)").unwrap(), -3);
    assert_eq!(calc.try_parse("--(1+2)").unwrap(), 3);
    assert_eq!(calc.try_parse("4 - -2").unwrap(), 6);
}

#[test]
fn test_left_associative_subtraction() {
    init_tracing();
    assert_eq!(calculator().try_parse("10 - 4 - 3").unwrap(), 3);
    assert_eq!(calculator().try_parse("64 / 4 / 2").unwrap(), 8);
}

#[test]
fn test_whitespace_everywhere() {
    init_tracing();
    assert_eq!(calculator().try_parse(" ( 2\n*\t3 ) ").unwrap_err().position(), 10);
    assert_eq!(calculator().try_parse(" ( 2\n*\t3 )").unwrap(), 6);
}

#[test]
fn test_unclosed_group_is_fatal() {
    init_tracing();
    let error = calculator().try_parse("(1 + 2").unwrap_err();

    match error {
        TryParseError::Fatal { error, .. } => {
            assert_eq!(error.message, "expected `)`");
            assert_eq!(error.position, 6);
        }
        other => panic!("expected fatal error, got {:?}", other),
    }
}

#[test]
fn test_dangling_operator_is_trailing_input() {
    init_tracing();
    let error = calculator().try_parse("1 +").unwrap_err();

    assert!(matches!(error, TryParseError::TrailingInput { .. }));
    assert_eq!(error.position(), 1);
}

#[test]
fn test_literal_out_of_range_is_rejected() {
    init_tracing();
    let calc = calculator();

    assert_eq!(calc.try_parse("9223372036854775807").unwrap(), i64::MAX);
    let error = calc.try_parse("9223372036854775808").unwrap_err();
    assert!(matches!(error, TryParseError::NoMatch { .. }));
    assert_eq!(calc.try_parse("1 + 9223372036854775808").unwrap_err().position(), 1);
}

#[test]
fn test_empty_input() {
    init_tracing();
    let error = calculator().try_parse("").unwrap_err();
    assert!(matches!(error, TryParseError::NoMatch { .. }));
}

#[test]
fn test_grammar_is_shareable_across_threads() {
    init_tracing();
    let calc = calculator();

    let handles: Vec<_> = (1..=4i64)
        .map(|n| {
            let calc = calc.clone();
            std::thread::spawn(move || calc.try_parse(&format!("{n} * ({n} + 1)")).unwrap())
        })
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![2, 6, 12, 20]);
}
