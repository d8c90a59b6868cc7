use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rpn::{
    lex::LexError,
    rt::{Evaluated, Evaluator, RuntimeError},
    stack::StackUnderflow,
    RpnNumber,
};

fn value_of(line: &str) -> RpnNumber {
    match Evaluator::new().evaluate(line) {
        Ok(Evaluated::Value(value)) => value,
        other => panic!("{line:?} should evaluate to a value, got {other:?}"),
    }
}

fn assert_close(actual: RpnNumber, expected: RpnNumber) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn reference_expressions() {
    assert_eq!(value_of("5 5 +"), 10.0);
    assert_eq!(value_of("10 2 /"), 5.0);
    assert_eq!(value_of("2 10 ^"), 1024.0);
    assert_eq!(value_of("16 sqrt"), 4.0);
    assert_eq!(value_of("10 fib"), 55.0);
    assert_eq!(value_of("0 fib"), 0.0);
    assert_eq!(value_of("1 fib"), 1.0);
}

#[test]
fn operand_order() {
    assert_eq!(value_of("10 3 -"), 7.0);
    assert_eq!(value_of("3 10 -"), -7.0);
    assert_eq!(value_of("1 4 /"), 0.25);
    assert_eq!(value_of("3 2 ^"), 9.0);
}

#[test]
fn longer_expressions() {
    assert_eq!(value_of("3 4 + 2 *"), 14.0);
    assert_eq!(value_of("5 1 2 + 4 * + 3 -"), 14.0);
    assert_eq!(value_of("3 4 ^ sqrt fib"), 34.0);
    assert_close(value_of("2 sqrt 2 ^"), 2.0);
    assert_eq!(value_of("-3.5 .5 -"), -4.0);
}

#[test]
fn error_taxonomy() {
    let mut evaluator = Evaluator::new();

    assert_eq!(
        evaluator.evaluate("5 0 /"),
        Err(RuntimeError::DivisionByZero)
    );
    assert_eq!(evaluator.stack().values(), &[5.0]);

    assert_eq!(
        evaluator.evaluate("-4 sqrt"),
        Err(RuntimeError::NegativeSquareRoot(-4.0))
    );
    assert_eq!(
        evaluator.evaluate("-1 fib"),
        Err(RuntimeError::NegativeFibonacciIndex(-1.0))
    );
    assert_eq!(
        evaluator.evaluate("+"),
        Err(RuntimeError::StackUnderflow(StackUnderflow))
    );
    assert_eq!(
        evaluator.evaluate("3 4"),
        Err(RuntimeError::IncompleteExpression { remaining: 2 })
    );
    assert_eq!(
        evaluator.evaluate("3 foo"),
        Err(RuntimeError::Lex(LexError::UnknownOperator("foo")))
    );
    assert_eq!(
        evaluator.evaluate("1 ."),
        Err(RuntimeError::Lex(LexError::UnknownOperator(".")))
    );
}

#[test]
fn out_of_range_literals_are_rejected() {
    let huge = format!("1{}", "0".repeat(400));
    let mut evaluator = Evaluator::new();
    assert_eq!(
        evaluator.evaluate(&huge),
        Err(RuntimeError::Lex(LexError::InvalidNumericLiteral(&huge)))
    );

    let tiny = format!("0.{}1", "0".repeat(400));
    assert_eq!(
        evaluator.evaluate(&tiny),
        Err(RuntimeError::Lex(LexError::InvalidNumericLiteral(&tiny)))
    );

    let difference = format!("{huge} {huge} -");
    assert_eq!(
        evaluator.evaluate(&difference),
        Err(RuntimeError::Lex(LexError::InvalidNumericLiteral(&huge)))
    );
    assert_eq!(
        RuntimeError::Lex(LexError::InvalidNumericLiteral("1")).to_string(),
        "Number literal \"1\" failed to parse."
    );
}

#[test]
fn quit_words_end_evaluation() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("q"), Ok(Evaluated::Quit));
    assert_eq!(evaluator.evaluate("  quit  "), Ok(Evaluated::Quit));
    assert_eq!(evaluator.evaluate("1 q 0 /"), Ok(Evaluated::Quit));
}

#[test]
fn huge_fibonacci_index_is_infinite() {
    assert_eq!(value_of("2000 fib"), RpnNumber::INFINITY);
}

fn operand() -> impl Strategy<Value = RpnNumber> {
    -1000.0..1000.0f64
}

proptest! {
    #[test]
    fn binary_operators_match_arithmetic(a in operand(), b in operand()) {
        let line = |op: &str| format!("{a} {b} {op}");

        assert_close(value_of(&line("+")), a + b);
        assert_close(value_of(&line("-")), a - b);
        assert_close(value_of(&line("*")), a * b);
        if b != 0.0 {
            assert_close(value_of(&line("/")), a / b);
        }
    }

    #[test]
    fn powers_match_arithmetic(a in 0.5..100.0f64, b in -5.0..5.0f64) {
        assert_close(value_of(&format!("{a} {b} ^")), a.powf(b));
    }

    #[test]
    fn evaluation_is_idempotent(a in operand(), b in operand(), op in "[-+*/^]") {
        let line = format!("{a} {b} {op}");
        let mut evaluator = Evaluator::new();
        // Debug output so NaN results compare equal to themselves
        let first = format!("{:?}", evaluator.evaluate(&line));
        let second = format!("{:?}", evaluator.evaluate(&line));
        prop_assert_eq!(first, second);
    }
}
