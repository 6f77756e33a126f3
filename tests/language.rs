use std::fs::{self};

use exprcalc::{
    error::{Error, EvalError, LexError},
    format_result, get_result,
    interpreter::{evaluator::core::Context, token::render_tokens},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_examples(&content) {
            count += 1;
            match get_result(&expression, &Context::new()) {
                Ok(evaluation) => assert!((evaluation.result - expected).abs() < 1e-9,
                                          "Example '{expression}' in {path:?} gave {}, expected \
                                           {expected}",
                                          evaluation.result),
                Err(e) => panic!("Example '{expression}' in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects `expression = value` lines from fenced `exprcalc` blocks.
fn extract_examples(content: &str) -> Vec<(String, f64)> {
    let mut examples = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```exprcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && let Some((expression, value)) = trimmed.rsplit_once('=') {
            let value = value.trim()
                             .parse()
                             .unwrap_or_else(|e| panic!("Bad expected value in '{trimmed}': {e}"));
            examples.push((expression.trim().to_string(), value));
        }
    }

    examples
}

fn eval(src: &str) -> f64 {
    match get_result(src, &Context::new()) {
        Ok(evaluation) => evaluation.result,
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn eval_err(src: &str) -> Error {
    match get_result(src, &Context::new()) {
        Ok(evaluation) => panic!("Expression '{src}' succeeded with {}", evaluation.result),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2"), 3.0);
    assert_eq!(eval("7 * 9"), 63.0);
    assert_eq!(eval("8 - 5"), 3.0);
    assert_eq!(eval("10 / 4"), 2.5);
    assert_eq!(eval("2 ^ 10"), 1024.0);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("2*3^2"), 18.0);
    assert_eq!(eval("8/2/2"), 2.0);
    assert_eq!(eval("2-3+4"), 3.0);
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval("2(3+4)"), 14.0);

    let mut context = Context::new();
    context.set_variable("x", 5.0);
    assert_eq!(get_result("2x", &context).unwrap().result, 10.0);
    assert_eq!(get_result("x(2)", &context).unwrap_err(),
               Error::Eval(EvalError::UnknownFunction { name: "x".to_string() }));
}

#[test]
fn unary_minus_negates_before_power() {
    assert_eq!(eval("-2^2"), 4.0);
    assert_eq!(eval("-(2^2)"), -4.0);
    assert_eq!(eval("0-2^2"), -4.0);
}

#[test]
fn functions() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("pow(2,10)"), 1024.0);
    assert_eq!(eval_err("sqrt(1,2)"),
               Error::Eval(EvalError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                              expected: 1,
                                                              found:    2, }));
    assert_eq!(eval_err("nope(1)"),
               Error::Eval(EvalError::UnknownFunction { name: "nope".to_string() }));
}

#[test]
fn unmatched_parentheses_fail_while_lexing() {
    assert_eq!(eval_err("(1+2"), Error::Lex(LexError::UnmatchedOpeningParen { index: 0 }));
    assert_eq!(eval_err("1+2)"), Error::Lex(LexError::UnmatchedClosingParen { index: 3 }));
}

#[test]
fn unknown_variable() {
    assert_eq!(eval_err("foo"),
               Error::Eval(EvalError::UnknownVariable { name: "foo".to_string() }));
}

#[test]
fn floating_point_specials_are_results() {
    assert_eq!(format_result(eval("1/0")), "Result: inf");
    assert_eq!(format_result(eval("sqrt(-1)")), "Result: nan");
    assert_eq!(format_result(eval("-1/0")), "Result: -inf");
}

#[test]
fn output_lines() {
    let evaluation = get_result("2pi + sqrt(4)", &Context::new()).unwrap();
    assert_eq!(render_tokens(&evaluation.tokens),
               "( 2.00 * pi + sqrt ( 4.00 ) )");
    assert_eq!(format_result(evaluation.result), "Result: 8.283185");
}

#[test]
fn error_messages_are_single_lines() {
    let messages = [eval_err("1 + $").to_string(),
                    eval_err("(").to_string(),
                    eval_err(")").to_string(),
                    eval_err("foo").to_string(),
                    eval_err("bar(1)").to_string(),
                    eval_err("sqrt(1, 2)").to_string(),
                    eval_err("1 +").to_string()];

    assert_eq!(messages[0], "Error: unrecognized token at 4: '$'");
    assert_eq!(messages[3], "Error: unknown variable: foo");
    assert_eq!(messages[4], "Error: unknown function: bar()");
    assert_eq!(messages[5],
               "Error: function sqrt() requires exactly 1 argument, got 2");
    for message in messages {
        assert!(!message.contains('\n'), "{message}");
    }
}

#[test]
fn deeply_nested_input_is_an_error() {
    let parens = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let minus = format!("{}1", "-".repeat(5000));

    for src in [parens, minus] {
        let e = eval_err(&src);
        assert_eq!(e, Error::Eval(EvalError::NestingTooDeep { limit: 256 }));
        assert_eq!(e.to_string(), "Error: expression nests deeper than 256 levels");
    }
}

#[test]
fn evaluation_is_deterministic() {
    let context = Context::new();
    let first = get_result("3(4+5) - pow(2, 3) / 2", &context).unwrap();
    let second = get_result("3(4+5) - pow(2, 3) / 2", &context).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.result, 23.0);
}
