use arith::{evaluate_expression, evaluate_expression_with, parser, Config, Error};

#[test]
fn single_literal() {
    for n in [0, 7, 42, 1234567, i64::MAX] {
        assert_eq!(evaluate_expression(&n.to_string()), Ok(n));
        assert_eq!(evaluate_expression(&format!(" ,x;{}", n)), Ok(n));
    }
}

#[test]
fn precedence() {
    assert_eq!(evaluate_expression("2+3*4"), Ok(14));
    assert_eq!(evaluate_expression("(2+3)*4"), Ok(20));
    assert_eq!(evaluate_expression("2*3+4*5"), Ok(26));
}

#[test]
fn left_associativity() {
    assert_eq!(evaluate_expression("10-2-3"), Ok(5));
    assert_eq!(evaluate_expression("100/10/5"), Ok(2));
}

#[test]
fn unary_minus() {
    assert_eq!(evaluate_expression("-(2+3)"), Ok(-5));
    assert_eq!(evaluate_expression("-3*-3"), Ok(9));
    assert_eq!(evaluate_expression("1--1"), Ok(2));
    assert!(matches!(
        evaluate_expression("--5"),
        Err(Error::Syntax { .. })
    ));
    assert!(matches!(
        evaluate_expression("-*5"),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn division() {
    assert_eq!(evaluate_expression("7/2"), Ok(3));
    assert_eq!(evaluate_expression("-7/2"), Ok(-3));
    assert_eq!(evaluate_expression("5/0"), Err(Error::DivisionByZero));
    assert_eq!(evaluate_expression("5/(2-2)"), Err(Error::DivisionByZero));
}

#[test]
fn division_by_zero_surfaces_at_evaluation() {
    let expr = parser::parse("5/(2-2)").unwrap();
    assert_eq!(expr.evaluate(), Err(Error::DivisionByZero));
}

#[test]
fn noise_tolerance() {
    assert_eq!(evaluate_expression("2 + 3"), Ok(5));
    assert_eq!(evaluate_expression("2,+,3"), Ok(5));
    assert_eq!(evaluate_expression("  (1 + 2) * [3] "), Ok(9));

    let plain = "12*(3-45)/6+7";
    let noisy = "a12 *\t( 3 -!45 )?/ 6;+7 z";
    assert_eq!(evaluate_expression(plain), evaluate_expression(noisy));
}

#[test]
fn noise_between_any_tokens() {
    for plain in ["12*(3-45)/6+7", "-(8-3)*2", "100/7-2*-3", "1--1"] {
        let expected = evaluate_expression(plain);
        for i in 0..=plain.len() {
            let (head, tail) = plain.split_at(i);
            let inside_digits = head.ends_with(|c: char| c.is_ascii_digit())
                && tail.starts_with(|c: char| c.is_ascii_digit());
            if inside_digits {
                continue;
            }
            for noise in [" ", ",", "x", "\t", "\u{3b6}", "[]"] {
                let noisy = format!("{}{}{}", head, noise, tail);
                assert_eq!(evaluate_expression(&noisy), expected, "input: {:?}", noisy);
            }
        }
    }
}

#[test]
fn long_flat_chain() {
    let input = vec!["1"; 1000].join("+");
    assert_eq!(evaluate_expression(&input), Ok(1000));
    let input = vec!["2"; 1000].join("-");
    assert_eq!(evaluate_expression(&input), Ok(2 - 2 * 999));
}

#[test]
fn evaluation_is_idempotent() {
    let expr = parser::parse("-(8-3)*2").unwrap();
    assert_eq!(expr.evaluate(), Ok(-10));
    assert_eq!(expr.evaluate(), Ok(-10));
}

#[test]
fn overflow_wraps() {
    assert_eq!(
        evaluate_expression("9223372036854775807+1"),
        Ok(i64::MIN)
    );
    assert_eq!(
        evaluate_expression("9223372036854775807*2"),
        Ok(-2)
    );
}

#[test]
fn permissive_by_default() {
    assert_eq!(evaluate_expression("(2+3"), Ok(5));
    assert_eq!(evaluate_expression("2+3)"), Ok(5));
    assert_eq!(evaluate_expression("2 3"), Ok(2));
}

#[test]
fn strict_mode() {
    let strict = Config::strict();
    assert_eq!(evaluate_expression_with("(2+3)*4", strict), Ok(20));
    assert!(matches!(
        evaluate_expression_with("(2+3", strict),
        Err(Error::UnclosedParen { .. })
    ));
    assert!(matches!(
        evaluate_expression_with("2+3)", strict),
        Err(Error::TrailingInput { .. })
    ));
}

#[test]
fn error_messages() {
    assert_eq!(
        evaluate_expression("5/0").unwrap_err().to_string(),
        "division by zero"
    );
    assert_eq!(
        evaluate_expression("--5").unwrap_err().to_string(),
        "syntax error: expected number or `(' after unary `-', found `-'"
    );
    assert_eq!(
        evaluate_expression("").unwrap_err().to_string(),
        "syntax error: expected number, `(' or unary `-', found end of input"
    );
}
