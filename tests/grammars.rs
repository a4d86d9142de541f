use parsistate::prelude::*;

fn airline() -> impl Parser {
    sequence_of![
        cond_min_max(is_alphanumeric, 2, 2),
        cond_min_max(is_alphabetic, 0, 1)
    ]
    .map(join_strings)
    .named("Airline")
}

fn flight_number() -> impl Parser {
    cond_min_max(is_digit, 3, 4).named("FlightNumber")
}

fn date() -> impl Parser {
    sequence_of![is_char("/"), cond_min_max(is_digit, 1, 2)]
        .map(join_strings)
        .named("Date")
}

fn flight() -> impl Parser {
    sequence_of![airline(), flight_number(), optional(date()), end_of_input()].named("Flight")
}

#[test]
fn test_airline_designators() {
    for (input, expected) in [("LH939", "LH"), ("UA666", "UA"), ("X3A123", "X3A")] {
        let state = airline().parse(input);
        assert!(!state.is_error(), "{}: {:?}", input, state.error());
        assert_eq!(state.result(), &Value::from(expected));
    }
}

#[test]
fn test_flight_identifiers() {
    let state = flight().parse("LH939/3");
    assert!(!state.is_error(), "{:?}", state.error());
    assert_eq!(
        state.result(),
        &Value::List(vec!["LH".into(), "939".into(), "/3".into(), Value::None])
    );

    let state = flight().parse("UA666/12");
    assert_eq!(state.result().get(2), Some(&Value::from("/12")));

    let state = flight().parse("X3A1234");
    assert_eq!(state.result().get(1), Some(&Value::from("1234")));
    assert_eq!(state.result().get(2), Some(&Value::None));
}

#[test]
fn test_invalid_flight_identifiers() {
    for input in ["L939/3", "LH93/3", "LH939/123", "LH939-3", ""] {
        let state = flight().parse(input);
        assert!(state.is_error(), "{} should be rejected", input);
        assert_eq!(state.index(), 0);
    }
}

#[test]
fn test_flight_error_report() {
    let input = "LH93/3";
    let state = flight().parse(input);
    let report = state.error().map(|err| err.render(input)).unwrap_or_default();
    assert!(report.starts_with("Syntax error at line 1, column 5"), "{}", report);
    assert!(report.contains("^--- here"));
}

/// Arithmetic expressions in prefix notation: `(+ (* 10 2) (- (/ 50 3) 2))`
fn micro_language() -> Forward {
    let expr = forward("Expr");

    let operator = choice![is_string("+"), is_string("-"), is_string("*"), is_string("/")];
    let operation = sequence_of![
        is_string("("),
        operator,
        is_string(" "),
        expr.clone(),
        is_string(" "),
        expr.clone(),
        is_string(")")
    ]
    .map(|value: Value| {
        let tag = value.get(1).map(Value::to_string).unwrap_or_default();
        let args = [3, 5].iter().filter_map(|&i| value.get(i).cloned()).collect();
        Node::new(tag, args)
    })
    .named("Operation");

    // The slot is fresh, so it cannot be defined already
    let defined = expr.define(choice![integer(), operation]);
    assert_eq!(defined, Ok(()));
    expr
}

fn evaluate(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Node(node) => {
            let lhs = evaluate(node.children.first()?)?;
            let rhs = evaluate(node.children.get(1)?)?;
            match node.tag.as_str() {
                "+" => lhs.checked_add(rhs),
                "-" => lhs.checked_sub(rhs),
                "*" => lhs.checked_mul(rhs),
                "/" => lhs.checked_div(rhs),
                _ => None,
            }
        }
        _ => None,
    }
}

#[test]
fn test_micro_language() {
    let expr = micro_language();

    let state = expr.parse("(+ (* 10 2) (- (/ 50 3) 2))");
    assert!(!state.is_error(), "{:?}", state.error());
    assert!(state.at_end());
    assert_eq!(state.result().to_string(), "(+ (* 10 2) (- (/ 50 3) 2))");
    assert_eq!(evaluate(state.result()), Some(34));

    let state = expr.parse("(+ 1 2)");
    assert_eq!(evaluate(state.result()), Some(3));

    let state = expr.parse("-7");
    assert_eq!(state.result(), &Value::Int(-7));
}

#[test]
fn test_micro_language_errors() {
    let expr = micro_language();

    let state = expr.parse("(+ 1 (* 2 x))");
    assert!(state.is_error());
    assert_eq!(state.index(), 0);
    let deepest = state.error().map(|err| err.deepest_loc().index);
    assert_eq!(deepest, Some(10));

    assert_eq!(
        expr.define(integer()),
        Err(GrammarError::AlreadyDefined("Expr".into()))
    );
}

#[test]
fn test_chain_selects_value_parser() {
    let typed = choice![is_string("string:"), is_string("number:")].chain(|tag: &Value| -> BoxedParser {
        match tag.as_str() {
            Some("string:") => letters().boxed(),
            _ => real_number().boxed(),
        }
    });

    assert_eq!(typed.parse("string:hello").result(), &Value::from("hello"));
    assert_eq!(typed.parse("number:2.5").result(), &Value::Float(2.5));
    assert!(typed.parse("number:hello").is_error());
}

#[test]
fn test_between_discards_brackets() {
    let parens = between(is_char("("), is_char(")"));
    let state = parens(integer().boxed()).parse("(42)");
    assert_eq!(state.result(), &Value::Int(42));
    assert!(state.at_end());
}

#[test]
fn test_key_value_lines() {
    let key = letters();
    let pair = sequence_of![key, is_char("="), rest_of_line()]
        .map(|value: Value| Node::new("pair", vec![value.get(0).cloned().unwrap_or_default(), value.get(2).cloned().unwrap_or_default()]));
    let config = sequence_of![many(pair), end_of_input()];

    let state = config.parse("name=parsistate\nkind=parser\n");
    assert!(!state.is_error(), "{:?}", state.error());
    assert_eq!(
        state.result().get(0).map(Value::to_string),
        Some("[(pair name parsistate), (pair kind parser)]".to_string())
    );
}
