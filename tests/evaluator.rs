use pretty_assertions::assert_eq;
use treecalc::{
    ast::{AngleUnit, Kind, Node},
    calculate_with,
    error::{Error, EvaluationError},
    interpreter::{
        io::{NullSink, ScriptedLines, StringSink},
        value::core::Value,
    },
};

fn number(value: Value) -> f64 {
    let Value::Number(n) = value else {
        panic!("expected a number, found {value}");
    };
    n
}

#[test]
fn each_node_uses_its_own_angle_unit() {
    // sin, in radians, of asin 1 in degrees: sin(90).
    let inner = Node::new(Kind::Asin, vec![Node::number(1.0)]).with_angle_unit(AngleUnit::Degrees);
    let tree = Node::new(Kind::Sin, vec![inner]);

    assert_eq!(tree.angle_unit, AngleUnit::Radians);
    assert!((number(tree.evaluate_quiet().unwrap()) - 90f64.sin()).abs() < 1e-12);
}

#[test]
fn set_angle_unit_reaches_every_node() {
    let mut tree = Node::new(Kind::Add,
                             vec![Node::new(Kind::Cos, vec![Node::number(0.0)]),
                                  Node::new(Kind::Sin, vec![Node::number(90.0)])]);
    tree.set_angle_unit(AngleUnit::Degrees);

    assert!((number(tree.evaluate_quiet().unwrap()) - 2.0).abs() < 1e-12);
}

#[test]
fn conditional_skips_the_other_branch() {
    let print = |code: f64| Node::new(Kind::Output, vec![Node::number(code)]);
    let tree = Node::new(Kind::Conditional, vec![Node::number(0.0), print(88.0), print(89.0)]);

    let mut sink = StringSink::default();
    assert_eq!(tree.evaluate_with(&mut sink).unwrap(), Value::Number(89.0));
    assert_eq!(sink.as_str(), "Y");
}

#[test]
fn missing_operands_are_reported_by_position() {
    let tree = Node::new(Kind::Conditional, vec![Node::number(0.0), Node::number(2.0)]);
    assert!(!tree.is_well_formed());

    match tree.evaluate_quiet() {
        Err(EvaluationError::MissingOperand { operator, index }) => {
            assert_eq!(operator, "?:");
            assert_eq!(index, 2);
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn nan_from_a_valid_argument_is_a_domain_error() {
    let tree = Node::new(Kind::Root, vec![Node::number(4.0), Node::number(-16.0)]);
    assert!(matches!(tree.evaluate_quiet(),
                     Err(EvaluationError::Domain { function: "root", .. })));

    let tree = Node::new(Kind::Acosh, vec![Node::number(0.5)]);
    assert!(matches!(tree.evaluate_quiet(),
                     Err(EvaluationError::Domain { function: "acosh", .. })));
}

#[test]
fn overflowing_values_that_cancel_are_domain_errors() {
    for src in ["10^400-10^400",
                "0*10^400",
                "(10^400)/(10^400)",
                "(10^400)%2",
                "s(10^400)",
                "c(10^400)",
                "(10^400)l(10^400)"]
    {
        let result = calculate_with(src,
                                    AngleUnit::Radians,
                                    &mut ScriptedLines::default(),
                                    &mut NullSink);
        assert!(matches!(result, Err(Error::Evaluation(EvaluationError::Domain { .. }))),
                "{src:?} gave {result:?}");
    }
}

#[test]
fn nan_operands_propagate() {
    let tree = Node::new(Kind::Add, vec![Node::number(f64::NAN), Node::number(1.0)]);
    assert!(number(tree.evaluate_quiet().unwrap()).is_nan());
}

#[test]
fn output_rejects_values_that_are_not_characters() {
    for code in [-1.0, f64::INFINITY, f64::NAN, 55296.0, 1_114_112.0] {
        let tree = Node::new(Kind::Output, vec![Node::number(code)]);
        assert!(matches!(tree.evaluate_quiet(),
                         Err(EvaluationError::InvalidCodePoint { .. })),
                "{code}");
    }
}

#[test]
fn values_display_plainly() {
    assert_eq!(Value::Number(14.0).to_string(), "14");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn rounding_affects_only_finite_numbers() {
    assert_eq!(Value::Number(2.0 / 3.0).rounded(3), Value::Number(0.667));
    assert_eq!(Value::Number(0.999_999_9).rounded(5), Value::Number(1.0));
    assert_eq!(Value::Number(f64::INFINITY).rounded(2), Value::Number(f64::INFINITY));
    assert_eq!(Value::Bool(false).rounded(2), Value::Bool(false));
}
