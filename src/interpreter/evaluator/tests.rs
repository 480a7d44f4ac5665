use crate::{
    ast::{AngleUnit, Kind},
    error::EvaluationError,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
};

#[test]
fn binary_routes_by_family() {
    let result = Evaluator::eval_binary(Kind::Sub, Value::Number(3.0), Value::Bool(true));
    assert_eq!(result.unwrap(), Value::Number(2.0));

    let result = Evaluator::eval_binary(Kind::Less, Value::Number(1.0), Value::Number(2.0));
    assert_eq!(result.unwrap(), Value::Bool(true));
}

#[test]
fn arithmetic() {
    assert_eq!(Evaluator::eval_arithmetic(Kind::Mod, -7.0, 3.0).unwrap(), -1.0);
    assert!(matches!(Evaluator::eval_arithmetic(Kind::Div, 1.0, 0.0),
                     Err(EvaluationError::DivisionByZero { operator: "/" })));
}

#[test]
fn arithmetic_on_cancelling_infinities() {
    let inf = f64::INFINITY;
    for (kind, left, right) in [(Kind::Sub, inf, inf),
                                (Kind::Add, inf, -inf),
                                (Kind::Mul, 0.0, inf),
                                (Kind::Div, inf, inf),
                                (Kind::Mod, inf, 2.0)]
    {
        assert!(matches!(Evaluator::eval_arithmetic(kind, left, right),
                         Err(EvaluationError::Domain { .. })),
                "{left} {kind} {right}");
    }
    assert_eq!(Evaluator::eval_arithmetic(Kind::Add, inf, 1.0).unwrap(), inf);
}

#[test]
fn exponents() {
    assert_eq!(Evaluator::eval_exponent(Kind::Pow, 2.0, 10.0).unwrap(), 1024.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 3.0, -8.0).unwrap(), -2.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Log, 2.0, 8.0).unwrap(), 3.0);
}

#[test]
fn whole_roots_are_exact() {
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 3.0, 27.0).unwrap(), 3.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 3.0, 64.0).unwrap(), 4.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 3.0, -27.0).unwrap(), -3.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 4.0, 81.0).unwrap(), 3.0);
    assert_eq!(Evaluator::eval_exponent(Kind::Root, 5.0, -32.0).unwrap(), -2.0);
}

#[test]
fn logarithm_of_infinities() {
    let inf = f64::INFINITY;
    assert!(matches!(Evaluator::eval_exponent(Kind::Log, inf, inf),
                     Err(EvaluationError::Domain { function: "logarithm", .. })));
    assert_eq!(Evaluator::eval_exponent(Kind::Log, 3.0, inf).unwrap(), inf);
}

#[test]
fn nan_operands_are_not_domain_errors() {
    assert!(Evaluator::eval_exponent(Kind::Pow, 2.0, f64::NAN).unwrap().is_nan());
    assert!(Evaluator::eval_exponent(Kind::Root, f64::NAN, 4.0).unwrap().is_nan());
    assert!(Evaluator::eval_arithmetic(Kind::Mul, f64::NAN, 0.0).unwrap().is_nan());
}

#[test]
fn comparisons_and_logic() {
    assert!(Evaluator::eval_comparison(Kind::LessEqual, 2.0, 2.0));
    assert!(!Evaluator::eval_comparison(Kind::Greater, 2.0, 3.0));

    assert!(Evaluator::eval_logic(Kind::Or, Value::Number(0.0), Value::Bool(true)));
    assert!(!Evaluator::eval_logic(Kind::And, Value::Number(2.0), Value::Number(0.0)));
}

#[test]
fn unary_operators() {
    let v = Evaluator::eval_unary(Kind::Negate, Value::Number(5.0)).unwrap();
    assert_eq!(v, Value::Number(-5.0));

    let v = Evaluator::eval_unary(Kind::Not, Value::Number(0.0)).unwrap();
    assert_eq!(v, Value::Bool(true));

    let v = Evaluator::eval_unary(Kind::Log10, Value::Number(1000.0)).unwrap();
    assert_eq!(v, Value::Number(3.0));

    let v = Evaluator::eval_unary(Kind::Sqrt, Value::Number(49.0)).unwrap();
    assert_eq!(v, Value::Number(7.0));

    let v = Evaluator::eval_unary(Kind::Cbrt, Value::Number(-27.0)).unwrap();
    assert_eq!(v, Value::Number(-3.0));

    assert!(matches!(Evaluator::eval_unary(Kind::Sqrt, Value::Number(-1.0)),
                     Err(EvaluationError::Domain { function: "sqrt", .. })));
}

#[test]
fn trigonometry() {
    let sine = Evaluator::eval_trig(Kind::Sin, 90.0, AngleUnit::Degrees).unwrap();
    assert!((sine - 1.0).abs() < 1e-12);

    let angle = Evaluator::eval_trig(Kind::Atan, 1.0, AngleUnit::Degrees).unwrap();
    assert!((angle - 45.0).abs() < 1e-12);

    assert!(Evaluator::eval_trig(Kind::Acos, 1.5, AngleUnit::Radians).is_err());
}

#[test]
fn trigonometry_of_infinite_angles() {
    for kind in [Kind::Sin, Kind::Cos, Kind::Tan] {
        assert!(matches!(Evaluator::eval_trig(kind, f64::INFINITY, AngleUnit::Radians),
                         Err(EvaluationError::Domain { .. })),
                "{kind}");
    }
    assert_eq!(Evaluator::eval_trig(Kind::Sinh, f64::INFINITY, AngleUnit::Radians).unwrap(),
               f64::INFINITY);
}
