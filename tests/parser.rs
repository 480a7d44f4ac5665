use pretty_assertions::assert_eq;
use treecalc::{
    ast::{AngleUnit, Kind, Node},
    error::ParseError,
    interpreter::{
        io::ScriptedLines,
        parser::core::{MAX_DEPTH, Parser},
        value::core::Value,
    },
};

fn parse(src: &str) -> Node {
    let mut input = ScriptedLines::default();
    Parser::new(&mut input).parse(src)
                           .unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
}

fn num(n: f64) -> Node {
    Node::number(n)
}

fn op(kind: Kind, children: Vec<Node>) -> Node {
    Node::new(kind, children)
}

#[test]
fn subtraction_nests_to_the_left() {
    assert_eq!(parse("10-3-2"),
               op(Kind::Sub, vec![op(Kind::Sub, vec![num(10.0), num(3.0)]), num(2.0)]));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("2+3*4"),
               op(Kind::Add, vec![num(2.0), op(Kind::Mul, vec![num(3.0), num(4.0)])]));
    assert_eq!(parse("(2+3)*4"),
               op(Kind::Mul, vec![op(Kind::Add, vec![num(2.0), num(3.0)]), num(4.0)]));
}

#[test]
fn unary_chains_nest_to_the_right() {
    assert_eq!(parse("sin cos 0"),
               op(Kind::Sin, vec![op(Kind::Cos, vec![num(0.0)])]));
    assert_eq!(parse("--1"),
               op(Kind::Negate, vec![op(Kind::Negate, vec![num(1.0)])]));
}

#[test]
fn implicit_multiplication_builds_a_product() {
    assert_eq!(parse("2sin0"),
               op(Kind::Mul, vec![num(2.0), op(Kind::Sin, vec![num(0.0)])]));
}

#[test]
fn roots_are_unary_nodes() {
    assert_eq!(parse("-sqrt 4"),
               op(Kind::Negate, vec![op(Kind::Sqrt, vec![num(4.0)])]));
    assert_eq!(parse("2^cbrt 8"),
               op(Kind::Pow, vec![num(2.0), op(Kind::Cbrt, vec![num(8.0)])]));
}

#[test]
fn conditional_has_three_children() {
    assert_eq!(parse("1?2:3"),
               op(Kind::Conditional, vec![num(1.0), num(2.0), num(3.0)]));
    assert_eq!(parse("1 ? 2 : 3 ? 4 : 5"),
               op(Kind::Conditional,
                  vec![num(1.0),
                       num(2.0),
                       op(Kind::Conditional, vec![num(3.0), num(4.0), num(5.0)])]));
}

#[test]
fn conditional_binds_loosest() {
    assert_eq!(parse("1 | 0 ? 2 + 1 : 3"),
               op(Kind::Conditional,
                  vec![op(Kind::Or, vec![num(1.0), num(0.0)]),
                       op(Kind::Add, vec![num(2.0), num(1.0)]),
                       num(3.0)]));
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(parse("1+1=2"),
               op(Kind::Equal, vec![op(Kind::Add, vec![num(1.0), num(1.0)]), num(2.0)]));
}

#[test]
fn hyperbolic_symbols_parse() {
    assert_eq!(parse("t\u{301}0"), op(Kind::Tanh, vec![num(0.0)]));
    assert_eq!(parse("T\u{301}0"), op(Kind::Atanh, vec![num(0.0)]));
    assert_eq!(parse("ś0 + Ć1"),
               op(Kind::Add,
                  vec![op(Kind::Sinh, vec![num(0.0)]), op(Kind::Acosh, vec![num(1.0)])]));
}

#[test]
fn constants_resolve_to_their_values() {
    assert_eq!(parse("e"), num(std::f64::consts::E));
    assert_eq!(parse("π"), num(std::f64::consts::PI));
}

#[test]
fn dangling_operator_keeps_only_its_left_operand() {
    let tree = parse("2+");
    assert_eq!(tree, op(Kind::Add, vec![num(2.0)]));
    assert!(!tree.is_well_formed());
}

#[test]
fn parsed_trees_are_well_formed() {
    for src in ["2+3*4", "1?2:3", "s c t 1", "-(2^3)v8", "i"] {
        let mut input = ScriptedLines::new(["42"]);
        let tree = Parser::new(&mut input).parse(src).unwrap();
        assert!(tree.is_well_formed(), "{src:?}");
    }
}

#[test]
fn input_token_reads_exactly_one_line() {
    let mut input = ScriptedLines::new(["1+1", "unused"]);
    let tree = Parser::new(&mut input).parse("i*3").unwrap();

    assert_eq!(tree,
               op(Kind::Mul, vec![op(Kind::Add, vec![num(1.0), num(1.0)]), num(3.0)]));
    assert_eq!(input.remaining(), 1);
}

#[test]
fn parser_stamps_its_angle_unit_on_every_node() {
    let mut input = ScriptedLines::default();
    let tree = Parser::new(&mut input).with_angle_unit(AngleUnit::Degrees)
                                      .parse("2*s(30+60)")
                                      .unwrap();

    fn all_degrees(node: &Node) -> bool {
        node.angle_unit == AngleUnit::Degrees && node.children.iter().all(all_degrees)
    }
    assert!(all_degrees(&tree));

    let Value::Number(n) = tree.evaluate_quiet().unwrap() else {
        panic!("expected a number");
    };
    assert!((n - 2.0).abs() < 1e-12);
}

#[test]
fn malformed_input_is_rejected() {
    let mut input = ScriptedLines::default();
    let mut parser = Parser::new(&mut input);

    assert!(matches!(parser.parse("(1+2"), Err(ParseError::UnbalancedBrackets)));
    assert!(matches!(parser.parse(")1("), Err(ParseError::UnbalancedBrackets)));
    assert!(matches!(parser.parse("1 ? 2"), Err(ParseError::MalformedTernary)));
    assert!(matches!(parser.parse("1 : 2 ? 3"), Err(ParseError::MalformedTernary)));
    assert!(matches!(parser.parse("sin"), Err(ParseError::EmptyExpression)));
    assert!(matches!(parser.parse("3 + # 4"),
                     Err(ParseError::UnexpectedToken { ref token, position: 4 }) if token == "#"));
}

#[test]
fn nesting_depth_is_bounded() {
    let mut input = ScriptedLines::default();
    let mut parser = Parser::new(&mut input);

    let deep = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(parser.parse(&deep), Err(ParseError::TooDeep { limit: MAX_DEPTH })));

    let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(parser.parse(&nested).unwrap(), num(1.0));

    let sum = vec!["1"; 100].join("+");
    assert_eq!(parser.parse(&sum).unwrap().evaluate_quiet().unwrap(),
               Value::Number(100.0));
}

#[test]
fn nested_input_counts_towards_the_depth() {
    let lines = vec!["i"; MAX_DEPTH + 1];
    let mut input = ScriptedLines::new(lines);

    assert!(matches!(Parser::new(&mut input).parse("i"), Err(ParseError::TooDeep { .. })));
}
