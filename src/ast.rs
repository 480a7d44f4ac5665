use std::fmt;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        io::{NullSink, OutputSink, StdoutSink},
        value::core::Value,
    },
};

/// The unit trigonometric nodes measure angles in.
///
/// Direct circular functions (`sin`, `cos`, `tan`) read their argument in this
/// unit, inverse circular functions report their result in it. Hyperbolic
/// functions ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Angles in radians.
    #[default]
    Radians,
    /// Angles in degrees.
    Degrees,
}

impl AngleUnit {
    /// Converts an angle measured in `self` to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }

    /// Converts an angle measured in radians to `self`.
    #[must_use]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_degrees(),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => write!(f, "radians"),
            Self::Degrees => write!(f, "degrees"),
        }
    }
}

/// The operator (or number) a [`Node`] stands for.
///
/// Every kind has a fixed arity, see [`Kind::arity`]. Operator kinds carry no
/// payload; their meaning is purely structural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// A numeric leaf.
    Number(f64),
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `a ^ b`
    Pow,
    /// `a v b`, the `a`-th root of `b`.
    Root,
    /// `a l b`, the logarithm of `b` in base `a`.
    Log,
    /// `L a`, the base 10 logarithm.
    Log10,
    /// `√ a`, the square root.
    Sqrt,
    /// `∛ a`, the cube root.
    Cbrt,
    /// `n a`, arithmetic negation.
    Negate,
    /// `! a`, logical negation.
    Not,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a = b`
    Equal,
    /// `a > b`
    Greater,
    /// `a < b`
    Less,
    /// `a ≥ b`
    GreaterEqual,
    /// `a ≤ b`
    LessEqual,
    /// `s a`
    Sin,
    /// `c a`
    Cos,
    /// `t a`
    Tan,
    /// `S a`
    Asin,
    /// `C a`
    Acos,
    /// `T a`
    Atan,
    /// `ś a`
    Sinh,
    /// `ć a`
    Cosh,
    /// `t́ a`
    Tanh,
    /// `Ś a`
    Asinh,
    /// `Ć a`
    Acosh,
    /// `T́ a`
    Atanh,
    /// `o a`, prints the character with code point `a` and yields `a`.
    Output,
    /// `a ? b : c`
    Conditional,
}

impl Kind {
    /// Number of children a node of this kind must have.
    ///
    /// # Example
    /// ```
    /// use treecalc::ast::Kind;
    ///
    /// assert_eq!(Kind::Number(1.0).arity(), 0);
    /// assert_eq!(Kind::Sin.arity(), 1);
    /// assert_eq!(Kind::Root.arity(), 2);
    /// assert_eq!(Kind::Conditional.arity(), 3);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Number(_) => 0,
            Self::Log10
            | Self::Sqrt
            | Self::Cbrt
            | Self::Negate
            | Self::Not
            | Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::Asin
            | Self::Acos
            | Self::Atan
            | Self::Sinh
            | Self::Cosh
            | Self::Tanh
            | Self::Asinh
            | Self::Acosh
            | Self::Atanh
            | Self::Output => 1,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::Pow
            | Self::Root
            | Self::Log
            | Self::And
            | Self::Or
            | Self::Equal
            | Self::Greater
            | Self::Less
            | Self::GreaterEqual
            | Self::LessEqual => 2,
            Self::Conditional => 3,
        }
    }

    /// The canonical symbol of the kind, as the lexer reads it.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Number(_) => "num",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Root => "v",
            Self::Log => "l",
            Self::Log10 => "L",
            Self::Sqrt => "√",
            Self::Cbrt => "∛",
            Self::Negate => "n",
            Self::Not => "!",
            Self::And => "&",
            Self::Or => "|",
            Self::Equal => "=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => "≥",
            Self::LessEqual => "≤",
            Self::Sin => "s",
            Self::Cos => "c",
            Self::Tan => "t",
            Self::Asin => "S",
            Self::Acos => "C",
            Self::Atan => "T",
            Self::Sinh => "ś",
            Self::Cosh => "ć",
            Self::Tanh => "t\u{301}",
            Self::Asinh => "Ś",
            Self::Acosh => "Ć",
            Self::Atanh => "T\u{301}",
            Self::Output => "o",
            Self::Conditional => "?:",
        }
    }

    /// `true` for the six circular functions, the only kinds that consult the
    /// angle unit.
    #[must_use]
    pub const fn is_circular(self) -> bool {
        matches!(self,
                 Self::Sin | Self::Cos | Self::Tan | Self::Asin | Self::Acos | Self::Atan)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

/// A node of the expression tree.
///
/// A tree is built once by the parser and only its angle unit changes
/// afterwards. Child order is operand order: for `a - b` the first child is
/// `a`; for `a ? b : c` the children are condition, then-value, else-value.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What the node computes.
    pub kind:       Kind,
    /// Operands, in order.
    pub children:   Vec<Self>,
    /// Unit used by this node if it is a circular trigonometric function.
    pub angle_unit: AngleUnit,
}

impl Node {
    /// Creates a node with the default angle unit.
    #[must_use]
    pub const fn new(kind: Kind, children: Vec<Self>) -> Self {
        Self { kind,
               children,
               angle_unit: AngleUnit::Radians }
    }

    /// Creates a numeric leaf.
    ///
    /// # Example
    /// ```
    /// use treecalc::{ast::Node, interpreter::value::core::Value};
    ///
    /// let leaf = Node::number(4.5);
    /// assert_eq!(leaf.evaluate_quiet().unwrap(), Value::Number(4.5));
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::new(Kind::Number(value), Vec::new())
    }

    /// Sets the angle unit of this node and of every node below it.
    ///
    /// # Example
    /// ```
    /// use treecalc::{
    ///     ast::{AngleUnit, Kind, Node},
    ///     interpreter::io::ScriptedLines,
    ///     interpreter::parser::core::Parser,
    /// };
    ///
    /// let mut input = ScriptedLines::default();
    /// let mut tree = Parser::new(&mut input).parse("s(c0)").unwrap();
    /// tree.set_angle_unit(AngleUnit::Degrees);
    ///
    /// assert_eq!(tree.children[0].angle_unit, AngleUnit::Degrees);
    /// ```
    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        self.angle_unit = unit;
        for child in &mut self.children {
            child.set_angle_unit(unit);
        }
    }

    /// Builder form of [`Node::set_angle_unit`].
    #[must_use]
    pub fn with_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.set_angle_unit(unit);
        self
    }

    /// Checks that every node has exactly as many children as its kind needs.
    ///
    /// Leaves are then necessarily numbers, because every other kind has an
    /// arity of at least one.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.children.len() == self.kind.arity() && self.children.iter().all(Self::is_well_formed)
    }

    /// Evaluates the tree, printing output characters to standard output.
    ///
    /// # Errors
    /// Returns an [`EvaluationError`] on division by zero, out-of-domain
    /// arguments, missing operands or output failures.
    ///
    /// # Example
    /// ```
    /// use treecalc::{interpreter::value::core::Value, parse};
    ///
    /// let tree = parse("2+3*4").unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), Value::Number(14.0));
    /// ```
    pub fn evaluate(&self) -> Result<Value, EvaluationError> {
        self.evaluate_with(&mut StdoutSink)
    }

    /// Evaluates the tree, sending output characters to `sink`.
    ///
    /// # Errors
    /// See [`Node::evaluate`].
    pub fn evaluate_with(&self, sink: &mut dyn OutputSink) -> EvalResult<Value> {
        Evaluator::new(sink).eval(self)
    }

    /// Evaluates the tree without any output side effect.
    ///
    /// # Errors
    /// See [`Node::evaluate`].
    pub fn evaluate_quiet(&self) -> EvalResult<Value> {
        self.evaluate_with(&mut NullSink)
    }
}
