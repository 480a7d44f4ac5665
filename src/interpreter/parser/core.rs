use crate::{
    ast::{AngleUnit, Kind, Node},
    error::ParseError,
    interpreter::{
        io::LineSource,
        lexer::{Token, tokenize},
        parser::{
            precedence::Precedence,
            utils::{BracketSpan, is_enclosed, outer_brackets, ternary_markers},
        },
        translator::translate,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of sub-expressions the parser accepts.
///
/// Every bracket group, unary operator and left operand of a binary operator
/// adds a level, as does every line read for an input token.
pub const MAX_DEPTH: usize = 256;

/// Builds expression trees from source text.
///
/// The parser owns no state besides its configuration: the line source used
/// for input tokens and the angle unit stamped on every node it creates.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::AngleUnit,
///     interpreter::{io::ScriptedLines, parser::core::Parser, value::core::Value},
/// };
///
/// let mut input = ScriptedLines::default();
/// let tree = Parser::new(&mut input).with_angle_unit(AngleUnit::Degrees)
///                                   .parse("2 * sin 30")
///                                   .unwrap();
///
/// let Value::Number(n) = tree.evaluate_quiet().unwrap() else { panic!() };
/// assert!((n - 1.0).abs() < 1e-12);
/// ```
pub struct Parser<'a> {
    input:      &'a mut dyn LineSource,
    angle_unit: AngleUnit,
    depth:      usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser that reads input tokens from `input`.
    pub fn new(input: &'a mut dyn LineSource) -> Self {
        Self { input,
               angle_unit: AngleUnit::default(),
               depth: 0 }
    }

    /// Sets the angle unit given to every node this parser builds.
    #[must_use]
    pub const fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }

    /// Translates, tokenizes and parses `source`.
    ///
    /// # Errors
    /// Any [`ParseError`] raised by the lexer or while building the tree.
    pub fn parse(&mut self, source: &str) -> ParseResult<Node> {
        let tokens = tokenize(&translate(source))?;
        self.parse_tokens(&tokens)
    }

    /// Parses a token sequence.
    ///
    /// Finds the root token, then builds the node for it, recursing into the
    /// token ranges that form its operands.
    ///
    /// # Errors
    /// - `EmptyExpression` if `tokens` is empty.
    /// - `UnbalancedBrackets` if brackets do not pair up.
    /// - `MalformedTernary` if conditional markers do not pair up.
    /// - `TooDeep` if sub-expressions nest more than [`MAX_DEPTH`] levels.
    /// - Errors from reading and parsing interactive input.
    pub fn parse_tokens(&mut self, tokens: &[Token]) -> ParseResult<Node> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }

        self.depth += 1;
        let node = self.parse_level(tokens);
        self.depth -= 1;
        node
    }

    fn parse_level(&mut self, tokens: &[Token]) -> ParseResult<Node> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let spans = outer_brackets(tokens)?;
        let root = find_root(tokens, &spans);
        let token = tokens[root];

        log::debug!("root of {tokens:?} is {token:?} at {root}");

        match token.precedence() {
            Precedence::Input => self.parse_input(tokens),
            Precedence::Literal => self.parse_literal(tokens, token),
            Precedence::Bracket => self.parse_group(tokens, &spans),
            Precedence::Unary => self.parse_unary(tokens, root),
            Precedence::Logical
            | Precedence::Comparison
            | Precedence::Additive
            | Precedence::Multiplicative
            | Precedence::Exponent => self.parse_binary(tokens, root),
            Precedence::Ternary => self.parse_conditional(tokens, &spans),
        }
    }

    fn node(&self, kind: Kind, children: Vec<Node>) -> Node {
        Node { kind,
               children,
               angle_unit: self.angle_unit }
    }

    /// Reads one line of input and parses it in place of the input token.
    fn parse_input(&mut self, tokens: &[Token]) -> ParseResult<Node> {
        if tokens.len() != 1 {
            return Err(ParseError::UnexpectedTrailingTokens { token: "i".to_string() });
        }

        let line = self.input.read_line()?.ok_or(ParseError::InputClosed)?;
        log::debug!("read input line {line:?}");
        self.parse(&line)
    }

    fn parse_literal(&self, tokens: &[Token], token: Token) -> ParseResult<Node> {
        if tokens.len() != 1 {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}") });
        }

        let value = match token {
            Token::Number(n) => n,
            Token::E => std::f64::consts::E,
            Token::Pi => std::f64::consts::PI,
            other => {
                return Err(ParseError::UnexpectedToken { token:    format!("{other:?}"),
                                                         position: 0, });
            },
        };
        Ok(self.node(Kind::Number(value), Vec::new()))
    }

    /// Parses the inside of a bracket group that spans the whole sequence.
    fn parse_group(&mut self, tokens: &[Token], spans: &[BracketSpan]) -> ParseResult<Node> {
        match spans {
            [(0, close)] if *close == tokens.len() - 1 => self.parse_tokens(&tokens[1..*close]),
            _ => Err(ParseError::UnexpectedTrailingTokens { token: "(".to_string() }),
        }
    }

    /// Parses a chain of unary operators.
    ///
    /// Consecutive unary tokens nest right to left, so the node is built for
    /// the first token of the chain and everything after it is its operand.
    fn parse_unary(&mut self, tokens: &[Token], root: usize) -> ParseResult<Node> {
        let mut start = root;
        while start > 0 && tokens[start - 1].precedence() == Precedence::Unary {
            start -= 1;
        }

        if start != 0 {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{:?}",
                                                                             tokens[start]) });
        }

        let kind = unary_kind(tokens[start]);
        let operand = self.parse_tokens(&tokens[start + 1..])?;
        Ok(self.node(kind, vec![operand]))
    }

    /// Splits the sequence around a binary operator.
    ///
    /// An operator at the very end yields a node with only its left operand;
    /// evaluating it reports the missing operand.
    fn parse_binary(&mut self, tokens: &[Token], root: usize) -> ParseResult<Node> {
        let kind = binary_kind(tokens[root]);
        let left = self.parse_tokens(&tokens[..root])?;

        if root + 1 == tokens.len() {
            log::debug!("operator {kind} has no right operand");
            return Ok(self.node(kind, vec![left]));
        }

        let right = self.parse_tokens(&tokens[root + 1..])?;
        Ok(self.node(kind, vec![left, right]))
    }

    fn parse_conditional(&mut self,
                         tokens: &[Token],
                         spans: &[BracketSpan])
                         -> ParseResult<Node> {
        let (if_index, else_index) = ternary_markers(tokens, spans)?;

        let condition = self.parse_tokens(&tokens[..if_index])?;
        let then_branch = self.parse_tokens(&tokens[if_index + 1..else_index])?;
        let else_branch = self.parse_tokens(&tokens[else_index + 1..])?;

        Ok(self.node(Kind::Conditional, vec![condition, then_branch, else_branch]))
    }
}

/// Picks the root of a token sequence.
///
/// Scanning left to right, a token outside every bracket span replaces the
/// current root when it binds at most as tightly. Ties go to the rightmost
/// token, which makes operators of equal precedence left associative.
///
/// # Example
/// ```
/// use treecalc::interpreter::{
///     lexer::tokenize,
///     parser::{core::find_root, utils::outer_brackets},
/// };
///
/// // 10 - 3 - 2 is rooted at the second minus.
/// let tokens = tokenize("10-3-2").unwrap();
/// assert_eq!(find_root(&tokens, &outer_brackets(&tokens).unwrap()), 3);
/// ```
#[must_use]
pub fn find_root(tokens: &[Token], spans: &[BracketSpan]) -> usize {
    let mut root = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.precedence() <= tokens[root].precedence() && !is_enclosed(spans, i) {
            root = i;
        }
    }
    root
}

const fn unary_kind(token: Token) -> Kind {
    match token {
        Token::Not => Kind::Not,
        Token::Log10 => Kind::Log10,
        Token::Sqrt => Kind::Sqrt,
        Token::Cbrt => Kind::Cbrt,
        Token::Output => Kind::Output,
        Token::Sin => Kind::Sin,
        Token::Cos => Kind::Cos,
        Token::Tan => Kind::Tan,
        Token::Asin => Kind::Asin,
        Token::Acos => Kind::Acos,
        Token::Atan => Kind::Atan,
        Token::Sinh => Kind::Sinh,
        Token::Cosh => Kind::Cosh,
        Token::Tanh => Kind::Tanh,
        Token::Asinh => Kind::Asinh,
        Token::Acosh => Kind::Acosh,
        Token::Atanh => Kind::Atanh,
        _ => Kind::Negate,
    }
}

const fn binary_kind(token: Token) -> Kind {
    match token {
        Token::And => Kind::And,
        Token::Or => Kind::Or,
        Token::Equal => Kind::Equal,
        Token::Greater => Kind::Greater,
        Token::Less => Kind::Less,
        Token::GreaterEqual => Kind::GreaterEqual,
        Token::LessEqual => Kind::LessEqual,
        Token::Plus => Kind::Add,
        Token::Star => Kind::Mul,
        Token::Slash => Kind::Div,
        Token::Percent => Kind::Mod,
        Token::Caret => Kind::Pow,
        Token::Root => Kind::Root,
        Token::Log => Kind::Log,
        _ => Kind::Sub,
    }
}
