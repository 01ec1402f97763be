use crate::util::{variable_name, Function};
use std::fmt::{self, Display, Formatter};

/// Which sides of an operator symbol need a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Prefix operators and `(`: a value is needed on the right only
    RightOnly,
    /// `)`: a value is needed on the left only
    LeftOnly,
    /// Binary operators: values are needed on both sides
    Both,
}

impl Side {
    /// Check if a value is needed on the left of the symbol
    pub fn needs_left(self) -> bool {
        match self {
            Self::LeftOnly | Self::Both => true,
            Self::RightOnly => false,
        }
    }

    /// Check if a value is needed on the right of the symbol
    pub fn needs_right(self) -> bool {
        match self {
            Self::RightOnly | Self::Both => true,
            Self::LeftOnly => false,
        }
    }
}

/// Operator symbols of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`, 1 if the operand is zero
    Not,
    /// `~`, bitwise not
    BitNot,
    /// `^`, power
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, division of the floored operands
    Mod,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `<<`
    Shl,
    /// `>>`, arithmetic shift
    Shr,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl Symbol {
    /// Every symbol, in no particular order
    pub const ALL: [Self; 22] = [
        Self::LParen,
        Self::RParen,
        Self::Not,
        Self::BitNot,
        Self::Pow,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Plus,
        Self::Minus,
        Self::Shl,
        Self::Shr,
        Self::Less,
        Self::LessEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::Equal,
        Self::NotEqual,
        Self::BitAnd,
        Self::BitOr,
        Self::And,
        Self::Or,
    ];

    /// Get the operator precedence. Lower values bind tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::LParen | Self::RParen => 0,
            Self::Not | Self::BitNot => 1,
            Self::Pow => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Plus | Self::Minus => 4,
            Self::Shl | Self::Shr => 5,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => 6,
            Self::Equal | Self::NotEqual => 7,
            Self::BitAnd => 8,
            Self::BitOr => 9,
            Self::And => 10,
            Self::Or => 11,
        }
    }

    /// Get the sides on which the symbol needs a value. This is also the
    /// associativity rule used when building the postfix program.
    pub fn side(self) -> Side {
        match self {
            Self::LParen | Self::Not | Self::BitNot => Side::RightOnly,
            Self::RParen => Side::LeftOnly,
            _ => Side::Both,
        }
    }

    /// The text of the symbol in a formula
    pub fn lexeme(self) -> &'static str {
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Pow => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

/// The different kinds of tokens, with their payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A literal value
    Number(f64),
    /// A variable, by 1-based index (`A` is 1, `AA` is 27)
    Variable(usize),
    /// An operator or a parenthesis
    Symbol(Symbol),
    /// A function name
    Function(Function),
    /// Argument separator in function calls
    Comma,
}

/// A token, and where it was found in the formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character position in the formula, only used in error messages
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Get `Some(symbol)` if this token is an operator symbol
    pub fn symbol(&self) -> Option<Symbol> {
        if let TokenKind::Symbol(symbol) = self.kind {
            Some(symbol)
        } else {
            None
        }
    }

    /// Check if this token is the given symbol
    pub fn is(&self, symbol: Symbol) -> bool {
        self.symbol() == Some(symbol)
    }

    /// The text of the token, as it would be written in a formula
    pub fn lexeme(&self) -> String {
        match self.kind {
            TokenKind::Number(value) => value.to_string(),
            TokenKind::Variable(index) => variable_name(index),
            TokenKind::Symbol(symbol) => symbol.lexeme().into(),
            TokenKind::Function(function) => function.name().into(),
            TokenKind::Comma => ",".into(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            TokenKind::Number(_) => "number",
            TokenKind::Variable(_) => "variable",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Function(_) => "function",
            TokenKind::Comma => "comma",
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(
            fmt,
            "{} '{}' at position {}",
            self.kind_name(),
            self.lexeme(),
            self.position
        )
    }
}
