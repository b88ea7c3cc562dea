use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
}

pub type Precedence = u8;

/// Binding power of a prefix operator; higher than any binary operator.
pub const PREFIX_PRECEDENCE: Precedence = 3;

impl Operator {
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Assoc::Left,
        }
    }

    pub fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
    Parenthesis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// Only produced by the lexer iterator; never reaches the parser.
    Invalid(char),
    Number(&'src str),
    Op(Operator),

    LParen,
    RParen,
}

impl<'src> Token<'src> {
    pub fn kind(&self) -> Option<TokenKind> {
        match *self {
            Self::Invalid(_) => None,
            Self::Number(_) => Some(TokenKind::Number),
            Self::Op(_) => Some(TokenKind::Operator),
            Self::LParen | Self::RParen => Some(TokenKind::Parenthesis),
        }
    }

    pub fn text(&self) -> &'src str {
        match *self {
            Self::Invalid(_) => "",
            Self::Number(s) => s,
            Self::Op(op) => op.symbol(),
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(c) => write!(f, "`{c}`"),
            other => write!(f, "`{}`", other.text()),
        }
    }
}
