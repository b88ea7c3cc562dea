use crate::{
    config::Limits,
    error::{EResult, Error},
    syntax::{token::Token, ExprParser, Expression},
};

/// Cursor over a token slice. One parser is used for exactly one parse.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self::with_max_depth(tokens, Limits::default().max_depth)
    }

    pub fn with_max_depth(tokens: &'a [Token<'a>], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parses a single expression and requires every token to be consumed.
    pub fn parse_complete(&mut self) -> EResult<Box<Expression>> {
        let expr = self.parse_expr()?;

        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(Error::Parse(format!(
                "unexpected trailing token {token}"
            ))),
        }
    }

    pub(super) fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    pub(super) fn next_token(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline(always)]
    pub(super) fn bump(&mut self) {
        let _ = self.next_token();
    }

    pub(super) fn expect(&mut self, expected: Token) -> EResult<()> {
        match self.next_token() {
            None => Err(Error::Parse(format!(
                "expected {expected}, found end of input"
            ))),
            Some(token) => {
                if token == expected {
                    return Ok(());
                }
                Err(Error::Parse(format!("expected {expected}, found {token}")))
            }
        }
    }

    pub(super) fn enter(&mut self) -> EResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::Parse(format!(
                "expression nests deeper than {} levels",
                self.max_depth
            )));
        }
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Parses a complete token sequence with the default nesting limit.
pub fn parse(tokens: &[Token<'_>]) -> EResult<Box<Expression>> {
    Parser::new(tokens).parse_complete()
}

#[cfg(test)]
mod test {
    use super::{parse, Parser};
    use crate::{
        error::ErrorKind,
        syntax::{
            expr::Expression,
            token::{Operator, Token},
        },
    };

    #[test]
    fn parse_literal() {
        let tokens = [Token::Number("123")];
        assert_eq!(parse(&tokens).unwrap(), Box::new(Expression::Literal(123.0)));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let tokens = [Token::Number("2"), Token::LParen, Token::Number("3"), Token::RParen];
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let tokens = [Token::Number("2"), Token::RParen];
        assert_eq!(parse(&tokens).unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn depth_limit() {
        let mut tokens = vec![Token::LParen; 5];
        tokens.push(Token::Number("1"));
        tokens.extend([Token::RParen; 5]);

        assert!(Parser::with_max_depth(&tokens, 6).parse_complete().is_ok());
        let err = Parser::with_max_depth(&tokens, 5).parse_complete().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn unary_chain_counts_towards_depth() {
        let mut tokens = vec![Token::Op(Operator::Minus); 10];
        tokens.push(Token::Number("1"));

        assert!(Parser::with_max_depth(&tokens, 4).parse_complete().is_err());
        assert!(Parser::with_max_depth(&tokens, 11).parse_complete().is_ok());
    }
}
