use std::{iter::Peekable, str::CharIndices};

use super::token::{Operator, Token};
use crate::error::{EResult, Error};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some((_, '+')) => Some(Token::Op(Operator::Plus)),
            Some((_, '-')) => Some(Token::Op(Operator::Minus)),
            Some((_, '*')) => Some(Token::Op(Operator::Mul)),
            Some((_, '/')) => Some(Token::Op(Operator::Div)),
            Some((_, '(')) => Some(Token::LParen),
            Some((_, ')')) => Some(Token::RParen),
            Some((off, c)) if c.is_ascii_digit() => Some(self.read_number(off)),
            Some((_, c)) => Some(Token::Invalid(c)),
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..]
    }

    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        Token::Number(self.slice_until(from_off, |c| !c.is_ascii_digit()))
    }
}

/// Splits `src` into tokens, failing on the first character that is not a
/// digit, an operator or a parenthesis. Whitespace is not accepted here.
pub fn tokenize(src: &str) -> EResult<Vec<Token<'_>>> {
    let mut tokens = vec![];

    for token in Lexer::new(src) {
        if let Token::Invalid(c) = token {
            return Err(Error::Tokenization {
                reason: format!("unexpected character `{c}`"),
                input: src.to_string(),
            });
        }
        tokens.push(token);
    }

    log::trace!("tokenized {} chars into {} tokens", src.len(), tokens.len());
    Ok(tokens)
}

pub fn strip_whitespace(src: &str) -> String {
    src.chars().filter(|c| !c.is_whitespace()).collect()
}
