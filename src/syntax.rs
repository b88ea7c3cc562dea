mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub use expr::Expression;
pub use lexer::{strip_whitespace, tokenize};
pub use parser::{parse, Parser};
pub use token::{Operator, Precedence, Token, TokenKind, PREFIX_PRECEDENCE};

use crate::error::EResult;

pub trait ExprParser {
    fn parse_expr(&mut self) -> EResult<Box<Expression>>;
    fn parse_expr_with_precedence(&mut self, min_prec: Precedence) -> EResult<Box<Expression>>;
    fn parse_expr_lhs(&mut self) -> EResult<Box<Expression>>;
    fn parse_grouping_expr(&mut self) -> EResult<Box<Expression>>;
    fn parse_unary_expr(&mut self, op: Operator) -> EResult<Box<Expression>>;
}
