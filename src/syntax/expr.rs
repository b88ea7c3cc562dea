use super::token::Operator;

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(f64),
    Prefix {
        op: Operator,
        operand: Box<Expression>,
    },
    Binary {
        lhs: Box<Expression>,
        op: Operator,
        rhs: Box<Expression>,
    },
}
