use crate::{
    error::{EResult, Error},
    syntax::{Expression, Operator},
};

/// Reduces an [`Expression`] tree to a number. Holds no state between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn eval(&self, expr: &Expression) -> EResult<f64> {
        let value = match expr {
            Expression::Literal(v) => *v,
            Expression::Prefix { op, operand } => self.eval_prefix(*op, operand)?,
            Expression::Binary { lhs, op, rhs } => self.eval_binary(lhs, *op, rhs)?,
        };

        if !value.is_finite() {
            return Err(Error::Evaluate(format!(
                "result is not a finite number: {value}"
            )));
        }
        Ok(value)
    }

    fn eval_prefix(&self, op: Operator, operand: &Expression) -> EResult<f64> {
        let value = self.eval(operand)?;
        match op {
            Operator::Minus => Ok(-value),
            other => Err(Error::Evaluate(format!("unknown prefix operator `{other}`"))),
        }
    }

    fn eval_binary(&self, lhs: &Expression, op: Operator, rhs: &Expression) -> EResult<f64> {
        let lhs = self.eval(lhs)?;
        let rhs = self.eval(rhs)?;

        match op {
            Operator::Plus => Ok(lhs + rhs),
            Operator::Minus => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs == 0.0 {
                    return Err(Error::Evaluate(format!("division by zero: {lhs} / {rhs}")));
                }
                Ok(lhs / rhs)
            }
        }
    }
}
