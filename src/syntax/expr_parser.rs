use crate::error::{EResult, Error};

use super::{
    token::{Assoc, Precedence, Token, PREFIX_PRECEDENCE},
    ExprParser, Expression, Operator, Parser,
};

impl ExprParser for Parser<'_> {
    fn parse_expr(&mut self) -> EResult<Box<Expression>> {
        self.parse_expr_with_precedence(0)
    }

    fn parse_expr_with_precedence(&mut self, min_prec: Precedence) -> EResult<Box<Expression>> {
        self.enter()?;
        let mut lhs = self.parse_expr_lhs()?;

        while let Some(Token::Op(op)) = self.peek() {
            let (prec, assoc) = op.get();

            if prec <= min_prec {
                break;
            }
            self.bump();

            // Recursing at the same power keeps `a-b-c` as `(a-b)-c`.
            let new_min_prec = match assoc {
                Assoc::Left => prec,
            };

            let rhs = self.parse_expr_with_precedence(new_min_prec)?;
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        self.leave();
        Ok(lhs)
    }

    fn parse_expr_lhs(&mut self) -> EResult<Box<Expression>> {
        match self.next_token() {
            None => Err(Error::Parse(
                "expected expression, found end of input".into(),
            )),
            Some(token) => match token {
                Token::Number(digits) => {
                    let value = digits.parse::<f64>().map_err(|why| {
                        Error::Parse(format!("invalid number literal `{digits}`: {why}"))
                    })?;
                    Ok(Box::new(Expression::Literal(value)))
                }
                Token::Op(Operator::Minus) => self.parse_unary_expr(Operator::Minus),
                Token::LParen => self.parse_grouping_expr(),
                other => Err(Error::Parse(format!(
                    "expected expression, found {other}"
                ))),
            },
        }
    }

    fn parse_grouping_expr(&mut self) -> EResult<Box<Expression>> {
        let expression = self.parse_expr()?;
        self.expect(Token::RParen)?;
        Ok(expression)
    }

    fn parse_unary_expr(&mut self, op: Operator) -> EResult<Box<Expression>> {
        let operand = self.parse_expr_with_precedence(PREFIX_PRECEDENCE)?;
        Ok(Box::new(Expression::Prefix { op, operand }))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        error::ErrorKind,
        syntax::{
            expr::Expression, parse, token::Operator, tokenize, ExprParser, Parser,
        },
    };

    fn parse_str(s: &str) -> Box<Expression> {
        let tokens = tokenize(s).unwrap();
        parse(&tokens).unwrap()
    }

    fn lit(v: f64) -> Box<Expression> {
        Box::new(Expression::Literal(v))
    }

    fn bin(lhs: Box<Expression>, op: Operator, rhs: Box<Expression>) -> Box<Expression> {
        Box::new(Expression::Binary { lhs, op, rhs })
    }

    fn neg(operand: Box<Expression>) -> Box<Expression> {
        Box::new(Expression::Prefix {
            op: Operator::Minus,
            operand,
        })
    }

    #[test]
    fn parse_binary_expr() {
        use Operator::*;

        let expected = bin(neg(lit(5.0)), Plus, bin(lit(4.0), Mul, lit(7.0)));
        assert_eq!(parse_str("-5+4*7"), expected);
    }

    #[test]
    fn parse_binary_expr_2() {
        use Operator::*;

        let expected = bin(bin(neg(lit(5.0)), Plus, lit(4.0)), Mul, lit(7.0));
        assert_eq!(parse_str("(-5+4)*7"), expected);
    }

    #[test]
    fn unary_minus_binds_tighter_than_mul() {
        use Operator::*;

        assert_eq!(parse_str("-2*3"), bin(neg(lit(2.0)), Mul, lit(3.0)));
        assert_eq!(parse_str("2*-3"), bin(lit(2.0), Mul, neg(lit(3.0))));
        assert_eq!(parse_str("--1"), neg(neg(lit(1.0))));
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        use Operator::*;

        assert_eq!(
            parse_str("10-3-2"),
            bin(bin(lit(10.0), Minus, lit(3.0)), Minus, lit(2.0))
        );
        assert_eq!(
            parse_str("8/4*2"),
            bin(bin(lit(8.0), Div, lit(4.0)), Mul, lit(2.0))
        );
    }

    #[test]
    fn grouping_produces_no_node() {
        assert_eq!(parse_str("((2))"), lit(2.0));
        assert_eq!(
            parse_str("2+(3*4)"),
            bin(lit(2.0), Operator::Plus, bin(lit(3.0), Operator::Mul, lit(4.0)))
        );
    }

    #[test]
    fn parse_expr_stops_at_unconsumed_tokens() {
        let tokens = tokenize("1+2)").unwrap();
        let mut parser = Parser::new(&tokens);
        let expr = parser.parse_expr().unwrap();
        assert_eq!(expr, bin(lit(1.0), Operator::Plus, lit(2.0)));
        assert!(parser.parse_complete().is_err());
    }

    #[test]
    fn malformed_input() {
        for src in ["2+", "4*", "(2+3", ")", "+1", "*2", "()", "2(3)", "(1)(2)", "1--"] {
            let tokens = tokenize(src).unwrap();
            let err = parse(&tokens).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{src}");
        }
    }
}
