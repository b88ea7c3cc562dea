//! Arithmetic expression engine.
//!
//! An expression such as `(2 + 3) * -4` goes through three stages: the lexer
//! turns it into [`Token`]s, a precedence-climbing parser builds an
//! [`Expression`] tree and the [`Evaluator`] reduces that tree to an `f64`.
//! Each stage fails with its own [`Error`] variant.
//!
//! ```
//! assert_eq!(reckon::evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(reckon::evaluate("5 / 0").unwrap_err().code(), "EVALUATE_ERROR");
//! ```

pub mod config;
pub mod error;
pub mod runtime;
pub mod syntax;

pub use config::Limits;
pub use error::{EResult, Error, ErrorKind};
pub use runtime::eval::Evaluator;
pub use syntax::{parse, strip_whitespace, tokenize, Expression, Operator, Parser, Token, TokenKind};

/// Evaluates `expression` with the default [`Limits`].
pub fn evaluate(expression: &str) -> EResult<f64> {
    evaluate_with(expression, &Limits::default())
}

/// Evaluates `expression`, ignoring all whitespace in it.
pub fn evaluate_with(expression: &str, limits: &Limits) -> EResult<f64> {
    let src = strip_whitespace(expression);

    let len = src.chars().count();
    if len > limits.max_length {
        return Err(Error::Tokenization {
            reason: format!(
                "expression is {len} characters long, the limit is {}",
                limits.max_length
            ),
            input: truncate(&src, 32),
        });
    }

    let tokens = tokenize(&src)?;
    log::debug!("{} tokens", tokens.len());

    let ast = Parser::with_max_depth(&tokens, limits.max_depth).parse_complete()?;
    log::trace!("ast: {ast:?}");

    let value = Evaluator::new().eval(&ast)?;
    log::debug!("`{src}` = {value}");
    Ok(value)
}

fn truncate(src: &str, max_chars: usize) -> String {
    match src.char_indices().nth(max_chars) {
        Some((off, _)) => format!("{}...", &src[..off]),
        None => src.to_string(),
    }
}
