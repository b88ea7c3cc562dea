/// The pipeline stage an [`Error`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Tokenization,
    Parse,
    Evaluate,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind of failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::Tokenization => "TOKENIZATION_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Evaluate => "EVALUATE_ERROR",
        }
    }
}

/// Every way [`crate::evaluate`] can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input contains a character outside of digits, `+ - * /` and `( )`,
    /// or is longer than allowed.
    #[error("tokenization error: {reason} in `{input}`")]
    Tokenization { reason: String, input: String },

    /// The tokens do not form an expression.
    #[error("parse error: {0}")]
    Parse(String),

    /// A well-formed expression could not be reduced to a number.
    #[error("evaluate error: {0}")]
    Evaluate(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tokenization { .. } => ErrorKind::Tokenization,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Evaluate(_) => ErrorKind::Evaluate,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

pub type EResult<T> = Result<T, Error>;
