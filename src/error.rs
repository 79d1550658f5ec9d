use thiserror::Error;

/// Errors produced by fallible [`BigInt`](crate::BigInt) operations.
#[derive(Error, Debug)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed decimal integer: {input:?}")]
    MalformedInput { input: String },

    #[error("failed to read integer token")]
    Io(#[from] std::io::Error),
}

impl BigIntError {
    pub(crate) fn malformed(input: &str) -> Self {
        BigIntError::MalformedInput { input: input.to_owned() }
    }
}
