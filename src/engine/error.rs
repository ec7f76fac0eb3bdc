use core::fmt;

use thiserror::Error;

/// Faults that abort a script run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Stack overflow")]
    StackOverflow,
    #[error("Unknown word: {0}")]
    UnknownWord(String),
    #[error("Unterminated quotation: missing `]`")]
    UnterminatedQuotation,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Quotations nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Output failed")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn code(&self) -> ResultCode {
        match self {
            Error::StackUnderflow => ResultCode::StackUnderflow,
            Error::StackOverflow => ResultCode::StackOverflow,
            Error::UnknownWord(_) => ResultCode::UnknownWord,
            Error::UnterminatedQuotation => ResultCode::UnterminatedQuotation,
            Error::DivisionByZero => ResultCode::DivisionByZero,
            Error::NestingTooDeep(_) => ResultCode::NestingTooDeep,
            Error::Output(_) => ResultCode::Output,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Invalid word name: {0:?}")]
    InvalidName(String),
}

/// Process-level result of a run. Codes 0 to 3 are the stable contract
/// for hosts; the rest report faults added on top of it.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success = 0,
    StackUnderflow = 1,
    StackOverflow = 2,
    UnknownWord = 3,
    UnterminatedQuotation = 4,
    DivisionByZero = 5,
    NestingTooDeep = 6,
    Output = 7,
}

impl ResultCode {
    pub fn of(res: &Result<(), Error>) -> Self {
        match res {
            Ok(()) => ResultCode::Success,
            Err(e) => e.code(),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultCode::Success => "success",
            ResultCode::StackUnderflow => "stack underflow",
            ResultCode::StackOverflow => "stack overflow",
            ResultCode::UnknownWord => "unknown word name",
            ResultCode::UnterminatedQuotation => "unterminated quotation",
            ResultCode::DivisionByZero => "division by zero",
            ResultCode::NestingTooDeep => "quotations nested too deep",
            ResultCode::Output => "output failed",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
