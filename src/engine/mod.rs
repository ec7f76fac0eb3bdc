pub mod config;
pub mod dict;
pub mod error;
pub mod input;
pub mod inter;
mod ops;
pub mod quote;
pub mod source;
pub mod stack;

#[cfg(test)]
pub mod util;

pub use config::Config;
pub use dict::{Dictionary, Word, WordOperation};
pub use error::{Error, RegisterError, ResultCode};
pub use input::Span;
pub use inter::Interpreter;
