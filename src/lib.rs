#[macro_use]
mod macros;

pub mod engine;

pub use engine::{Config, Dictionary, Error, Interpreter, ResultCode, Word};
