use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures signalled by the collection and complex number types. Every
/// operation that returns one of these leaves its receiver unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("stack is empty")]
    EmptyStack,

    #[error("{0:?} is not a valid complex number")]
    Parse(String),

    #[error("{0}")]
    InvalidArgument(&'static str),
}
