pub mod collections;
pub mod complex;
pub mod error;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
