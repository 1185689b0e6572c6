//! Game start module

mod resolver;
mod service;
mod validation;

#[cfg(test)]
mod property_tests;

pub use resolver::*;
pub use service::*;
pub use validation::*;
