//! Grid composition module

mod composer;


pub use composer::*;
