//! Color set selection module

mod builder;


pub use builder::*;
