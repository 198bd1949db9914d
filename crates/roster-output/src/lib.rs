mod formatters;

pub use formatters::*;
