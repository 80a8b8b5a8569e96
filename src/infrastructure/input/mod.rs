//! Operator input from the terminal

mod stdin;

pub use stdin::StdinInput;
