//! Line input from stdin

use std::io::{self, BufRead, Write};

use crate::domain::ports::OperatorInput;

/// Reads answers from standard input.
///
/// Any read error or end of input yields an empty line.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorInput for StdinInput {
    fn read_line(&self) -> String {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        read_answer(&mut io::stdin().lock())
    }
}

pub(crate) fn read_answer(reader: &mut impl BufRead) -> String {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(_) => line,
        Err(_) => String::new(),
    }
}
