//! Per-line expression evaluation: tokenize, validate, apply the
//! operator, spell the result.

use crate::domain::model::{LineError, Operator};
use crate::domain::roman::RomanNumeral;
use crate::domain::words::spell_out;

/// Delimiters a line is split on.
pub const DELIMITERS: &[char] = &[' ', '\t'];

/// Pure tokenizer: splits `line` on the delimiter set, keeping empty
/// tokens. Consecutive (or leading/trailing) delimiters therefore
/// surface as empty tokens, which is how an empty numeral can reach
/// evaluation.
pub fn split_tokens<'a>(line: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    line.split(|c: char| delimiters.contains(&c)).collect()
}

/// A parsed `<roman> <operator> <roman>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    left: RomanNumeral<'a>,
    operator: Operator,
    right: RomanNumeral<'a>,
}

impl<'a> Expression<'a> {
    /// Requires exactly three tokens. Both Roman tokens are validated
    /// before the operator is looked at, so a line that is broken in
    /// both ways reports `Invalid input`.
    pub fn parse(line: &'a str) -> Result<Self, LineError> {
        let tokens = split_tokens(line, DELIMITERS);
        let &[left, operator, right] = tokens.as_slice() else {
            return Err(LineError::Malformed);
        };

        let left = RomanNumeral::parse(left).ok_or(LineError::Malformed)?;
        let right = RomanNumeral::parse(right).ok_or(LineError::Malformed)?;
        let operator = Operator::from_symbol(operator).ok_or(LineError::UnknownOperator)?;

        Ok(Self {
            left,
            operator,
            right,
        })
    }

    pub fn evaluate(&self) -> i64 {
        self.operator.apply(self.left.value(), self.right.value())
    }
}

/// One input line to one output line: the spelled-out result, or the
/// fixed error string for the way the line is broken.
pub fn evaluate_line(line: &str) -> String {
    match Expression::parse(line) {
        Ok(expression) => spell_out(expression.evaluate()),
        Err(error) => error.to_string(),
    }
}
