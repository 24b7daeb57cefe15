use thiserror::Error;

/// The four arithmetic operators a line may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator. Division truncates toward zero, and a zero
    /// divisor yields 0 rather than an error.
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => {
                if right == 0 {
                    0
                } else {
                    left / right
                }
            }
        }
    }
}

/// Line-scoped failures. The `Display` renderings are exactly the two
/// strings emitted on the corresponding output line; these never abort
/// processing of later lines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// Wrong token count, or a Roman token with a character outside `IVXLCDM`.
    #[error("Invalid input")]
    Malformed,
    /// Operator token other than `+`, `-`, `*`, `/`.
    #[error("Invalid operator")]
    UnknownOperator,
}

/// One output line per input line, same order, plus per-run counters.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub lines: Vec<String>,
    pub stats: TransformStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub evaluated: usize,
    pub invalid_input: usize,
    pub invalid_operator: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_four_operators() {
        assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
        assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("?"), None);
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol("++"), None);
    }

    #[test]
    fn applies_integer_arithmetic() {
        assert_eq!(Operator::Add.apply(3, 2), 5);
        assert_eq!(Operator::Subtract.apply(500, 1000), -500);
        assert_eq!(Operator::Multiply.apply(12, 12), 144);
        assert_eq!(Operator::Divide.apply(10, 3), 3);
        assert_eq!(Operator::Divide.apply(-10, 3), -3);
    }

    #[test]
    fn division_by_zero_yields_zero() {
        assert_eq!(Operator::Divide.apply(5, 0), 0);
        assert_eq!(Operator::Divide.apply(0, 0), 0);
    }

    #[test]
    fn line_errors_render_as_the_fixed_output_strings() {
        assert_eq!(LineError::Malformed.to_string(), "Invalid input");
        assert_eq!(LineError::UnknownOperator.to_string(), "Invalid operator");
    }
}
