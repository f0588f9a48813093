use crate::TruthTableError;
use crate::TruthTableError::*;
use std::fmt::{Display, Error, Formatter};

impl Display for TruthTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            NoVariablesFound => write!(f, "No variables found in the expression"),
            InvalidToken(c) => write!(f, "Invalid token: {}", c),
            MismatchedParentheses => write!(f, "Mismatched parentheses"),
            InvalidExpression => write!(f, "Invalid expression"),
            UnknownVariable(c) => write!(f, "Variable {} is not assigned a value", c),
            TooManyVariables { found, limit } => write!(
                f,
                "Too many variables: found {}, but at most {} are allowed",
                found, limit
            ),
        }
    }
}

impl std::error::Error for TruthTableError {}

#[cfg(test)]
mod tests {
    use crate::TruthTableError::*;

    #[test]
    fn truth_table_error_print() {
        assert_eq!("No variables found in the expression", NoVariablesFound.to_string());
        assert_eq!("Invalid token: #", InvalidToken('#').to_string());
        assert_eq!("Mismatched parentheses", MismatchedParentheses.to_string());
        assert_eq!("Invalid expression", InvalidExpression.to_string());
        assert_eq!(
            "Too many variables: found 13, but at most 12 are allowed",
            TooManyVariables {
                found: 13,
                limit: 12
            }
            .to_string()
        );
    }
}
