//! Boolean expressions are simple structures that represent formulas explicitly, as a tree.
//!
//! The truth table pipeline never needs the tree: it evaluates postfix sequences directly.
//! The tree is useful to inspect how a formula was grouped, since it prints fully parenthesised:
//!
//! ```rust
//! use algoviz_lib_logic::boolean_expression::BooleanExpression;
//! use std::convert::TryFrom;
//!
//! let e = BooleanExpression::try_from("p ∧ q ∨ ¬r").unwrap();
//! assert_eq!("((p ∧ q) ∨ ¬r)", e.to_string());
//!
//! // Implication is grouped to the left.
//! let e = BooleanExpression::try_from("p → q → r").unwrap();
//! assert_eq!("((p → q) → r)", e.to_string());
//! ```

use crate::Variable;

/// **(internal)** Implements printing and evaluation of boolean expressions.
mod _impl_boolean_expression;

/// **(internal)** Builds the expression tree from a postfix sequence.
mod _impl_parser;

/// Recursive type for boolean expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BooleanExpression {
    Variable(Variable),
    Not(Box<BooleanExpression>),
    And(Box<BooleanExpression>, Box<BooleanExpression>),
    Or(Box<BooleanExpression>, Box<BooleanExpression>),
    Imp(Box<BooleanExpression>, Box<BooleanExpression>),
    Iff(Box<BooleanExpression>, Box<BooleanExpression>),
}
