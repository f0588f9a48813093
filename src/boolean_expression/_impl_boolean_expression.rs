use super::BooleanExpression;
use super::BooleanExpression::*;
use super::_impl_parser::{from_postfix, parse_boolean_expression};
use crate::op_function;
use crate::{PostfixExpression, TruthTableError, Valuation, VariableSet};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl TryFrom<&str> for BooleanExpression {
    type Error = TruthTableError;

    /// Parse a canonical (symbolic) formula.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_boolean_expression(value)
    }
}

impl TryFrom<&PostfixExpression> for BooleanExpression {
    type Error = TruthTableError;

    fn try_from(value: &PostfixExpression) -> Result<Self, Self::Error> {
        from_postfix(value)
    }
}

/// Prints the expression fully parenthesised, in canonical notation. The output can be
/// parsed back into the same tree.
impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Variable(var) => write!(f, "{}", var),
            // `¬¬` would not compile as a double negation, the inner one needs a group.
            Not(inner) if matches!(**inner, Not(_)) => write!(f, "¬({})", inner),
            Not(inner) => write!(f, "¬{}", inner),
            And(l, r) => write!(f, "({} ∧ {})", l, r),
            Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Imp(l, r) => write!(f, "({} → {})", l, r),
            Iff(l, r) => write!(f, "({} ↔ {})", l, r),
        }
    }
}

impl BooleanExpression {
    /// Evaluate this expression in the given `Valuation` of `variables`. Returns `None` if
    /// some variable is not assigned a value.
    pub fn eval_in(&self, variables: &VariableSet, valuation: &Valuation) -> Option<bool> {
        match self {
            Variable(var) => variables.value_of(valuation, *var),
            Not(inner) => inner.eval_in(variables, valuation).map(op_function::not),
            And(l, r) => {
                let left = l.eval_in(variables, valuation)?;
                let right = r.eval_in(variables, valuation)?;
                Some(op_function::and(left, right))
            }
            Or(l, r) => {
                let left = l.eval_in(variables, valuation)?;
                let right = r.eval_in(variables, valuation)?;
                Some(op_function::or(left, right))
            }
            Imp(l, r) => {
                let left = l.eval_in(variables, valuation)?;
                let right = r.eval_in(variables, valuation)?;
                Some(op_function::imp(left, right))
            }
            Iff(l, r) => {
                let left = l.eval_in(variables, valuation)?;
                let right = r.eval_in(variables, valuation)?;
                Some(op_function::iff(left, right))
            }
        }
    }

    /// The set of variables used in this expression.
    pub fn support_set(&self) -> VariableSet {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        VariableSet::from_sorted(variables.into_iter().collect())
    }

    /// **(internal)** Add all variables of this expression to `variables`.
    fn collect_variables(&self, variables: &mut BTreeSet<crate::Variable>) {
        match self {
            Variable(var) => {
                variables.insert(*var);
            }
            Not(inner) => inner.collect_variables(variables),
            And(l, r) | Or(l, r) | Imp(l, r) | Iff(l, r) => {
                l.collect_variables(variables);
                r.collect_variables(variables);
            }
        }
    }
}
