use crate::logging::targets::EVALUATE as LOG_EVALUATE;
use crate::op_function;
use crate::ExprToken::*;
use crate::TruthTableError::{InvalidExpression, UnknownVariable};
use crate::{PostfixExpression, TruthTableError, Valuation, VariableSet};

impl PostfixExpression {
    /// Evaluate this expression in the given `Valuation` of `variables`.
    ///
    /// Binary operators pop their right operand first, then the left one. Fails with
    /// `InvalidExpression` when an operator finds too few operands or when the final stack
    /// does not hold exactly one value (this also covers an empty expression). A variable
    /// which the valuation does not assign is reported as `UnknownVariable`.
    pub fn eval_in(
        &self,
        variables: &VariableSet,
        valuation: &Valuation,
    ) -> Result<bool, TruthTableError> {
        if cfg!(feature = "shields_up") && valuation.num_vars() != variables.num_vars() {
            panic!(
                "Variable set has {} variables, but valuation has {}.",
                variables.num_vars(),
                valuation.num_vars()
            )
        }
        let mut stack: Vec<bool> = Vec::with_capacity(self.len());
        for token in self.tokens() {
            match *token {
                Var(var) => {
                    let value = variables
                        .value_of(valuation, var)
                        .ok_or(UnknownVariable(var.name()))?;
                    stack.push(value);
                }
                Not => {
                    let operand = stack.pop().ok_or(InvalidExpression)?;
                    stack.push(op_function::not(operand));
                }
                op => {
                    let function = op.binary_function().ok_or(InvalidExpression)?;
                    let right = stack.pop().ok_or(InvalidExpression)?;
                    let left = stack.pop().ok_or(InvalidExpression)?;
                    stack.push(function(left, right));
                }
            }
        }
        match stack.as_slice() {
            [result] => Ok(*result),
            _ => {
                log::trace!(
                    target: LOG_EVALUATE,
                    "{} leaves {} values on the stack.",
                    self,
                    stack.len()
                );
                Err(InvalidExpression)
            }
        }
    }
}
