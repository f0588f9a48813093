//!
//! The tree is assembled from a `PostfixExpression` with the same stack discipline as the
//! evaluator: a variable pushes a leaf, `¬` wraps the top of the stack and a binary operator
//! combines the two topmost trees (the right operand is on top). A postfix sequence that the
//! evaluator would reject is rejected here with the same `InvalidExpression` error.

use super::BooleanExpression;
use super::BooleanExpression::*;
use crate::ExprToken;
use crate::PostfixExpression;
use crate::TruthTableError;
use crate::TruthTableError::InvalidExpression;

/// Takes a canonical formula and turns it into a `BooleanExpression`.
pub fn parse_boolean_expression(canonical: &str) -> Result<BooleanExpression, TruthTableError> {
    let postfix = PostfixExpression::compile(canonical)?;
    from_postfix(&postfix)
}

/// Rebuild the expression tree of a postfix sequence.
pub fn from_postfix(postfix: &PostfixExpression) -> Result<BooleanExpression, TruthTableError> {
    let mut stack: Vec<BooleanExpression> = Vec::new();
    for token in postfix.tokens() {
        let node = match *token {
            ExprToken::Var(var) => Variable(var),
            ExprToken::Not => Not(pop_operand(&mut stack)?),
            op => {
                let right = pop_operand(&mut stack)?;
                let left = pop_operand(&mut stack)?;
                match op {
                    ExprToken::And => And(left, right),
                    ExprToken::Or => Or(left, right),
                    ExprToken::Imp => Imp(left, right),
                    ExprToken::Iff => Iff(left, right),
                    _ => return Err(InvalidExpression),
                }
            }
        };
        stack.push(node);
    }
    let result = stack.pop().ok_or(InvalidExpression)?;
    if stack.is_empty() {
        Ok(result)
    } else {
        Err(InvalidExpression)
    }
}

/// **(internal)** Pop one operand from the stack, or fail on underflow.
fn pop_operand(
    stack: &mut Vec<BooleanExpression>,
) -> Result<Box<BooleanExpression>, TruthTableError> {
    stack.pop().map(Box::new).ok_or(InvalidExpression)
}
