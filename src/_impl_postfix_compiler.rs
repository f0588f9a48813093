//! Conversion of canonical infix text into a `PostfixExpression` using the shunting-yard
//! algorithm.
//!
//! Variables go straight to the output. An operator first moves every operator of equal or
//! higher precedence from the operator stack to the output and is then pushed itself. This
//! makes all binary operators left-associative, so `p → q → r` reads as `(p → q) → r`.
//!
//! Note that the same rule applies to the prefix `¬`: a second `¬` directly after the first one
//! pops it to the output before the operand of either is known. The popped `¬` then negates
//! whatever operand precedes it. At the start of a formula there is none, so `¬¬p` fails to
//! evaluate with `InvalidExpression`. After a binary operator it negates the left operand:
//! `p ∧ ¬¬q` compiles to `p ¬ q ¬ ∧`, i.e. `¬p ∧ ¬q`. Nested negation has to be written as
//! `¬(¬p)`.

use crate::ExprToken::*;
use crate::TruthTableError::{InvalidToken, MismatchedParentheses};
use crate::_impl_expr_token::{precedence_in, PRECEDENCE_TABLE};
use crate::logging::targets::COMPILE as LOG_COMPILE;
use crate::{ExprToken, PostfixExpression, TruthTableError};
use std::fmt::{Display, Error, Formatter};

impl PostfixExpression {
    /// Compile a canonical formula into its postfix form.
    ///
    /// Fails with `InvalidToken` for characters outside of the canonical alphabet and with
    /// `MismatchedParentheses` for unbalanced parentheses. Operator arity is not checked here;
    /// see `PostfixExpression::eval_in`.
    pub fn compile(canonical: &str) -> Result<PostfixExpression, TruthTableError> {
        let tokens = shunting_yard(canonical, &PRECEDENCE_TABLE)?;
        let result = PostfixExpression(tokens);
        log::debug!(target: LOG_COMPILE, "{:?} compiled to {:?}.", canonical, result.to_string());
        Ok(result)
    }

    /// The tokens of this expression in postfix order.
    pub fn tokens(&self) -> &[ExprToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// **(internal)** The shunting-yard algorithm over the characters of `data`, with operator
/// priorities given by `precedence`.
fn shunting_yard(
    data: &str,
    precedence: &[(ExprToken, u8)],
) -> Result<Vec<ExprToken>, TruthTableError> {
    let mut output = Vec::new();
    let mut operators: Vec<ExprToken> = Vec::new();
    for c in data.chars() {
        if c.is_whitespace() {
            continue;
        }
        match ExprToken::from_char(c) {
            Some(token @ Var(_)) => output.push(token),
            Some(LeftParen) => operators.push(LeftParen),
            Some(RightParen) => loop {
                match operators.pop() {
                    Some(LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(MismatchedParentheses),
                }
            },
            Some(op) if op.is_operator() => {
                let op_precedence = precedence_in(precedence, op).ok_or(InvalidToken(c))?;
                while let Some(top) = operators.last().copied() {
                    if top == LeftParen || precedence_in(precedence, top) < Some(op_precedence) {
                        break;
                    }
                    output.push(top);
                    operators.pop();
                }
                operators.push(op);
            }
            Some(_) | None => return Err(InvalidToken(c)),
        }
    }
    while let Some(op) = operators.pop() {
        if op == LeftParen {
            return Err(MismatchedParentheses);
        }
        output.push(op);
    }
    Ok(output)
}

impl Display for PostfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
