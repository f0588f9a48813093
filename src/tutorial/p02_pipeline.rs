//! # The individual pipeline stages
//!
//! `build_truth_table` is a thin wrapper around four stages which can also be used on their own.
//! All of them work on canonical text (see the [previous chapter](../p01_notation/index.html)).
//!
//! ```rust
//! use algoviz_lib_logic::{PostfixExpression, Valuation, VariableSet, TruthTableError};
//!
//! let formula = "p ∧ (q ∨ ¬r)";
//!
//! // Every lowercase letter is a variable. The set is sorted and determines column order.
//! let variables = VariableSet::extract(formula).unwrap();
//! assert_eq!(vec!['p', 'q', 'r'], variables.names());
//!
//! // The shunting-yard compiler produces a postfix sequence.
//! let postfix = PostfixExpression::compile(formula).unwrap();
//! assert_eq!("p q r ¬ ∨ ∧", postfix.to_string());
//!
//! // A valuation is aligned with the variable set: here p = true, q = false, r = false.
//! let valuation = Valuation::new(vec![true, false, false]);
//! assert_eq!(Ok(true), postfix.eval_in(&variables, &valuation));
//!
//! // Missing operands are only discovered by the stack machine.
//! let broken = PostfixExpression::compile("p ∧ ∧ q").unwrap();
//! let variables = VariableSet::extract("p ∧ ∧ q").unwrap();
//! let valuation = Valuation::new(vec![true, true]);
//! assert_eq!(Err(TruthTableError::InvalidExpression), broken.eval_in(&variables, &valuation));
//! ```
//!
//! ## Precedence and grouping
//!
//! From the tightest to the loosest binding, the operators are `¬`, `∧`, `∨`, `→` and `↔`.
//! Operators of the same precedence group to the left. This includes `→`, so `p → q → r`
//! means `(p → q) → r` and not the right-grouped reading common in logic textbooks.
//! The explicit `BooleanExpression` tree shows the grouping:
//!
//! ```rust
//! use algoviz_lib_logic::boolean_expression::BooleanExpression;
//! use std::convert::TryFrom;
//!
//! let e = BooleanExpression::try_from("p → q → r").unwrap();
//! assert_eq!("((p → q) → r)", e.to_string());
//! let e = BooleanExpression::try_from("¬p ∨ q ∧ r ↔ s").unwrap();
//! assert_eq!("((¬p ∨ (q ∧ r)) ↔ s)", e.to_string());
//! ```
//!
//! A double negation has to be grouped as `¬(¬p)`. Written as `¬¬`, the second `¬` moves the
//! first one to the output before either operand is seen, so the first `¬` negates the operand
//! that precedes it. At the start of a formula there is nothing to negate and evaluation fails
//! with `InvalidExpression`. After a binary operator, the formula silently means something else:
//!
//! ```rust
//! use algoviz_lib_logic::{PostfixExpression, TruthTable};
//!
//! let postfix = PostfixExpression::compile("p ∧ ¬¬q").unwrap();
//! assert_eq!("p ¬ q ¬ ∧", postfix.to_string());
//!
//! // The same truth table as `¬p ∧ ¬q`, not as `p ∧ q`.
//! let table = TruthTable::generate("p ∧ ¬¬q").unwrap();
//! assert_eq!(vec![true, false, false, false], table.outputs());
//! ```
