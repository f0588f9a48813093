//! # AlgoViz/LibLogic
//!
//! This crate provides the boolean expression engine behind the AlgoViz truth table generator.
//! It takes a propositional formula as text and produces a complete truth table.
//!
//! The pipeline is strictly linear and every stage is a pure function:
//!
//!  1. [`normalize`] maps word notation (`NOT`, `AND`, `OR`, `IMPLIES`, `IFF`) or ASCII
//!     aliases (`!`, `&&`, `||`, `=>`, `<=>`) to the canonical symbolic form (`¬ ∧ ∨ → ↔`).
//!  2. [`VariableSet::extract`] collects the single-letter variables of the canonical text.
//!  3. [`PostfixExpression::compile`] runs the shunting-yard algorithm to get a postfix sequence.
//!  4. [`PostfixExpression::eval_in`] evaluates the postfix sequence in one [`Valuation`].
//!  5. [`TruthTable::generate`] enumerates all `2^n` valuations and evaluates each of them.
//!
//! More detailed description can be found in the [tutorial module](./tutorial/index.html).
//!
//! ```rust
//! use algoviz_lib_logic::*;
//!
//! let table = build_truth_table("p AND (q OR NOT r)", Notation::Word).unwrap();
//! assert_eq!(vec!['p', 'q', 'r'], table.variables().names());
//! assert_eq!(8, table.rows().len());
//!
//! // Rows are in big-endian order: the first variable is the most significant bit.
//! let row = &table.rows()[4];
//! assert_eq!(vec![true, false, false], row.inputs().values().to_vec());
//! assert!(row.output());
//!
//! assert_eq!("p ∧ (q ∨ ¬r)", normalize("p AND (q OR NOT r)", Notation::Word, Notation::Symbolic));
//! ```
//!

use fxhash::FxHashMap;

pub mod boolean_expression;
pub mod op_function;
pub mod tutorial;

/// **(internal)** Log targets used across the pipeline.
pub(crate) mod logging;

/// **(internal)** Implementation of the `Notation` conversions (the normalizer).
mod _impl_notation;

/// **(internal)** Implementation of the `Variable` and `VariableSet` (the variable extractor).
mod _impl_variable_set;

/// **(internal)** Implementation of `ExprToken` and the operator precedence table.
mod _impl_expr_token;

/// **(internal)** Shunting-yard compiler from canonical text to `PostfixExpression`.
mod _impl_postfix_compiler;

/// **(internal)** Stack machine evaluating a `PostfixExpression`.
mod _impl_postfix_eval;

/// **(internal)** Implementation of the `Valuation` and `ValuationsIterator`.
mod _impl_valuation;

/// **(internal)** Implementation of the `TruthTable` generator and its configuration.
mod _impl_truth_table;

/// **(internal)** Tab/comma separated export of a `TruthTable`.
mod _impl_truth_table_export;

/// **(internal)** Implementation of the `TruthTableError`.
mod _impl_error;

/// **(internal)** Randomised cross-checks of the whole pipeline.
#[cfg(test)]
mod _test_truth_table_fuzzing;

pub use _impl_notation::normalize;
pub use _impl_truth_table::{build_truth_table, build_truth_table_with};

/// The largest number of variables a formula can have: one per lowercase ASCII letter.
pub const MAX_VARIABLES: u16 = 26;

/// Default cap on the number of variables accepted by `TruthTable::generate`.
///
/// The enumeration cost is exponential, so `12` variables (`4096` rows) is a reasonable
/// upper bound for an interactive tool.
pub const DEFAULT_MAX_VARIABLES: u16 = 12;

/// The two notations in which a formula can be written.
///
/// `Symbolic` uses `¬ ∧ ∨ → ↔`, `Word` uses `NOT AND OR IMPLIES IFF` (case-insensitive) and also
/// accepts the ASCII aliases `! && || => <=>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Notation {
    Symbolic,
    Word,
}

/// A propositional variable, i.e. a single lowercase ASCII letter.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(char);

/// The sorted, deduplicated sequence of variables appearing in a formula.
///
/// The order of variables determines the column order of a `TruthTable`, as well as the
/// meaning of indices in a `Valuation`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableSet {
    variables: Vec<Variable>,
    var_index_mapping: FxHashMap<Variable, u16>,
}

/// One token of a canonical formula.
///
/// Tokens carry no position information, every token is exactly one character of the
/// canonical text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExprToken {
    Var(Variable), // 'p'
    Not,           // '¬'
    And,           // '∧'
    Or,            // '∨'
    Imp,           // '→'
    Iff,           // '↔'
    LeftParen,     // '('
    RightParen,    // ')'
}

/// A formula in Reverse Polish notation, as produced by the shunting-yard compiler.
///
/// The sequence only contains variables and operators (never parentheses). It is well-formed
/// iff it reduces to exactly one value on the evaluation stack, which is only checked during
/// evaluation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PostfixExpression(Vec<ExprToken>);

/// Exactly describes one assignment of boolean values to the variables of a `VariableSet`.
///
/// The values are aligned with the order of the variable set.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Valuation(Vec<bool>);

/// Exhaustively iterates over all valuations with a certain number of variables, in big-endian
/// binary order (all `false` first, all `true` last).
///
/// Be aware of the exponential time complexity of such operation!
#[derive(Clone)]
pub struct ValuationsIterator {
    next_valuation: Option<Valuation>,
}

/// One row of a `TruthTable`: the input valuation and the value of the formula in it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTableRow {
    inputs: Valuation,
    output: bool,
}

/// A complete truth table of a formula.
///
/// Row count is always `2^n` for `n` variables and the rows follow the `ValuationsIterator`
/// order. The table is a pure function of the canonical formula text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    formula: String,
    variables: VariableSet,
    rows: Vec<TruthTableRow>,
}

/// Limits applied while generating a `TruthTable`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TruthTableConfig {
    max_variables: u16,
}

/// Errors produced by the individual stages of the pipeline.
///
/// None of them is fatal: the caller is expected to report the error and wait for
/// corrected input.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TruthTableError {
    /// The canonical text contains no lowercase letter.
    NoVariablesFound,
    /// A character outside of letters, operators, parentheses and whitespace.
    InvalidToken(char),
    /// Unbalanced or incorrectly nested parentheses.
    MismatchedParentheses,
    /// Stack underflow or leftover operands during postfix evaluation.
    InvalidExpression,
    /// The evaluated valuation does not assign this variable.
    UnknownVariable(char),
    /// The formula has more variables than the configuration allows.
    TooManyVariables { found: usize, limit: usize },
}
