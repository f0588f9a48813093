//! # Notations and normalisation
//!
//! A formula can be written in two notations. The *symbolic* notation uses one character per
//! operator and is also the canonical form used by the rest of the pipeline:
//!
//! | Operator    | Symbolic | Word      | ASCII alias |
//! |-------------|----------|-----------|-------------|
//! | negation    | `¬`      | `NOT`     | `!`         |
//! | conjunction | `∧`      | `AND`     | `&&`        |
//! | disjunction | `∨`      | `OR`      | `\|\|`      |
//! | implication | `→`      | `IMPLIES` | `=>`        |
//! | equivalence | `↔`      | `IFF`     | `<=>`       |
//!
//! Variables are always single lowercase letters. Word operators are matched as whole words in
//! any letter case, so `not`, `Not` and `NOT` are all negation.
//!
//! ```rust
//! use algoviz_lib_logic::{normalize, Notation};
//!
//! let symbolic = normalize("p and (q or not r)", Notation::Word, Notation::Symbolic);
//! assert_eq!("p ∧ (q ∨ ¬r)", symbolic);
//!
//! let aliases = normalize("!p && q <=> p => q", Notation::Word, Notation::Symbolic);
//! assert_eq!("¬p ∧ q ↔ p → q", aliases);
//!
//! // The opposite direction spells operators as upper-case words.
//! let words = normalize("p ∧ (q ∨ ¬r)", Notation::Symbolic, Notation::Word);
//! assert_eq!("p AND (q OR NOT r)", words);
//! ```
//!
//! Normalisation also canonicalises whitespace: runs of whitespace become a single space, the
//! ends are trimmed and `¬` is attached to its operand. Converting back and forth is therefore
//! not an exact round-trip of the input text, but the operators and operands always survive.
//!
//! Note that symbolic input is not searched for word operators. `p AND q` in symbolic notation
//! stays `p AND q` and later fails to compile, because `A` is not a valid token.
