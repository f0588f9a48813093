//! # Truth tables and their export
//!
//! A `TruthTable` has exactly `2^n` rows for `n` variables. Row `i` assigns to the `j`-th
//! variable the bit `n - 1 - j` of `i`, so the first row is all `false`, the last one is all
//! `true` and the alphabetically first variable changes slowest.
//!
//! ```rust
//! use algoviz_lib_logic::{build_truth_table, Notation};
//!
//! let table = build_truth_table("p IMPLIES q", Notation::Word).unwrap();
//! let rows: Vec<(Vec<bool>, bool)> = table
//!     .rows()
//!     .iter()
//!     .map(|row| (row.inputs().values().to_vec(), row.output()))
//!     .collect();
//! assert_eq!(
//!     vec![
//!         (vec![false, false], true),
//!         (vec![false, true], true),
//!         (vec![true, false], false),
//!         (vec![true, true], true),
//!     ],
//!     rows
//! );
//! ```
//!
//! Any error aborts the whole table, no partial result is ever returned:
//!
//! ```rust
//! use algoviz_lib_logic::{build_truth_table, Notation, TruthTableError};
//!
//! assert_eq!(Err(TruthTableError::NoVariablesFound), build_truth_table("∧ ∨", Notation::Symbolic));
//! assert_eq!(Err(TruthTableError::MismatchedParentheses), build_truth_table("(p ∧ q", Notation::Symbolic));
//! assert_eq!(Err(TruthTableError::InvalidToken('%')), build_truth_table("p % q", Notation::Symbolic));
//! ```
//!
//! The enumeration is exponential, so the number of variables is limited by a
//! `TruthTableConfig` (12 by default, at most 26):
//!
//! ```rust
//! use algoviz_lib_logic::{build_truth_table_with, Notation, TruthTableConfig, TruthTableError};
//!
//! let config = TruthTableConfig::new().with_max_variables(2);
//! let result = build_truth_table_with("p ∧ q ∧ r", Notation::Symbolic, &config);
//! assert_eq!(Err(TruthTableError::TooManyVariables { found: 3, limit: 2 }), result);
//! ```
//!
//! ## Export
//!
//! A table can be exported as tab separated `T`/`F` text (the clipboard format) or as CSV with
//! `TRUE`/`FALSE` cells. The header row lists the variables followed by the formula text
//! exactly as it was given to `build_truth_table`.
//!
//! ```rust
//! use algoviz_lib_logic::{build_truth_table, Notation};
//!
//! let table = build_truth_table("p OR NOT p", Notation::Word).unwrap();
//! assert_eq!("p\tp OR NOT p\nF\tT\nT\tT\n", table.to_tsv_string());
//! assert_eq!("p,p OR NOT p\nFALSE,TRUE\nTRUE,TRUE\n", table.to_csv_string());
//! ```
