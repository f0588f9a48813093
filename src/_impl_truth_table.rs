use crate::logging::targets::TABLE as LOG_TABLE;
use crate::TruthTableError::TooManyVariables;
use crate::{
    normalize, Notation, PostfixExpression, TruthTable, TruthTableConfig, TruthTableError,
    TruthTableRow, Valuation, ValuationsIterator, VariableSet, DEFAULT_MAX_VARIABLES,
    MAX_VARIABLES,
};
use std::fmt::{Display, Error, Formatter};

/// Build the truth table of `text` written in the given `notation`, using the default
/// `TruthTableConfig`.
///
/// The formula text reported by `TruthTable::formula` is `text` exactly as given.
pub fn build_truth_table(text: &str, notation: Notation) -> Result<TruthTable, TruthTableError> {
    build_truth_table_with(text, notation, &TruthTableConfig::default())
}

/// Same as `build_truth_table`, but with a custom `TruthTableConfig`.
pub fn build_truth_table_with(
    text: &str,
    notation: Notation,
    config: &TruthTableConfig,
) -> Result<TruthTable, TruthTableError> {
    let canonical = normalize(text, notation, Notation::Symbolic);
    let mut table = TruthTable::generate_with(&canonical, config)?;
    table.formula = text.to_string();
    Ok(table)
}

impl TruthTableConfig {
    /// Create a configuration with default limits.
    pub fn new() -> TruthTableConfig {
        TruthTableConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }

    /// Change the maximal number of variables. Values above `MAX_VARIABLES` are clamped.
    pub fn with_max_variables(mut self, max_variables: u16) -> TruthTableConfig {
        self.max_variables = max_variables.min(MAX_VARIABLES);
        self
    }

    pub fn max_variables(&self) -> u16 {
        self.max_variables
    }
}

impl Default for TruthTableConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TruthTable {
    /// Generate the truth table of a canonical formula using the default `TruthTableConfig`.
    pub fn generate(canonical: &str) -> Result<TruthTable, TruthTableError> {
        TruthTable::generate_with(canonical, &TruthTableConfig::default())
    }

    /// Generate the truth table of a canonical formula.
    ///
    /// The stages run in order: variable extraction (`NoVariablesFound`), the variable limit
    /// (`TooManyVariables`), compilation (`InvalidToken`, `MismatchedParentheses`) and
    /// evaluation of every row. The first row that fails to evaluate aborts the whole table.
    pub fn generate_with(
        canonical: &str,
        config: &TruthTableConfig,
    ) -> Result<TruthTable, TruthTableError> {
        let variables = VariableSet::extract(canonical)?;
        let limit = usize::from(config.max_variables);
        if variables.variables().len() > limit {
            log::warn!(
                target: LOG_TABLE,
                "Formula {:?} has {} variables, limit is {}.",
                canonical,
                variables.variables().len(),
                limit
            );
            return Err(TooManyVariables {
                found: variables.variables().len(),
                limit,
            });
        }
        let postfix = PostfixExpression::compile(canonical)?;
        let rows = ValuationsIterator::new(variables.num_vars())
            .map(|inputs| -> Result<TruthTableRow, TruthTableError> {
                let output = postfix.eval_in(&variables, &inputs)?;
                log::trace!(target: LOG_TABLE, "{} -> {}", inputs, output);
                Ok(TruthTableRow { inputs, output })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            target: LOG_TABLE,
            "Generated {} rows for {:?}.",
            rows.len(),
            canonical
        );
        Ok(TruthTable {
            formula: canonical.to_string(),
            variables,
            rows,
        })
    }

    /// The formula this table was built for.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The variables of the formula, in column order.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// The output column of this table.
    pub fn outputs(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.output).collect()
    }

    /// Value of the formula in the given valuation, if it belongs to this table.
    pub fn output_in(&self, valuation: &Valuation) -> Option<bool> {
        if valuation.num_vars() != self.variables.num_vars() {
            return None;
        }
        let index = usize::try_from(valuation.row_index()).ok()?;
        self.rows.get(index).map(|row| row.output)
    }
}

impl TruthTableRow {
    /// The input values of this row, aligned with `TruthTable::variables`.
    pub fn inputs(&self) -> &Valuation {
        &self.inputs
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// Plain text grid: one column per variable, then the formula column.
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for var in self.variables.variables() {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| {}", self.formula)?;
        for row in &self.rows {
            for value in row.inputs.values() {
                write!(f, "{} ", if *value { 'T' } else { 'F' })?;
            }
            writeln!(f, "| {}", if row.output { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Notation::{Symbolic, Word};
    use crate::TruthTableError::*;
    use crate::{
        build_truth_table, build_truth_table_with, TruthTable, TruthTableConfig, Valuation,
    };

    #[test]
    fn truth_table_example() {
        let table = build_truth_table("p ∧ (q ∨ ¬r)", Symbolic).unwrap();
        assert_eq!(vec!['p', 'q', 'r'], table.variables().names());
        assert_eq!(8, table.rows().len());
        assert_eq!(
            vec![false, false, false, false, true, false, true, true],
            table.outputs()
        );
        // p = T, q = F, r = F
        let row = &table.rows()[4];
        assert_eq!(&Valuation::new(vec![true, false, false]), row.inputs());
        assert!(row.output());
        // p = F is always false.
        assert!(table.rows()[..4].iter().all(|row| !row.output()));
    }

    #[test]
    fn truth_table_word_notation_matches_symbolic() {
        let symbolic = build_truth_table("p ∧ (q ∨ ¬r)", Symbolic).unwrap();
        let word = build_truth_table("p AND (q OR NOT r)", Word).unwrap();
        assert_eq!(symbolic.variables(), word.variables());
        assert_eq!(symbolic.rows(), word.rows());
        assert_eq!("p AND (q OR NOT r)", word.formula());
    }

    #[test]
    fn truth_table_size_and_order() {
        for formula in ["p", "p ∨ q", "p → q ∧ r", "(a ↔ b) ∨ (c ∧ ¬d) → e"] {
            let table = TruthTable::generate(formula).unwrap();
            let n = table.variables().num_vars();
            assert_eq!(1usize << n, table.rows().len());
            for (index, row) in table.rows().iter().enumerate() {
                assert_eq!(n, row.inputs().num_vars());
                assert_eq!(index as u64, row.inputs().row_index());
            }
        }
        let table = TruthTable::generate("p ∨ q").unwrap();
        let inputs: Vec<Vec<bool>> = table
            .rows()
            .iter()
            .map(|row| row.inputs().values().to_vec())
            .collect();
        assert_eq!(
            vec![
                vec![false, false],
                vec![false, true],
                vec![true, false],
                vec![true, true]
            ],
            inputs
        );
    }

    #[test]
    fn truth_table_implication_equivalence() {
        let imp = TruthTable::generate("p → q").unwrap();
        let or = TruthTable::generate("¬p ∨ q").unwrap();
        assert_eq!(imp.outputs(), or.outputs());
        assert_eq!(vec![true, true, false, true], imp.outputs());
    }

    #[test]
    fn truth_table_commutative_operators() {
        for op in ["∧", "∨", "↔"] {
            let left = TruthTable::generate(&format!("p {} q", op)).unwrap();
            let right = TruthTable::generate(&format!("q {} p", op)).unwrap();
            assert_eq!(left.outputs(), right.outputs(), "{}", op);
        }
        let left = TruthTable::generate("p → q").unwrap();
        let right = TruthTable::generate("q → p").unwrap();
        assert_ne!(left.outputs(), right.outputs());
    }

    #[test]
    fn truth_table_ungrouped_double_negation() {
        // The first `¬` lands on `p`, so this is `¬p ∧ ¬q`.
        let table = TruthTable::generate("p ∧ ¬¬q").unwrap();
        assert_eq!(vec![true, false, false, false], table.outputs());
        let word = build_truth_table("p AND NOT NOT q", Word).unwrap();
        assert_eq!(table.rows(), word.rows());
        let grouped = TruthTable::generate("p ∧ ¬(¬q)").unwrap();
        assert_eq!(vec![false, false, false, true], grouped.outputs());
        assert_eq!(Err(InvalidExpression), TruthTable::generate("¬¬p"));
    }

    #[test]
    fn truth_table_errors() {
        assert_eq!(Err(NoVariablesFound), TruthTable::generate("∧ ∨"));
        assert_eq!(Err(NoVariablesFound), TruthTable::generate(""));
        assert_eq!(Err(MismatchedParentheses), TruthTable::generate("(p ∧ q"));
        assert_eq!(Err(InvalidExpression), TruthTable::generate("p ∧ ∧ q"));
        assert_eq!(Err(InvalidToken('#')), TruthTable::generate("p # q"));
        // Word operators are only understood in word notation.
        assert_eq!(
            Err(InvalidToken('A')),
            build_truth_table("p AND q", Symbolic)
        );
    }

    #[test]
    fn truth_table_variable_limit() {
        let formula = "a ∧ b ∧ c ∧ d";
        let config = TruthTableConfig::new().with_max_variables(3);
        assert_eq!(
            Err(TooManyVariables { found: 4, limit: 3 }),
            build_truth_table_with(formula, Symbolic, &config)
        );
        let config = TruthTableConfig::new().with_max_variables(4);
        assert_eq!(
            16,
            build_truth_table_with(formula, Symbolic, &config)
                .unwrap()
                .rows()
                .len()
        );
        assert_eq!(26, TruthTableConfig::new().with_max_variables(100).max_variables());
        assert_eq!(12, TruthTableConfig::default().max_variables());
    }

    #[test]
    fn truth_table_output_in() {
        let table = TruthTable::generate("p ∧ ¬q").unwrap();
        assert_eq!(Some(true), table.output_in(&Valuation::new(vec![true, false])));
        assert_eq!(Some(false), table.output_in(&Valuation::new(vec![true, true])));
        assert_eq!(None, table.output_in(&Valuation::new(vec![true])));
    }

    #[test]
    fn truth_table_print() {
        let table = TruthTable::generate("p ∧ q").unwrap();
        assert_eq!(
            "p q | p ∧ q\nF F | F\nF T | F\nT F | F\nT T | T\n",
            table.to_string()
        );
    }
}
