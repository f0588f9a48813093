use crate::logging::targets::EXTRACT as LOG_EXTRACT;
use crate::TruthTableError::{InvalidToken, NoVariablesFound};
use crate::{TruthTableError, Valuation, Variable, VariableSet};
use fxhash::FxHashMap;
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl Variable {
    /// The letter naming this variable.
    pub fn name(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Variable {
    type Error = TruthTableError;

    /// Only lowercase ASCII letters are valid variable names.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii_lowercase() {
            Ok(Variable(value))
        } else {
            Err(InvalidToken(value))
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

impl VariableSet {
    /// Create a new `VariableSet` from the given variable names. The names are sorted and
    /// duplicates are removed.
    ///
    /// Fails with `InvalidToken` if some name is not a lowercase ASCII letter.
    pub fn new(names: &[char]) -> Result<VariableSet, TruthTableError> {
        let variables = names
            .iter()
            .map(|name| Variable::try_from(*name))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(VariableSet::from_sorted(variables.into_iter().collect()))
    }

    /// Collect all variables used in a canonical formula.
    ///
    /// Any lowercase ASCII letter counts as a variable and everything else is ignored, which is
    /// why this must only run on canonical (symbolic) text: the letters of a word operator
    /// would be picked up otherwise. An empty result is reported as `NoVariablesFound`.
    pub fn extract(canonical: &str) -> Result<VariableSet, TruthTableError> {
        let variables: BTreeSet<Variable> = canonical
            .chars()
            .filter_map(|c| Variable::try_from(c).ok())
            .collect();
        if variables.is_empty() {
            log::debug!(target: LOG_EXTRACT, "No variables in {:?}.", canonical);
            return Err(NoVariablesFound);
        }
        let result = VariableSet::from_sorted(variables.into_iter().collect());
        log::debug!(target: LOG_EXTRACT, "Variables of {:?}: {}", canonical, result);
        Ok(result)
    }

    /// **(internal)** Build the set from an already sorted and deduplicated vector.
    pub(crate) fn from_sorted(variables: Vec<Variable>) -> VariableSet {
        let var_index_mapping = variables
            .iter()
            .enumerate()
            .map(|(index, var)| (*var, index as u16))
            .collect::<FxHashMap<_, _>>();
        VariableSet {
            variables,
            var_index_mapping,
        }
    }

    /// Return the number of variables in this set.
    pub fn num_vars(&self) -> u16 {
        self.variables.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variables of this set, in sorted order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Names of all variables of this set, in sorted order.
    pub fn names(&self) -> Vec<char> {
        self.variables.iter().map(|var| var.name()).collect()
    }

    /// Position of `variable` in this set (and hence in every `Valuation` of this set).
    pub fn index_of(&self, variable: Variable) -> Option<usize> {
        self.var_index_mapping
            .get(&variable)
            .map(|index| usize::from(*index))
    }

    /// Look up the value of `variable` in a `Valuation` of this set. Returns `None` if the
    /// variable is not part of this set or the valuation is too short.
    pub fn value_of(&self, valuation: &Valuation, variable: Variable) -> Option<bool> {
        self.index_of(variable)
            .and_then(|index| valuation.values().get(index).copied())
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[")?;
        for (i, var) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::TruthTableError::{InvalidToken, NoVariablesFound};
    use crate::{Valuation, Variable, VariableSet};

    #[test]
    fn variable_set_extract_sorted_unique() {
        let variables = VariableSet::extract("r ∧ (q ∨ ¬r) → p ↔ q").unwrap();
        assert_eq!(vec!['p', 'q', 'r'], variables.names());
        assert_eq!(3, variables.num_vars());
        assert_eq!("[p, q, r]", variables.to_string());
    }

    #[test]
    fn variable_set_extract_no_variables() {
        assert_eq!(Err(NoVariablesFound), VariableSet::extract("∧ ∨"));
        assert_eq!(Err(NoVariablesFound), VariableSet::extract(""));
        // Uppercase letters are never variables.
        assert_eq!(Err(NoVariablesFound), VariableSet::extract("P ∧ Q"));
    }

    #[test]
    fn variable_set_new() {
        let variables = VariableSet::new(&['z', 'a', 'z', 'm']).unwrap();
        assert_eq!(vec!['a', 'm', 'z'], variables.names());
        assert_eq!(Some(1), variables.index_of(Variable::try_from('m').unwrap()));
        assert_eq!(None, variables.index_of(Variable::try_from('b').unwrap()));
        assert_eq!(Err(InvalidToken('A')), VariableSet::new(&['a', 'A']));
        assert!(VariableSet::new(&[]).unwrap().is_empty());
    }

    #[test]
    fn variable_set_value_of() {
        let variables = VariableSet::new(&['p', 'q']).unwrap();
        let valuation = Valuation::new(vec![false, true]);
        let p = Variable::try_from('p').unwrap();
        let q = Variable::try_from('q').unwrap();
        let r = Variable::try_from('r').unwrap();
        assert_eq!(Some(false), variables.value_of(&valuation, p));
        assert_eq!(Some(true), variables.value_of(&valuation, q));
        assert_eq!(None, variables.value_of(&valuation, r));
        assert_eq!(None, variables.value_of(&Valuation::new(vec![true]), q));
    }
}
