use crate::{Valuation, ValuationsIterator};
use std::fmt::{Display, Error, Formatter};
use std::mem::swap;
use std::ops::Index;

impl Valuation {
    /// Create a new valuation from a vector of values.
    pub fn new(values: Vec<bool>) -> Valuation {
        Valuation(values)
    }

    /// Create a valuation with all variables set to false.
    pub fn all_false(num_vars: u16) -> Valuation {
        Valuation(vec![false; num_vars as usize])
    }

    /// Create a valuation with all variables set to true.
    pub fn all_true(num_vars: u16) -> Valuation {
        Valuation(vec![true; num_vars as usize])
    }

    /// The valuation in row `index` of a truth table over `num_vars` variables.
    ///
    /// Variable `j` receives bit `num_vars - 1 - j` of `index`, i.e. the first variable is the
    /// most significant bit. Variables past the 64th (from the end) are always false.
    pub fn from_row_index(index: u64, num_vars: u16) -> Valuation {
        let num_vars = u32::from(num_vars);
        Valuation(
            (0..num_vars)
                .map(|j| {
                    index
                        .checked_shr(num_vars - 1 - j)
                        .map_or(false, |bits| bits & 1 == 1)
                })
                .collect(),
        )
    }

    /// Interpret the valuation as a big-endian binary number (inverse of `from_row_index`).
    pub fn row_index(&self) -> u64 {
        self.0
            .iter()
            .fold(0, |index, value| (index << 1) | u64::from(*value))
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// The values of this valuation, aligned with the order of its variable set.
    pub fn values(&self) -> &[bool] {
        &self.0
    }

    /// Number of variables in this valuation (used mostly for consistency checks).
    pub fn num_vars(&self) -> u16 {
        self.0.len() as u16
    }

    /// **(internal)** "Increment" this valuation if possible. Interpret the valuation as a
    /// big-endian bit-vector and perform a standard increment. Returns `None` on overflow.
    pub(crate) fn next(&self) -> Option<Valuation> {
        let mut next_vec = self.0.clone();
        let mut carry = true; // initially, we want to increment
        for bit in next_vec.iter_mut().rev() {
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            }
        }

        if carry {
            None
        } else {
            Some(Valuation(next_vec))
        }
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", if self.0[0] { 1 } else { 0 })?;
            for value in &self.0[1..] {
                write!(f, ",{}", if *value { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Allow indexing of `Valuation` by variable position.
impl Index<usize> for Valuation {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl ValuationsIterator {
    /// Create a new iterator over all `2^num_vars` valuations.
    pub fn new(num_vars: u16) -> ValuationsIterator {
        ValuationsIterator {
            next_valuation: Some(Valuation::all_false(num_vars)),
        }
    }

    /// Create an empty valuation iterator.
    pub fn empty() -> ValuationsIterator {
        ValuationsIterator {
            next_valuation: None,
        }
    }
}

impl Iterator for ValuationsIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.next_valuation {
            // Compute the next valuation and swap it with the current one, so that
            // `result` ends up holding the current valuation.
            let mut result = valuation.next();
            swap(&mut result, &mut self.next_valuation);
            result
        } else {
            None
        }
    }
}
