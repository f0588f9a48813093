//!
//! Here, we have a small toolbox for fuzzing the truth table pipeline.
//! It creates a random binary tree of operations, where each leaf is a random
//! variable and each tree node is one binary operator, possibly negated.
//!
//! Each tree is printed as a fully parenthesised formula, which is then pushed through the
//! whole pipeline (normalizer, extractor, compiler, stack machine). The resulting table is
//! compared row by row with a direct recursive evaluation of the tree. To get predictable
//! test cases, we use a predefined set of randomness seeds.

use crate::boolean_expression::BooleanExpression;
use crate::Notation::{Symbolic, Word};
use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};
use std::convert::TryFrom;

#[derive(Debug)]
enum TreeOp {
    AND,
    OR,
    IMP,
    IFF,
}

#[derive(Debug)]
struct Op {
    op: TreeOp,
    negate: bool,
}

#[derive(Debug)]
struct OpTree {
    leaves: Vec<char>,
    ops: Vec<Vec<Op>>,
}

impl OpTree {
    /// Create a new random tree. The `tree_height` is the number of levels in the tree
    /// (so the number of leaves will be `2^tree_height`).
    fn new_random(tree_height: u8, num_vars: u8, seed: u64) -> OpTree {
        let mut rand = StdRng::seed_from_u64(seed);
        let num_leafs = 1 << (tree_height as usize);
        let mut levels: Vec<Vec<Op>> = Vec::new();

        let leaves: Vec<char> = (0..num_leafs)
            .map(|_| (b'a' + (rand.next_u32() % u32::from(num_vars)) as u8) as char)
            .collect();

        let mut level_width = num_leafs / 2;
        for _ in 0..tree_height {
            let level: Vec<Op> = (0..level_width)
                .map(|_| {
                    let negate = rand.next_u32() % 2 == 0;
                    let op = match rand.next_u32() % 4 {
                        0 => TreeOp::AND,
                        1 => TreeOp::OR,
                        2 => TreeOp::IMP,
                        _ => TreeOp::IFF,
                    };
                    Op { op, negate }
                })
                .collect();
            levels.push(level);
            level_width /= 2;
        }

        OpTree {
            leaves,
            ops: levels,
        }
    }

    /// Print the tree as a fully parenthesised canonical formula.
    fn to_formula(&self) -> String {
        let mut level: Vec<String> = self.leaves.iter().map(|c| c.to_string()).collect();
        for ops in &self.ops {
            level = ops
                .iter()
                .enumerate()
                .map(|(i, op)| {
                    let symbol = match op.op {
                        TreeOp::AND => '∧',
                        TreeOp::OR => '∨',
                        TreeOp::IMP => '→',
                        TreeOp::IFF => '↔',
                    };
                    let formula = format!("({} {} {})", level[2 * i], symbol, level[2 * i + 1]);
                    if op.negate {
                        format!("¬{}", formula)
                    } else {
                        formula
                    }
                })
                .collect();
        }
        level.concat()
    }

    /// Evaluate the tree directly in the given values (indexed by letter).
    fn eval(&self, values: &[bool; 26]) -> bool {
        let mut level: Vec<bool> = self
            .leaves
            .iter()
            .map(|c| values[(*c as u8 - b'a') as usize])
            .collect();
        for ops in &self.ops {
            level = ops
                .iter()
                .enumerate()
                .map(|(i, op)| {
                    let (l, r) = (level[2 * i], level[2 * i + 1]);
                    let value = match op.op {
                        TreeOp::AND => l && r,
                        TreeOp::OR => l || r,
                        TreeOp::IMP => !l || r,
                        TreeOp::IFF => l == r,
                    };
                    value != op.negate
                })
                .collect();
        }
        level[0]
    }
}

/// Check that the truth table of a random tree agrees with the tree on every row.
fn fuzz_test(tree_height: u8, num_vars: u8, seed: u64) {
    let tree = OpTree::new_random(tree_height, num_vars, seed);
    let formula = tree.to_formula();
    let table = TruthTable::generate(&formula).unwrap();
    let names = table.variables().names();
    assert_eq!(1usize << names.len(), table.rows().len());
    for row in table.rows() {
        let mut values = [false; 26];
        for (name, value) in names.iter().zip(row.inputs().values()) {
            values[(*name as u8 - b'a') as usize] = *value;
        }
        assert_eq!(tree.eval(&values), row.output(), "{} in {}", formula, row.inputs());
    }
}

#[test]
fn fuzz_truth_table_small() {
    for seed in 0..100 {
        fuzz_test(3, 3, seed);
    }
}

#[test]
fn fuzz_truth_table_medium() {
    for seed in 0..20 {
        fuzz_test(5, 6, seed);
    }
}

#[test]
fn fuzz_truth_table_large() {
    for seed in 0..5 {
        fuzz_test(7, 10, seed);
    }
}

#[test]
fn fuzz_boolean_expression_agrees_with_stack_machine() {
    for seed in 0..50 {
        let formula = OpTree::new_random(4, 5, seed).to_formula();
        let expression = BooleanExpression::try_from(formula.as_str()).unwrap();
        let table = TruthTable::generate(&formula).unwrap();
        for row in table.rows() {
            assert_eq!(
                Some(row.output()),
                expression.eval_in(table.variables(), row.inputs())
            );
        }
    }
}

#[test]
fn fuzz_word_notation_round_trip() {
    for seed in 0..50 {
        let formula = OpTree::new_random(3, 4, seed).to_formula();
        let words = normalize(&formula, Symbolic, Word);
        assert_eq!(formula, normalize(&words, Word, Symbolic));
        let symbolic = TruthTable::generate(&formula).unwrap();
        let word = build_truth_table(&words, Word).unwrap();
        assert_eq!(symbolic.rows(), word.rows());
    }
}
