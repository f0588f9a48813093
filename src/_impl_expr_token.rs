use crate::op_function;
use crate::ExprToken::*;
use crate::{ExprToken, Variable};
use std::fmt::{Display, Error, Formatter};

/// **(internal)** Operator precedence table (higher binds tighter).
///
/// All binary operators are resolved as left-associative, including `→` and `↔`.
pub(crate) static PRECEDENCE_TABLE: [(ExprToken, u8); 5] =
    [(Not, 4), (And, 3), (Or, 2), (Imp, 1), (Iff, 0)];

pub(crate) const NOT_SYMBOL: char = '¬';
pub(crate) const AND_SYMBOL: char = '∧';
pub(crate) const OR_SYMBOL: char = '∨';
pub(crate) const IMP_SYMBOL: char = '→';
pub(crate) const IFF_SYMBOL: char = '↔';

impl ExprToken {
    /// Classify one character of canonical text. Returns `None` for whitespace and for
    /// characters which are not part of the canonical alphabet.
    pub fn from_char(c: char) -> Option<ExprToken> {
        match c {
            NOT_SYMBOL => Some(Not),
            AND_SYMBOL => Some(And),
            OR_SYMBOL => Some(Or),
            IMP_SYMBOL => Some(Imp),
            IFF_SYMBOL => Some(Iff),
            '(' => Some(LeftParen),
            ')' => Some(RightParen),
            c => Variable::try_from(c).ok().map(Var),
        }
    }

    /// The canonical (symbolic) character of this token.
    pub fn to_char(self) -> char {
        match self {
            Var(var) => var.name(),
            Not => NOT_SYMBOL,
            And => AND_SYMBOL,
            Or => OR_SYMBOL,
            Imp => IMP_SYMBOL,
            Iff => IFF_SYMBOL,
            LeftParen => '(',
            RightParen => ')',
        }
    }

    /// The word-notation spelling of an operator token.
    pub fn to_word(self) -> Option<&'static str> {
        match self {
            Not => Some("NOT"),
            And => Some("AND"),
            Or => Some("OR"),
            Imp => Some("IMPLIES"),
            Iff => Some("IFF"),
            _ => None,
        }
    }

    /// Operator token spelled by the given word (case-insensitive).
    pub fn from_word(word: &str) -> Option<ExprToken> {
        [Not, And, Or, Imp, Iff]
            .into_iter()
            .find(|op| op.to_word().map_or(false, |w| w.eq_ignore_ascii_case(word)))
    }

    /// True for `¬`, `∧`, `∨`, `→` and `↔`.
    pub fn is_operator(self) -> bool {
        matches!(self, Not | And | Or | Imp | Iff)
    }

    /// Precedence of this token in the default operator table, `None` for non-operators.
    pub fn precedence(self) -> Option<u8> {
        precedence_in(&PRECEDENCE_TABLE, self)
    }

    /// **(internal)** Truth function of a binary operator token.
    pub(crate) fn binary_function(self) -> Option<fn(bool, bool) -> bool> {
        match self {
            And => Some(op_function::and),
            Or => Some(op_function::or),
            Imp => Some(op_function::imp),
            Iff => Some(op_function::iff),
            _ => None,
        }
    }
}

/// **(internal)** Look up the precedence of `token` in the given operator table.
pub(crate) fn precedence_in(table: &[(ExprToken, u8)], token: ExprToken) -> Option<u8> {
    table
        .iter()
        .find(|(op, _)| *op == token)
        .map(|(_, precedence)| *precedence)
}

impl Display for ExprToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.to_char())
    }
}
