//! Contains the truth functions of the five connectives of the formula language.
//!
//! Both the postfix stack machine and the `BooleanExpression` tree evaluate through these.

/// Operator function corresponding to $\neg x$.
pub fn not(x: bool) -> bool {
    !x
}

/// Operator function corresponding to $x \land y$.
pub fn and(l: bool, r: bool) -> bool {
    l && r
}

/// Operator function corresponding to $x \lor y$.
pub fn or(l: bool, r: bool) -> bool {
    l || r
}

/// Operator function corresponding to $x \Rightarrow y$ (material implication).
///
/// The implication is vacuously true whenever `l` is false.
pub fn imp(l: bool, r: bool) -> bool {
    !l || r
}

/// Operator function corresponding to $x \Leftrightarrow y$.
pub fn iff(l: bool, r: bool) -> bool {
    l == r
}
