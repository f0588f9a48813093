//! The normalizer rewrites a formula between the word notation and the canonical symbolic
//! notation. It works on plain text: it does not validate the formula, unknown characters are
//! simply copied to the output and reported later by the compiler.

use crate::_impl_expr_token::{AND_SYMBOL, IFF_SYMBOL, IMP_SYMBOL, NOT_SYMBOL, OR_SYMBOL};
use crate::logging::targets::NORMALIZE as LOG_NORMALIZE;
use crate::{ExprToken, Notation};
use std::fmt::{Display, Error, Formatter};
use std::iter::Peekable;
use std::str::Chars;

/// Rewrite `text` written in the `from` notation into the `to` notation.
///
/// The text is always brought to the canonical symbolic form first: whitespace runs collapse
/// into a single space, both ends are trimmed and `¬` is attached directly to its operand.
/// In word notation, the whole words `NOT`, `AND`, `OR`, `IMPLIES` and `IFF` (in any letter
/// case) and the ASCII aliases `!`, `&&`, `||`, `=>` and `<=>` are replaced by `¬ ∧ ∨ → ↔`.
///
/// Converting to word notation then spells every operator as an upper-case word. The conversion
/// is not an exact round-trip of whitespace, but it preserves operators and their operands.
pub fn normalize(text: &str, from: Notation, to: Notation) -> String {
    let canonical = match from {
        Notation::Symbolic => canonical_whitespace(text),
        Notation::Word => canonical_whitespace(&words_to_symbols(text)),
    };
    let result = match to {
        Notation::Symbolic => canonical,
        Notation::Word => canonical_whitespace(&symbols_to_words(&canonical)),
    };
    log::debug!(
        target: LOG_NORMALIZE,
        "{:?} ({}) normalized to {:?} ({}).",
        text,
        from,
        result,
        to
    );
    result
}

/// **(internal)** Replace word operators and ASCII aliases with operator symbols.
///
/// Aliases are matched longest-first, so `<=>` is never read as `<` followed by `=>`.
fn words_to_symbols(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut data = text.chars().peekable();
    while let Some(c) = data.next() {
        match c {
            '<' if next_is(&mut data, "=>") => output.push(IFF_SYMBOL),
            '=' if next_is(&mut data, ">") => output.push(IMP_SYMBOL),
            '&' if next_is(&mut data, "&") => output.push(AND_SYMBOL),
            '|' if next_is(&mut data, "|") => output.push(OR_SYMBOL),
            '!' => output.push(NOT_SYMBOL),
            c if is_word_char(c) => {
                let mut word = String::new();
                word.push(c);
                while let Some(c) = data.peek() {
                    if is_word_char(*c) {
                        word.push(*c);
                        data.next();
                    } else {
                        break;
                    }
                }
                match ExprToken::from_word(&word) {
                    Some(op) => output.push(op.to_char()),
                    None => output.push_str(&word),
                }
            }
            c => output.push(c),
        }
    }
    output
}

/// **(internal)** Spell every operator symbol as a word, padded with spaces.
fn symbols_to_words(text: &str) -> String {
    let mut output = String::with_capacity(2 * text.len());
    for c in text.chars() {
        match ExprToken::from_char(c).and_then(|token| token.to_word().map(|w| (token, w))) {
            Some((ExprToken::Not, word)) => {
                output.push_str(word);
                output.push(' ');
            }
            Some((_, word)) => {
                output.push(' ');
                output.push_str(word);
                output.push(' ');
            }
            None => output.push(c),
        }
    }
    output
}

/// **(internal)** If the iterator continues with `expected`, consume it and return `true`.
/// Otherwise leave the iterator untouched.
fn next_is(data: &mut Peekable<Chars>, expected: &str) -> bool {
    let mut lookahead = data.clone();
    if expected.chars().all(|c| lookahead.next() == Some(c)) {
        *data = lookahead;
        true
    } else {
        false
    }
}

/// **(internal)** Characters that form a single word for the purpose of alias matching.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// **(internal)** Collapse whitespace runs, trim both ends and drop whitespace after `¬`.
fn canonical_whitespace(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !output.is_empty() && !output.ends_with(NOT_SYMBOL);
        } else {
            if pending_space {
                output.push(' ');
                pending_space = false;
            }
            output.push(c);
        }
    }
    output
}

impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Notation::Symbolic => write!(f, "symbolic"),
            Notation::Word => write!(f, "word"),
        }
    }
}
