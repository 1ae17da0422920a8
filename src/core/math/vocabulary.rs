//! Named constants and functions understood by the arithmetic evaluator.

use std::collections::HashSet;
use std::f64::consts::{E, PI};

/// Unary functions callable as `name(expr)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Sqrt,
    Sin,
    Cos,
}

impl MathFn {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFn::Sqrt => x.sqrt(),
            MathFn::Sin => x.sin(),
            MathFn::Cos => x.cos(),
        }
    }
}

/// What a name resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    Constant(f64),
    Function(MathFn),
}

/// Case-insensitive name table. Also defines which letters the classifier admits.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<(String, Symbol)>,
    letters: HashSet<char>,
}

impl Vocabulary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Symbol)>,
        S: AsRef<str>,
    {
        let entries: Vec<(String, Symbol)> = entries
            .into_iter()
            .map(|(name, sym)| (name.as_ref().to_lowercase(), sym))
            .collect();
        let letters = entries
            .iter()
            .flat_map(|(name, _)| name.chars())
            .collect();
        Self { entries, letters }
    }

    /// Resolve a name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, sym)| *sym)
    }

    /// True if `c` (in any case) occurs in some name of the table.
    pub fn admits_letter(&self, c: char) -> bool {
        c.to_lowercase().all(|l| self.letters.contains(&l))
    }
}

impl Default for Vocabulary {
    /// pi / π, e, sqrt, sin, cos.
    fn default() -> Self {
        Self::new([
            ("pi", Symbol::Constant(PI)),
            ("π", Symbol::Constant(PI)),
            ("e", Symbol::Constant(E)),
            ("sqrt", Symbol::Function(MathFn::Sqrt)),
            ("sin", Symbol::Function(MathFn::Sin)),
            ("cos", Symbol::Function(MathFn::Cos)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let v = Vocabulary::default();
        assert_eq!(v.lookup("PI"), Some(Symbol::Constant(PI)));
        assert_eq!(v.lookup("Sqrt"), Some(Symbol::Function(MathFn::Sqrt)));
        assert_eq!(v.lookup("tan"), None);
    }

    #[test]
    fn default_letters_match_names() {
        let v = Vocabulary::default();
        for c in "episqrtncoPISQRTNCOEπ".chars() {
            assert!(v.admits_letter(c), "{} should be admitted", c);
        }
        for c in "abdfghjklmuvwxyzA".chars() {
            assert!(!v.admits_letter(c), "{} should be rejected", c);
        }
    }

    #[test]
    fn custom_table() {
        let v = Vocabulary::new([("tau", Symbol::Constant(2.0 * PI))]);
        assert_eq!(v.lookup("TAU"), Some(Symbol::Constant(2.0 * PI)));
        assert!(v.admits_letter('u'));
        assert!(!v.admits_letter('e'));
    }
}
