//! Parsing of additive formulas into terms.
//!
//! A formula body is a `+`-separated list where each token is either a
//! numeric literal or a cell address. Nothing else is understood: there is
//! no subtraction, multiplication or grouping.

use super::cell_ref::CellRef;
use super::entry::Entry;
use super::format::parse_number;

/// One `+`-separated token of a formula.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Literal(f64),
    Reference(CellRef),
    /// Neither a number nor a cell address.
    Invalid(String),
}

impl Term {
    fn parse(token: &str) -> Term {
        if let Some(n) = parse_number(token) {
            return Term::Literal(n);
        }
        let token = token.trim();
        match CellRef::from_str(token) {
            Some(cell) => Term::Reference(cell),
            None => Term::Invalid(token.to_string()),
        }
    }
}

/// A parsed formula together with its source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Formula {
    source: String,
    terms: Vec<Term>,
}

impl Formula {
    /// Parse entry text. Returns None unless the text qualifies as a formula.
    pub fn parse(text: &str) -> Option<Formula> {
        let Entry::Formula(body) = Entry::classify(text) else {
            return None;
        };
        let terms = body.split('+').map(Term::parse).collect();
        Some(Formula {
            source: text.to_string(),
            terms,
        })
    }

    /// The original entry text, including the leading `=`.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_terms() {
        let formula = Formula::parse("=A1+5+b2").unwrap();
        assert_eq!(
            formula.terms(),
            &[
                Term::Reference(CellRef::new(0, 0)),
                Term::Literal(5.0),
                Term::Reference(CellRef::new(1, 1)),
            ]
        );
        assert_eq!(formula.source(), "=A1+5+b2");
    }

    #[test]
    fn test_whitespace_around_tokens() {
        let formula = Formula::parse("= A1 + 2").unwrap();
        assert_eq!(
            formula.terms(),
            &[Term::Reference(CellRef::new(0, 0)), Term::Literal(2.0)]
        );
    }

    #[test]
    fn test_invalid_and_empty_tokens() {
        let formula = Formula::parse("=A1*2+").unwrap();
        assert_eq!(
            formula.terms(),
            &[Term::Invalid("A1*2".to_string()), Term::Literal(0.0)]
        );
    }

    #[test]
    fn test_short_text_is_not_a_formula() {
        assert!(Formula::parse("=1+2").is_none());
        assert!(Formula::parse("12345").is_none());
    }
}
