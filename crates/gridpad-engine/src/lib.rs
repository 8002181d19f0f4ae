//! gridpad_engine - Cell addressing and additive formula evaluation.

pub mod engine;
pub mod error;

pub use error::{EvalError, is_error_marker};

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::error::EvalError;
    use std::collections::HashMap;

    fn grid(cells: &[(&str, &str)]) -> HashMap<CellRef, String> {
        let mut map = HashMap::new();
        for col in 0..26 {
            for row in 0..25 {
                map.insert(CellRef::new(col, row), String::new());
            }
        }
        for (id, text) in cells {
            map.insert(CellRef::from_str(id).unwrap(), text.to_string());
        }
        map
    }

    fn eval(text: &str, source: &HashMap<CellRef, String>) -> Evaluation {
        evaluate_entry(text, source, UnresolvedPolicy::Error)
    }

    fn display(evaluation: Evaluation) -> String {
        match evaluation {
            Evaluation::Computed { display, .. } => display,
            Evaluation::Unchanged => panic!("expected a computed result"),
        }
    }

    #[test]
    fn test_from_str_single_letter_columns() {
        let a1 = CellRef::from_str("A1").unwrap();
        assert_eq!(a1.row, 0);
        assert_eq!(a1.col, 0);

        let b1 = CellRef::from_str("B1").unwrap();
        assert_eq!(b1.col, 1);

        let z1 = CellRef::from_str("Z1").unwrap();
        assert_eq!(z1.col, 25);
    }

    #[test]
    fn test_from_str_multi_letter_columns() {
        assert_eq!(CellRef::from_str("AA1").unwrap().col, 26);
        assert_eq!(CellRef::from_str("AZ1").unwrap().col, 51);
        assert_eq!(CellRef::from_str("BA1").unwrap().col, 52);
    }

    #[test]
    fn test_from_str_row_numbers() {
        assert_eq!(CellRef::from_str("A1").unwrap().row, 0);
        assert_eq!(CellRef::from_str("A10").unwrap().row, 9);
        assert_eq!(CellRef::from_str("A25").unwrap().row, 24);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        let lower = CellRef::from_str("c5").unwrap();
        assert_eq!(lower, CellRef::new(2, 4));
    }

    #[test]
    fn test_from_str_invalid_inputs() {
        assert!(CellRef::from_str("").is_none());
        assert!(CellRef::from_str("123").is_none());
        assert!(CellRef::from_str("ABC").is_none());
        assert!(CellRef::from_str("A0").is_none());
        assert!(CellRef::from_str("1A").is_none());
        assert!(CellRef::from_str("A 1").is_none());
    }

    #[test]
    fn test_format_round_trips_identifiers() {
        for id in ["A1", "B12", "Z25", "AA3"] {
            assert_eq!(CellRef::from_str(id).unwrap().to_string(), id);
        }
    }

    #[test]
    fn test_literal_is_unchanged() {
        let source = grid(&[]);
        assert_eq!(eval("5", &source), Evaluation::Unchanged);
        assert_eq!(eval("hello", &source), Evaluation::Unchanged);
        assert_eq!(eval("", &source), Evaluation::Unchanged);
    }

    #[test]
    fn test_reference_plus_literal() {
        let source = grid(&[("A1", "3")]);
        let evaluation = eval("=A1+5", &source);
        assert_eq!(
            evaluation,
            Evaluation::Computed {
                formula: "=A1+5".to_string(),
                display: "8".to_string(),
                error: None,
            }
        );
    }

    #[test]
    fn test_sum_is_order_independent() {
        let source = grid(&[("A1", "2.5"), ("B1", "4")]);
        assert_eq!(display(eval("=A1+B1", &source)), "6.5");
        assert_eq!(display(eval("=B1+A1", &source)), "6.5");
    }

    #[test]
    fn test_short_formula_is_not_evaluated() {
        let source = grid(&[]);
        assert_eq!(eval("=1+2", &source), Evaluation::Unchanged);
        assert_eq!(display(eval("=1+22", &source)), "23");
    }

    #[test]
    fn test_blank_reference_counts_as_zero() {
        let source = grid(&[]);
        assert_eq!(display(eval("=A1+10", &source)), "10");
    }

    #[test]
    fn test_references_read_displayed_text() {
        // B1 was evaluated earlier and now displays its result.
        let source = grid(&[("A1", "1"), ("B1", "11")]);
        assert_eq!(display(eval("=B1+A1+1", &source)), "13");
    }

    #[test]
    fn test_off_grid_reference_is_ref_error() {
        let source = grid(&[]);
        match eval("=A26+1", &source) {
            Evaluation::Computed { display, error, .. } => {
                assert_eq!(display, "#REF!");
                assert_eq!(error, Some(EvalError::UnknownReference("A26".to_string())));
            }
            Evaluation::Unchanged => panic!("expected a computed result"),
        }
    }

    #[test]
    fn test_malformed_token_is_ref_error() {
        let source = grid(&[]);
        assert_eq!(display(eval("=A1*2+3", &source)), "#REF!");
    }

    #[test]
    fn test_non_numeric_reference_is_value_error() {
        let source = grid(&[("A1", "apples")]);
        match eval("=A1+1", &source) {
            Evaluation::Computed { display, error, formula } => {
                assert_eq!(display, "#VALUE!");
                assert_eq!(formula, "=A1+1");
                assert!(matches!(error, Some(EvalError::NotANumber { .. })));
            }
            Evaluation::Unchanged => panic!("expected a computed result"),
        }
    }

    #[test]
    fn test_error_markers_propagate() {
        let source = grid(&[("A1", "#REF!")]);
        assert_eq!(display(eval("=A1+1", &source)), "#VALUE!");
    }

    #[test]
    fn test_zero_policy_skips_unresolved_terms() {
        let source = grid(&[("A1", "apples"), ("B1", "4")]);
        let evaluation = evaluate_entry("=A1+B1+Z99+2", &source, UnresolvedPolicy::Zero);
        assert_eq!(display(evaluation), "6");
    }

    #[test]
    fn test_overflow_is_num_error() {
        let source = grid(&[("A1", "1e309"), ("B1", "5")]);
        assert_eq!(display(eval("=1e309+-1e309", &source)), "#NUM!");
        assert_eq!(display(eval("=1e308+1e308", &source)), "#NUM!");
        assert_eq!(display(eval("=A1+B1", &source)), "#NUM!");

        // Unresolved terms may be zeroed, an overflowed sum may not.
        let evaluation = evaluate_entry("=1e309+Q99", &source, UnresolvedPolicy::Zero);
        match evaluation {
            Evaluation::Computed { display, error, .. } => {
                assert_eq!(display, "#NUM!");
                assert_eq!(error, Some(EvalError::OutOfRange("=1e309+Q99".to_string())));
            }
            Evaluation::Unchanged => panic!("expected a computed result"),
        }
        assert!(crate::is_error_marker("#NUM!"));
    }

    #[test]
    fn test_evaluate_returns_first_error() {
        let source = grid(&[("A1", "x")]);
        let formula = Formula::parse("=A1+Q99").unwrap();
        let err = evaluate(&formula, &source, UnresolvedPolicy::Error).unwrap_err();
        assert_eq!(err.marker(), "#VALUE!");
    }
}
