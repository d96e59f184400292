use ast::ast::BooleanTerm;
use tokenizer::Comparator;

/// High-LOGO comparators map one-to-one onto Python's.
pub const fn comparator_symbol(op: Comparator) -> &'static str {
    match op {
        Comparator::Eq => "==",
        Comparator::Ne => "!=",
        Comparator::Lt => "<",
        Comparator::Gt => ">",
        Comparator::Le => "<=",
        Comparator::Ge => ">=",
    }
}

/// Lower a boolean sub-expression to an equivalent Python condition.
///
/// Every binary node is parenthesized, so the output's evaluation order
/// mirrors the tree's nesting exactly, independent of Python's own operator
/// precedence.
pub fn translate_boolean_term(term: &BooleanTerm) -> String {
    match term {
        BooleanTerm::Comparison(cmp) => format!(
            "{} {} {}",
            cmp.left.raw_value(),
            comparator_symbol(cmp.op.node),
            cmp.right.raw_value()
        ),
        BooleanTerm::Not(inner) => format!("not ({})", translate_boolean_term(inner)),
        BooleanTerm::And(left, right) => format!(
            "({} and {})",
            translate_boolean_term(left),
            translate_boolean_term(right)
        ),
        BooleanTerm::Or(left, right) => format!(
            "({} or {})",
            translate_boolean_term(left),
            translate_boolean_term(right)
        ),
    }
}

#[cfg(test)]
mod tests {
    use ast::ast::{Comparison, S};
    use diagnostic::Span;
    use tokenizer::Number;

    use super::*;

    fn comparison(left: &str, op: Comparator, right: &str) -> BooleanTerm {
        BooleanTerm::Comparison(Comparison {
            left: S::new(Number::Integer(left.to_string()), Span::zero()),
            op: S::new(op, Span::zero()),
            right: S::new(Number::Integer(right.to_string()), Span::zero()),
        })
    }

    #[test]
    fn comparison_uses_identity_operator_mapping() {
        for (op, symbol) in [
            (Comparator::Eq, "=="),
            (Comparator::Ne, "!="),
            (Comparator::Lt, "<"),
            (Comparator::Gt, ">"),
            (Comparator::Le, "<="),
            (Comparator::Ge, ">="),
        ] {
            let term = comparison("1", op, "2");
            assert_eq!(translate_boolean_term(&term), format!("1 {symbol} 2"));
        }
    }

    #[test]
    fn grouping_mirrors_tree_nesting() {
        // (a==1 && (b==2 || c==3)), built structurally
        let term = BooleanTerm::And(
            Box::new(comparison("1", Comparator::Eq, "1")),
            Box::new(BooleanTerm::Or(
                Box::new(comparison("2", Comparator::Eq, "2")),
                Box::new(comparison("3", Comparator::Eq, "3")),
            )),
        );
        assert_eq!(
            translate_boolean_term(&term),
            "(1 == 1 and (2 == 2 or 3 == 3))"
        );

        // Same operands, opposite association: output grouping must differ.
        let term = BooleanTerm::Or(
            Box::new(BooleanTerm::And(
                Box::new(comparison("1", Comparator::Eq, "1")),
                Box::new(comparison("2", Comparator::Eq, "2")),
            )),
            Box::new(comparison("3", Comparator::Eq, "3")),
        );
        assert_eq!(
            translate_boolean_term(&term),
            "((1 == 1 and 2 == 2) or 3 == 3)"
        );
    }

    #[test]
    fn nested_not_and_or_depth_three() {
        let term = BooleanTerm::Not(Box::new(BooleanTerm::And(
            Box::new(comparison("1", Comparator::Ne, "2")),
            Box::new(BooleanTerm::Not(Box::new(BooleanTerm::Or(
                Box::new(comparison("3", Comparator::Le, "4")),
                Box::new(comparison("5", Comparator::Gt, "6")),
            )))),
        )));
        assert_eq!(
            translate_boolean_term(&term),
            "not ((1 != 2 and not ((3 <= 4 or 5 > 6))))"
        );
    }
}
