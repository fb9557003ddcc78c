//! Complexity scoring, used to bias pruning toward simpler candidate
//! formulas when the guess queue grows past its cap.
//!
//! A variable (of either sort) scores 1; every compound node scores 1 plus
//! the sum of its children's scores. `Zero` — the one nullary non-variable
//! constructor — also scores 1, for the same reason a variable does: it is
//! a leaf.

use fol_term::{LogicExpr, NumericExpr};

/// The complexity score of a numeric term.
pub fn numeric_complexity(term: &NumericExpr) -> usize {
    match term {
        NumericExpr::Zero | NumericExpr::Variable(_) => 1,
        NumericExpr::Successor(inner) => 1 + numeric_complexity(inner),
        NumericExpr::Add(left, right) | NumericExpr::Multiply(left, right) => {
            1 + numeric_complexity(left) + numeric_complexity(right)
        }
    }
}

/// The complexity score of a logic formula.
pub fn logic_complexity(term: &LogicExpr) -> usize {
    match term {
        LogicExpr::Variable(_) => 1,
        LogicExpr::Equals(left, right) => 1 + numeric_complexity(left) + numeric_complexity(right),
        LogicExpr::Not(inner) => 1 + logic_complexity(inner),
        LogicExpr::Implies(antecedent, consequent) => {
            1 + logic_complexity(antecedent) + logic_complexity(consequent)
        }
        LogicExpr::Forall(_, body) => 1 + logic_complexity(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn variables_and_zero_score_one() {
        assert_eq!(numeric_complexity(&NumericExpr::Zero), 1);
        assert_eq!(numeric_complexity(&NumericExpr::Variable(Rc::from("x"))), 1);
    }

    #[test]
    fn compound_scores_one_plus_children() {
        let x = NumericExpr::var("x");
        let sum = x.add(&x);
        assert_eq!(numeric_complexity(&sum), 3);
        assert_eq!(numeric_complexity(&sum.successor()), 4);
    }

    #[test]
    fn logic_complexity_counts_through_equals() {
        let x = NumericExpr::var("x");
        let formula = LogicExpr::equals(&x, &x);
        assert_eq!(logic_complexity(&formula), 3);
        assert_eq!(logic_complexity(&formula.not()), 4);
    }
}
