//! # fol-match
//!
//! One-sided structural matching: a *pattern* (a term whose `Variable`
//! nodes stand for meta-variables) is matched against a *ground* term (an
//! ordinary, fully concrete term) to produce [`Bindings`] — the assignment
//! of each pattern variable to the ground subterm it stood for.
//!
//! This is strictly weaker than unification: only the pattern side may
//! contain variables, and matching never has to solve for both sides at
//! once. That is all axiom-schema instantiation and proof-search matching
//! against the knowledge base ever need.

use std::collections::HashMap;
use std::rc::Rc;

use fol_term::{LogicExpr, NumericExpr, TermBinding};

/// The assignment of pattern variable names to the ground terms they
/// matched, consistent across every occurrence of the same name.
pub type Bindings = HashMap<Rc<str>, TermBinding>;

/// Matches `pattern` against `ground`, returning the bindings that make
/// them equal, or `None` if no consistent assignment exists.
pub fn match_term(pattern: &LogicExpr, ground: &LogicExpr) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if match_logic(pattern, ground, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

/// Matches a numeric `pattern` against a numeric `ground` term.
pub fn match_numeric_term(pattern: &NumericExpr, ground: &NumericExpr) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if match_numeric(pattern, ground, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

/// Extends `pattern` against `ground` under `bindings`, in place.
///
/// A `Variable` pattern node is bound to `ground` if it has not been seen
/// before; if it has, the new occurrence must match the same ground term
/// as the first (binding consistency). Every other pattern shape must
/// match the ground term's shape exactly, recursing structurally.
pub fn match_numeric(pattern: &NumericExpr, ground: &NumericExpr, bindings: &mut Bindings) -> bool {
    match pattern {
        NumericExpr::Variable(name) => bind_numeric(name, ground, bindings),
        NumericExpr::Zero => matches!(ground, NumericExpr::Zero),
        NumericExpr::Successor(inner) => match ground {
            NumericExpr::Successor(ground_inner) => match_numeric(inner, ground_inner, bindings),
            _ => false,
        },
        NumericExpr::Add(p_left, p_right) => match ground {
            NumericExpr::Add(g_left, g_right) => {
                match_numeric(p_left, g_left, bindings) && match_numeric(p_right, g_right, bindings)
            }
            _ => false,
        },
        NumericExpr::Multiply(p_left, p_right) => match ground {
            NumericExpr::Multiply(g_left, g_right) => {
                match_numeric(p_left, g_left, bindings) && match_numeric(p_right, g_right, bindings)
            }
            _ => false,
        },
    }
}

/// Extends `pattern` against `ground` under `bindings`, in place.
///
/// ## `Forall` and capture
///
/// `Forall`'s bound-variable slot is matched like any other pattern
/// variable: matching `∀x(P(x))` against `∀y(Q(y))` binds the pattern name
/// `x` to the ground name `y` exactly as if `x` had appeared as a free
/// numeric variable. This is simple and sufficient for schema
/// instantiation, but it is capture-unsafe in general — it does not
/// rename `x` to `y` throughout the rest of the pattern, it only requires
/// that every occurrence of `x` in the pattern binds consistently to `y`.
/// A pattern that uses the same name both inside and outside a `Forall`
/// it does not otherwise bind can therefore match in a way that would not
/// survive capture-avoiding alpha-renaming. No schema in this system's
/// axiom set does that, so the simpler rule is used as specified rather
/// than implementing full alpha-equivalence.
pub fn match_logic(pattern: &LogicExpr, ground: &LogicExpr, bindings: &mut Bindings) -> bool {
    match pattern {
        LogicExpr::Variable(name) => bind_logic(name, ground, bindings),
        LogicExpr::Equals(p_left, p_right) => match ground {
            LogicExpr::Equals(g_left, g_right) => {
                match_numeric(p_left, g_left, bindings) && match_numeric(p_right, g_right, bindings)
            }
            _ => false,
        },
        LogicExpr::Not(p_inner) => match ground {
            LogicExpr::Not(g_inner) => match_logic(p_inner, g_inner, bindings),
            _ => false,
        },
        LogicExpr::Implies(p_ante, p_cons) => match ground {
            LogicExpr::Implies(g_ante, g_cons) => {
                match_logic(p_ante, g_ante, bindings) && match_logic(p_cons, g_cons, bindings)
            }
            _ => false,
        },
        LogicExpr::Forall(p_var, p_body) => match ground {
            LogicExpr::Forall(g_var, g_body) => {
                bind_numeric(p_var, &NumericExpr::Variable(Rc::clone(g_var)), bindings)
                    && match_logic(p_body, g_body, bindings)
            }
            _ => false,
        },
    }
}

fn bind_numeric(name: &Rc<str>, ground: &NumericExpr, bindings: &mut Bindings) -> bool {
    match bindings.get(name) {
        Some(existing) => existing
            .as_numeric()
            .is_some_and(|bound| bound.as_ref() == ground),
        None => {
            bindings.insert(Rc::clone(name), TermBinding::Numeric(Rc::new(ground.clone())));
            true
        }
    }
}

fn bind_logic(name: &Rc<str>, ground: &LogicExpr, bindings: &mut Bindings) -> bool {
    match bindings.get(name) {
        Some(existing) => existing
            .as_logic()
            .is_some_and(|bound| bound.as_ref() == ground),
        None => {
            bindings.insert(Rc::clone(name), TermBinding::Logic(Rc::new(ground.clone())));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Rc<NumericExpr> {
        NumericExpr::var("x")
    }

    fn zero() -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Zero)
    }

    #[test]
    fn variable_pattern_binds_any_ground_term() {
        let pattern = x();
        let bindings = match_numeric_term(&pattern, &zero()).unwrap();
        assert_eq!(bindings.get("x").unwrap().as_numeric().unwrap().as_ref(), &NumericExpr::Zero);
    }

    #[test]
    fn repeated_variable_requires_consistent_binding() {
        let pattern = x().add(&x());
        let ground = zero().successor().add(&zero().successor());
        assert!(match_numeric_term(&pattern, &ground).is_some());

        let inconsistent = zero().successor().add(&zero());
        assert!(match_numeric_term(&pattern, &inconsistent).is_none());
    }

    #[test]
    fn mismatched_shape_fails() {
        let pattern = x().add(&x());
        let ground = zero().successor();
        assert!(match_numeric_term(&pattern, &ground).is_none());
    }

    #[test]
    fn logic_variable_binds_an_arbitrary_formula() {
        let a = LogicExpr::var("A");
        let b = LogicExpr::var("B");
        let schema = a.implies(&b);
        let ground = LogicExpr::equals(&zero(), &zero()).implies(&LogicExpr::not(&LogicExpr::equals(&zero(), &zero())));
        let bindings = match_term(&schema, &ground).unwrap();
        assert!(bindings.get("A").unwrap().is_logic());
        assert!(bindings.get("B").unwrap().is_logic());
    }

    #[test]
    fn forall_binds_the_pattern_variable_to_the_ground_name() {
        let body = LogicExpr::equals(&x(), &x());
        let pattern = LogicExpr::forall("x", &body);
        let ground_body = LogicExpr::equals(&NumericExpr::var("y"), &NumericExpr::var("y"));
        let ground = LogicExpr::forall("y", &ground_body);
        let bindings = match_term(&pattern, &ground).unwrap();
        assert_eq!(
            bindings.get("x").unwrap().as_numeric().unwrap().as_ref(),
            &NumericExpr::Variable(Rc::from("y"))
        );
    }

    #[test]
    fn numeric_variable_pattern_never_matches_a_logic_ground_term() {
        // Sorts are enforced by the type system: a LogicExpr pattern can
        // never be handed a NumericExpr ground term or vice versa, so there
        // is no runtime "sort mismatch" case to test here beyond what the
        // compiler already rules out.
        let pattern = LogicExpr::var("A");
        let ground = LogicExpr::equals(&zero(), &zero());
        assert!(match_term(&pattern, &ground).is_some());
    }
}
