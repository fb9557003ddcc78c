//! Axiom schema constructors.
//!
//! Each function here builds one canonical instance of a parametric axiom
//! — `A → (B → A)`, `x + 0 = x`, and so on. None of them touch the
//! knowledge base: a schema is axiomatic, so the caller (the driver, or an
//! `init` bootstrap step) is the one that decides to intern and
//! [`fol_kb::KnowledgeBase::mark_proven`] the result, typically with
//! method `"Logic Axiom"` or `"Peano Axiom"`.

use std::collections::BTreeMap;
use std::rc::Rc;

use fol_term::{LogicExpr, NumericExpr};

use crate::error::KernelError;

/// `A → (B → A)`.
pub fn logic_l1(a: &Rc<LogicExpr>, b: &Rc<LogicExpr>) -> Rc<LogicExpr> {
    a.implies(&b.implies(a))
}

/// `(A → (B → C)) → ((A → B) → (A → C))`.
pub fn logic_l2(a: &Rc<LogicExpr>, b: &Rc<LogicExpr>, c: &Rc<LogicExpr>) -> Rc<LogicExpr> {
    let outer = a.implies(&b.implies(c));
    let inner = a.implies(b).implies(&a.implies(c));
    outer.implies(&inner)
}

/// `(¬A → ¬B) → (B → A)`.
pub fn logic_l3(a: &Rc<LogicExpr>, b: &Rc<LogicExpr>) -> Rc<LogicExpr> {
    let premise = a.not().implies(&b.not());
    premise.implies(&b.implies(a))
}

/// `¬(0 = S(x))`.
pub fn peano_p1(x: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    let zero = Rc::new(NumericExpr::Zero);
    LogicExpr::equals(&zero, &x.successor()).not()
}

/// `S(x) = S(y) → x = y`.
pub fn peano_p2(x: &Rc<NumericExpr>, y: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    LogicExpr::equals(&x.successor(), &y.successor()).implies(&LogicExpr::equals(x, y))
}

/// `x + 0 = x`.
pub fn peano_p3(x: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    let zero = Rc::new(NumericExpr::Zero);
    LogicExpr::equals(&x.add(&zero), x)
}

/// `x + S(y) = S(x + y)`.
pub fn peano_p4(x: &Rc<NumericExpr>, y: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    LogicExpr::equals(&x.add(&y.successor()), &x.add(y).successor())
}

/// `x · 0 = 0`.
pub fn peano_p5(x: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    let zero = Rc::new(NumericExpr::Zero);
    LogicExpr::equals(&x.multiply(&zero), &zero)
}

/// `x · S(y) = (x · y) + x`.
pub fn peano_p6(x: &Rc<NumericExpr>, y: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    LogicExpr::equals(&x.multiply(&y.successor()), &x.multiply(y).add(x))
}

/// `x = x`.
pub fn peano_p7(x: &Rc<NumericExpr>) -> Rc<LogicExpr> {
    LogicExpr::equals(x, x)
}

/// `P[x/0] → ((∀x (P → P[x/S(x)])) → ∀x P)`, alongside the `var`/`predicate`
/// metadata a caller should attach to the instance's [`fol_kb::Provenance`].
pub fn induction(predicate: &Rc<LogicExpr>, var: &str) -> (Rc<LogicExpr>, BTreeMap<String, String>) {
    let zero = Rc::new(NumericExpr::Zero);
    let base = predicate.substitute(var, &zero);
    let successor = NumericExpr::var(var).successor();
    let step_body = predicate.implies(&predicate.substitute(var, &successor));
    let step = LogicExpr::forall(var, &step_body);
    let conclusion = LogicExpr::forall(var, predicate);
    let instance = base.implies(&step.implies(&conclusion));

    let mut metadata = BTreeMap::new();
    metadata.insert("var".to_string(), var.to_string());
    metadata.insert("predicate".to_string(), predicate.to_string());
    (instance, metadata)
}

/// `∀x P → P[x/e]`, for a numeric `replacement` standing in for `e`,
/// alongside metadata recording `var`, `predicate`, and `replacement`.
pub fn instantiation(
    predicate: &Rc<LogicExpr>,
    var: &str,
    replacement: &Rc<NumericExpr>,
) -> (Rc<LogicExpr>, BTreeMap<String, String>) {
    let premise = LogicExpr::forall(var, predicate);
    let conclusion = predicate.substitute(var, replacement);
    let instance = premise.implies(&conclusion);

    let mut metadata = BTreeMap::new();
    metadata.insert("var".to_string(), var.to_string());
    metadata.insert("predicate".to_string(), predicate.to_string());
    metadata.insert("replacement".to_string(), replacement.to_string());
    (instance, metadata)
}

/// `P → ∀x P`, provided `x` does not occur free in `P`, alongside metadata
/// recording `var` and `predicate`.
///
/// The freeness check is the one precondition a schema constructor in this
/// kernel rejects rather than leaving to the caller: unlike Modus Ponens or
/// Universal Generalization, which are gated on the knowledge base,
/// freshness is a purely syntactic property of `predicate` itself and so
/// is checked here, before the instance is even built.
pub fn vacuous_generalization(
    predicate: &Rc<LogicExpr>,
    var: &str,
) -> Result<(Rc<LogicExpr>, BTreeMap<String, String>), KernelError> {
    if predicate.free_variables().contains(var) {
        return Err(KernelError::NotFresh {
            var: var.to_string(),
            predicate: predicate.as_ref().clone(),
        });
    }
    let conclusion = LogicExpr::forall(var, predicate);
    let instance = predicate.implies(&conclusion);

    let mut metadata = BTreeMap::new();
    metadata.insert("var".to_string(), var.to_string());
    metadata.insert("predicate".to_string(), predicate.to_string());
    Ok((instance, metadata))
}

/// `∀x (P → Q) → (∀x P → ∀x Q)`, alongside metadata recording `var`, `P`,
/// and `Q`.
pub fn distribution(p: &Rc<LogicExpr>, q: &Rc<LogicExpr>, var: &str) -> (Rc<LogicExpr>, BTreeMap<String, String>) {
    let inner = p.implies(q);
    let premise = LogicExpr::forall(var, &inner);
    let conclusion = LogicExpr::forall(var, p).implies(&LogicExpr::forall(var, q));
    let instance = premise.implies(&conclusion);

    let mut metadata = BTreeMap::new();
    metadata.insert("var".to_string(), var.to_string());
    metadata.insert("P".to_string(), p.to_string());
    metadata.insert("Q".to_string(), q.to_string());
    (instance, metadata)
}

/// `x = y → (P → P[x/y])`, for `x` the numeric variable named `var` free
/// in `predicate` and `replacement` standing in for `y`, alongside metadata
/// recording `x`, `y`, and `P`.
pub fn indiscernability(
    predicate: &Rc<LogicExpr>,
    var: &str,
    replacement: &Rc<NumericExpr>,
) -> (Rc<LogicExpr>, BTreeMap<String, String>) {
    let premise = LogicExpr::equals(&NumericExpr::var(var), replacement);
    let conclusion = predicate.implies(&predicate.substitute(var, replacement));
    let instance = premise.implies(&conclusion);

    let mut metadata = BTreeMap::new();
    metadata.insert("x".to_string(), var.to_string());
    metadata.insert("y".to_string(), replacement.to_string());
    metadata.insert("P".to_string(), predicate.to_string());
    (instance, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Rc<NumericExpr> {
        NumericExpr::var("x")
    }
    fn y() -> Rc<NumericExpr> {
        NumericExpr::var("y")
    }
    fn p_q_r() -> (Rc<LogicExpr>, Rc<LogicExpr>, Rc<LogicExpr>) {
        (LogicExpr::var("A"), LogicExpr::var("B"), LogicExpr::var("C"))
    }

    #[test]
    fn l1_renders_as_expected() {
        let (a, b, _) = p_q_r();
        assert_eq!(logic_l1(&a, &b).to_string(), "(A\u{2192}(B\u{2192}A))");
    }

    #[test]
    fn l2_renders_as_expected() {
        let (a, b, c) = p_q_r();
        assert_eq!(
            logic_l2(&a, &b, &c).to_string(),
            "((A\u{2192}(B\u{2192}C))\u{2192}((A\u{2192}B)\u{2192}(A\u{2192}C)))"
        );
    }

    #[test]
    fn peano_p1_asserts_zero_is_not_a_successor() {
        assert_eq!(peano_p1(&x()).to_string(), "\u{ac}0=S(x)");
    }

    #[test]
    fn peano_p7_is_reflexivity() {
        assert_eq!(peano_p7(&x()).to_string(), "x=x");
    }

    #[test]
    fn vacuous_generalization_rejects_a_free_occurrence() {
        let predicate = LogicExpr::equals(&x(), &x());
        assert!(vacuous_generalization(&predicate, "x").is_err());
    }

    #[test]
    fn vacuous_generalization_accepts_a_fresh_variable() {
        let predicate = LogicExpr::equals(&x(), &x());
        assert!(vacuous_generalization(&predicate, "y").is_ok());
    }

    #[test]
    fn distribution_renders_as_expected() {
        let (a, b, _) = p_q_r();
        let (schema, metadata) = distribution(&a, &b, "x");
        assert_eq!(
            schema.to_string(),
            "(\u{2200}x((A\u{2192}B))\u{2192}(\u{2200}x(A)\u{2192}\u{2200}x(B)))"
        );
        assert_eq!(metadata.get("var").map(String::as_str), Some("x"));
    }

    #[test]
    fn indiscernability_renders_as_expected() {
        let predicate = LogicExpr::equals(&x(), &x());
        let (schema, metadata) = indiscernability(&predicate, "x", &y());
        assert_eq!(schema.to_string(), "(x=y\u{2192}(x=x\u{2192}y=y))");
        assert_eq!(metadata.get("x").map(String::as_str), Some("x"));
    }
}
