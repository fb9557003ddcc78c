//! The logic term algebra: equality, negation, implication, universal
//! quantification, and logic-sorted (propositional) variables.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NumericExpr;

/// A formula of the logic sort.
///
/// `LogicExpr` can only ever contain well-sorted children: `Equals` takes
/// two [`NumericExpr`]s, `Not`/`Implies` take `LogicExpr`s, and `Forall`
/// binds a numeric variable over a `LogicExpr` body. There is no variant
/// through which a numeric term could appear where a formula is expected,
/// or vice versa — ill-sorted terms are unrepresentable rather than
/// rejected at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicExpr {
    /// A free or bound logic (propositional) variable, used as a
    /// meta-variable placeholder in axiom schemas such as `A -> (B -> A)`.
    Variable(Rc<str>),
    /// `left = right` over numeric terms.
    Equals(Rc<NumericExpr>, Rc<NumericExpr>),
    /// `¬inner`.
    Not(Rc<LogicExpr>),
    /// `antecedent -> consequent`.
    Implies(Rc<LogicExpr>, Rc<LogicExpr>),
    /// `∀var(body)`, binding the numeric variable `var` over `body`.
    Forall(Rc<str>, Rc<LogicExpr>),
}

impl LogicExpr {
    /// Builds a logic variable term.
    pub fn var(name: impl Into<Rc<str>>) -> Rc<LogicExpr> {
        Rc::new(LogicExpr::Variable(name.into()))
    }

    /// `left = right`.
    pub fn equals(left: &Rc<NumericExpr>, right: &Rc<NumericExpr>) -> Rc<LogicExpr> {
        Rc::new(LogicExpr::Equals(Rc::clone(left), Rc::clone(right)))
    }

    /// `¬self`.
    pub fn not(self: &Rc<Self>) -> Rc<LogicExpr> {
        Rc::new(LogicExpr::Not(Rc::clone(self)))
    }

    /// `self -> consequent`.
    pub fn implies(self: &Rc<Self>, consequent: &Rc<LogicExpr>) -> Rc<LogicExpr> {
        Rc::new(LogicExpr::Implies(Rc::clone(self), Rc::clone(consequent)))
    }

    /// `∀var(self)`.
    pub fn forall(var: impl Into<Rc<str>>, body: &Rc<LogicExpr>) -> Rc<LogicExpr> {
        Rc::new(LogicExpr::Forall(var.into(), Rc::clone(body)))
    }

    /// The set of free numeric-variable names occurring in this formula.
    ///
    /// A numeric variable bound by an enclosing `Forall` is excluded, per
    /// the usual notion of a free variable under a binder.
    pub fn free_variables(&self) -> HashSet<Rc<str>> {
        let mut out = HashSet::new();
        self.collect_free_variables(&mut out);
        out
    }

    fn collect_free_variables(&self, out: &mut HashSet<Rc<str>>) {
        match self {
            LogicExpr::Variable(_) => {}
            LogicExpr::Equals(left, right) => {
                out.extend(left.free_variables());
                out.extend(right.free_variables());
            }
            LogicExpr::Not(inner) => inner.collect_free_variables(out),
            LogicExpr::Implies(antecedent, consequent) => {
                antecedent.collect_free_variables(out);
                consequent.collect_free_variables(out);
            }
            LogicExpr::Forall(var, body) => {
                let mut inner = HashSet::new();
                body.collect_free_variables(&mut inner);
                inner.remove(var.as_ref());
                out.extend(inner);
            }
        }
    }

    /// Replaces every free occurrence of the numeric variable `name` with
    /// `replacement`, threading through `Equals`'s numeric operands.
    ///
    /// Shadowing, not alpha-renaming: if `name` is rebound by an enclosing
    /// `Forall`, the body under that binder is left untouched, matching
    /// ordinary lexical shadowing rather than capture-avoiding renaming.
    pub fn substitute(&self, name: &str, replacement: &Rc<NumericExpr>) -> Rc<LogicExpr> {
        match self {
            LogicExpr::Variable(var) => Rc::new(LogicExpr::Variable(Rc::clone(var))),
            LogicExpr::Equals(left, right) => Rc::new(LogicExpr::Equals(
                left.substitute(name, replacement),
                right.substitute(name, replacement),
            )),
            LogicExpr::Not(inner) => Rc::new(LogicExpr::Not(inner.substitute(name, replacement))),
            LogicExpr::Implies(antecedent, consequent) => Rc::new(LogicExpr::Implies(
                antecedent.substitute(name, replacement),
                consequent.substitute(name, replacement),
            )),
            LogicExpr::Forall(var, body) => {
                if var.as_ref() == name {
                    Rc::new(LogicExpr::Forall(Rc::clone(var), Rc::clone(body)))
                } else {
                    Rc::new(LogicExpr::Forall(
                        Rc::clone(var),
                        body.substitute(name, replacement),
                    ))
                }
            }
        }
    }

    /// Replaces every occurrence of the logic variable `name` with
    /// `replacement`.
    ///
    /// Used for axiom-schema instantiation, where `name` is a meta-variable
    /// such as `A` or `B` rather than a quantifiable numeric variable.
    /// `Forall` never binds a logic variable, so there is no shadowing case
    /// to consider here: substitution always recurses into the body.
    pub fn substitute_logic(&self, name: &str, replacement: &Rc<LogicExpr>) -> Rc<LogicExpr> {
        match self {
            LogicExpr::Variable(var) => {
                if var.as_ref() == name {
                    Rc::clone(replacement)
                } else {
                    Rc::new(LogicExpr::Variable(Rc::clone(var)))
                }
            }
            LogicExpr::Equals(left, right) => {
                Rc::new(LogicExpr::Equals(Rc::clone(left), Rc::clone(right)))
            }
            LogicExpr::Not(inner) => {
                Rc::new(LogicExpr::Not(inner.substitute_logic(name, replacement)))
            }
            LogicExpr::Implies(antecedent, consequent) => Rc::new(LogicExpr::Implies(
                antecedent.substitute_logic(name, replacement),
                consequent.substitute_logic(name, replacement),
            )),
            LogicExpr::Forall(var, body) => Rc::new(LogicExpr::Forall(
                Rc::clone(var),
                body.substitute_logic(name, replacement),
            )),
        }
    }
}

impl fmt::Display for LogicExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicExpr::Variable(name) => write!(f, "{name}"),
            LogicExpr::Equals(left, right) => write!(f, "{left}={right}"),
            LogicExpr::Not(inner) => write!(f, "\u{ac}{inner}"),
            LogicExpr::Implies(antecedent, consequent) => {
                write!(f, "({antecedent}\u{2192}{consequent})")
            }
            LogicExpr::Forall(var, body) => write!(f, "\u{2200}{var}({body})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Rc<NumericExpr> {
        NumericExpr::var("x")
    }

    #[test]
    fn forall_binds_its_variable() {
        let body = LogicExpr::equals(&x(), &x());
        let formula = LogicExpr::forall("x", &body);
        assert!(formula.free_variables().is_empty());
    }

    #[test]
    fn free_variables_exclude_only_the_bound_name() {
        let y = NumericExpr::var("y");
        let body = LogicExpr::equals(&x(), &y);
        let formula = LogicExpr::forall("x", &body);
        let fv = formula.free_variables();
        assert_eq!(fv.len(), 1);
        assert!(fv.contains("y"));
    }

    #[test]
    fn substitute_threads_through_equals() {
        let zero = Rc::new(NumericExpr::Zero);
        let formula = LogicExpr::equals(&x(), &x());
        let substituted = formula.substitute("x", &zero);
        assert_eq!(substituted.to_string(), "0=0");
    }

    #[test]
    fn substitute_does_not_cross_a_shadowing_forall() {
        let zero = Rc::new(NumericExpr::Zero);
        let body = LogicExpr::equals(&x(), &x());
        let formula = LogicExpr::forall("x", &body);
        let substituted = formula.substitute("x", &zero);
        assert_eq!(substituted.to_string(), "\u{2200}x(x=x)");
    }

    #[test]
    fn substitute_enters_a_forall_over_a_different_variable() {
        let y = NumericExpr::var("y");
        let zero = Rc::new(NumericExpr::Zero);
        let body = LogicExpr::equals(&x(), &y);
        let formula = LogicExpr::forall("x", &body);
        let substituted = formula.substitute("y", &zero);
        assert_eq!(substituted.to_string(), "\u{2200}x(x=0)");
    }

    #[test]
    fn substitute_logic_replaces_meta_variables() {
        let a = LogicExpr::var("A");
        let b = LogicExpr::var("B");
        let schema = a.implies(&b);
        let p = LogicExpr::equals(&x(), &x());
        let instantiated = schema.substitute_logic("A", &p);
        assert_eq!(instantiated.to_string(), "(x=x\u{2192}B)");
    }

    #[test]
    fn display_renders_connectives() {
        let p = LogicExpr::equals(&x(), &x());
        assert_eq!(p.not().to_string(), "\u{ac}x=x");
        assert_eq!(p.implies(&p).to_string(), "(x=x\u{2192}x=x)");
    }
}
