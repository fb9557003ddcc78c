//! The numeric term algebra: `0`, variables, successor, addition, multiplication.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A term of the numeric sort, built over `Zero`, variables, and the Peano
/// function symbols `Successor`, `Add`, `Multiply`.
///
/// Variable names are stored as `Rc<str>` rather than `String`: the same
/// name is cloned into many subterms during matching and substitution, and
/// an `Rc<str>` clone is a refcount bump instead of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericExpr {
    /// The constant `0`.
    Zero,
    /// A free or bound numeric variable.
    Variable(Rc<str>),
    /// `S(n)`, the successor of `n`.
    Successor(Rc<NumericExpr>),
    /// `a + b`.
    Add(Rc<NumericExpr>, Rc<NumericExpr>),
    /// `a * b`.
    Multiply(Rc<NumericExpr>, Rc<NumericExpr>),
}

impl NumericExpr {
    /// Builds a variable term, interning nothing — the caller's `Rc<str>` is
    /// reused as-is.
    pub fn var(name: impl Into<Rc<str>>) -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Variable(name.into()))
    }

    /// `S(self)`.
    pub fn successor(self: &Rc<Self>) -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Successor(Rc::clone(self)))
    }

    /// `self + other`.
    pub fn add(self: &Rc<Self>, other: &Rc<NumericExpr>) -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Add(Rc::clone(self), Rc::clone(other)))
    }

    /// `self * other`.
    pub fn multiply(self: &Rc<Self>, other: &Rc<NumericExpr>) -> Rc<NumericExpr> {
        Rc::new(NumericExpr::Multiply(Rc::clone(self), Rc::clone(other)))
    }

    /// The set of free variable names occurring in this term.
    ///
    /// Every numeric variable is free: `NumericExpr` has no binder of its
    /// own (binding happens one sort up, in [`crate::LogicExpr::Forall`]).
    pub fn free_variables(&self) -> HashSet<Rc<str>> {
        let mut out = HashSet::new();
        self.collect_free_variables(&mut out);
        out
    }

    fn collect_free_variables(&self, out: &mut HashSet<Rc<str>>) {
        match self {
            NumericExpr::Zero => {}
            NumericExpr::Variable(name) => {
                out.insert(Rc::clone(name));
            }
            NumericExpr::Successor(inner) => inner.collect_free_variables(out),
            NumericExpr::Add(left, right) | NumericExpr::Multiply(left, right) => {
                left.collect_free_variables(out);
                right.collect_free_variables(out);
            }
        }
    }

    /// Replaces every free occurrence of the variable `name` with
    /// `replacement`, returning a new term.
    ///
    /// `NumericExpr` has no binders, so there is no shadowing to consider:
    /// every occurrence of `name` is free.
    pub fn substitute(&self, name: &str, replacement: &Rc<NumericExpr>) -> Rc<NumericExpr> {
        match self {
            NumericExpr::Zero => Rc::new(NumericExpr::Zero),
            NumericExpr::Variable(var) => {
                if var.as_ref() == name {
                    Rc::clone(replacement)
                } else {
                    Rc::new(NumericExpr::Variable(Rc::clone(var)))
                }
            }
            NumericExpr::Successor(inner) => {
                Rc::new(NumericExpr::Successor(inner.substitute(name, replacement)))
            }
            NumericExpr::Add(left, right) => Rc::new(NumericExpr::Add(
                left.substitute(name, replacement),
                right.substitute(name, replacement),
            )),
            NumericExpr::Multiply(left, right) => Rc::new(NumericExpr::Multiply(
                left.substitute(name, replacement),
                right.substitute(name, replacement),
            )),
        }
    }
}

impl fmt::Display for NumericExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericExpr::Zero => write!(f, "0"),
            NumericExpr::Variable(name) => write!(f, "{name}"),
            NumericExpr::Successor(inner) => write!(f, "S({inner})"),
            NumericExpr::Add(left, right) => write!(f, "({left}+{right})"),
            NumericExpr::Multiply(left, right) => write!(f, "({left}\u{b7}{right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_no_free_variables() {
        assert!(NumericExpr::Zero.free_variables().is_empty());
    }

    #[test]
    fn variable_is_its_own_free_variable() {
        let x = NumericExpr::var("x");
        let fv = x.free_variables();
        assert_eq!(fv.len(), 1);
        assert!(fv.contains("x"));
    }

    #[test]
    fn free_variables_of_compound_term_is_the_union() {
        let x = NumericExpr::var("x");
        let y = NumericExpr::var("y");
        let sum = x.add(&y);
        let fv = sum.free_variables();
        assert_eq!(fv.len(), 2);
        assert!(fv.contains("x"));
        assert!(fv.contains("y"));
    }

    #[test]
    fn substitute_replaces_every_free_occurrence() {
        let x = NumericExpr::var("x");
        let term = x.add(&x).successor();
        let zero = Rc::new(NumericExpr::Zero);
        let substituted = term.substitute("x", &zero);
        assert_eq!(substituted.to_string(), "S((0+0))");
    }

    #[test]
    fn substitute_leaves_other_variables_untouched() {
        let x = NumericExpr::var("x");
        let y = NumericExpr::var("y");
        let term = x.add(&y);
        let zero = Rc::new(NumericExpr::Zero);
        let substituted = term.substitute("x", &zero);
        assert_eq!(substituted.to_string(), "(0+y)");
    }

    #[test]
    fn display_renders_peano_terms() {
        let x = NumericExpr::var("x");
        assert_eq!(x.successor().to_string(), "S(x)");
        assert_eq!(x.add(&x).to_string(), "(x+x)");
        assert_eq!(x.multiply(&x).to_string(), "(x\u{b7}x)");
    }
}
