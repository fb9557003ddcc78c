//! A single variable binding, tagged by which sort it replaces.
//!
//! The matcher and kernel both need to carry "replace this name with this
//! term" without knowing ahead of time whether the name belongs to a
//! numeric or a logic variable — that depends on where the name occurs in
//! the formula being matched or instantiated. [`TermBinding`] is the
//! sum type that lets a single `HashMap<Rc<str>, TermBinding>` carry both.

use std::fmt;
use std::rc::Rc;

use crate::{LogicExpr, NumericExpr};

/// A term bound to a variable name, tagged by sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermBinding {
    /// A numeric term bound to a numeric variable name.
    Numeric(Rc<NumericExpr>),
    /// A logic term bound to a logic (meta-)variable name.
    Logic(Rc<LogicExpr>),
}

impl TermBinding {
    /// `true` if this binding carries a numeric term.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TermBinding::Numeric(_))
    }

    /// `true` if this binding carries a logic term.
    pub fn is_logic(&self) -> bool {
        matches!(self, TermBinding::Logic(_))
    }

    /// Returns the numeric term, if this binding carries one.
    pub fn as_numeric(&self) -> Option<&Rc<NumericExpr>> {
        match self {
            TermBinding::Numeric(term) => Some(term),
            TermBinding::Logic(_) => None,
        }
    }

    /// Returns the logic term, if this binding carries one.
    pub fn as_logic(&self) -> Option<&Rc<LogicExpr>> {
        match self {
            TermBinding::Numeric(_) => None,
            TermBinding::Logic(term) => Some(term),
        }
    }
}

impl fmt::Display for TermBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermBinding::Numeric(term) => write!(f, "{term}"),
            TermBinding::Logic(term) => write!(f, "{term}"),
        }
    }
}

impl From<Rc<NumericExpr>> for TermBinding {
    fn from(term: Rc<NumericExpr>) -> Self {
        TermBinding::Numeric(term)
    }
}

impl From<Rc<LogicExpr>> for TermBinding {
    fn from(term: Rc<LogicExpr>) -> Self {
        TermBinding::Logic(term)
    }
}

impl LogicExpr {
    /// Replaces the free occurrences of `name` using whichever substitution
    /// rule matches the binding's sort: [`LogicExpr::substitute`] for a
    /// numeric binding, [`LogicExpr::substitute_logic`] for a logic one.
    pub fn substitute_binding(&self, name: &str, binding: &TermBinding) -> Rc<LogicExpr> {
        match binding {
            TermBinding::Numeric(term) => self.substitute(name, term),
            TermBinding::Logic(term) => self.substitute_logic(name, term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_binding_dispatches_on_sort() {
        let x = NumericExpr::var("x");
        let zero: TermBinding = Rc::new(NumericExpr::Zero).into();
        let formula = LogicExpr::equals(&x, &x);
        let substituted = formula.substitute_binding("x", &zero);
        assert_eq!(substituted.to_string(), "0=0");

        let a = LogicExpr::var("A");
        let p: TermBinding = LogicExpr::equals(&x, &x).into();
        let schema = a.clone();
        let substituted = schema.substitute_binding("A", &p);
        assert_eq!(substituted.to_string(), "x=x");
    }
}
