//! Turning a successful match's bindings back into a concrete term.

use std::rc::Rc;

use fol_match::Bindings;
use fol_term::LogicExpr;

/// Applies every binding in `bindings` to `pattern` in sequence, returning
/// the fully instantiated term.
///
/// Bindings are applied in name order rather than `HashMap` iteration
/// order so that the result is reproducible across runs; the schemas this
/// system instantiates use distinct meta-variable names, so the order
/// sequential substitution is applied in cannot change the result (see
/// [`fol_kernel::substitution`]'s doc comment for when it would).
pub fn instantiate(pattern: &Rc<LogicExpr>, bindings: &Bindings) -> Rc<LogicExpr> {
    let mut names: Vec<&Rc<str>> = bindings.keys().collect();
    names.sort();
    let mut result = Rc::clone(pattern);
    for name in names {
        let binding = &bindings[name];
        result = result.substitute_binding(name, binding);
    }
    result
}
