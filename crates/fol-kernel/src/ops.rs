//! The three core inference operations: Modus Ponens, Universal
//! Generalization, and Substitution. Each validates its preconditions
//! against the knowledge base, derives the conclusion, and atomically
//! records its provenance — there is no way to obtain a conclusion from
//! these functions without it also being marked proven.

use std::rc::Rc;

use fol_kb::KnowledgeBase;
use fol_term::{LogicExpr, TermBinding};

use crate::error::KernelError;

/// From a proven `implication = P → Q` and a proven `antecedent` equal to
/// `P`, derives `Q`.
pub fn modus_ponens(
    kb: &mut KnowledgeBase,
    implication: &Rc<LogicExpr>,
    antecedent: &Rc<LogicExpr>,
) -> Result<Rc<LogicExpr>, KernelError> {
    if !kb.is_proven(implication) {
        return Err(KernelError::NotProven(implication.as_ref().clone()));
    }
    if !kb.is_proven(antecedent) {
        return Err(KernelError::NotProven(antecedent.as_ref().clone()));
    }
    let (left, right) = match implication.as_ref() {
        LogicExpr::Implies(left, right) => (left, right),
        other => return Err(KernelError::NotAnImplication(other.clone())),
    };
    if left.as_ref() != antecedent.as_ref() {
        return Err(KernelError::AntecedentMismatch {
            expected: left.as_ref().clone(),
            found: antecedent.as_ref().clone(),
        });
    }
    let conclusion = kb.intern(Rc::clone(right));
    Ok(kb.mark_proven(
        conclusion,
        "Modus Ponens",
        vec![Rc::clone(implication), Rc::clone(antecedent)],
    ))
}

/// From a proven `sentence`, derives `∀var(sentence)`.
///
/// The kernel does not check that `var` was not relied on as a free
/// hypothesis elsewhere in the current proof (the Hilbert eigenvariable
/// side condition): this system has no notion of open assumptions distinct
/// from proven theorems, so there is nothing in the knowledge base to
/// check against. Callers — in practice, only the proof search driver —
/// must not generalize over a variable they introduced themselves rather
/// than one already present in a proven sentence.
pub fn universal_generalization(
    kb: &mut KnowledgeBase,
    sentence: &Rc<LogicExpr>,
    var: &str,
) -> Result<Rc<LogicExpr>, KernelError> {
    if !kb.is_proven(sentence) {
        return Err(KernelError::NotProven(sentence.as_ref().clone()));
    }
    let generalized = kb.intern(LogicExpr::forall(var, sentence));
    Ok(kb.mark_proven(
        generalized,
        "Universal Generalization",
        vec![Rc::clone(sentence)],
    ))
}

/// From a proven `sentence`, derives the result of sequentially applying
/// each `(name, replacement)` pair in `bindings` via
/// [`LogicExpr::substitute_binding`].
///
/// Sequential rather than simultaneous application: a later binding's
/// replacement can itself be affected by an earlier one if it mentions the
/// earlier name. This differs from simultaneous substitution only when
/// replacement terms mention substituted variables, which does not happen
/// for the schemas this kernel instantiates — they use distinct
/// meta-variable names throughout.
pub fn substitution(
    kb: &mut KnowledgeBase,
    sentence: &Rc<LogicExpr>,
    bindings: &[(Rc<str>, TermBinding)],
) -> Result<Rc<LogicExpr>, KernelError> {
    if !kb.is_proven(sentence) {
        return Err(KernelError::NotProven(sentence.as_ref().clone()));
    }
    let mut result = Rc::clone(sentence);
    for (name, binding) in bindings {
        result = result.substitute_binding(name, binding);
    }
    let interned = kb.intern(result);
    Ok(kb.mark_proven(interned, "Substitution", vec![Rc::clone(sentence)]))
}
