//! Kernel precondition errors. Plain enum, hand-written `Display`/`Error` —
//! no `thiserror`/`anyhow`, matching the rest of this workspace.
//!
//! These are the *recoverable* errors the driver is expected to catch
//! around speculative kernel applications and treat as "try the next
//! candidate," per the error taxonomy: a kernel error never indicates a
//! bug, only that a particular candidate derivation does not apply.

use std::fmt;

use fol_term::LogicExpr;

#[derive(Debug)]
pub enum KernelError {
    /// Modus Ponens was applied to a sentence that is not `Implies`.
    NotAnImplication(LogicExpr),
    /// Modus Ponens's antecedent did not structurally equal the
    /// implication's left-hand side.
    AntecedentMismatch {
        expected: LogicExpr,
        found: LogicExpr,
    },
    /// An inference rule's input was not recorded as proven in the
    /// knowledge base.
    NotProven(LogicExpr),
    /// Vacuous Generalization was invoked with `var` free in `predicate`.
    NotFresh { var: String, predicate: LogicExpr },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::NotAnImplication(sentence) => {
                write!(f, "not an implication: {sentence}")
            }
            KernelError::AntecedentMismatch { expected, found } => write!(
                f,
                "antecedent mismatch: implication expects {expected}, got {found}"
            ),
            KernelError::NotProven(sentence) => write!(f, "not proven: {sentence}"),
            KernelError::NotFresh { var, predicate } => write!(
                f,
                "variable {var} occurs free in {predicate}; Vacuous Generalization requires freshness"
            ),
        }
    }
}

impl std::error::Error for KernelError {}
