//! # fol-term
//!
//! The term algebra: two sort-tagged expression trees, `NumericExpr` and
//! `LogicExpr`, over Peano arithmetic and first-order logic.
//!
//! The two sorts are separate Rust enums rather than one enum with a
//! runtime sort tag. A `NumericExpr` cannot contain a `LogicExpr` child and
//! vice versa (only `LogicExpr::Equals` crosses sorts, and only in the
//! direction logic-over-numeric), so an ill-sorted term — e.g. `0 -> 0`, or
//! `S(P)` for some formula `P` — has no constructor that could build it. The
//! type checker that would otherwise reject such a term at runtime is
//! unnecessary: the compiler already rejects it at the call site.

mod binding;
mod logic;
mod numeric;

pub use binding::TermBinding;
pub use logic::LogicExpr;
pub use numeric::NumericExpr;
