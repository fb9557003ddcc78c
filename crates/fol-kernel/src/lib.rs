//! # fol-kernel
//!
//! The inference kernel: the three core rules (Modus Ponens, Universal
//! Generalization, Substitution) and the fifteen axiom schema constructors
//! (three propositional, seven Peano, five second-order-flavored schemas
//! for induction, instantiation, and quantifier manipulation).
//!
//! Every function that can fail returns a [`KernelError`] rather than
//! panicking: applying an inference rule to a candidate that does not fit
//! is an ordinary, expected outcome during proof search, not a bug.

mod error;
mod ops;
pub mod schemas;

pub use error::KernelError;
pub use ops::{modus_ponens, substitution, universal_generalization};
