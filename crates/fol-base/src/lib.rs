//! # fol-base
//!
//! Symbol interning shared by the `postulate` crates.
//!
//! This crate has no knowledge of terms, sorts, or proofs. It provides only
//! [`Interner`]/[`Symbol`], the generic O(1)-equality handle used everywhere
//! a variable or method name needs to be compared cheaply and stored
//! without repeated heap allocation.

pub mod intern;

pub use intern::{Interner, Symbol, SymbolEq};
