//! String interning for O(1) name equality.
//!
//! Every [`Symbol`] is a lightweight integer handle into an [`Interner`].
//! Comparing two symbols never touches the underlying string, so variable
//! and method names can be cloned and compared freely throughout the term
//! algebra, matcher, and kernel without repeated allocation.
//!
//! ## Example
//!
//! ```
//! use fol_base::{Interner, Symbol};
//!
//! let mut interner = Interner::new();
//! let x1 = interner.intern("x");
//! let x2 = interner.intern("x");
//! assert_eq!(x1, x2);
//! assert_eq!(interner.resolve(x1), "x");
//! ```

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A lightweight handle to an interned string.
///
/// `Symbol` is `Copy` and compares in O(1) time regardless of the length of
/// the string it names. Use [`Interner::resolve`] to recover the string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(u32);

impl Symbol {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A string interner providing O(1) equality comparison via [`Symbol`] handles.
///
/// Each unique string is stored exactly once; interning the same string
/// twice returns the same symbol.
#[derive(Default)]
pub struct Interner {
    map: HashMap<String, Symbol>,
    vec: Vec<String>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Interner {
            map: HashMap::new(),
            vec: Vec::new(),
        }
    }

    /// Interns a name, returning its symbol.
    ///
    /// Returns the existing symbol if the name was already interned.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.map.get(name) {
            return sym;
        }
        let sym = Symbol(self.vec.len() as u32);
        self.vec.push(name.to_string());
        self.map.insert(name.to_string(), sym);
        sym
    }

    /// Returns the name for the given symbol.
    ///
    /// # Panics
    ///
    /// Panics if `sym` was not produced by this interner.
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.vec[sym.index()]
    }

    /// Looks up an already-interned name without creating a new entry.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.map.get(name).copied()
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// `true` if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

/// Convenience trait for comparing a [`Symbol`] to a string literal without
/// an explicit `interner.resolve(sym) == "..."`.
pub trait SymbolEq {
    /// Returns `true` if this symbol resolves to `name` under `interner`.
    fn is(&self, interner: &Interner, name: &str) -> bool;
}

impl SymbolEq for Symbol {
    #[inline]
    fn is(&self, interner: &Interner, name: &str) -> bool {
        interner.resolve(*self) == name
    }
}
