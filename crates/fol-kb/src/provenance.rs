//! Records of *why* a sentence is considered proven.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use fol_base::{Interner, Symbol};
use fol_term::LogicExpr;

/// Why a sentence was admitted into a [`crate::KnowledgeBase`] as proven.
///
/// `method` is a human-readable tag — `"Logic Axiom"`, `"Modus Ponens"`,
/// `"Instance of Induction Schema"` — drawn from a small, constantly
/// repeated vocabulary, which is why it is stored as an interned
/// [`Symbol`] rather than a fresh `String` per provenance record.
/// `dependencies` lists the other proven sentences this one was derived
/// from; an axiom or schema instance has none. `metadata` is optional
/// string-keyed auxiliary information a schema instance attaches about
/// itself — the bound variable and predicate an Induction or
/// Instantiation instance was built from, for example — rendered as a
/// `[key: value, ...]` suffix wherever provenance is displayed. A
/// `BTreeMap` keeps that suffix in a stable order across runs.
#[derive(Debug, Clone)]
pub struct Provenance {
    method: Symbol,
    dependencies: Vec<Rc<LogicExpr>>,
    metadata: Option<BTreeMap<String, String>>,
}

impl Provenance {
    /// Records a sentence proven by `method`, derived from `dependencies`,
    /// with optional auxiliary `metadata`.
    pub fn new(
        method: Symbol,
        dependencies: Vec<Rc<LogicExpr>>,
        metadata: Option<BTreeMap<String, String>>,
    ) -> Self {
        Provenance {
            method,
            dependencies,
            metadata,
        }
    }

    /// Records an axiom or schema instance with no dependencies or metadata.
    pub fn axiom(method: Symbol) -> Self {
        Provenance {
            method,
            dependencies: Vec::new(),
            metadata: None,
        }
    }

    /// The interned method tag. Resolve with the knowledge base's
    /// [`crate::KnowledgeBase::method_name`].
    pub fn method(&self) -> Symbol {
        self.method
    }

    /// The sentences this proof step depended on.
    pub fn dependencies(&self) -> &[Rc<LogicExpr>] {
        &self.dependencies
    }

    /// The auxiliary metadata attached to this proof step, if any.
    pub fn metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// A [`Provenance`] paired with the interner needed to render its method
/// tag, for display purposes only.
pub struct DisplayProvenance<'a> {
    pub(crate) provenance: &'a Provenance,
    pub(crate) interner: &'a Interner,
}

impl fmt::Display for DisplayProvenance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interner.resolve(self.provenance.method))?;
        if !self.provenance.dependencies.is_empty() {
            write!(f, " (from ")?;
            for (i, dep) in self.provenance.dependencies.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{dep}")?;
            }
            write!(f, ")")?;
        }
        if let Some(metadata) = &self.provenance.metadata {
            if !metadata.is_empty() {
                write!(f, " [")?;
                for (i, (key, value)) in metadata.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "]")?;
            }
        }
        Ok(())
    }
}
