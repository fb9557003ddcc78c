//! The knowledge base: a hash-consing term store plus the set of sentences
//! currently proven, each with its [`Provenance`].

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use fol_base::{Interner, Symbol};
use fol_term::LogicExpr;

use crate::error::UnprovenDependency;
use crate::provenance::{DisplayProvenance, Provenance};

/// A store of sentences, canonicalized by structural equality, together
/// with the subset that has been proven and why.
///
/// Canonicalization means every sentence equal to one already seen is
/// folded onto the same `Rc<LogicExpr>`: once two terms have both passed
/// through [`KnowledgeBase::intern`], `Rc::ptr_eq` on the results agrees
/// with structural equality on the originals.
#[derive(Default)]
pub struct KnowledgeBase {
    canonical: HashMap<LogicExpr, Rc<LogicExpr>>,
    pub(crate) provenance: HashMap<LogicExpr, Provenance>,
    /// Proven sentences in the order they were first marked proven. The
    /// proof search driver depends on this for deterministic iteration
    /// over the proven set within a round.
    proven_order: Vec<Rc<LogicExpr>>,
    pub(crate) tags: Interner,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    pub fn new() -> Self {
        KnowledgeBase {
            canonical: HashMap::new(),
            provenance: HashMap::new(),
            proven_order: Vec::new(),
            tags: Interner::new(),
        }
    }

    /// Returns the canonical representative of `term`, inserting it as its
    /// own representative if this is the first time an equal term has been
    /// interned.
    pub fn intern(&mut self, term: Rc<LogicExpr>) -> Rc<LogicExpr> {
        if let Some(existing) = self.canonical.get(term.as_ref()) {
            return Rc::clone(existing);
        }
        self.canonical
            .insert(term.as_ref().clone(), Rc::clone(&term));
        term
    }

    /// Looks up the canonical representative of `term` without interning it.
    pub fn lookup(&self, term: &LogicExpr) -> Option<Rc<LogicExpr>> {
        self.canonical.get(term).map(Rc::clone)
    }

    /// `true` if an equal sentence has already been interned.
    pub fn contains(&self, term: &LogicExpr) -> bool {
        self.canonical.contains_key(term)
    }

    /// `true` if an equal sentence has been proven.
    pub fn is_proven(&self, term: &LogicExpr) -> bool {
        self.provenance.contains_key(term)
    }

    /// The provenance recorded for `term`, if it has been proven.
    pub fn get_provenance(&self, term: &LogicExpr) -> Option<&Provenance> {
        self.provenance.get(term)
    }

    /// Pairs a provenance record with the interner needed to render its
    /// method tag.
    pub fn display_provenance<'a>(&'a self, provenance: &'a Provenance) -> DisplayProvenance<'a> {
        DisplayProvenance {
            provenance,
            interner: &self.tags,
        }
    }

    /// Resolves an interned method tag back to its name.
    pub fn method_name(&self, method: Symbol) -> &str {
        self.tags.resolve(method)
    }

    /// Interns `sentence` and marks it proven by `method`, with no
    /// dependency check and no metadata.
    ///
    /// If an equal sentence is already proven, the existing provenance is
    /// kept unchanged and its canonical representative is returned
    /// (first-proof-wins): re-deriving an already-proven fact by a
    /// different route does not overwrite its recorded history.
    pub fn mark_proven(
        &mut self,
        sentence: Rc<LogicExpr>,
        method: &str,
        dependencies: Vec<Rc<LogicExpr>>,
    ) -> Rc<LogicExpr> {
        self.mark_proven_with_metadata(sentence, method, dependencies, None)
    }

    /// Like [`KnowledgeBase::mark_proven`], but additionally records
    /// `metadata` — the auxiliary, string-keyed detail a schema instance
    /// carries about itself (the bound variable and predicate it was built
    /// from, say).
    pub fn mark_proven_with_metadata(
        &mut self,
        sentence: Rc<LogicExpr>,
        method: &str,
        dependencies: Vec<Rc<LogicExpr>>,
        metadata: Option<BTreeMap<String, String>>,
    ) -> Rc<LogicExpr> {
        let canonical = self.intern(sentence);
        if self.provenance.contains_key(canonical.as_ref()) {
            return canonical;
        }
        let method = self.tags.intern(method);
        self.provenance.insert(
            canonical.as_ref().clone(),
            Provenance::new(method, dependencies, metadata),
        );
        self.proven_order.push(Rc::clone(&canonical));
        canonical
    }

    /// Like [`KnowledgeBase::mark_proven`], but first checks that every
    /// dependency is itself already proven in this knowledge base.
    ///
    /// This is the entry point the kernel should use: a derivation whose
    /// premises are not themselves on record as proven is not a valid
    /// proof step, regardless of whether the inference rule applied to
    /// them would otherwise be sound.
    pub fn try_mark_proven(
        &mut self,
        sentence: Rc<LogicExpr>,
        method: &str,
        dependencies: Vec<Rc<LogicExpr>>,
    ) -> Result<Rc<LogicExpr>, UnprovenDependency> {
        self.try_mark_proven_with_metadata(sentence, method, dependencies, None)
    }

    /// Like [`KnowledgeBase::try_mark_proven`], but additionally records
    /// `metadata`; see [`KnowledgeBase::mark_proven_with_metadata`].
    pub fn try_mark_proven_with_metadata(
        &mut self,
        sentence: Rc<LogicExpr>,
        method: &str,
        dependencies: Vec<Rc<LogicExpr>>,
        metadata: Option<BTreeMap<String, String>>,
    ) -> Result<Rc<LogicExpr>, UnprovenDependency> {
        for dep in &dependencies {
            if !self.is_proven(dep) {
                return Err(UnprovenDependency {
                    dependency: dep.as_ref().clone(),
                });
            }
        }
        Ok(self.mark_proven_with_metadata(sentence, method, dependencies, metadata))
    }

    /// Iterates over every proven sentence's canonical handle, in the
    /// order it was first marked proven.
    pub fn proven_sentences(&self) -> impl Iterator<Item = &Rc<LogicExpr>> {
        self.proven_order.iter()
    }

    /// A snapshot of every proven sentence's canonical handle, in proof
    /// order. Callers that mutate the knowledge base (via the kernel)
    /// while scanning the proven set should iterate a snapshot rather than
    /// [`KnowledgeBase::proven_sentences`] directly.
    pub fn proven_snapshot(&self) -> Vec<Rc<LogicExpr>> {
        self.proven_order.clone()
    }

    /// Number of sentences interned so far (proven or not).
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// `true` if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Number of sentences proven so far.
    pub fn proven_len(&self) -> usize {
        self.provenance.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fol_term::NumericExpr;

    fn zero_eq_zero() -> Rc<LogicExpr> {
        let zero = Rc::new(NumericExpr::Zero);
        LogicExpr::equals(&zero, &zero)
    }

    #[test]
    fn interning_the_same_sentence_twice_yields_pointer_equal_terms() {
        let mut kb = KnowledgeBase::new();
        let a = kb.intern(zero_eq_zero());
        let b = kb.intern(zero_eq_zero());
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn mark_proven_is_idempotent_under_first_proof_wins() {
        let mut kb = KnowledgeBase::new();
        let sentence = zero_eq_zero();
        kb.mark_proven(Rc::clone(&sentence), "Logic Axiom", Vec::new());
        kb.mark_proven(Rc::clone(&sentence), "Modus Ponens", Vec::new());
        let method = kb.get_provenance(&sentence).unwrap().method();
        assert_eq!(kb.method_name(method), "Logic Axiom");
    }

    #[test]
    fn try_mark_proven_rejects_an_unproven_dependency() {
        let mut kb = KnowledgeBase::new();
        let premise = zero_eq_zero();
        let conclusion = LogicExpr::not(&premise);
        let result = kb.try_mark_proven(conclusion, "Modus Ponens", vec![premise]);
        assert!(result.is_err());
    }

    #[test]
    fn try_mark_proven_accepts_an_already_proven_dependency() {
        let mut kb = KnowledgeBase::new();
        let premise = zero_eq_zero();
        kb.mark_proven(Rc::clone(&premise), "Logic Axiom", Vec::new());
        let conclusion = LogicExpr::not(&premise);
        let result = kb.try_mark_proven(conclusion, "Modus Ponens", vec![Rc::clone(&premise)]);
        assert!(result.is_ok());
        assert!(kb.is_proven(&LogicExpr::not(&premise)));
    }

    #[test]
    fn is_proven_is_false_before_mark_proven() {
        let kb = KnowledgeBase::new();
        assert!(!kb.is_proven(&zero_eq_zero()));
    }

    #[test]
    fn mark_proven_with_metadata_attaches_the_metadata() {
        let mut kb = KnowledgeBase::new();
        let sentence = zero_eq_zero();
        let mut metadata = BTreeMap::new();
        metadata.insert("var".to_string(), "x".to_string());

        let sentence = kb.mark_proven_with_metadata(sentence, "Induction Schema", Vec::new(), Some(metadata));

        let provenance = kb.get_provenance(&sentence).unwrap();
        assert_eq!(provenance.metadata().unwrap().get("var").map(String::as_str), Some("x"));
    }

    #[test]
    fn mark_proven_leaves_metadata_absent() {
        let mut kb = KnowledgeBase::new();
        let sentence = kb.mark_proven(zero_eq_zero(), "Logic Axiom", Vec::new());

        let provenance = kb.get_provenance(&sentence).unwrap();
        assert!(provenance.metadata().is_none());
    }
}
