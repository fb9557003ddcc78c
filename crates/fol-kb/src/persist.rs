//! JSON persistence, with migration from a pre-provenance legacy format.
//!
//! Persisted format is opaque to the rest of the system: only
//! [`KnowledgeBase::save`]/[`KnowledgeBase::load`] need to understand it.
//! JSON was chosen over a binary format for on-disk debuggability, at the
//! cost of a slightly larger file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fol_term::LogicExpr;
use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::kb::KnowledgeBase;

/// A single proven sentence as written to disk: the sentence itself, its
/// method tag resolved to a plain string (symbol indices are an in-memory
/// optimization, not a stable on-disk identifier), its dependencies, and
/// any auxiliary metadata. `#[serde(default)]` lets files written before
/// metadata existed load with every entry's metadata coming back `None`.
#[derive(Serialize, Deserialize)]
struct SerializedEntry {
    sentence: LogicExpr,
    method: String,
    dependencies: Vec<LogicExpr>,
    #[serde(default)]
    metadata: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Deserialize)]
struct SerializedCurrent {
    entries: Vec<SerializedEntry>,
}

/// The on-disk format of a saved knowledge base.
///
/// `Legacy` is a bare JSON array of proven sentences, predating provenance
/// tracking; `Current` is an object carrying full provenance. Because the
/// two shapes (array vs. object) are distinguishable in JSON, `untagged`
/// picks the right one without a version field.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SerializedKb {
    Current(SerializedCurrent),
    Legacy(Vec<LogicExpr>),
}

/// The method tag assigned to sentences migrated from the legacy,
/// provenance-free format.
pub const MIGRATED_TAG: &str = "Legacy Axiom";

impl KnowledgeBase {
    /// Writes every proven sentence, with its provenance, to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let entries = self
            .proven_sentences()
            .map(|sentence| {
                let provenance = self.provenance.get(sentence.as_ref()).expect(
                    "every sentence in proven_sentences() has a provenance entry",
                );
                SerializedEntry {
                    sentence: sentence.as_ref().clone(),
                    method: self.tags.resolve(provenance.method()).to_string(),
                    dependencies: provenance
                        .dependencies()
                        .iter()
                        .map(|d| d.as_ref().clone())
                        .collect(),
                    metadata: provenance.metadata().cloned(),
                }
            })
            .collect();
        let serialized = SerializedKb::Current(SerializedCurrent { entries });
        let json = serde_json::to_string_pretty(&serialized)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads a knowledge base previously written by [`KnowledgeBase::save`].
    ///
    /// Transparently accepts the legacy bare-array format: every sentence
    /// in it is marked proven with [`MIGRATED_TAG`] and no dependencies,
    /// and a notice is printed to stdout so the migration is not silent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let json = fs::read_to_string(path)?;
        let serialized: SerializedKb = serde_json::from_str(&json)?;
        let mut kb = KnowledgeBase::new();
        match serialized {
            SerializedKb::Current(current) => {
                for entry in current.entries {
                    let sentence = kb.intern(Rc::new(entry.sentence));
                    let dependencies = entry
                        .dependencies
                        .into_iter()
                        .map(|d| kb.intern(Rc::new(d)))
                        .collect();
                    kb.mark_proven_with_metadata(sentence, &entry.method, dependencies, entry.metadata);
                }
            }
            SerializedKb::Legacy(sentences) => {
                let count = sentences.len();
                for sentence in sentences {
                    let sentence = kb.intern(Rc::new(sentence));
                    kb.mark_proven(sentence, MIGRATED_TAG, Vec::new());
                }
                println!(
                    "note: loaded {count} sentence(s) from a legacy knowledge base \
                     file with no provenance; tagged as \"{MIGRATED_TAG}\""
                );
            }
        }
        Ok(kb)
    }
}
