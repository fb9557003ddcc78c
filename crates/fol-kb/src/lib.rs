//! # fol-kb
//!
//! The knowledge base: hash-cons canonicalization of sentences, the set of
//! sentences proven so far with their [`Provenance`], and JSON persistence.
//!
//! This is the one piece of mutable, shared state the rest of the system
//! turns around: the matcher and search driver only ever ask it "have I
//! seen this sentence, and is it proven," and the kernel is the only thing
//! permitted to add to it.

mod error;
mod kb;
mod persist;
mod provenance;

pub use error::{PersistError, UnprovenDependency};
pub use kb::KnowledgeBase;
pub use persist::MIGRATED_TAG;
pub use provenance::{DisplayProvenance, Provenance};
