//! Error types for the knowledge base. No `thiserror`/`anyhow`: plain enums
//! with a hand-written `Display` and `std::error::Error` impl, matching the
//! rest of this workspace.

use std::fmt;

use fol_term::LogicExpr;

/// A sentence was offered to [`crate::KnowledgeBase::try_mark_proven`] with
/// a dependency that is not itself proven in this knowledge base.
#[derive(Debug)]
pub struct UnprovenDependency {
    pub dependency: LogicExpr,
}

impl fmt::Display for UnprovenDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot prove a sentence that depends on an unproven sentence: {}",
            self.dependency
        )
    }
}

impl std::error::Error for UnprovenDependency {}

/// Errors arising from loading or saving a knowledge base.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "I/O error: {e}"),
            PersistError::Json(e) => write!(f, "malformed knowledge base file: {e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Io(e) => Some(e),
            PersistError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        PersistError::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        PersistError::Json(e)
    }
}
