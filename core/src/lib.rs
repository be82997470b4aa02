use serde::{Deserialize, Serialize};

pub mod document;
pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod tokenizer;

pub use error::IndexError;
pub use index::{build_index, insert_last_occurrence, GlobalIndex, InsertionTrace};
pub use tokenizer::NoiseWords;

/// Document name as handed in by the loader, e.g. the entry in the docs manifest.
pub type DocId = String;

/// How many times one keyword occurs in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: DocId,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<DocId>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}
