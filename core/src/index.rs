use crate::document::{index_document, DocumentKeywords};
use crate::error::IndexError;
use crate::tokenizer::NoiseWords;
use crate::{DocId, Occurrence};
use serde::Serialize;
use std::collections::BTreeMap;

/// Midpoints probed while placing the last occurrence of a list, and where it landed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertionTrace {
    pub midpoints: Vec<usize>,
    pub position: usize,
}

/// Move the last element of `occs` to its place in descending frequency order.
///
/// `occs[..n-1]` must already be sorted by descending frequency. The new
/// element goes after every element with an equal frequency, so documents
/// merged earlier stay ahead on ties. Lists shorter than two are left alone
/// and yield an empty trace.
pub fn insert_last_occurrence(occs: &mut [Occurrence]) -> InsertionTrace {
    let n = occs.len();
    if n < 2 {
        return InsertionTrace { midpoints: Vec::new(), position: n.saturating_sub(1) };
    }
    let target = occs[n - 1].frequency;

    let mut midpoints = Vec::new();
    let mut left: isize = 0;
    let mut right: isize = n as isize - 2;
    // Truncating division: an empty range with right == -1 resolves to 0.
    let mut mid = (left + right) / 2;
    while left < right {
        midpoints.push(mid as usize);
        if occs[mid as usize].frequency >= target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
        mid = (left + right) / 2;
    }

    // The search leaves `mid` on the last candidate; one comparison decides the side.
    let mid = mid as usize;
    let position = if occs[mid].frequency >= target { mid + 1 } else { mid };
    occs[position..].rotate_right(1);
    InsertionTrace { midpoints, position }
}

/// Keyword -> occurrences across all indexed documents, by descending frequency.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalIndex {
    keywords: BTreeMap<String, Vec<Occurrence>>,
    #[serde(skip)]
    noise_words: NoiseWords,
    num_docs: usize,
}

impl GlobalIndex {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self { keywords: BTreeMap::new(), noise_words, num_docs: 0 }
    }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise_words }

    /// Scan a document and merge its keywords in.
    pub fn add_document<I, S>(&mut self, id: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kws = index_document(id, tokens, &self.noise_words);
        tracing::debug!(document = id, keywords = kws.len(), "loaded keywords");
        self.merge(kws);
        self.num_docs += 1;
    }

    /// Fold one document's keyword table into the index.
    pub fn merge(&mut self, kws: DocumentKeywords) {
        for (keyword, occ) in kws {
            match self.keywords.get_mut(&keyword) {
                Some(occs) => {
                    occs.push(occ);
                    let trace = insert_last_occurrence(occs);
                    tracing::trace!(%keyword, ?trace.midpoints, position = trace.position, "inserted occurrence");
                }
                None => {
                    self.keywords.insert(keyword, vec![occ]);
                }
            }
        }
    }

    /// Occurrences of an already-normalized keyword; empty when unknown.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    /// Number of documents scanned through [`GlobalIndex::add_document`].
    pub fn document_count(&self) -> usize { self.num_docs }
}

/// Index every document in order. The first read failure aborts the build.
pub fn build_index<I>(documents: I, noise_words: NoiseWords) -> Result<GlobalIndex, IndexError>
where
    I: IntoIterator<Item = Result<(DocId, Vec<String>), IndexError>>,
{
    let mut index = GlobalIndex::new(noise_words);
    for doc in documents {
        let (id, tokens) = doc?;
        index.add_document(&id, tokens);
    }
    tracing::info!(num_docs = index.document_count(), num_keywords = index.len(), "index built");
    Ok(index)
}
