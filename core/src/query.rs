use crate::index::GlobalIndex;
use crate::tokenizer::normalize;
use crate::{DocId, Occurrence};

/// Result cap for [`GlobalIndex::top5`].
pub const TOP_K: usize = 5;

impl GlobalIndex {
    /// Documents containing `kw1` or `kw2`, best first, at most five.
    ///
    /// `None` means nothing matched: both words were rejected by the
    /// tokenizer, or no indexed document contains either keyword.
    pub fn top5(&self, kw1: &str, kw2: &str) -> Option<Vec<DocId>> {
        self.top_k(kw1, kw2, TOP_K)
    }

    /// Same as [`GlobalIndex::top5`] with a caller-chosen cap.
    pub fn top_k(&self, kw1: &str, kw2: &str, k: usize) -> Option<Vec<DocId>> {
        let noise = self.noise_words();
        let first = normalize(kw1, noise).map(|kw| self.occurrences(&kw));
        let second = normalize(kw2, noise).map(|kw| self.occurrences(&kw));

        let docs = match (first, second) {
            (None, None) => return None,
            (Some(occs), None) | (None, Some(occs)) => {
                occs.iter().take(k).map(|occ| occ.document.clone()).collect()
            }
            (Some(first), Some(second)) => ranked_union(first, second, k),
        };
        if docs.is_empty() { None } else { Some(docs) }
    }
}

/// Merge two descending occurrence lists into at most `k` distinct documents.
///
/// The higher frequency wins at each step; on a tie `first` wins. A document
/// already taken from one list is skipped when it turns up in the other.
pub fn ranked_union(first: &[Occurrence], second: &[Occurrence], k: usize) -> Vec<DocId> {
    let mut result: Vec<DocId> = Vec::with_capacity(k.min(first.len() + second.len()));
    let (mut i, mut j) = (0, 0);
    while result.len() < k {
        while i < first.len() && result.contains(&first[i].document) { i += 1; }
        while j < second.len() && result.contains(&second[j].document) { j += 1; }

        let next = match (first.get(i), second.get(j)) {
            (None, None) => break,
            (Some(a), Some(b)) if b.frequency > a.frequency => { j += 1; b }
            (Some(a), _) => { i += 1; a }
            (None, Some(b)) => { j += 1; b }
        };
        result.push(next.document.clone());
    }
    result
}
