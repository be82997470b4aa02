use crate::tokenizer::{normalize, NoiseWords};
use crate::{DocId, Occurrence};
use std::collections::BTreeMap;

/// Keyword occurrences found in a single document.
pub type DocumentKeywords = BTreeMap<String, Occurrence>;

/// Split document text into raw whitespace-delimited tokens.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Scan one document's raw tokens and count each keyword's frequency in it.
pub fn index_document<I, S>(id: &str, tokens: I, noise: &NoiseWords) -> DocumentKeywords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords = DocumentKeywords::new();
    for raw in tokens {
        let Some(keyword) = normalize(raw.as_ref(), noise) else { continue };
        keywords
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(DocId::from(id), 1));
    }
    keywords
}
