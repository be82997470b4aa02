//! Reads the inputs of an index build from disk: a manifest listing document
//! files, the documents themselves, and a noise-word list.

use crate::document::split_tokens;
use crate::error::IndexError;
use crate::index::{build_index, GlobalIndex};
use crate::tokenizer::NoiseWords;
use crate::DocId;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest location; relative document names resolve against its directory.
pub struct CorpusPaths {
    pub manifest: PathBuf,
    pub root: PathBuf,
}

impl CorpusPaths {
    pub fn new<P: AsRef<Path>>(manifest: P) -> Self {
        let manifest = manifest.as_ref().to_path_buf();
        let root = manifest.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { manifest, root }
    }

    pub fn resolve(&self, name: &str) -> PathBuf { self.root.join(name) }
}

/// Whitespace-delimited noise words, lower-cased.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords, IndexError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| IndexError::NoiseWords { path: path.to_path_buf(), source })?;
    Ok(text.split_whitespace().collect())
}

/// Document names in manifest order.
pub fn load_manifest(paths: &CorpusPaths) -> Result<Vec<DocId>, IndexError> {
    let text = fs::read_to_string(&paths.manifest)
        .map_err(|source| IndexError::Manifest { path: paths.manifest.clone(), source })?;
    Ok(split_tokens(&text))
}

/// Read one document into raw tokens. The name is kept as the document id.
pub fn read_document(paths: &CorpusPaths, name: &str) -> Result<(DocId, Vec<String>), IndexError> {
    let path = paths.resolve(name);
    let text = fs::read_to_string(&path)
        .map_err(|source| IndexError::MissingDocument { path, source })?;
    Ok((name.to_string(), split_tokens(&text)))
}

/// Build the index for every document in the manifest.
///
/// Documents are read one at a time; a missing document fails the build.
pub fn make_index<P, Q>(manifest: P, noise_words: Q) -> Result<GlobalIndex, IndexError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let noise = load_noise_words(noise_words)?;
    let paths = CorpusPaths::new(manifest);
    let names = load_manifest(&paths)?;
    tracing::info!(manifest = %paths.manifest.display(), docs = names.len(), noise_words = noise.len(), "indexing corpus");
    build_index(names.iter().map(|name| read_document(&paths, name)), noise)
}
