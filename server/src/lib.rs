use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use regex::{Regex, RegexBuilder};
use search_core::loader::{make_index, CorpusPaths};
use search_core::tokenizer::normalize;
use search_core::{GlobalIndex, Occurrence};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub document: String,
    pub snippet: Option<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<GlobalIndex>,
    /// Directory that document names resolve against, for snippets.
    pub corpus_root: PathBuf,
}

pub fn build_app(docs: PathBuf, noise_words: PathBuf) -> Result<Router> {
    // Index is built once at startup and never mutated afterwards
    let index = make_index(&docs, &noise_words)?;
    let corpus_root = CorpusPaths::new(&docs).root;
    Ok(router(AppState { index: Arc::new(index), corpus_root }))
}

pub fn router(app_state: AppState) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let docs = state.index.top5(&params.kw1, &params.kw2).unwrap_or_default();

    let keywords: Vec<String> = [&params.kw1, &params.kw2]
        .into_iter()
        .filter_map(|raw| normalize(raw, state.index.noise_words()))
        .collect();
    let pattern = keyword_pattern(&keywords);

    let results: Vec<SearchHit> = docs
        .into_iter()
        .map(|document| {
            let snippet = pattern
                .as_ref()
                .and_then(|re| snippet_from_file(&state.corpus_root.join(&document), re));
            SearchHit { document, snippet }
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::debug!(kw1 = %params.kw1, kw2 = %params.kw2, hits = results.len(), "search");
    Json(SearchResponse { kw1: params.kw1, kw2: params.kw2, took_s: elapsed.as_secs_f64(), total_hits: results.len(), results })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<KeywordResponse>, (StatusCode, String)> {
    let keyword = normalize(&raw, state.index.noise_words())
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("{raw} is not a keyword")))?;
    let occurrences = state.index.occurrences(&keyword).to_vec();
    if occurrences.is_empty() {
        return Err((StatusCode::NOT_FOUND, format!("{keyword} is not indexed")));
    }
    Ok(Json(KeywordResponse { keyword, occurrences }))
}

/// Case-insensitive whole-word match on any of the keywords.
fn keyword_pattern(keywords: &[String]) -> Option<Regex> {
    if keywords.is_empty() { return None; }
    let alternation = keywords.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
    RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
        .ok()
}

fn snippet_from_file(path: &std::path::Path, pattern: &Regex) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;
    if text.is_empty() { return None; }
    let snippet = match pattern.find(&text) {
        Some(m) => {
            let start = floor_char_boundary(&text, m.start().saturating_sub(100));
            let end = floor_char_boundary(&text, (m.start() + 200).min(text.len()));
            &text[start..end]
        }
        None => &text[..floor_char_boundary(&text, 200.min(text.len()))],
    };
    Some(highlight_terms(snippet, pattern))
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) { idx -= 1; }
    idx
}

fn highlight_terms(snippet: &str, pattern: &Regex) -> String {
    pattern.replace_all(snippet, |caps: &regex::Captures| format!("<em>{}</em>", &caps[0])).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_whole_words_only() {
        let re = keyword_pattern(&["cat".to_string()]).unwrap();
        assert_eq!(highlight_terms("Cat, cats and a cat.", &re), "<em>Cat</em>, cats and a <em>cat</em>.");
    }

    #[test]
    fn no_pattern_without_keywords() {
        assert!(keyword_pattern(&[]).is_none());
    }

    #[test]
    fn char_boundary_steps_back() {
        let text = "aé";
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
    }
}
