//! Response validator/normalizer. Turns a raw service reply into a fixed-shape
//! `DictionaryEntry`, dispatching on the same `LookupMode` the request was built with.
//!
//! No retry and no repair: defaults are applied only where documented below.

use crate::domain::{
    Citation, DictionaryEntry, LookupMode, ParseError, RawReply, Source, WordQuery,
};
use serde::Deserialize;
use std::collections::HashSet;

/// Structured reply shape. Only `definition` is mandatory; `null` is treated as absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredReply {
    definition: String,
    #[serde(default)]
    compliment: Option<String>,
    #[serde(default)]
    pronunciation: Option<String>,
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    synonyms: Option<Vec<String>>,
    #[serde(default)]
    antonyms: Option<Vec<String>>,
    #[serde(default)]
    etymology: Option<String>,
    #[serde(default)]
    example_sentences: Option<Vec<String>>,
}

/// Validate `raw` for `query`. The entry's `word` is always the query's original-case text.
pub fn normalize(
    raw: &RawReply,
    query: &WordQuery,
    mode: LookupMode,
) -> Result<DictionaryEntry, ParseError> {
    let sources = dedup_sources(&raw.citations);
    match mode {
        LookupMode::Grounded => Ok(DictionaryEntry {
            word: query.text().to_string(),
            definition: raw.text.clone(),
            sources,
            ..Default::default()
        }),
        LookupMode::Structured => {
            let value: serde_json::Value = serde_json::from_str(&raw.text)
                .map_err(|e| ParseError::Malformed(e.to_string()))?;
            if !value.is_object() {
                return Err(ParseError::Malformed("reply is not a JSON object".into()));
            }
            let reply: StructuredReply = serde_json::from_value(value)
                .map_err(|e| ParseError::Malformed(e.to_string()))?;
            Ok(DictionaryEntry {
                word: query.text().to_string(),
                compliment: reply.compliment,
                pronunciation: reply.pronunciation,
                part_of_speech: reply.part_of_speech,
                definition: reply.definition,
                synonyms: reply.synonyms.unwrap_or_default(),
                antonyms: reply.antonyms.unwrap_or_default(),
                etymology: reply.etymology,
                example_sentences: reply.example_sentences.unwrap_or_default(),
                sources,
            })
        }
    }
}

/// Keep citations that carry a URI, first occurrence wins.
fn dedup_sources(citations: &[Citation]) -> Vec<Source> {
    let mut seen = HashSet::new();
    citations
        .iter()
        .filter_map(|c| {
            let uri = c.uri.as_ref()?;
            seen.insert(uri.clone()).then(|| Source {
                uri: uri.clone(),
                title: c.title.clone(),
            })
        })
        .collect()
}
