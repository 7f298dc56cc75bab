//! Query builder. Turns a validated word into the outbound request for the
//! configured lookup mode. Pure construction, no I/O.

use crate::domain::{LookupMode, OutboundRequest, WordQuery};
use serde_json::{Value, json};

/// Fields the structured reply must carry. Mirrors `DictionaryEntry` (camelCase).
pub const REQUIRED_FIELDS: &[&str] = &[
    "compliment",
    "pronunciation",
    "partOfSpeech",
    "definition",
    "synonyms",
    "antonyms",
    "etymology",
    "exampleSentences",
];

/// Build the request for `query` in `mode`.
pub fn build(query: &WordQuery, mode: LookupMode) -> OutboundRequest {
    OutboundRequest {
        mode,
        word: query.text().to_string(),
        prompt: prompt(query.text(), mode),
        response_schema: match mode {
            LookupMode::Grounded => None,
            LookupMode::Structured => Some(entry_schema()),
        },
        use_search_grounding: mode == LookupMode::Grounded,
    }
}

fn sections(mode: LookupMode) -> &'static [&'static str] {
    match mode {
        LookupMode::Grounded => &[
            "Pronunciation (IPA)",
            "Part of speech",
            "Definition",
            "Etymology",
            "Example sentences (at least two)",
        ],
        LookupMode::Structured => &[
            "Compliment: one short, warm sentence praising the choice of word",
            "Pronunciation (IPA)",
            "Part of speech",
            "Definition",
            "Synonyms (empty list if none)",
            "Antonyms (empty list if none)",
            "Etymology",
            "Example sentences (at least two)",
        ],
    }
}

fn prompt(word: &str, mode: LookupMode) -> String {
    let mut p = format!(
        "You are a concise, accurate dictionary. Provide a dictionary entry for the word \"{}\".\n\n\
         Include the following sections:\n",
        word
    );
    for (i, s) in sections(mode).iter().enumerate() {
        p.push_str(&format!("{}. {}\n", i + 1, s));
    }
    match mode {
        LookupMode::Grounded => p.push_str(
            "\nUse a bold heading (**Section**) for each section. \
             Use web search to confirm the meaning and cite reputable dictionaries.",
        ),
        LookupMode::Structured => {
            p.push_str("\nRespond with JSON only, matching the provided schema.")
        }
    }
    p
}

/// Response schema in the service's OpenAPI subset.
fn entry_schema() -> Value {
    let string = json!({ "type": "STRING" });
    let list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "compliment": string.clone(),
            "pronunciation": string.clone(),
            "partOfSpeech": string.clone(),
            "definition": string.clone(),
            "synonyms": list.clone(),
            "antonyms": list.clone(),
            "etymology": string,
            "exampleSentences": list,
        },
        "required": REQUIRED_FIELDS,
        "propertyOrdering": REQUIRED_FIELDS,
    })
}
