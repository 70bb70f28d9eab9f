//! Backend response normalization.
//!
//! The backend answers either with the fields at the top level or wrapped
//! in a `data` object. [`RawPayload`] resolves that once; everything past
//! it works on the inner object only.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::request::truncate_chars;
use crate::sources::format_sources;
use crate::{Message, RagError};

pub const NO_ANSWER: &str = "_No answer_";
pub const STUDIO_HITS_KEY: &str = "retrievalResults_studio";
pub const USER_HITS_KEY: &str = "retrievalResults_user";
pub const GENERIC_HITS_KEY: &str = "retrievalResults";

/// Characters of a non-JSON body quoted back to the user.
pub const MALFORMED_EXCERPT_CHARS: usize = 1500;

/// The two shapes a backend JSON object can take.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// `{"answer": ..., "retrievalResults": [...]}`
    Direct(Map<String, Value>),
    /// `{"data": {"answer": ..., ...}}`
    Wrapped(Map<String, Value>),
}

impl RawPayload {
    /// Classify a decoded JSON value. Anything that is not an object, or a
    /// `data` member that is not an object, is a parse error.
    pub fn from_value(value: Value) -> Result<Self, RagError> {
        let Value::Object(mut map) = value else {
            return Err(RagError::Parse("response is not a JSON object".into()));
        };
        match map.remove("data") {
            None => Ok(RawPayload::Direct(map)),
            Some(Value::Object(inner)) => Ok(RawPayload::Wrapped(inner)),
            Some(_) => Err(RagError::Parse("`data` is not a JSON object".into())),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        match self {
            RawPayload::Direct(map) | RawPayload::Wrapped(map) => map,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text payload of a retrieved snippet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// One retrieved document snippet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalHit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: HitContent,
}

impl RetrievalHit {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            metadata: Map::new(),
            content: HitContent { text: text.into() },
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

fn hit_list(data: &Map<String, Value>, key: &str) -> Vec<RetrievalHit> {
    let Some(Value::Array(items)) = data.get(key) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match RetrievalHit::deserialize(item) {
            Ok(hit) => Some(hit),
            Err(e) => {
                warn!(list = key, error = %e, "skipping malformed retrieval hit");
                None
            }
        })
        .collect()
}

/// Studio-scoped hits, then user-scoped hits, each in backend order.
///
/// Falls back to the generic list when the scoped lists yield nothing.
/// Missing or non-list fields count as empty.
pub fn merge_hits(data: &Map<String, Value>) -> Vec<RetrievalHit> {
    let mut hits = hit_list(data, STUDIO_HITS_KEY);
    hits.extend(hit_list(data, USER_HITS_KEY));
    if hits.is_empty() {
        hits = hit_list(data, GENERIC_HITS_KEY);
    }
    hits
}

/// Render a JSON scalar for display: strings verbatim, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_field(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(display_value(value)),
    }
}

/// Strongly typed view of a backend JSON body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackendResponse {
    pub answer: Option<String>,
    pub error: Option<String>,
    pub hits: Vec<RetrievalHit>,
}

impl BackendResponse {
    /// Decode and normalize a response body.
    pub fn parse(body: &str) -> Result<Self, RagError> {
        let value: Value = serde_json::from_str(body)?;
        let data = RawPayload::from_value(value)?.into_inner();
        Ok(Self {
            answer: text_field(&data, "answer"),
            error: text_field(&data, "error"),
            hits: merge_hits(&data),
        })
    }
}

/// What one request/response cycle produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Answer {
        answer: String,
        hits: Vec<RetrievalHit>,
    },
    BackendError {
        status: u16,
        error: String,
    },
    Malformed {
        excerpt: String,
    },
}

impl Reply {
    /// Interpret a raw HTTP reply.
    pub fn interpret(status: u16, body: &str) -> Self {
        if status == 200 {
            match BackendResponse::parse(body) {
                Ok(resp) => Reply::Answer {
                    answer: resp.answer.unwrap_or_else(|| NO_ANSWER.to_string()),
                    hits: resp.hits,
                },
                Err(e) => {
                    warn!(error = %e, "backend returned an unreadable body");
                    Reply::Malformed {
                        excerpt: truncate_chars(body, MALFORMED_EXCERPT_CHARS),
                    }
                }
            }
        } else {
            let error = BackendResponse::parse(body)
                .ok()
                .and_then(|resp| resp.error)
                .unwrap_or_else(|| body.to_string());
            Reply::BackendError { status, error }
        }
    }

    /// Text of the assistant turn for this reply.
    pub fn content(&self) -> String {
        match self {
            Reply::Answer { answer, .. } => answer.clone(),
            Reply::BackendError { status, error } => format!("Error {status}: {error}"),
            Reply::Malformed { excerpt } => format!("Non-JSON body:\n\n```\n{excerpt}\n```"),
        }
    }

    /// The assistant message to append. Only answers with hits carry sources.
    pub fn into_message(self) -> Message {
        let content = self.content();
        let sources = match &self {
            Reply::Answer { hits, .. } if !hits.is_empty() => Some(format_sources(hits)),
            _ => None,
        };
        Message::assistant(content, sources)
    }
}
