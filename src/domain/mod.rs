//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the render tree and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod view;

pub use entities::{
    Citation, DictionaryEntry, LookupMode, OutboundRequest, RawReply, RequestToken, Source,
    UiState, WordQuery,
};
pub use errors::{DomainError, FALLBACK_MESSAGE, ParseError, VALIDATION_MESSAGE};
pub use view::{DetailSection, Details, EntryView, Line, LineKind, SPEAK_LABEL, Span};
