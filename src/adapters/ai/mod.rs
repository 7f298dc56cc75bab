//! Language-service adapters. Implement LanguageServicePort.
//!
//! Provides the Gemini REST adapter and a mock adapter for offline use and tests.

pub mod gemini_adapter;
pub mod mock_adapter;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockLanguageAdapter;
