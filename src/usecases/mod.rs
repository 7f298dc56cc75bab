//! Application use cases. Orchestrate domain logic via ports.

pub mod lookup_service;
pub mod query_builder;
pub mod recency_store;
pub mod render_controller;
pub mod response_normalizer;
pub mod word_of_the_day;

pub use lookup_service::{LookupOutcome, LookupService};
pub use recency_store::RecencyStore;
pub use render_controller::RenderController;
pub use word_of_the_day::WordOfTheDay;
