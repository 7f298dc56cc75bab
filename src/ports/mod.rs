//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;
pub mod render;
pub mod speech;

pub use inbound::InputPort;
pub use outbound::{KeyValueStorePort, LanguageServicePort};
pub use render::RenderSurface;
pub use speech::SpeechPort;
