//! Speech output port. Vocalizes a string when the host supports it.

use crate::domain::DomainError;

/// Port for optional text-to-speech.
///
/// Implemented by adapters (e.g. a system TTS command). When unavailable, the
/// render controller hides the audio control instead of failing.
#[async_trait::async_trait]
pub trait SpeechPort: Send + Sync {
    /// Whether `speak` can be expected to work on this host.
    fn is_available(&self) -> bool;

    /// Speak `text` aloud.
    ///
    /// # Errors
    /// Returns `DomainError::Speech` if the backend fails or is unavailable.
    async fn speak(&self, text: &str) -> Result<(), DomainError>;
}
