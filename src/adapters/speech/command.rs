//! System TTS integration. Implements SpeechPort by running a speech binary
//! (`espeak`, `say`, ...) with the text as its last argument.

use crate::domain::DomainError;
use crate::ports::SpeechPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Binaries tried, in order, when no command is configured.
const DEFAULT_COMMANDS: &[&str] = &["espeak-ng", "espeak", "say", "spd-say"];

/// Speech via an external command. Unavailable when the binary is not on PATH.
pub struct CommandSpeech {
    bin_path: Option<PathBuf>,
}

impl CommandSpeech {
    /// Use `command` if given, otherwise the first default binary found on PATH.
    pub fn new(command: Option<&str>) -> Self {
        let bin_path = match command {
            Some(c) => resolve(c),
            None => DEFAULT_COMMANDS.iter().find_map(|c| resolve(c)),
        };
        match &bin_path {
            Some(p) => info!(path = %p.display(), "speech output enabled"),
            None => info!("no speech command found, audio control hidden"),
        }
        Self { bin_path }
    }
}

/// Absolute or relative paths are taken as-is; bare names are looked up on PATH.
fn resolve(command: &str) -> Option<PathBuf> {
    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return as_path.is_file().then(|| as_path.to_path_buf());
    }
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(command))
        .find(|candidate| candidate.is_file())
}

#[async_trait]
impl SpeechPort for CommandSpeech {
    fn is_available(&self) -> bool {
        self.bin_path.is_some()
    }

    async fn speak(&self, text: &str) -> Result<(), DomainError> {
        let bin = self
            .bin_path
            .as_ref()
            .ok_or_else(|| DomainError::Speech("no speech command available".into()))?;
        debug!(bin = %bin.display(), text, "speaking");
        let status = Command::new(bin)
            .arg(text)
            .status()
            .await
            .map_err(|e| DomainError::Speech(format!("spawn {}: {}", bin.display(), e)))?;
        if !status.success() {
            return Err(DomainError::Speech(format!(
                "{} exited with {}",
                bin.display(),
                status
            )));
        }
        Ok(())
    }
}

/// Speech disabled.
pub struct NoSpeech;

#[async_trait]
impl SpeechPort for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> Result<(), DomainError> {
        Err(DomainError::Speech("speech output is disabled".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_unavailable() {
        let speech = CommandSpeech::new(Some("definitely-not-a-real-tts-binary"));
        assert!(!speech.is_available());
    }

    #[tokio::test]
    async fn test_unavailable_speak_errors() {
        let speech = CommandSpeech::new(Some("/nonexistent/dir/tts"));
        assert!(matches!(
            speech.speak("word").await,
            Err(DomainError::Speech(_))
        ));
        assert!(!NoSpeech.is_available());
        assert!(NoSpeech.speak("word").await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_speaks_with_configured_binary() {
        // `true` ignores its arguments and exits 0.
        let speech = CommandSpeech::new(Some("true"));
        if speech.is_available() {
            speech.speak("ephemeral").await.unwrap();
        }
    }
}
