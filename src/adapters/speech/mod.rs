//! Speech output adapters. Implement SpeechPort.

pub mod command;

pub use command::{CommandSpeech, NoSpeech};
