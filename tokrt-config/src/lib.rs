//! Tokrt Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Tokrt crates.

use serde::Deserialize;

/// Top-level configuration, as read from a `tokrt.json` file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token construction
    pub token: TokenConfig,
    /// Reference lexer behavior
    pub lexer: LexerConfig,
}

/// Configuration for token construction
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Copy the span text into each token at creation time instead of
    /// deriving it from the input stream on demand
    pub copy_text: bool,
}

/// Configuration for the reference lexer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Drop whitespace, newlines and comments instead of emitting them on
    /// the hidden channel
    pub skip_trivia: bool,
}

/// Processing phase enum for phase-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Stream,
    Lexer,
    Token,
}

impl Phase {
    /// All phases, in pipeline order
    pub const ALL: [Phase; 3] = [Phase::Stream, Phase::Lexer, Phase::Token];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stream => "stream",
            Phase::Lexer => "lexer",
            Phase::Token => "token",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("tokrt::{}", self.as_str())
    }
}
