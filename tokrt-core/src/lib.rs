//! Tokrt Core - token value type for a parsing runtime (file loading limited to `InputStream::from_path`)
//!
//! A token is the unit of lexical output a lexer hands to a parser. It
//! carries its provenance (the shared source pair of lexer and input
//! stream), its classification (type, channel), its position (line,
//! column, stream index) and its text, which is derived from the input
//! stream only when asked for.
//!
//! ```text
//! src/
//! ├── stream/  - CharStream contract, in-memory InputStream, positions
//! ├── token/   - Token contract, CommonToken, factory, serde record
//! └── lexer/   - shareable position cursor and a small reference lexer
//! ```
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

// Re-export common types
pub use error::TokenError;
pub use lexer::{LexerCursor, SimpleLexer};
pub use stream::{CharStream, InputStream, SourcePosition, StreamError};
pub use token::{
    CommonToken, CommonTokenFactory, SourcePair, Token, TokenFactory, TokenRecord, TokenSource,
};
pub use token::{
    TOKEN_DEFAULT_CHANNEL, TOKEN_EOF, TOKEN_EPSILON, TOKEN_HIDDEN_CHANNEL, TOKEN_INVALID_TYPE,
    TOKEN_MIN_USER_TOKEN_TYPE,
};

// Re-export config types from tokrt-config
pub use tokrt_config::{Config, LexerConfig, Phase, TokenConfig};
