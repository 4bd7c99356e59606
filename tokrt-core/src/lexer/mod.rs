//! 参考 token source
//!
//! - [`LexerCursor`]：可共享的位置计数器，实现 [`TokenSource`](crate::token::TokenSource)
//! - [`SimpleLexer`]：按字符类别切分输入的小型 lexer，用于 CLI 与测试

pub mod cursor;
pub mod simple;

pub use cursor::LexerCursor;
pub use simple::{token_types, SimpleLexer};
