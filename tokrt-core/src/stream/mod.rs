//! 字符流抽象
//!
//! Token 只通过 [`CharStream`] 的两个操作读取输入：`size` 与
//! `get_text(start, stop)`。[`InputStream`] 是内存中的参考实现。

pub mod input;
pub mod position;

pub use input::{CharStream, InputStream, StreamError};
pub use position::SourcePosition;
