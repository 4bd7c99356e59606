//! Lexer 位置游标
//!
//! lexer 持续推进游标，token 在构造时读取一次。游标放在 `Arc` 里
//! 由 lexer 与它产生的所有 token 共享，所以用原子量保存位置。

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::stream::SourcePosition;
use crate::token::TokenSource;

/// 共享的 lexer 位置
#[derive(Debug)]
pub struct LexerCursor {
    name: String,
    line: AtomicUsize,
    column: AtomicUsize,
}

impl LexerCursor {
    /// 创建位于输入起点（1:0）的游标
    pub fn new(name: impl Into<String>) -> Self {
        let start = SourcePosition::start();
        Self {
            name: name.into(),
            line: AtomicUsize::new(start.line),
            column: AtomicUsize::new(start.column),
        }
    }

    /// 发布新位置
    pub fn sync(&self, position: SourcePosition) {
        self.line.store(position.line, Ordering::Relaxed);
        self.column.store(position.column, Ordering::Relaxed);
    }
}

impl TokenSource for LexerCursor {
    fn line(&self) -> usize {
        self.line.load(Ordering::Relaxed)
    }

    fn column(&self) -> usize {
        self.column.load(Ordering::Relaxed)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
