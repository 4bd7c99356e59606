//! 测试辅助工具
//!
//! 提供固定位置的 token source 和快速构造来源二元组的函数

#![allow(dead_code)]

use std::sync::Arc;

use tokrt_core::{CharStream, CommonToken, InputStream, SimpleLexer, SourcePair, TokenSource};

/// 始终报告同一位置的 token source
#[derive(Debug)]
pub struct FixedSource {
    pub line: usize,
    pub column: usize,
}

impl TokenSource for FixedSource {
    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }

    fn source_name(&self) -> &str {
        "fixed"
    }
}

/// 在 `text` 上构造来源二元组，lexer 位置固定为 `line:column`
pub fn source_at(text: &str, line: usize, column: usize) -> Arc<SourcePair> {
    let lexer: Arc<dyn TokenSource> = Arc::new(FixedSource { line, column });
    let input: Arc<dyn CharStream> = Arc::new(InputStream::new(text));
    SourcePair::new(Some(lexer), Some(input))
}

/// 词法分析整段输入，并像缓冲流一样按顺序赋值 token index
pub fn lex_indexed(text: &str) -> Vec<CommonToken> {
    SimpleLexer::new(Arc::new(InputStream::new(text)))
        .enumerate()
        .map(|(index, mut token)| {
            token.set_token_index(index).unwrap();
            token
        })
        .collect()
}
