//! SimpleLexer：按字符类别切分输入
//!
//! 不是语法驱动的 lexer，只识别几类固定的词素：
//! 标识符、整数、标点，以及放在 hidden channel 上的空白、换行和 `//` 行注释。
//! 输入结束时产生一个 EOF token，之后迭代结束。
//!
//! # 示例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokrt_core::{InputStream, SimpleLexer};
//!
//! let lexer = SimpleLexer::new(Arc::new(InputStream::new("var x = 1;")));
//! for token in lexer {
//!     println!("{token}");
//! }
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use super::cursor::LexerCursor;
use crate::stream::{CharStream, InputStream, SourcePosition};
use crate::token::{
    CommonToken, CommonTokenFactory, SourcePair, TokenFactory, TokenSource,
    TOKEN_DEFAULT_CHANNEL, TOKEN_EOF, TOKEN_HIDDEN_CHANNEL,
};
use tokrt_config::{Config, LexerConfig};

/// SimpleLexer 产生的 token 类型
pub mod token_types {
    pub const IDENTIFIER: i32 = 1;
    pub const NUMBER: i32 = 2;
    pub const PUNCTUATION: i32 = 3;
    pub const WHITESPACE: i32 = 4;
    pub const NEWLINE: i32 = 5;
    pub const COMMENT: i32 = 6;

    /// 是否属于 hidden channel 上的琐碎 token
    pub fn is_trivia(token_type: i32) -> bool {
        matches!(token_type, WHITESPACE | NEWLINE | COMMENT)
    }
}

use token_types::*;

/// 参考 lexer
pub struct SimpleLexer {
    input: Arc<InputStream>,
    cursor: Arc<LexerCursor>,
    source: Arc<SourcePair>,
    factory: CommonTokenFactory,
    config: LexerConfig,
    position: SourcePosition,
    eof_emitted: bool,
}

impl SimpleLexer {
    /// 使用默认配置创建
    pub fn new(input: Arc<InputStream>) -> Self {
        Self::with_config(input, &Config::default())
    }

    /// 使用显式配置创建
    pub fn with_config(input: Arc<InputStream>, config: &Config) -> Self {
        let cursor = Arc::new(LexerCursor::new(input.source_name()));
        let token_source: Arc<dyn TokenSource> = cursor.clone();
        let char_stream: Arc<dyn CharStream> = input.clone();
        trace!(
            target: "tokrt::lexer",
            name = input.source_name(),
            size = input.size(),
            copy_text = config.token.copy_text,
            skip_trivia = config.lexer.skip_trivia,
            "Creating new SimpleLexer"
        );
        Self {
            input,
            cursor,
            source: SourcePair::new(Some(token_source), Some(char_stream)),
            factory: CommonTokenFactory::from_config(&config.token),
            config: config.lexer.clone(),
            position: SourcePosition::start(),
            eof_emitted: false,
        }
    }

    /// 本次运行所有 token 共享的来源二元组
    pub fn source(&self) -> &Arc<SourcePair> {
        &self.source
    }

    /// 当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 获取下一个 token，EOF token 之后返回 `None`
    pub fn next_token(&mut self) -> Option<CommonToken> {
        loop {
            let Some(c) = self.input.char_at(self.position.offset) else {
                return self.emit_eof();
            };

            let (token_type, len) = self.scan_lexeme(c);
            if is_trivia(token_type) && self.config.skip_trivia {
                trace!(target: "tokrt::lexer", token_type, len, "Skipping trivia");
                self.advance(len);
                continue;
            }

            let channel = if is_trivia(token_type) {
                TOKEN_HIDDEN_CHANNEL
            } else {
                TOKEN_DEFAULT_CHANNEL
            };
            let start = self.position.offset;
            let stop = start + len - 1;

            // 游标仍停在词素首字符上，token 记录的就是首字符的行列号
            self.cursor.sync(self.position);
            let token =
                self.factory
                    .create(&self.source, token_type, None, channel, Some(start), Some(stop));
            debug!(
                target: "tokrt::lexer",
                token_type,
                channel,
                start,
                stop,
                line = self.position.line,
                column = self.position.column,
                "Produced token"
            );

            self.advance(len);
            return Some(token);
        }
    }

    /// 识别从当前位置开始的词素，返回 (类型, 码点长度)
    fn scan_lexeme(&self, c: char) -> (i32, usize) {
        let next = self.input.char_at(self.position.offset + 1);
        match c {
            '\n' => (NEWLINE, 1),
            '\r' if next == Some('\n') => (NEWLINE, 2),
            '\r' => (NEWLINE, 1),
            c if c.is_whitespace() => (
                WHITESPACE,
                self.run_length(|c| c.is_whitespace() && c != '\n' && c != '\r'),
            ),
            '/' if next == Some('/') => (COMMENT, self.run_length(|c| c != '\n' && c != '\r')),
            c if c.is_alphabetic() || c == '_' => (
                IDENTIFIER,
                self.run_length(|c| c.is_alphanumeric() || c == '_'),
            ),
            c if c.is_ascii_digit() => (NUMBER, self.run_length(|c| c.is_ascii_digit())),
            _ => (PUNCTUATION, 1),
        }
    }

    fn run_length(&self, accept: impl Fn(char) -> bool) -> usize {
        let mut len = 0;
        while let Some(c) = self.input.char_at(self.position.offset + len) {
            if !accept(c) {
                break;
            }
            len += 1;
        }
        len
    }

    fn advance(&mut self, len: usize) {
        for _ in 0..len {
            match self.input.char_at(self.position.offset) {
                Some(c) => self.position.advance(c),
                None => break,
            }
        }
    }

    fn emit_eof(&mut self) -> Option<CommonToken> {
        if self.eof_emitted {
            return None;
        }
        self.eof_emitted = true;

        let size = self.input.size();
        self.cursor.sync(self.position);
        trace!(target: "tokrt::lexer", size, "Reached EOF");
        Some(self.factory.create(
            &self.source,
            TOKEN_EOF,
            None,
            TOKEN_DEFAULT_CHANNEL,
            Some(size),
            size.checked_sub(1),
        ))
    }
}

impl Iterator for SimpleLexer {
    type Item = CommonToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
