//! CommonToken：标准 token 实现
//!
//! 只保存 span 和来源流的共享引用，文本在读取时才从流中切出。

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use super::source::{SourcePair, TokenSource};
use super::{write_token, Token, TOKEN_DEFAULT_CHANNEL, TOKEN_INVALID_TYPE};
use crate::error::TokenError;
use crate::stream::CharStream;

/// 标准 token
///
/// `Clone` 共享来源二元组和显式文本（两者都不可变）；
/// 在任一副本上调用 [`Token::set_text`] 只会替换该副本的文本。
#[derive(Debug, Clone)]
pub struct CommonToken {
    source: Arc<SourcePair>,
    token_type: i32,
    channel: i32,
    start: Option<usize>,
    stop: Option<usize>,
    token_index: Option<usize>,
    line: usize,
    column: Option<usize>,
    text: Option<Arc<str>>,
}

impl CommonToken {
    /// 创建新 token
    ///
    /// 如果来源中有 token source，读取它*当前*的行列号；
    /// 否则列号为 `None`，行号保持 0。不会访问输入流。
    pub fn new(
        source: Arc<SourcePair>,
        token_type: i32,
        channel: i32,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> Self {
        let (line, column) = match source.token_source() {
            Some(lexer) => (lexer.line(), Some(lexer.column())),
            None => (0, None),
        };
        trace!(
            target: "tokrt::token",
            token_type,
            channel,
            ?start,
            ?stop,
            line,
            ?column,
            "Created token"
        );
        Self {
            source,
            token_type,
            channel,
            start,
            stop,
            token_index: None,
            line,
            column,
            text: None,
        }
    }

    /// 创建没有来源的合成 token
    pub fn with_text(token_type: i32, text: impl Into<Arc<str>>) -> Self {
        let mut token = Self::new(
            SourcePair::empty(),
            token_type,
            TOKEN_DEFAULT_CHANNEL,
            None,
            None,
        );
        token.text = Some(text.into());
        token
    }

    /// 从任意 [`Token`] 实现复制
    ///
    /// 来源二元组按访问器重建，文本通过 [`Token::text`] 物化。
    /// 复制 `CommonToken` 时请直接使用 `clone()`，它会共享原来的二元组。
    pub fn from_token(other: &dyn Token) -> Self {
        let source = SourcePair::new(other.token_source().cloned(), other.input_stream().cloned());
        Self {
            source,
            token_type: other.token_type(),
            channel: other.channel(),
            start: other.start(),
            stop: other.stop(),
            token_index: other.token_index(),
            line: other.line(),
            column: other.column(),
            text: other.text().map(|text| Arc::from(&*text)),
        }
    }

    /// 由缓冲流赋值 token index，只能赋值一次
    pub fn set_token_index(&mut self, index: usize) -> Result<(), TokenError> {
        if let Some(current) = self.token_index {
            warn!(
                target: "tokrt::token",
                current,
                requested = index,
                "Rejected token index reassignment"
            );
            return Err(TokenError::IndexAlreadyAssigned {
                current,
                requested: index,
            });
        }
        self.token_index = Some(index);
        Ok(())
    }

    /// 来源二元组
    pub fn source(&self) -> &Arc<SourcePair> {
        &self.source
    }

    /// 两个 token 是否共享同一个来源二元组（身份而非值比较）
    pub fn shares_source(&self, other: &CommonToken) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }

    /// 是否设置了显式文本
    pub fn has_explicit_text(&self) -> bool {
        self.text.is_some()
    }
}

impl Default for CommonToken {
    fn default() -> Self {
        Self::new(
            SourcePair::empty(),
            TOKEN_INVALID_TYPE,
            TOKEN_DEFAULT_CHANNEL,
            None,
            None,
        )
    }
}

impl Token for CommonToken {
    fn text(&self) -> Option<Cow<'_, str>> {
        if let Some(text) = &self.text {
            return Some(Cow::Borrowed(&**text));
        }
        let input = self.source.input_stream()?;
        let n = input.size();
        match (self.start, self.stop) {
            (Some(start), Some(stop)) if start < n && stop < n => {
                Some(Cow::Owned(input.get_text(start, stop)))
            }
            _ => Some(Cow::Borrowed("<EOF>")),
        }
    }

    fn set_text(&mut self, text: String) {
        self.text = Some(Arc::from(text));
    }

    fn token_type(&self) -> i32 {
        self.token_type
    }

    fn channel(&self) -> i32 {
        self.channel
    }

    fn start(&self) -> Option<usize> {
        self.start
    }

    fn stop(&self) -> Option<usize> {
        self.stop
    }

    fn token_index(&self) -> Option<usize> {
        self.token_index
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> Option<usize> {
        self.column
    }

    fn token_source(&self) -> Option<&Arc<dyn TokenSource>> {
        self.source.token_source()
    }

    fn input_stream(&self) -> Option<&Arc<dyn CharStream>> {
        self.source.input_stream()
    }
}

impl fmt::Display for CommonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, self)
    }
}
