//! Token 工厂
//!
//! lexer 通过工厂创建 token，默认工厂保持文本惰性提取；
//! 开启 `copy_text` 后在创建时就把 span 文本复制进 token。

use std::borrow::Cow;
use std::sync::Arc;

use tokrt_config::TokenConfig;

use super::common::CommonToken;
use super::source::SourcePair;
use super::Token;

/// 创建 token 的统一接口
pub trait TokenFactory {
    /// 为 `[start, stop]` span 创建 token
    ///
    /// `text` 为 `Some` 时作为显式文本。
    fn create(
        &self,
        source: &Arc<SourcePair>,
        token_type: i32,
        text: Option<&str>,
        channel: i32,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> CommonToken;

    /// 创建没有来源的合成 token
    fn create_with_text(&self, token_type: i32, text: &str) -> CommonToken;
}

/// [`CommonToken`] 工厂
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommonTokenFactory {
    copy_text: bool,
}

impl CommonTokenFactory {
    /// 惰性文本的默认工厂
    pub const DEFAULT: Self = Self { copy_text: false };

    pub fn new(copy_text: bool) -> Self {
        Self { copy_text }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(config.copy_text)
    }

    pub fn copy_text(&self) -> bool {
        self.copy_text
    }
}

impl TokenFactory for CommonTokenFactory {
    fn create(
        &self,
        source: &Arc<SourcePair>,
        token_type: i32,
        text: Option<&str>,
        channel: i32,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> CommonToken {
        let mut token = CommonToken::new(Arc::clone(source), token_type, channel, start, stop);
        if let Some(text) = text {
            token.set_text(text.to_string());
        } else if self.copy_text && source.input_stream().is_some() {
            // 与惰性读取走同一条路径，EOF 等越界 span 同样得到 "<EOF>"
            let text = token.text().map(Cow::into_owned);
            if let Some(text) = text {
                token.set_text(text);
            }
        }
        token
    }

    fn create_with_text(&self, token_type: i32, text: &str) -> CommonToken {
        CommonToken::with_text(token_type, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{CharStream, InputStream};

    fn stream_source(text: &str) -> Arc<SourcePair> {
        let input: Arc<dyn CharStream> = Arc::new(InputStream::new(text));
        SourcePair::new(None, Some(input))
    }

    #[test]
    fn test_default_factory_is_lazy() {
        let source = stream_source("hello world");
        let token = CommonTokenFactory::DEFAULT.create(&source, 1, None, 0, Some(6), Some(10));
        assert!(!token.has_explicit_text());
        assert_eq!(token.text().as_deref(), Some("world"));
        assert!(token.shares_source(&CommonToken::new(source, 1, 0, None, None)));
    }

    #[test]
    fn test_copy_text_factory_is_eager() {
        let source = stream_source("hello world");
        let factory = CommonTokenFactory::new(true);
        let token = factory.create(&source, 1, None, 0, Some(0), Some(4));
        assert!(token.has_explicit_text());
        assert_eq!(token.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_copy_text_without_stream_stays_empty() {
        let factory = CommonTokenFactory::new(true);
        let token = factory.create(&SourcePair::empty(), 1, None, 0, Some(0), Some(4));
        assert!(!token.has_explicit_text());
        assert!(token.text().is_none());
    }

    #[test]
    fn test_explicit_text_wins() {
        let source = stream_source("hello world");
        let token = CommonTokenFactory::new(true).create(&source, 1, Some("hi"), 0, Some(0), Some(4));
        assert_eq!(token.text().as_deref(), Some("hi"));
    }

    #[test]
    fn test_from_config() {
        let factory = CommonTokenFactory::from_config(&TokenConfig { copy_text: true });
        assert!(factory.copy_text());
        assert_eq!(CommonTokenFactory::default(), CommonTokenFactory::DEFAULT);
    }

    #[test]
    fn test_create_with_text() {
        let token = CommonTokenFactory::DEFAULT.create_with_text(4, "synthetic");
        assert!(token.source().is_empty());
        assert_eq!(token.text().as_deref(), Some("synthetic"));
    }
}
