//! Token 来源：(token source, input stream) 二元组

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::stream::CharStream;

/// 产生 token 的组件（通常是 lexer）
///
/// token 只在构造时读取一次当前位置。
pub trait TokenSource: fmt::Debug + Send + Sync {
    /// 当前行号，1-based
    fn line(&self) -> usize;

    /// 当前列号，0-based
    fn column(&self) -> usize;

    /// 来源名称，用于诊断
    fn source_name(&self) -> &str {
        "<unknown>"
    }
}

static EMPTY_SOURCE: Lazy<Arc<SourcePair>> = Lazy::new(|| Arc::new(SourcePair::default()));

/// 不可变的来源二元组
///
/// 同一次 lexer 运行产生的所有 token 共享同一个 `Arc<SourcePair>`，
/// 创建后不再修改。
#[derive(Debug, Default)]
pub struct SourcePair {
    token_source: Option<Arc<dyn TokenSource>>,
    input_stream: Option<Arc<dyn CharStream>>,
}

impl SourcePair {
    /// 创建共享的来源二元组
    pub fn new(
        token_source: Option<Arc<dyn TokenSource>>,
        input_stream: Option<Arc<dyn CharStream>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            token_source,
            input_stream,
        })
    }

    /// 无来源 token 使用的空二元组（进程内唯一实例）
    pub fn empty() -> Arc<Self> {
        Arc::clone(&EMPTY_SOURCE)
    }

    pub fn token_source(&self) -> Option<&Arc<dyn TokenSource>> {
        self.token_source.as_ref()
    }

    pub fn input_stream(&self) -> Option<&Arc<dyn CharStream>> {
        self.input_stream.as_ref()
    }

    /// 两个分量是否都缺失
    pub fn is_empty(&self) -> bool {
        self.token_source.is_none() && self.input_stream.is_none()
    }
}
