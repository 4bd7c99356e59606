//! 内存字符流
//!
//! 以码点为单位寻址：`size()` 是码点数量，`get_text` 的下标也是码点下标，
//! 与 token 的 `start`/`stop` 使用同一坐标系。

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// 字符流错误
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Token 所需的输入流接口
///
/// 实现必须在创建后保持内容不变：token 的文本是按需从流中切出的，
/// 同一 span 的多次读取必须得到相同结果。
pub trait CharStream: fmt::Debug + Send + Sync {
    /// 可寻址的码点总数
    fn size(&self) -> usize;

    /// 提取闭区间 `[start, stop]` 的文本
    ///
    /// 对任意 `start <= stop < size` 必须有定义。
    fn get_text(&self, start: usize, stop: usize) -> String;

    /// 输入源名称（文件名等），用于诊断
    fn source_name(&self) -> &str {
        "<unknown>"
    }
}

/// 内存中的输入流
#[derive(Clone, PartialEq, Eq)]
pub struct InputStream {
    name: String,
    data: Vec<char>,
}

impl InputStream {
    /// 从字符串创建
    pub fn new(text: &str) -> Self {
        Self::with_name(text, "<string>")
    }

    /// 从字符串创建，并指定源名称
    pub fn with_name(text: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let data: Vec<char> = text.chars().collect();
        debug!(target: "tokrt::stream", name = %name, size = data.len(), "Created input stream");
        Self { name, data }
    }

    /// 读取 UTF-8 文件
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StreamError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_name(&text, path.display().to_string()))
    }

    /// 获取第 `index` 个码点
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.data.get(index).copied()
    }
}

impl CharStream for InputStream {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn get_text(&self, start: usize, stop: usize) -> String {
        let size = self.data.len();
        if start >= size || start > stop {
            return String::new();
        }
        let stop = stop.min(size - 1);
        self.data[start..=stop].iter().collect()
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

// 内容可能很大，Debug 只显示名称和长度
impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("name", &self.name)
            .field("size", &self.data.len())
            .finish()
    }
}
