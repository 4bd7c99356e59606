//! Token 的序列化快照
//!
//! 在序列化边界把 `Option` 位置字段还原成文档规定的 `-1` 哨兵值，
//! 供外部工具读取。

use serde::{Deserialize, Serialize};

use super::{sentinel, Token};

/// 可序列化的 token 快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub index: i64,
    pub start: i64,
    pub stop: i64,
    pub text: Option<String>,
    pub token_type: i32,
    pub channel: i32,
    pub line: usize,
    pub column: i64,
}

impl TokenRecord {
    /// 读取 token 当前状态（会解析惰性文本）
    pub fn from_token<T: Token + ?Sized>(token: &T) -> Self {
        Self {
            index: sentinel(token.token_index()),
            start: sentinel(token.start()),
            stop: sentinel(token.stop()),
            text: token.text().map(|text| text.into_owned()),
            token_type: token.token_type(),
            channel: token.channel(),
            line: token.line(),
            column: sentinel(token.column()),
        }
    }
}
