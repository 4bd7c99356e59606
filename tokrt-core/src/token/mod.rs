//! Token 契约与运行时哨兵常量
//!
//! [`Token`] 定义所有 token 变体必须提供的只读接口，
//! [`CommonToken`] 是标准实现：文本按需从输入流中提取。
//!
//! 内部用 `Option` 表示"未设置"的位置字段，只有在调试输出
//! （[`write_token`]）和序列化（[`TokenRecord`]）边界才还原成 `-1`。

pub mod common;
pub mod factory;
pub mod record;
pub mod source;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::stream::CharStream;

pub use common::CommonToken;
pub use factory::{CommonTokenFactory, TokenFactory};
pub use record::TokenRecord;
pub use source::{SourcePair, TokenSource};

/// 规范的"无效类型"
pub const TOKEN_INVALID_TYPE: i32 = 0;

/// 前瞻过程中到达规则末尾的内部标记，从不交给 parser
pub const TOKEN_EPSILON: i32 = -2;

/// 用户定义的 token 类型必须 >= 1
pub const TOKEN_MIN_USER_TOKEN_TYPE: i32 = 1;

/// 输入结束
pub const TOKEN_EOF: i32 = -1;

/// parser 默认监听的 channel
pub const TOKEN_DEFAULT_CHANNEL: i32 = 0;

/// 空白、注释等 parser 跳过的 token 所在的 channel
pub const TOKEN_HIDDEN_CHANNEL: i32 = 1;

/// Token 只读契约
///
/// 除 [`Token::set_text`] 外，所有方法都是对已计算状态的纯读取，不会失败。
pub trait Token: fmt::Debug {
    /// token 文本
    ///
    /// 只有在既没有显式文本、也无法访问输入流时才返回 `None`。
    fn text(&self) -> Option<Cow<'_, str>>;

    /// 设置显式文本，之后 [`Token::text`] 原样返回它
    fn set_text(&mut self, text: String);

    fn token_type(&self) -> i32;

    fn channel(&self) -> i32;

    /// 起始码点下标（闭区间），`None` 表示未追踪
    fn start(&self) -> Option<usize>;

    /// 结束码点下标（闭区间），`None` 表示未追踪
    fn stop(&self) -> Option<usize>;

    /// 在 token 序列中的位置，由缓冲流赋值
    fn token_index(&self) -> Option<usize>;

    /// 首字符所在行，1-based；0 表示未设置
    fn line(&self) -> usize;

    /// 首字符所在列，0-based
    fn column(&self) -> Option<usize>;

    fn token_source(&self) -> Option<&Arc<dyn TokenSource>>;

    fn input_stream(&self) -> Option<&Arc<dyn CharStream>>;

    /// 规范的单行调试表示，格式见 [`write_token`]
    fn to_token_string(&self) -> String {
        let mut out = String::new();
        // 写入 String 不会失败
        let _ = write_token(&mut out, self);
        out
    }
}

/// 以规范格式输出 token：
///
/// ```text
/// [@<index>,<start>:<stop>='<text>',<<type>>[,channel=<channel>],<line>:<column>]
/// ```
///
/// 文本中的 `\n`、`\r`、`\t` 被删除（不是替换成空格），
/// 无法得到文本时输出 `<no text>`，未追踪的数值字段输出 `-1`。
/// 诊断工具按字节解析这个格式，不要改动。
pub fn write_token<W, T>(out: &mut W, token: &T) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: Token + ?Sized,
{
    let text: Cow<'_, str> = match token.text() {
        Some(text) => Cow::Owned(strip_control(&text)),
        None => Cow::Borrowed("<no text>"),
    };

    write!(
        out,
        "[@{},{}:{}='{}',<{}>",
        sentinel(token.token_index()),
        sentinel(token.start()),
        sentinel(token.stop()),
        text,
        token.token_type()
    )?;
    if token.channel() > 0 {
        write!(out, ",channel={}", token.channel())?;
    }
    write!(out, ",{}:{}]", token.line(), sentinel(token.column()))
}

/// `None` 还原为 `-1`
pub(crate) fn sentinel(value: Option<usize>) -> i64 {
    value.map_or(-1, |v| i64::try_from(v).unwrap_or(i64::MAX))
}

fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(TOKEN_EOF, -1);
        assert_eq!(TOKEN_EPSILON, -2);
        assert_eq!(TOKEN_INVALID_TYPE, 0);
        assert_eq!(TOKEN_MIN_USER_TOKEN_TYPE, 1);
        assert_eq!(TOKEN_DEFAULT_CHANNEL, 0);
        assert_eq!(TOKEN_HIDDEN_CHANNEL, 1);
        assert!(TOKEN_MIN_USER_TOKEN_TYPE > TOKEN_INVALID_TYPE);
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(sentinel(None), -1);
        assert_eq!(sentinel(Some(0)), 0);
        assert_eq!(sentinel(Some(42)), 42);
    }

    #[test]
    fn test_strip_control() {
        assert_eq!(strip_control("a\nb\tc"), "abc");
        assert_eq!(strip_control("\r\n"), "");
        assert_eq!(strip_control("a b"), "a b");
    }
}
