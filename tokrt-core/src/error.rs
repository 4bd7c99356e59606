//! Token 错误类型

use thiserror::Error;

/// Token 生命周期中的错误
///
/// 读取操作从不失败（缺失的值以 `None` 或哨兵值表示），
/// 只有违反一次性赋值约定的写操作会返回错误。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// token index 只能被缓冲流赋值一次
    #[error("token index already assigned: {current} (attempted {requested})")]
    IndexAlreadyAssigned { current: usize, requested: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_already_assigned_display() {
        let err = TokenError::IndexAlreadyAssigned {
            current: 3,
            requested: 4,
        };
        assert_eq!(
            err.to_string(),
            "token index already assigned: 3 (attempted 4)"
        );
    }
}
