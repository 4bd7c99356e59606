//! 源代码位置追踪
//!
//! 与 token 约定保持一致：
//! - line: 1-based，用于错误显示
//! - column: 0-based，行内码点计数
//! - offset: 0-based，输入流中的码点下标（即 token 的 start/stop 所在坐标系）

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，0-based，Unicode码点计数
    pub column: usize,
    /// 码点偏移，0-based
    pub offset: usize,
}

impl SourcePosition {
    /// 创建新位置
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// 输入起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 0,
            offset: 0,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.offset += 1;
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}
