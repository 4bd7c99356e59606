//! CLI 配置
//!
//! 包含 CLI 特有的配置：日志配置，以及从 JSON 文件加载的 [`Config`]

use std::path::{Path, PathBuf};

use tokrt_config::{Config, Phase};
use tracing::Level;

/// 配置文件错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("无法读取 '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 '{}' 失败: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("无效的日志级别 '{0}'")]
    InvalidLevel(String),

    #[error("无效的阶段 '{0}'（可选: stream, lexer, token）")]
    InvalidPhase(String),
}

/// 读取并解析 JSON 配置文件，缺失的字段取默认值
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub stream: Option<Level>,
    pub lexer: Option<Level>,
    pub token: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            stream: None,
            lexer: None,
            token: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Stream => self.stream,
            Phase::Lexer => self.lexer,
            Phase::Token => self.token,
        };
        specific.unwrap_or(self.global)
    }

    /// Apply a `phase=level` override
    pub fn apply_override(&mut self, spec: &str) -> Result<(), ConfigError> {
        let (phase, level) = spec
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidPhase(spec.to_string()))?;
        let level =
            parse_log_level(level).ok_or_else(|| ConfigError::InvalidLevel(level.to_string()))?;
        let slot = match phase.trim().to_lowercase().as_str() {
            "stream" => &mut self.stream,
            "lexer" => &mut self.lexer,
            "token" => &mut self.token,
            other => return Err(ConfigError::InvalidPhase(other.to_string())),
        };
        *slot = Some(level);
        Ok(())
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "silent" => Some(Level::ERROR), // silent = only errors
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
