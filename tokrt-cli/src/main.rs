//! Tokrt CLI - Command line interface
//!
//! 对源文件做词法分析，按规范格式逐行输出 token（或输出 JSON 记录）

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tokrt_core::{
    CommonToken, Config, InputStream, SimpleLexer, StreamError, TokenError, TokenRecord,
};
use tracing::{debug, info};

mod config;
mod logging;

use crate::config::{ConfigError, LogConfig};
use crate::logging::{LogFormat, LoggingError};

#[derive(Parser)]
#[command(
    name = "tokrt",
    about = "Tokrt - dump the token stream of a source file",
    version
)]
struct Cli {
    /// Source file to tokenize
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON records instead of the canonical token rendering
    #[arg(long)]
    json: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Per-phase log level, e.g. `--log lexer=debug` (phases: stream, lexer, token)
    #[arg(long = "log", value_name = "PHASE=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// CLI 错误
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("输出失败: {0}")]
    Io(#[from] io::Error),

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let log_config = build_log_config(&cli.log_level, &cli.log_overrides)?;
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump(cli, &mut out)
}

/// 加载配置与输入，把 token 写入 `out`
fn dump<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    debug!(target: "tokrt::cli", ?config, "Loaded configuration");

    let input = Arc::new(InputStream::from_path(&cli.input)?);
    let tokens = collect_tokens(input, &config)?;
    info!(
        target: "tokrt::cli",
        input = %cli.input.display(),
        count = tokens.len(),
        "Tokenized input"
    );

    if cli.json {
        let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from_token).collect();
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
    }
    Ok(())
}

/// Build log configuration from command line options
fn build_log_config(level: &str, overrides: &[String]) -> Result<LogConfig, ConfigError> {
    let global =
        config::parse_log_level(level).ok_or_else(|| ConfigError::InvalidLevel(level.to_string()))?;
    let mut log_config = LogConfig {
        global,
        ..Default::default()
    };
    for spec in overrides {
        log_config.apply_override(spec)?;
    }
    Ok(log_config)
}

/// 词法分析全部输入，并按产生顺序赋值 token index
fn collect_tokens(input: Arc<InputStream>, config: &Config) -> Result<Vec<CommonToken>, TokenError> {
    SimpleLexer::with_config(input, config)
        .enumerate()
        .map(|(index, mut token)| {
            token.set_token_index(index)?;
            Ok(token)
        })
        .collect()
}
