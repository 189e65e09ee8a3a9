//! デバッグとログ機能
//!
//! プロジェクト全体のデバッグとログ機能を提供

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// ファイルログを有効にするか
    pub enable_file_logging: bool,
    /// ログファイルのディレクトリ
    pub log_directory: String,
    /// JSONフォーマットを使用するか
    pub use_json_format: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        // ページ出力を汚さないよう、既定ではファイルにのみ書く
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "logs".to_string(),
            use_json_format: true,
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定（コンソールに整形出力）
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
            use_json_format: false,
        }
    }

    /// 本番環境用の設定
    pub fn production() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: true,
            log_directory: "/var/log/portfolio-console".to_string(),
            use_json_format: true,
        }
    }

    /// 環境変数 `PORTFOLIO_ENV` から設定を選ぶ
    pub fn from_environment() -> Self {
        match std::env::var("PORTFOLIO_ENV").as_deref() {
            Ok("production") => Self::production(),
            Ok("development") => Self::development(),
            _ => Self::default(),
        }
    }
}

/// ログシステムを初期化
pub fn init_logging(config: &DebugConfig) -> crate::Result<()> {
    // ログディレクトリを作成
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
    }

    // 環境変数からのフィルター設定
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!("portfolio_console={}", config.log_level))
    })?;

    if config.enable_file_logging {
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &config.log_directory,
            "portfolio-console.log",
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .with_ansi(false);
        if config.use_json_format {
            builder.json().init();
        } else {
            builder.init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .with_target(true)
            .init();
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}
