//! API接続の設定
//!
//! ベースURLはフラグ → 環境変数 → 開発用デフォルトの順で解決する

use std::time::Duration;

/// ベースURLを上書きする環境変数
pub const ENV_BASE_URL: &str = "PORTFOLIO_API_URL";

/// 開発環境のデフォルトベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/me-api";

/// リクエストタイムアウトのデフォルト
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// フラグと環境変数からベースURLを解決する
    pub fn from_env(flag: Option<String>) -> Self {
        Self::resolve(flag, std::env::var(ENV_BASE_URL).ok())
    }

    fn resolve(flag: Option<String>, env: Option<String>) -> Self {
        let base_url = pick(flag)
            .or_else(|| pick(env))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn pick(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let config = ApiConfig::resolve(
            Some("https://flag.example/me-api".to_string()),
            Some("https://env.example/me-api".to_string()),
        );
        assert_eq!(config.base_url, "https://flag.example/me-api");
    }

    #[test]
    fn test_environment_wins_over_default() {
        let config = ApiConfig::resolve(None, Some("https://env.example/me-api".to_string()));
        assert_eq!(config.base_url, "https://env.example/me-api");
    }

    #[test]
    fn test_blank_values_fall_through_to_default() {
        let config = ApiConfig::resolve(Some("   ".to_string()), None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
