//! ヘルス集約の値オブジェクト

use serde::{Deserialize, Serialize};
use std::fmt;

/// サーバー状態の三値インジケータ
///
/// `Checking` は起動直後のみ。最初のプローブが解決した後は
/// `Online` か `Offline` のどちらかになる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Checking,
    Online,
    Offline,
}

impl ServerStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }

    /// 最初のプローブが解決済みかチェック
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Checking)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "checking",
            Self::Online => "online",
            Self::Offline => "offline",
        };
        write!(f, "{}", label)
    }
}

/// ヘルスエンドポイントの応答
///
/// 他のエンドポイントと違い `{data: ...}` エンベロープを使わず、
/// 生のJSONボディが返る。形式はバックエンド依存なので緩く受ける
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
