//! ヘルス集約のリポジトリトレイト

use crate::domain::health::value_objects::HealthReport;
use crate::domain::portfolio::repositories::ApiError;
use async_trait::async_trait;

/// ヘルスエンドポイントへのプローブ
///
/// 成功は `Online`、失敗は `Offline` に対応する。リトライはしない
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn probe(&self) -> Result<HealthReport, ApiError>;
}
