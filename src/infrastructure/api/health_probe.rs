//! ヘルスプローブの実装
//!
//! ヘルスエンドポイントだけはエンベロープを使わない

use crate::domain::health::repositories::HealthProbe;
use crate::domain::health::value_objects::HealthReport;
use crate::domain::portfolio::repositories::ApiError;
use crate::infrastructure::api::client::HttpApi;
use async_trait::async_trait;

#[async_trait]
impl HealthProbe for HttpApi {
    async fn probe(&self) -> Result<HealthReport, ApiError> {
        self.get_raw("/health").await
    }
}
