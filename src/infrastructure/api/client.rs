//! HTTPクライアント本体
//!
//! 全エンドポイントは `{data: ...}` エンベロープを返す
//! （ヘルスエンドポイントのみ生のボディ）。2xx 以外は
//! ステータスコード付きのエラーにする

use crate::domain::portfolio::repositories::ApiError;
use crate::infrastructure::api::config::ApiConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config {
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET してエンベロープを剥がす
    pub(crate) async fn get_data<T>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut request = self.http.get(self.endpoint(path));
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await.map_err(transport_error)?;
        unwrap_envelope(response).await
    }

    /// JSONボディを POST してエンベロープを剥がす
    pub(crate) async fn post_data<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope(response).await
    }

    /// JSONボディを PUT してエンベロープを剥がす
    pub(crate) async fn put_data<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .put(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        unwrap_envelope(response).await
    }

    /// エンベロープなしで GET する（ヘルスエンドポイント用）
    pub(crate) async fn get_raw<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response)?;
        response.json().await.map_err(decode_error)
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: error.to_string(),
    }
}

fn decode_error(error: reqwest::Error) -> ApiError {
    ApiError::Decode {
        message: error.to_string(),
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

async fn unwrap_envelope<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = check_status(response)?;
    let envelope: Envelope<T> = response.json().await.map_err(decode_error)?;
    Ok(envelope.data)
}
