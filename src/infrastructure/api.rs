//! バックエンドAPIクライアント
//!
//! リモートのポートフォリオAPIに対して各リポジトリトレイトを
//! 実装するHTTPクライアント

mod client;
mod config;
mod health_probe;
mod portfolio_api;

pub use client::HttpApi;
pub use config::ApiConfig;
