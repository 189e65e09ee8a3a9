//! # Portfolio Console
//!
//! REST バックエンドが公開するプロフィール、学歴、職歴、スキル、
//! プロジェクト、資格のレコードを取得・編集し、ポートフォリオページ
//! として描画するターミナルクライアント
//!
//! このクレートは Domain-Driven Design (DDD) 原則に基づいて設計されており、
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: ビジネスロジックとドメインモデル
//! - **Application Layer**: ユースケースとアプリケーションサービス
//! - **Infrastructure Layer**: 外部システムとの統合
//! - **Interface Layer**: ユーザーインターフェース

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;

// エラー型の定義
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
