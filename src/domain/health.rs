//! ヘルス集約
//!
//! バックエンドの死活監視に関するモジュール

pub mod repositories;
pub mod value_objects;

pub use repositories::HealthProbe;
pub use value_objects::{HealthReport, ServerStatus};
