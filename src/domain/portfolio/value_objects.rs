//! ポートフォリオ集約の値オブジェクト
//!
//! エントリID、日付、スキル名などの不変値を定義

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// バックエンドが発行するエントリID
///
/// Mongo 形式の16進文字列をそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// 既存のIDから作成
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// 新しいIDを生成（インメモリ実装用）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for EntryId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// `YYYY-MM-DD` に正規化された日付
///
/// バックエンドは ISO タイムスタンプを返すことがあるため、
/// パース時に日付部分へ切り詰める
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// 文字列から作成
    ///
    /// `2024-03-01` と `2024-03-01T00:00:00.000Z` の両方を受け付ける
    pub fn parse(raw: &str) -> Result<Self, String> {
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| format!("Invalid date '{}': {}", raw, e))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for IsoDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// 在学・在籍期間
///
/// 終了年が無い場合は継続中として表示する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start_year: i32,
    pub end_year: Option<i32>,
}

impl YearRange {
    pub fn new(start_year: i32, end_year: Option<i32>) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    /// 継続中かチェック
    pub fn is_ongoing(&self) -> bool {
        self.end_year.is_none()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_year {
            Some(end) => write!(f, "{} – {}", self.start_year, end),
            None => write!(f, "{} – Present", self.start_year),
        }
    }
}

/// 重複判定用に正規化したスキル名
///
/// 小文字化し、`.` を取り除き、前後の空白を落とす
/// （`Node.js` と `nodejs ` を同一視する）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillName(String);

impl SkillName {
    pub fn normalized(raw: &str) -> Self {
        Self(raw.to_lowercase().replace('.', "").trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ページを構成するリストセクションの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Projects,
    Work,
    Certificates,
}

impl SectionKind {
    /// REST リソースのパスセグメント
    pub fn resource(&self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Work => "work",
            Self::Certificates => "certificates",
        }
    }

    /// ページ上の見出し
    pub fn title(&self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Work => "Work",
            Self::Certificates => "Certificates",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource())
    }
}
