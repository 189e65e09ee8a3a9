//! ポートフォリオ集約のリポジトリトレイト
//!
//! バックエンドAPIへのアクセスを抽象化するトレイトと、
//! 一覧フィルター、APIエラーを定義

use crate::domain::portfolio::entities::{
    Profile, ProfileDraft, Project, SectionEntry, SectionQuery, Skill, WorkExperience,
};
use crate::domain::portfolio::value_objects::EntryId;
use async_trait::async_trait;
use thiserror::Error;

/// バックエンドAPIのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 2xx 以外のステータスコード
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },
    /// 接続・タイムアウトなどの転送層エラー
    #[error("Transport error: {message}")]
    Transport { message: String },
    /// レスポンスボディの解析エラー
    #[error("Malformed response: {message}")]
    Decode { message: String },
    /// ベースURLの構成エラー
    #[error("Invalid API configuration: {message}")]
    Config { message: String },
}

impl ApiError {
    /// エラーがクライアント側の問題かチェック
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status } if (400..500).contains(status))
    }

    /// 404 かチェック（プロフィール未作成などの通常状態）
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404 })
    }

    /// エラーが一時的なものかチェック
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Status { status } => *status >= 500,
            _ => false,
        }
    }
}

/// フィルターを持たないセクション用のクエリ
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<E> SectionQuery<E> for NoFilter {
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

fn push_param(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<String>,
) {
    if let Some(value) = value
        && !value.trim().is_empty()
    {
        params.push((key, value.trim().to_string()));
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// プロジェクト検索フィルター
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// タイトルによる部分一致検索
    pub title: Option<String>,
    /// 使用スキルによる検索
    pub skill: Option<String>,
    /// 説明文による部分一致検索
    pub description: Option<String>,
}

impl SectionQuery<Project> for ProjectFilter {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "title", &self.title);
        push_param(&mut params, "skill", &self.skill);
        push_param(&mut params, "description", &self.description);
        params
    }

    fn matches(&self, entry: &Project) -> bool {
        let title_ok = self
            .title
            .as_ref()
            .is_none_or(|t| contains_ignore_case(&entry.title, t));
        let description_ok = self
            .description
            .as_ref()
            .is_none_or(|d| contains_ignore_case(&entry.description, d));
        let skill_ok = self.skill.as_ref().is_none_or(|wanted| {
            entry
                .skills
                .iter()
                .any(|s| contains_ignore_case(s, wanted))
        });
        title_ok && description_ok && skill_ok
    }
}

/// 職歴検索フィルター
#[derive(Debug, Clone, Default)]
pub struct WorkFilter {
    pub company: Option<String>,
    pub role: Option<String>,
}

impl SectionQuery<WorkExperience> for WorkFilter {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_param(&mut params, "company", &self.company);
        push_param(&mut params, "role", &self.role);
        params
    }

    fn matches(&self, entry: &WorkExperience) -> bool {
        let company_ok = self
            .company
            .as_ref()
            .is_none_or(|c| contains_ignore_case(&entry.company, c));
        let role_ok = self
            .role
            .as_ref()
            .is_none_or(|r| contains_ignore_case(&entry.role, r));
        company_ok && role_ok
    }
}

/// リストセクションのリポジトリ
///
/// 全セクションが同じ3操作（一覧・作成・更新）を持つため、
/// エンティティ型をパラメータとして一度だけ定義する
#[async_trait]
pub trait SectionRepository<E: SectionEntry>: Send + Sync {
    /// 一覧を取得（フィルター付き）
    async fn list(&self, filter: &E::Query) -> Result<Vec<E>, ApiError>;

    /// エントリを作成
    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError>;

    /// エントリを更新
    async fn update(&self, id: &EntryId, draft: &E::Draft) -> Result<E, ApiError>;
}

/// プロフィールのリポジトリ（シングルトン）
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// プロフィールを取得
    async fn fetch(&self) -> Result<Profile, ApiError>;

    /// プロフィールを作成
    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, ApiError>;

    /// プロフィールを更新
    async fn update(&self, draft: &ProfileDraft) -> Result<Profile, ApiError>;

    /// スキルをプロフィールに追記
    async fn push_skill(&self, skill: &str) -> Result<Profile, ApiError>;
}

/// スキル一覧のリポジトリ（読み取り専用）
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// 全スキルを取得
    async fn list(&self) -> Result<Vec<Skill>, ApiError>;

    /// トップスキルを取得（例: 上位5件）
    async fn top(&self) -> Result<Vec<Skill>, ApiError>;
}
