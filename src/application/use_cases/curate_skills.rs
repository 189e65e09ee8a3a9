//! スキルボード
//!
//! 全スキルとトップスキルを並べて取得し、プロフィール経由で
//! 新しいスキルを追記する複合セクション

use crate::domain::portfolio::entities::Skill;
use crate::domain::portfolio::repositories::{
    ApiError, ProfileRepository, SkillRepository,
};
use crate::domain::portfolio::value_objects::SkillName;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// スキルボードの操作エラー
#[derive(Debug, Error)]
pub enum SkillBoardError {
    #[error("Skill name is empty")]
    EmptyName,
    #[error("Skill already exists: {name}")]
    Duplicate { name: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct SkillBoard<S, P>
where
    S: SkillRepository,
    P: ProfileRepository,
{
    skills: Arc<S>,
    profile: Arc<P>,
    all: Vec<Skill>,
    top: Vec<Skill>,
    loading: bool,
}

impl<S, P> SkillBoard<S, P>
where
    S: SkillRepository,
    P: ProfileRepository,
{
    pub fn new(skills: Arc<S>, profile: Arc<P>) -> Self {
        Self {
            skills,
            profile,
            all: Vec::new(),
            top: Vec::new(),
            loading: false,
        }
    }

    /// 全スキルとトップスキルを並行して再取得する
    ///
    /// どちらかが失敗したら両方とも空のリストに落とす
    pub async fn refresh(&mut self) {
        self.loading = true;
        let result = tokio::try_join!(self.skills.list(), self.skills.top());
        match result {
            Ok((all, top)) => {
                self.all = all;
                self.top = top;
            }
            Err(error) => {
                warn!(%error, "スキル一覧の取得に失敗しました");
                self.all.clear();
                self.top.clear();
            }
        }
        self.loading = false;
    }

    /// スキルを追加する
    ///
    /// 空の入力と、正規化後に一致する重複を拒否する。
    /// 追加はプロフィールの `skills` 配列への追記として行い、
    /// 成功したら一覧を再取得する
    pub async fn add_skill(&mut self, raw: &str) -> Result<(), SkillBoardError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(SkillBoardError::EmptyName);
        }

        let wanted = SkillName::normalized(name);
        let exists = self
            .all
            .iter()
            .any(|s| SkillName::normalized(&s.skill) == wanted);
        if exists {
            return Err(SkillBoardError::Duplicate {
                name: name.to_string(),
            });
        }

        self.profile.push_skill(name).await?;
        self.refresh().await;
        Ok(())
    }

    pub fn all(&self) -> &[Skill] {
        &self.all
    }

    pub fn top(&self) -> &[Skill] {
        &self.top
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::entities::{Profile, ProfileLinks};
    use crate::infrastructure::memory::InMemoryPortfolio;

    fn board_with_skills(skills: Vec<&str>) -> SkillBoard<InMemoryPortfolio, InMemoryPortfolio> {
        let backend = Arc::new(InMemoryPortfolio::with_profile(Profile {
            id: None,
            name: "Aiko".to_string(),
            profile_description: String::new(),
            education: String::new(),
            skills: skills.into_iter().map(str::to_string).collect(),
            links: ProfileLinks::default(),
        }));
        SkillBoard::new(backend.clone(), backend)
    }

    #[tokio::test]
    async fn test_refresh_loads_both_lists() {
        let mut board = board_with_skills(vec!["Rust", "React"]);
        board.refresh().await;
        assert_eq!(board.all().len(), 2);
        assert!(!board.is_loading());
    }

    #[tokio::test]
    async fn test_add_skill_rejects_blank_input() {
        let mut board = board_with_skills(vec![]);
        board.refresh().await;
        assert!(matches!(
            board.add_skill("   ").await,
            Err(SkillBoardError::EmptyName)
        ));
    }

    #[tokio::test]
    async fn test_add_skill_rejects_normalized_duplicate() {
        let mut board = board_with_skills(vec!["Node.js"]);
        board.refresh().await;

        let error = board.add_skill(" nodejs ").await.unwrap_err();
        assert!(matches!(error, SkillBoardError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_add_skill_pushes_to_profile_and_refreshes() {
        let mut board = board_with_skills(vec!["Rust"]);
        board.refresh().await;

        board.add_skill("  Docker  ").await.unwrap();
        assert_eq!(board.all().len(), 2);
        assert!(board.all().iter().any(|s| s.skill == "Docker"));
    }

    #[tokio::test]
    async fn test_failed_refresh_degrades_both_lists() {
        let backend = Arc::new(InMemoryPortfolio::with_profile(Profile {
            id: None,
            name: "Aiko".to_string(),
            profile_description: String::new(),
            education: String::new(),
            skills: vec!["Rust".to_string()],
            links: ProfileLinks::default(),
        }));
        let mut board = SkillBoard::new(backend.clone(), backend.clone());
        board.refresh().await;
        assert_eq!(board.all().len(), 1);

        backend.fail_requests(true);
        board.refresh().await;
        assert!(board.all().is_empty());
        assert!(board.top().is_empty());
        assert!(!board.is_loading());
    }
}
