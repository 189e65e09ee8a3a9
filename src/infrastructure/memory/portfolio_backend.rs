//! インメモリのプロフィール・スキル・ヘルス実装

use crate::domain::health::repositories::HealthProbe;
use crate::domain::health::value_objects::HealthReport;
use crate::domain::portfolio::entities::{Profile, ProfileDraft, Skill};
use crate::domain::portfolio::repositories::{ApiError, ProfileRepository, SkillRepository};
use crate::domain::portfolio::value_objects::EntryId;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

fn profile_from_draft(id: Option<EntryId>, draft: &ProfileDraft) -> Profile {
    Profile {
        id,
        name: draft.name.clone(),
        profile_description: draft.profile_description.clone(),
        education: draft.education.clone(),
        skills: draft.skills.clone(),
        links: draft.links.clone(),
    }
}

/// プロフィールとスキル一覧のインメモリ実装
///
/// バックエンドと同じく、スキル一覧はプロフィールの
/// `skills` 配列から導出する
pub struct InMemoryPortfolio {
    profile: RwLock<Option<Profile>>,
    top_skills: RwLock<Vec<Skill>>,
    fail: AtomicBool,
}

impl Default for InMemoryPortfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPortfolio {
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(None),
            top_skills: RwLock::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
            top_skills: RwLock::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn with_top_skills(self, top_skills: Vec<Skill>) -> Self {
        Self {
            top_skills: RwLock::new(top_skills),
            ..self
        }
    }

    /// 以後のリクエストを失敗させるかどうかを切り替える
    pub fn fail_requests(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    fn check_availability(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(ApiError::Transport {
                message: "simulated backend failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryPortfolio {
    async fn fetch(&self) -> Result<Profile, ApiError> {
        self.check_availability()?;
        let profile = self.profile.read().await;
        profile.clone().ok_or(ApiError::Status { status: 404 })
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, ApiError> {
        self.check_availability()?;
        let mut slot = self.profile.write().await;
        if slot.is_some() {
            return Err(ApiError::Status { status: 409 });
        }
        let profile = profile_from_draft(Some(EntryId::generate()), draft);
        *slot = Some(profile.clone());
        Ok(profile)
    }

    async fn update(&self, draft: &ProfileDraft) -> Result<Profile, ApiError> {
        self.check_availability()?;
        let mut slot = self.profile.write().await;
        let existing = slot.as_ref().ok_or(ApiError::Status { status: 404 })?;
        let profile = profile_from_draft(existing.id.clone(), draft);
        *slot = Some(profile.clone());
        Ok(profile)
    }

    async fn push_skill(&self, skill: &str) -> Result<Profile, ApiError> {
        self.check_availability()?;
        let mut slot = self.profile.write().await;
        let profile = slot.as_mut().ok_or(ApiError::Status { status: 404 })?;
        profile.skills.push(skill.to_string());
        Ok(profile.clone())
    }
}

#[async_trait]
impl SkillRepository for InMemoryPortfolio {
    async fn list(&self) -> Result<Vec<Skill>, ApiError> {
        self.check_availability()?;
        let profile = self.profile.read().await;
        Ok(profile
            .as_ref()
            .map(|p| p.skills.iter().map(Skill::named).collect())
            .unwrap_or_default())
    }

    async fn top(&self) -> Result<Vec<Skill>, ApiError> {
        self.check_availability()?;
        let top = self.top_skills.read().await;
        Ok(top.clone())
    }
}

/// 固定応答のヘルスプローブ
pub struct StaticHealthProbe {
    healthy: AtomicBool,
}

impl StaticHealthProbe {
    pub fn new(healthy: bool) -> Self {
        Self {
            healthy: AtomicBool::new(healthy),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::Relaxed);
    }
}

#[async_trait]
impl HealthProbe for StaticHealthProbe {
    async fn probe(&self) -> Result<HealthReport, ApiError> {
        if self.healthy.load(Ordering::Relaxed) {
            Ok(HealthReport {
                status: Some("ok".to_string()),
                extra: serde_json::Map::new(),
            })
        } else {
            Err(ApiError::Status { status: 503 })
        }
    }
}
