//! HTTPクライアントに対するリポジトリトレイトの実装
//!
//! リストセクションは全て同じ3エンドポイント形
//! （`GET /{resource}`、`POST /{resource}`、`PUT /{resource}/{id}`）
//! なので、一つのブランケット実装で賄う

use crate::domain::portfolio::entities::{
    Profile, ProfileDraft, SectionEntry, SectionQuery, Skill,
};
use crate::domain::portfolio::repositories::{
    ApiError, ProfileRepository, SectionRepository, SkillRepository,
};
use crate::domain::portfolio::value_objects::EntryId;
use crate::infrastructure::api::client::HttpApi;
use async_trait::async_trait;

#[async_trait]
impl<E: SectionEntry> SectionRepository<E> for HttpApi {
    async fn list(&self, filter: &E::Query) -> Result<Vec<E>, ApiError> {
        let params = filter.params();
        self.get_data(&format!("/{}", E::KIND.resource()), &params)
            .await
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        self.post_data(&format!("/{}", E::KIND.resource()), draft)
            .await
    }

    async fn update(&self, id: &EntryId, draft: &E::Draft) -> Result<E, ApiError> {
        self.put_data(&format!("/{}/{}", E::KIND.resource(), id), draft)
            .await
    }
}

#[async_trait]
impl ProfileRepository for HttpApi {
    async fn fetch(&self) -> Result<Profile, ApiError> {
        self.get_data("/profile", &[]).await
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<Profile, ApiError> {
        self.post_data("/profile", draft).await
    }

    async fn update(&self, draft: &ProfileDraft) -> Result<Profile, ApiError> {
        self.put_data("/profile", draft).await
    }

    async fn push_skill(&self, skill: &str) -> Result<Profile, ApiError> {
        // バックエンドはプロフィール文書への $push 更新を受け付ける
        let body = serde_json::json!({ "$push": { "skills": skill } });
        self.put_data("/profile", &body).await
    }
}

#[async_trait]
impl SkillRepository for HttpApi {
    async fn list(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_data("/skills", &[]).await
    }

    async fn top(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_data("/skills/top", &[]).await
    }
}
