//! プロフィール編集
//!
//! プロフィールはリストではなくシングルトンなので、
//! セクションコントローラとは別の小さな状態機械を持つ

use crate::domain::portfolio::entities::{Profile, ProfileDraft};
use crate::domain::portfolio::repositories::{ApiError, ProfileRepository};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ProfileEditor<R: ProfileRepository> {
    repository: Arc<R>,
    profile: Option<Profile>,
    editing: bool,
    form: ProfileDraft,
}

impl<R: ProfileRepository> ProfileEditor<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            profile: None,
            editing: false,
            form: ProfileDraft::default(),
        }
    }

    /// プロフィールを取得する
    ///
    /// 404 はプロフィール未作成の通常状態として扱う
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.repository.fetch().await {
            Ok(profile) => {
                self.profile = Some(profile);
                Ok(())
            }
            Err(error) if error.is_not_found() => {
                debug!("プロフィールはまだ作成されていません");
                self.profile = None;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "プロフィールの取得に失敗しました");
                self.profile = None;
                Err(error)
            }
        }
    }

    /// 編集フォームを開く（未作成の場合は空のフォーム）
    pub fn start_edit(&mut self) {
        self.editing = true;
        self.form = self
            .profile
            .as_ref()
            .map(Profile::draft)
            .unwrap_or_default();
    }

    /// フォームを保存する
    ///
    /// プロフィールが存在すれば更新、無ければ作成。成功したら
    /// フォームをリセットして再取得する
    pub async fn save(&mut self) -> Result<(), ApiError> {
        if !self.editing {
            return Ok(());
        }
        let draft = self.form.trimmed();
        let result = if self.profile.is_some() {
            self.repository.update(&draft).await
        } else {
            self.repository.create(&draft).await
        };

        match result {
            Ok(profile) => {
                debug!(name = %profile.name, "プロフィールを保存しました");
                self.cancel();
                let _ = self.load().await;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "プロフィールの保存に失敗しました");
                Err(error)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.form = ProfileDraft::default();
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn form(&self) -> &ProfileDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileDraft {
        &mut self.form
    }
}
