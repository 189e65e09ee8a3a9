//! インメモリのセクションリポジトリ実装
//!
//! バックエンドなしでコントローラを動かすための実装。
//! 失敗フラグでネットワーク障害を再現できる

use crate::domain::portfolio::entities::{SectionEntry, SectionQuery};
use crate::domain::portfolio::repositories::{ApiError, SectionRepository};
use crate::domain::portfolio::value_objects::EntryId;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

pub struct InMemorySection<E: SectionEntry> {
    entries: RwLock<Vec<E>>,
    fail: AtomicBool,
}

impl<E: SectionEntry> Default for InMemorySection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SectionEntry> InMemorySection<E> {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<E>) -> Self {
        Self {
            entries: RwLock::new(entries),
            fail: AtomicBool::new(false),
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
impl<E: SectionEntry> SectionRepository<E> for InMemorySection<E> {
    async fn list(&self, filter: &E::Query) -> Result<Vec<E>, ApiError> {
        self.check_availability()?;
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        self.check_availability()?;
        let entity = E::from_draft(EntryId::generate(), draft);
        let mut entries = self.entries.write().await;
        entries.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: &EntryId, draft: &E::Draft) -> Result<E, ApiError> {
        self.check_availability()?;
        let mut entries = self.entries.write().await;
        let slot = entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or(ApiError::Status { status: 404 })?;
        *slot = E::from_draft(id.clone(), draft);
        Ok(slot.clone())
    }
}
