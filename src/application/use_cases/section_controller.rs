//! セクションコントローラ
//!
//! 学歴・プロジェクト・職歴・資格の各セクションが共有する
//! CRUD状態遷移（取得 → 表示 → 追加/編集 → 保存 → 再取得）を
//! エンティティ型をパラメータとして一度だけ実装する

use crate::domain::portfolio::entities::{SectionDraft, SectionEntry};
use crate::domain::portfolio::repositories::{ApiError, SectionRepository};
use crate::domain::portfolio::value_objects::EntryId;
use std::sync::Arc;
use tracing::{debug, warn};

/// フォームの編集モード
///
/// 追加中と編集中が同時に成立しないことを型で保証する
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    Adding,
    Editing(EntryId),
}

/// リストセクションのコントローラ
pub struct SectionController<E, R>
where
    E: SectionEntry,
    R: SectionRepository<E>,
{
    repository: Arc<R>,
    entries: Vec<E>,
    loading: bool,
    mode: EditorMode,
    form: E::Draft,
    filter: E::Query,
}

impl<E, R> SectionController<E, R>
where
    E: SectionEntry,
    R: SectionRepository<E>,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            entries: Vec::new(),
            loading: false,
            mode: EditorMode::Idle,
            form: E::Draft::default(),
            filter: E::Query::default(),
        }
    }

    /// 一覧を再取得する
    ///
    /// 失敗時はログに残し、空のリストに落とす。リトライはしない
    pub async fn refresh(&mut self) {
        self.loading = true;
        let result = self.repository.list(&self.filter).await;
        match result {
            Ok(entries) => {
                debug!(
                    section = %E::KIND,
                    count = entries.len(),
                    "一覧を取得しました"
                );
                self.entries = entries;
            }
            Err(error) => {
                warn!(section = %E::KIND, %error, "一覧の取得に失敗しました");
                self.entries.clear();
            }
        }
        self.loading = false;
    }

    /// 追加フォームを開く（編集中だった場合は破棄する）
    pub fn start_add(&mut self) {
        self.mode = EditorMode::Adding;
        self.form = E::Draft::default();
    }

    /// 既存エントリの編集フォームを開く（追加中だった場合は破棄する）
    pub fn start_edit(&mut self, entry: &E) {
        self.mode = EditorMode::Editing(entry.id().clone());
        self.form = entry.draft();
    }

    /// 追加・編集を取り消してフォームを空に戻す
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Idle;
        self.form = E::Draft::default();
    }

    /// フォームの内容を保存する
    ///
    /// モードに応じて作成か更新を呼び分ける。成功したらフォームを
    /// リセットして一覧を再取得する（楽観的マージはせず、常に
    /// バックエンドを信頼できる情報源として引き直す）。失敗時は
    /// フォームを保持したままエラーを返すので、呼び出し側で再試行
    /// または取り消しできる
    pub async fn save(&mut self) -> Result<(), ApiError> {
        let draft = self.form.trimmed();
        let result = match &self.mode {
            EditorMode::Adding => self.repository.create(&draft).await,
            EditorMode::Editing(id) => self.repository.update(id, &draft).await,
            EditorMode::Idle => return Ok(()),
        };

        match result {
            Ok(saved) => {
                debug!(section = %E::KIND, id = %saved.id(), "保存しました");
                self.cancel();
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                warn!(section = %E::KIND, %error, "保存に失敗しました");
                Err(error)
            }
        }
    }

    /// 一覧フィルターを差し替える（次回の `refresh` から反映）
    pub fn set_filter(&mut self, filter: E::Query) {
        self.filter = filter;
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode, EditorMode::Adding)
    }

    pub fn editing_id(&self) -> Option<&EntryId> {
        match &self.mode {
            EditorMode::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn form(&self) -> &E::Draft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut E::Draft {
        &mut self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::entities::{
        Education, EducationDraft, Project, ProjectDraft,
    };
    use crate::domain::portfolio::repositories::ProjectFilter;
    use crate::infrastructure::memory::InMemorySection;
    use tracing_test::traced_test;

    fn education_repo() -> Arc<InMemorySection<Education>> {
        Arc::new(InMemorySection::with_entries(vec![Education::from_draft(
            EntryId::new("e1"),
            &EducationDraft {
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                field_of_study: "Computer Science".to_string(),
                start_year: 2018,
                end_year: Some(2022),
            },
        )]))
    }

    #[tokio::test]
    async fn test_refresh_replaces_entries() {
        let mut controller = SectionController::new(education_repo());
        assert!(controller.entries().is_empty());

        controller.refresh().await;
        assert_eq!(controller.entries().len(), 1);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_refresh_degrades_to_empty_list() {
        let repo = education_repo();
        let mut controller = SectionController::new(repo.clone());
        controller.refresh().await;
        assert_eq!(controller.entries().len(), 1);

        repo.fail_requests(true);
        controller.refresh().await;
        assert!(controller.entries().is_empty());
        assert!(!controller.is_loading());
        assert!(logs_contain("一覧の取得に失敗しました"));
    }

    #[tokio::test]
    async fn test_add_and_edit_are_mutually_exclusive() {
        let mut controller = SectionController::new(education_repo());
        controller.refresh().await;

        controller.start_add();
        assert!(controller.is_adding());
        assert_eq!(controller.editing_id(), None);

        let existing = controller.entries()[0].clone();
        controller.start_edit(&existing);
        assert!(!controller.is_adding());
        assert_eq!(controller.editing_id(), Some(existing.id()));

        controller.start_add();
        assert!(controller.is_adding());
        assert_eq!(controller.editing_id(), None);
    }

    #[tokio::test]
    async fn test_save_after_add_creates_and_resets() {
        let mut controller = SectionController::new(education_repo());
        controller.refresh().await;

        controller.start_add();
        *controller.form_mut() = EducationDraft {
            degree: "  MSc  ".to_string(),
            institution: "Tech Institute".to_string(),
            field_of_study: "Robotics".to_string(),
            start_year: 2022,
            end_year: None,
        };
        controller.save().await.unwrap();

        // 保存後はフォームが空に戻り、一覧は再取得されている
        assert!(!controller.is_adding());
        assert_eq!(controller.editing_id(), None);
        assert_eq!(controller.form(), &EducationDraft::default());
        assert_eq!(controller.entries().len(), 2);
        assert!(controller.entries().iter().any(|e| e.degree == "MSc"));
    }

    #[tokio::test]
    async fn test_save_after_edit_updates_existing_entry() {
        let mut controller = SectionController::new(education_repo());
        controller.refresh().await;

        let existing = controller.entries()[0].clone();
        controller.start_edit(&existing);
        controller.form_mut().degree = "BEng".to_string();
        controller.save().await.unwrap();

        assert_eq!(controller.entries().len(), 1);
        assert_eq!(controller.entries()[0].degree, "BEng");
        assert_eq!(controller.entries()[0].id(), existing.id());
        assert_eq!(controller.mode(), &EditorMode::Idle);
    }

    #[tokio::test]
    async fn test_save_in_idle_mode_is_a_no_op() {
        let repo = education_repo();
        let mut controller = SectionController::new(repo.clone());
        controller.refresh().await;

        controller.save().await.unwrap();
        assert_eq!(controller.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_editor_state() {
        let repo = education_repo();
        let mut controller = SectionController::new(repo.clone());
        controller.refresh().await;

        controller.start_add();
        controller.form_mut().degree = "PhD".to_string();
        repo.fail_requests(true);

        let error = controller.save().await.unwrap_err();
        assert!(error.is_transient());
        assert!(controller.is_adding());
        assert_eq!(controller.form().degree, "PhD");
    }

    #[tokio::test]
    async fn test_cancel_clears_form_and_mode() {
        let mut controller = SectionController::new(education_repo());
        controller.start_add();
        controller.form_mut().degree = "BSc".to_string();

        controller.cancel();
        assert_eq!(controller.mode(), &EditorMode::Idle);
        assert_eq!(controller.form(), &EducationDraft::default());
    }

    #[tokio::test]
    async fn test_filter_is_applied_on_refresh() {
        let repo: Arc<InMemorySection<Project>> = Arc::new(InMemorySection::with_entries(vec![
            Project::from_draft(
                EntryId::new("p1"),
                &ProjectDraft {
                    title: "Portfolio Site".to_string(),
                    description: "Personal site".to_string(),
                    skills: vec!["React".to_string()],
                    github: None,
                    live: None,
                },
            ),
            Project::from_draft(
                EntryId::new("p2"),
                &ProjectDraft {
                    title: "Chain Explorer".to_string(),
                    description: "Block explorer".to_string(),
                    skills: vec!["Rust".to_string()],
                    github: None,
                    live: None,
                },
            ),
        ]));

        let mut controller = SectionController::new(repo);
        controller.set_filter(ProjectFilter {
            skill: Some("rust".to_string()),
            ..Default::default()
        });
        controller.refresh().await;

        assert_eq!(controller.entries().len(), 1);
        assert_eq!(controller.entries()[0].title, "Chain Explorer");
    }
}
