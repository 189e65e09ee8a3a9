//! ページ組み立て
//!
//! 全セクションを並行して読み込み、ポートフォリオページの
//! 表示モデルを作る。個別セクションの失敗はそのセクションを
//! 空にするだけで、ページ全体は失敗させない

use crate::application::use_cases::curate_skills::SkillBoard;
use crate::application::use_cases::edit_profile::ProfileEditor;
use crate::application::use_cases::section_controller::SectionController;
use crate::domain::portfolio::entities::{
    Certificate, Education, Profile, Project, Skill, WorkExperience,
};
use crate::domain::portfolio::repositories::{
    ProfileRepository, SectionRepository, SkillRepository,
};
use std::sync::Arc;
use tracing::warn;

/// ページの表示モデル
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    pub profile: Option<Profile>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub top_skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub work: Vec<WorkExperience>,
    pub certificates: Vec<Certificate>,
}

pub struct ViewPageUseCase<PR, SR, ER, JR, WR, CR>
where
    PR: ProfileRepository,
    SR: SkillRepository,
    ER: SectionRepository<Education>,
    JR: SectionRepository<Project>,
    WR: SectionRepository<WorkExperience>,
    CR: SectionRepository<Certificate>,
{
    profile: Arc<PR>,
    skills: Arc<SR>,
    education: Arc<ER>,
    projects: Arc<JR>,
    work: Arc<WR>,
    certificates: Arc<CR>,
}

impl<PR, SR, ER, JR, WR, CR> ViewPageUseCase<PR, SR, ER, JR, WR, CR>
where
    PR: ProfileRepository,
    SR: SkillRepository,
    ER: SectionRepository<Education>,
    JR: SectionRepository<Project>,
    WR: SectionRepository<WorkExperience>,
    CR: SectionRepository<Certificate>,
{
    pub fn new(
        profile: Arc<PR>,
        skills: Arc<SR>,
        education: Arc<ER>,
        projects: Arc<JR>,
        work: Arc<WR>,
        certificates: Arc<CR>,
    ) -> Self {
        Self {
            profile,
            skills,
            education,
            projects,
            work,
            certificates,
        }
    }

    pub async fn execute(&self) -> PortfolioPage {
        let mut profile = ProfileEditor::new(self.profile.clone());
        let mut skills = SkillBoard::new(self.skills.clone(), self.profile.clone());
        let mut education = SectionController::<Education, _>::new(self.education.clone());
        let mut projects = SectionController::<Project, _>::new(self.projects.clone());
        let mut work = SectionController::<WorkExperience, _>::new(self.work.clone());
        let mut certificates = SectionController::<Certificate, _>::new(self.certificates.clone());

        let (profile_result, _, _, _, _, _) = tokio::join!(
            profile.load(),
            skills.refresh(),
            education.refresh(),
            projects.refresh(),
            work.refresh(),
            certificates.refresh(),
        );
        if let Err(error) = profile_result {
            warn!(%error, "プロフィールなしでページを表示します");
        }

        PortfolioPage {
            profile: profile.profile().cloned(),
            education: education.entries().to_vec(),
            skills: skills.all().to_vec(),
            top_skills: skills.top().to_vec(),
            projects: projects.entries().to_vec(),
            work: work.entries().to_vec(),
            certificates: certificates.entries().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::entities::{
        EducationDraft, ProfileLinks, ProjectDraft, SectionEntry,
    };
    use crate::domain::portfolio::value_objects::EntryId;
    use crate::infrastructure::memory::{InMemoryPortfolio, InMemorySection};

    fn backend() -> Arc<InMemoryPortfolio> {
        Arc::new(InMemoryPortfolio::with_profile(Profile {
            id: None,
            name: "Aiko".to_string(),
            profile_description: "Systems programmer".to_string(),
            education: String::new(),
            skills: vec!["Rust".to_string()],
            links: ProfileLinks::default(),
        }))
    }

    #[tokio::test]
    async fn test_page_collects_every_section() {
        let portfolio = backend();
        let education = Arc::new(InMemorySection::with_entries(vec![Education::from_draft(
            EntryId::new("e1"),
            &EducationDraft {
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                field_of_study: "Computer Science".to_string(),
                start_year: 2019,
                end_year: None,
            },
        )]));
        let projects = Arc::new(InMemorySection::with_entries(vec![Project::from_draft(
            EntryId::new("p1"),
            &ProjectDraft {
                title: "Portfolio Site".to_string(),
                description: "Personal site".to_string(),
                skills: vec!["React".to_string()],
                github: None,
                live: None,
            },
        )]));
        let work = Arc::new(InMemorySection::<WorkExperience>::new());
        let certificates = Arc::new(InMemorySection::<Certificate>::new());

        let use_case = ViewPageUseCase::new(
            portfolio.clone(),
            portfolio,
            education,
            projects,
            work,
            certificates,
        );
        let page = use_case.execute().await;

        assert_eq!(page.profile.unwrap().name, "Aiko");
        assert_eq!(page.education.len(), 1);
        assert_eq!(page.projects.len(), 1);
        assert_eq!(page.skills.len(), 1);
        assert!(page.work.is_empty());
        assert!(page.certificates.is_empty());
    }

    #[tokio::test]
    async fn test_failing_section_degrades_alone() {
        let portfolio = backend();
        let education = Arc::new(InMemorySection::with_entries(vec![Education::from_draft(
            EntryId::new("e1"),
            &EducationDraft {
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                field_of_study: "Computer Science".to_string(),
                start_year: 2019,
                end_year: None,
            },
        )]));
        education.fail_requests(true);

        let use_case = ViewPageUseCase::new(
            portfolio.clone(),
            portfolio,
            education,
            Arc::new(InMemorySection::<Project>::new()),
            Arc::new(InMemorySection::<WorkExperience>::new()),
            Arc::new(InMemorySection::<Certificate>::new()),
        );
        let page = use_case.execute().await;

        // 学歴だけが空になり、ページ自体は組み上がる
        assert!(page.education.is_empty());
        assert_eq!(page.profile.unwrap().name, "Aiko");
        assert_eq!(page.skills.len(), 1);
    }
}
