//! ポートフォリオ集約のエンティティ
//!
//! バックエンドが公開するレコード（プロフィール、学歴、職歴、
//! プロジェクト、資格、スキル）と、その編集フォームを定義

use crate::domain::portfolio::value_objects::{EntryId, IsoDate, SectionKind, YearRange};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// リストセクションに並ぶエントリ
///
/// 各エントリは編集フォーム（`Draft`）と一覧フィルター（`Query`）を持ち、
/// セクションコントローラはこのトレイト経由で全セクションを同じ形で扱う
pub trait SectionEntry:
    Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// 追加・編集フォームのデータ
    type Draft: SectionDraft;
    /// 一覧取得時のフィルター
    type Query: SectionQuery<Self>;

    /// 所属するセクション
    const KIND: SectionKind;

    /// バックエンドが発行したID
    fn id(&self) -> &EntryId;

    /// 編集フォームを作成（日付は `YYYY-MM-DD` に正規化済み）
    fn draft(&self) -> Self::Draft;

    /// フォームからエンティティを構成（インメモリ実装が使用）
    fn from_draft(id: EntryId, draft: &Self::Draft) -> Self;
}

/// 追加・編集フォームのデータ
///
/// `Default` が空のフォームを与える。クライアント側の検証は
/// トリミングのみで、それ以外はバックエンドに委ねる
pub trait SectionDraft:
    Clone + fmt::Debug + Default + PartialEq + Send + Sync + Serialize + 'static
{
    /// 文字列フィールドをトリミングし、空の任意項目を落とした複製を返す
    fn trimmed(&self) -> Self;
}

/// 一覧取得時のフィルター
///
/// `params` がクエリ文字列のキーと値を返す。空白のみの値は送らない
pub trait SectionQuery<E>: Clone + fmt::Debug + Default + Send + Sync + 'static {
    fn params(&self) -> Vec<(&'static str, String)>;

    /// エントリがフィルターに一致するかチェック（インメモリ実装が使用）
    fn matches(&self, _entry: &E) -> bool {
        true
    }
}

fn clean_optional(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/* =========================================================
   プロフィール（シングルトン）
========================================================= */

/// 外部リンク
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// プロフィール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub name: String,
    #[serde(default)]
    pub profile_description: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

impl Profile {
    /// 編集フォームを作成
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            profile_description: self.profile_description.clone(),
            education: self.education.clone(),
            skills: self.skills.clone(),
            links: self.links.clone(),
        }
    }
}

/// プロフィール編集フォーム
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    #[serde(default)]
    pub profile_description: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

impl ProfileDraft {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            profile_description: self.profile_description.trim().to_string(),
            education: self.education.trim().to_string(),
            skills: trimmed_skills(&self.skills),
            links: ProfileLinks {
                github: clean_optional(&self.links.github),
                linkedin: clean_optional(&self.links.linkedin),
            },
        }
    }
}

fn trimmed_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/* =========================================================
   学歴
========================================================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub field_of_study: String,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl Education {
    /// 在学期間
    pub fn years(&self) -> YearRange {
        YearRange::new(self.start_year, self.end_year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

impl SectionDraft for EducationDraft {
    fn trimmed(&self) -> Self {
        Self {
            degree: self.degree.trim().to_string(),
            institution: self.institution.trim().to_string(),
            field_of_study: self.field_of_study.trim().to_string(),
            start_year: self.start_year,
            end_year: self.end_year,
        }
    }
}

impl SectionEntry for Education {
    type Draft = EducationDraft;
    type Query = super::repositories::NoFilter;

    const KIND: SectionKind = SectionKind::Education;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn draft(&self) -> EducationDraft {
        EducationDraft {
            degree: self.degree.clone(),
            institution: self.institution.clone(),
            field_of_study: self.field_of_study.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
        }
    }

    fn from_draft(id: EntryId, draft: &EducationDraft) -> Self {
        Self {
            id,
            degree: draft.degree.clone(),
            institution: draft.institution.clone(),
            field_of_study: draft.field_of_study.clone(),
            start_year: draft.start_year,
            end_year: draft.end_year,
        }
    }
}

/* =========================================================
   プロジェクト
========================================================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
}

impl SectionDraft for ProjectDraft {
    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            skills: trimmed_skills(&self.skills),
            github: clean_optional(&self.github),
            live: clean_optional(&self.live),
        }
    }
}

impl SectionEntry for Project {
    type Draft = ProjectDraft;
    type Query = super::repositories::ProjectFilter;

    const KIND: SectionKind = SectionKind::Projects;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
            github: self.github.clone(),
            live: self.live.clone(),
        }
    }

    fn from_draft(id: EntryId, draft: &ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            skills: draft.skills.clone(),
            github: draft.github.clone(),
            live: draft.live.clone(),
        }
    }
}

/* =========================================================
   職歴
========================================================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(rename = "_id")]
    pub id: EntryId,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<IsoDate>,
    #[serde(default)]
    pub end_date: Option<IsoDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDraft {
    pub company: String,
    pub role: String,
    pub description: String,
    pub start_date: Option<IsoDate>,
    pub end_date: Option<IsoDate>,
}

impl SectionDraft for WorkDraft {
    fn trimmed(&self) -> Self {
        Self {
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl SectionEntry for WorkExperience {
    type Draft = WorkDraft;
    type Query = super::repositories::WorkFilter;

    const KIND: SectionKind = SectionKind::Work;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn draft(&self) -> WorkDraft {
        WorkDraft {
            company: self.company.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    fn from_draft(id: EntryId, draft: &WorkDraft) -> Self {
        Self {
            id,
            company: draft.company.clone(),
            role: draft.role.clone(),
            description: draft.description.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }
}

/* =========================================================
   資格
========================================================= */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(rename = "_id")]
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: Option<IsoDate>,
    #[serde(default)]
    pub expiration_date: Option<IsoDate>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDraft {
    pub title: String,
    pub issuer: String,
    pub issue_date: Option<IsoDate>,
    pub expiration_date: Option<IsoDate>,
    pub link: Option<String>,
}

impl SectionDraft for CertificateDraft {
    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            issuer: self.issuer.trim().to_string(),
            issue_date: self.issue_date,
            expiration_date: self.expiration_date,
            link: clean_optional(&self.link),
        }
    }
}

impl SectionEntry for Certificate {
    type Draft = CertificateDraft;
    type Query = super::repositories::NoFilter;

    const KIND: SectionKind = SectionKind::Certificates;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn draft(&self) -> CertificateDraft {
        CertificateDraft {
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            issue_date: self.issue_date,
            expiration_date: self.expiration_date,
            link: self.link.clone(),
        }
    }

    fn from_draft(id: EntryId, draft: &CertificateDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            issuer: draft.issuer.clone(),
            issue_date: draft.issue_date,
            expiration_date: draft.expiration_date,
            link: draft.link.clone(),
        }
    }
}

/* =========================================================
   スキル
========================================================= */

/// スキル
///
/// `/skills` はプロフィールとプロジェクトから集計されたリストを返す。
/// `count` はトップスキルのランキング重み（無い場合もある）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub skill: String,
    #[serde(default)]
    pub count: Option<u32>,
}

impl Skill {
    pub fn named(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_wire_format() {
        let json = r#"{
            "_id": "64f0c2a9e4b0f8a1b2c3d4e5",
            "degree": "BSc",
            "institution": "State University",
            "fieldOfStudy": "Computer Science",
            "startYear": 2019,
            "endYear": null,
            "__v": 0
        }"#;
        let education: Education = serde_json::from_str(json).unwrap();
        assert_eq!(education.id.as_str(), "64f0c2a9e4b0f8a1b2c3d4e5");
        assert_eq!(education.field_of_study, "Computer Science");
        assert_eq!(education.years().to_string(), "2019 – Present");

        let draft = education.draft();
        assert_eq!(draft.degree, "BSc");
        assert_eq!(draft.end_year, None);

        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload["startYear"], 2019);
        assert_eq!(payload["fieldOfStudy"], "Computer Science");
        assert!(payload["endYear"].is_null());
        assert!(payload.get("_id").is_none());
    }

    #[test]
    fn test_certificate_dates_are_normalized() {
        let json = r#"{
            "_id": "c1",
            "title": "Cloud Architect",
            "issuer": "Example Org",
            "issueDate": "2023-06-15T00:00:00.000Z",
            "expirationDate": null,
            "link": "https://example.com/cert"
        }"#;
        let certificate: Certificate = serde_json::from_str(json).unwrap();
        let draft = certificate.draft();
        assert_eq!(draft.issue_date.unwrap().to_string(), "2023-06-15");
        assert_eq!(draft.expiration_date, None);
    }

    #[test]
    fn test_project_draft_trimming() {
        let draft = ProjectDraft {
            title: "  Portfolio Site  ".to_string(),
            description: "A site.".to_string(),
            skills: vec![" React ".to_string(), String::new(), "Rust".to_string()],
            github: Some("   ".to_string()),
            live: Some(" https://example.com ".to_string()),
        };
        let trimmed = draft.trimmed();
        assert_eq!(trimmed.title, "Portfolio Site");
        assert_eq!(trimmed.skills, vec!["React", "Rust"]);
        assert_eq!(trimmed.github, None);
        assert_eq!(trimmed.live.as_deref(), Some("https://example.com"));

        let payload = serde_json::to_value(&trimmed).unwrap();
        assert!(payload["github"].is_null());
    }

    #[test]
    fn test_from_draft_round_trip() {
        let draft = EducationDraft {
            degree: "MSc".to_string(),
            institution: "Tech Institute".to_string(),
            field_of_study: "Robotics".to_string(),
            start_year: 2021,
            end_year: Some(2023),
        };
        let id = EntryId::generate();
        let entity = Education::from_draft(id.clone(), &draft);
        assert_eq!(entity.id(), &id);
        assert_eq!(entity.draft(), draft);
    }

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{
            "_id": "p1",
            "name": "Aiko",
            "profileDescription": "Systems programmer",
            "education": "BSc Computer Science",
            "skills": ["Rust", "React"],
            "links": {"github": "https://github.com/aiko", "linkedin": null}
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Aiko");
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.links.linkedin, None);

        let draft = profile.draft().trimmed();
        assert_eq!(draft.name, "Aiko");
        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload["profileDescription"], "Systems programmer");
    }
}
