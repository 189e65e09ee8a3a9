//! ポートフォリオ集約
//!
//! プロフィール、学歴、職歴、プロジェクト、資格、スキルの
//! 各レコードとその編集・取得に関するモジュール

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::{
    Certificate, CertificateDraft, Education, EducationDraft, Profile, ProfileDraft, ProfileLinks,
    Project, ProjectDraft, SectionDraft, SectionEntry, SectionQuery, Skill, WorkDraft,
    WorkExperience,
};
pub use repositories::{
    ApiError, NoFilter, ProfileRepository, ProjectFilter, SectionRepository, SkillRepository,
    WorkFilter,
};
pub use value_objects::{EntryId, IsoDate, SectionKind, SkillName, YearRange};
