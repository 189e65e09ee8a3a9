//! Text rendering for the portfolio page and its sections.
//!
//! The page mirrors the web layout: a status line, a hero block with the
//! profile, then one block per section separated by horizontal rules.

use crate::application::use_cases::view_page::PortfolioPage;
use crate::domain::health::value_objects::ServerStatus;
use crate::domain::portfolio::entities::{
    Certificate, Education, Profile, Project, Skill, WorkExperience,
};
use crate::domain::portfolio::value_objects::{IsoDate, SectionKind};
use crate::interfaces::console::status_banner::status_banner;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn format_date(date: &Option<IsoDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Render a full page snapshot as terminal text.
pub fn render_page(page: &PortfolioPage, status: ServerStatus) -> String {
    let mut out = String::new();
    out.push_str(&status_banner(status));
    out.push('\n');
    out.push_str(&rule());
    out.push('\n');

    out.push_str(&hero_block(page.profile.as_ref()));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&section_block(
        SectionKind::Education.title(),
        &page.education,
        education_block,
    ));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&skills_block(&page.skills, &page.top_skills));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&section_block(
        SectionKind::Projects.title(),
        &page.projects,
        project_block,
    ));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&section_block(SectionKind::Work.title(), &page.work, work_block));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&section_block(
        SectionKind::Certificates.title(),
        &page.certificates,
        certificate_block,
    ));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "portfolio-console v{} (built {})\n",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIMESTAMP"),
    ));
    out
}

fn hero_block(profile: Option<&Profile>) -> String {
    match profile {
        Some(profile) => {
            let mut out = format!("Hello, I am {}!\n", profile.name);
            if !profile.profile_description.is_empty() {
                out.push_str(&profile.profile_description);
                out.push('\n');
            }
            out
        }
        None => "No profile yet.\n".to_string(),
    }
}

fn section_block<E>(title: &str, entries: &[E], format: fn(&E) -> String) -> String {
    let mut out = format!("{}\n\n", title);
    if entries.is_empty() {
        out.push_str("  No entries yet.\n");
        return out;
    }
    for entry in entries {
        out.push_str(&format(entry));
        out.push('\n');
    }
    out
}

pub fn education_block(entry: &Education) -> String {
    let mut out = format!("  {}", entry.degree);
    if !entry.field_of_study.is_empty() {
        out.push_str(&format!(" — {}", entry.field_of_study));
    }
    out.push('\n');
    out.push_str(&format!("    {}\n", entry.institution));
    out.push_str(&format!("    {}\n", entry.years()));
    out
}

pub fn project_block(entry: &Project) -> String {
    let mut out = format!("  {}\n", entry.title);
    if !entry.description.is_empty() {
        out.push_str(&format!("    {}\n", entry.description));
    }
    if !entry.skills.is_empty() {
        out.push_str(&format!("    Skills: {}\n", entry.skills.join(", ")));
    }
    if let Some(github) = &entry.github {
        out.push_str(&format!("    GitHub: {}\n", github));
    }
    if let Some(live) = &entry.live {
        out.push_str(&format!("    Live: {}\n", live));
    }
    out
}

pub fn work_block(entry: &WorkExperience) -> String {
    let start = format_date(&entry.start_date);
    let end = entry
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Present".to_string());
    let mut out = format!("  {} @ {} ({} – {})\n", entry.role, entry.company, start, end);
    if !entry.description.is_empty() {
        out.push_str(&format!("    {}\n", entry.description));
    }
    out
}

pub fn certificate_block(entry: &Certificate) -> String {
    let mut out = format!("  {} — {}\n", entry.title, entry.issuer);
    out.push_str(&format!(
        "    Issued: {}  Expires: {}\n",
        format_date(&entry.issue_date),
        format_date(&entry.expiration_date),
    ));
    if let Some(link) = &entry.link {
        out.push_str(&format!("    Link: {}\n", link));
    }
    out
}

fn skills_block(skills: &[Skill], top_skills: &[Skill]) -> String {
    let mut out = "Skills\n\n".to_string();
    if !top_skills.is_empty() {
        out.push_str(&format!("  Top: {}\n", skill_list(top_skills)));
    }
    if skills.is_empty() {
        out.push_str("  No entries yet.\n");
    } else {
        out.push_str(&format!("  All: {}\n", skill_list(skills)));
    }
    out
}

pub fn skill_list(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|s| match s.count {
            Some(count) => format!("{} ({})", s.skill, count),
            None => s.skill.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::entities::ProfileLinks;
    use crate::domain::portfolio::value_objects::EntryId;

    fn sample_page() -> PortfolioPage {
        PortfolioPage {
            profile: Some(Profile {
                id: None,
                name: "Aiko".to_string(),
                profile_description: "Systems programmer".to_string(),
                education: String::new(),
                skills: vec!["Rust".to_string()],
                links: ProfileLinks::default(),
            }),
            education: vec![Education {
                id: EntryId::new("e1"),
                degree: "BSc".to_string(),
                institution: "State University".to_string(),
                field_of_study: "Computer Science".to_string(),
                start_year: 2019,
                end_year: None,
            }],
            skills: vec![Skill::named("Rust")],
            top_skills: vec![Skill {
                skill: "Rust".to_string(),
                count: Some(4),
            }],
            projects: vec![],
            work: vec![],
            certificates: vec![],
        }
    }

    #[test]
    fn test_page_renders_every_section() {
        let rendered = render_page(&sample_page(), ServerStatus::Online);
        assert!(rendered.contains("🟢 Server is live"));
        assert!(rendered.contains("Hello, I am Aiko!"));
        assert!(rendered.contains("Education"));
        assert!(rendered.contains("2019 – Present"));
        assert!(rendered.contains("Top: Rust (4)"));
        assert!(rendered.contains("Projects"));
        assert!(rendered.contains("No entries yet."));
    }

    #[test]
    fn test_page_without_profile_still_renders() {
        let mut page = sample_page();
        page.profile = None;
        let rendered = render_page(&page, ServerStatus::Offline);
        assert!(rendered.contains("No profile yet."));
        assert!(rendered.contains("🔴 Server is offline"));
    }

    #[test]
    fn test_work_block_shows_open_range() {
        let entry = WorkExperience {
            id: EntryId::new("w1"),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            description: String::new(),
            start_date: IsoDate::parse("2022-04-01").ok(),
            end_date: None,
        };
        let block = work_block(&entry);
        assert!(block.contains("Engineer @ Acme (2022-04-01 – Present)"));
    }
}
