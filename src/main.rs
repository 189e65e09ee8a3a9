mod cli;

use crate::cli::{
    CertificateCommand, Cli, Commands, EducationCommand, ProfileCommand, ProjectCommand,
    SkillCommand, WorkCommand,
};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use portfolio_console::application::use_cases::{
    DEFAULT_POLL_INTERVAL, HealthMonitor, ProfileEditor, SectionController, SkillBoard,
    ViewPageUseCase,
};
use portfolio_console::debug::{DebugConfig, init_logging};
use portfolio_console::domain::portfolio::entities::{
    Certificate, CertificateDraft, Education, EducationDraft, Project, ProjectDraft, SectionEntry,
    WorkDraft, WorkExperience,
};
use portfolio_console::domain::portfolio::repositories::{ProjectFilter, WorkFilter};
use portfolio_console::infrastructure::api::{ApiConfig, HttpApi};
use portfolio_console::interfaces::console::{
    certificate_block, education_block, project_block, render_page, skill_list, status_banner,
    work_block,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let debug_config = DebugConfig::from_environment();
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    let api_config = ApiConfig::from_env(cli.api_url.clone());
    info!(base_url = %api_config.base_url, "Using portfolio API");
    let api = Arc::new(HttpApi::new(&api_config)?);

    let result = match cli.command {
        Commands::Show => show(api).await,
        Commands::Status { watch, interval } => status(api, watch, interval).await,
        Commands::Education { command } => education(api, command).await,
        Commands::Projects { command } => projects(api, command).await,
        Commands::Work { command } => work(api, command).await,
        Commands::Certificates { command } => certificates(api, command).await,
        Commands::Skills { command } => skills(api, command).await,
        Commands::Profile { command } => profile(api, command).await,
    };

    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

/// Render the full portfolio page with a fresh health probe.
async fn show(api: Arc<HttpApi>) -> anyhow::Result<()> {
    let monitor = HealthMonitor::new(api.clone(), DEFAULT_POLL_INTERVAL);
    let server_status = monitor.probe_once().await;

    let use_case = ViewPageUseCase::new(
        api.clone(),
        api.clone(),
        api.clone(),
        api.clone(),
        api.clone(),
        api,
    );
    let page = use_case.execute().await;
    print!("{}", render_page(&page, server_status));
    Ok(())
}

async fn status(api: Arc<HttpApi>, watch: bool, interval: u64) -> anyhow::Result<()> {
    let monitor = HealthMonitor::new(api, Duration::from_secs(interval.max(1)));
    if !watch {
        let server_status = monitor.probe_once().await;
        println!("{}", status_banner(server_status));
        return Ok(());
    }

    info!(interval_secs = interval, "Watching backend health");
    let mut handle = monitor.spawn();
    let mut last = handle.status();
    println!("{}", status_banner(last));
    while handle.changed().await.is_ok() {
        let current = handle.status();
        if current != last {
            println!("{}", status_banner(current));
            last = current;
        }
    }
    Ok(())
}

async fn education(api: Arc<HttpApi>, command: EducationCommand) -> anyhow::Result<()> {
    let mut controller = SectionController::<Education, _>::new(api);
    match command {
        EducationCommand::List => {
            controller.refresh().await;
            print_entries(controller.entries(), education_block);
        }
        EducationCommand::Add {
            degree,
            institution,
            field_of_study,
            start_year,
            end_year,
        } => {
            controller.start_add();
            *controller.form_mut() = EducationDraft {
                degree,
                institution,
                field_of_study,
                start_year,
                end_year,
            };
            controller.save().await?;
            println!("✅ Education entry added");
        }
        EducationCommand::Update {
            id,
            degree,
            institution,
            field_of_study,
            start_year,
            end_year,
        } => {
            controller.refresh().await;
            let entry = find_entry(controller.entries(), &id)?;
            controller.start_edit(&entry);
            let form = controller.form_mut();
            if let Some(degree) = degree {
                form.degree = degree;
            }
            if let Some(institution) = institution {
                form.institution = institution;
            }
            if let Some(field_of_study) = field_of_study {
                form.field_of_study = field_of_study;
            }
            if let Some(start_year) = start_year {
                form.start_year = start_year;
            }
            if let Some(end_year) = end_year {
                form.end_year = Some(end_year);
            }
            controller.save().await?;
            println!("✅ Education entry updated");
        }
    }
    Ok(())
}

async fn projects(api: Arc<HttpApi>, command: ProjectCommand) -> anyhow::Result<()> {
    let mut controller = SectionController::<Project, _>::new(api);
    match command {
        ProjectCommand::List {
            title,
            skill,
            description,
        } => {
            controller.set_filter(ProjectFilter {
                title,
                skill,
                description,
            });
            controller.refresh().await;
            print_entries(controller.entries(), project_block);
        }
        ProjectCommand::Add {
            title,
            description,
            skills,
            github,
            live,
        } => {
            controller.start_add();
            *controller.form_mut() = ProjectDraft {
                title,
                description,
                skills,
                github,
                live,
            };
            controller.save().await?;
            println!("✅ Project added");
        }
        ProjectCommand::Update {
            id,
            title,
            description,
            skills,
            github,
            live,
        } => {
            controller.refresh().await;
            let entry = find_entry(controller.entries(), &id)?;
            controller.start_edit(&entry);
            let form = controller.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(skills) = skills {
                form.skills = skills;
            }
            if let Some(github) = github {
                form.github = Some(github);
            }
            if let Some(live) = live {
                form.live = Some(live);
            }
            controller.save().await?;
            println!("✅ Project updated");
        }
    }
    Ok(())
}

async fn work(api: Arc<HttpApi>, command: WorkCommand) -> anyhow::Result<()> {
    let mut controller = SectionController::<WorkExperience, _>::new(api);
    match command {
        WorkCommand::List { company, role } => {
            controller.set_filter(WorkFilter { company, role });
            controller.refresh().await;
            print_entries(controller.entries(), work_block);
        }
        WorkCommand::Add {
            company,
            role,
            description,
            start_date,
            end_date,
        } => {
            controller.start_add();
            *controller.form_mut() = WorkDraft {
                company,
                role,
                description,
                start_date,
                end_date,
            };
            controller.save().await?;
            println!("✅ Work experience added");
        }
        WorkCommand::Update {
            id,
            company,
            role,
            description,
            start_date,
            end_date,
        } => {
            controller.refresh().await;
            let entry = find_entry(controller.entries(), &id)?;
            controller.start_edit(&entry);
            let form = controller.form_mut();
            if let Some(company) = company {
                form.company = company;
            }
            if let Some(role) = role {
                form.role = role;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(start_date) = start_date {
                form.start_date = Some(start_date);
            }
            if let Some(end_date) = end_date {
                form.end_date = Some(end_date);
            }
            controller.save().await?;
            println!("✅ Work experience updated");
        }
    }
    Ok(())
}

async fn certificates(api: Arc<HttpApi>, command: CertificateCommand) -> anyhow::Result<()> {
    let mut controller = SectionController::<Certificate, _>::new(api);
    match command {
        CertificateCommand::List => {
            controller.refresh().await;
            print_entries(controller.entries(), certificate_block);
        }
        CertificateCommand::Add {
            title,
            issuer,
            issue_date,
            expiration_date,
            link,
        } => {
            controller.start_add();
            *controller.form_mut() = CertificateDraft {
                title,
                issuer,
                issue_date,
                expiration_date,
                link,
            };
            controller.save().await?;
            println!("✅ Certificate added");
        }
        CertificateCommand::Update {
            id,
            title,
            issuer,
            issue_date,
            expiration_date,
            link,
        } => {
            controller.refresh().await;
            let entry = find_entry(controller.entries(), &id)?;
            controller.start_edit(&entry);
            let form = controller.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(issuer) = issuer {
                form.issuer = issuer;
            }
            if let Some(issue_date) = issue_date {
                form.issue_date = Some(issue_date);
            }
            if let Some(expiration_date) = expiration_date {
                form.expiration_date = Some(expiration_date);
            }
            if let Some(link) = link {
                form.link = Some(link);
            }
            controller.save().await?;
            println!("✅ Certificate updated");
        }
    }
    Ok(())
}

async fn skills(api: Arc<HttpApi>, command: SkillCommand) -> anyhow::Result<()> {
    let mut board = SkillBoard::new(api.clone(), api);
    match command {
        SkillCommand::List => {
            board.refresh().await;
            if board.all().is_empty() {
                println!("No skills yet.");
            } else {
                println!("{}", skill_list(board.all()));
            }
        }
        SkillCommand::Top => {
            board.refresh().await;
            if board.top().is_empty() {
                println!("No top skills yet.");
            } else {
                println!("{}", skill_list(board.top()));
            }
        }
        SkillCommand::Add { name } => {
            // 重複チェックのために現在の一覧を読み込んでおく
            board.refresh().await;
            board.add_skill(&name).await?;
            println!("✅ Skill added: {}", name.trim());
        }
    }
    Ok(())
}

async fn profile(api: Arc<HttpApi>, command: ProfileCommand) -> anyhow::Result<()> {
    let mut editor = ProfileEditor::new(api);
    match command {
        ProfileCommand::Show => {
            editor.load().await?;
            match editor.profile() {
                Some(profile) => {
                    println!("{}", profile.name);
                    if !profile.profile_description.is_empty() {
                        println!("{}", profile.profile_description);
                    }
                    if !profile.education.is_empty() {
                        println!("Education: {}", profile.education);
                    }
                    if !profile.skills.is_empty() {
                        println!("Skills: {}", profile.skills.join(", "));
                    }
                    if let Some(github) = &profile.links.github {
                        println!("GitHub: {}", github);
                    }
                    if let Some(linkedin) = &profile.links.linkedin {
                        println!("LinkedIn: {}", linkedin);
                    }
                }
                None => println!("No profile yet."),
            }
        }
        ProfileCommand::Edit {
            name,
            description,
            education,
            skills,
            github,
            linkedin,
        } => {
            editor.load().await?;
            editor.start_edit();
            let form = editor.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.profile_description = description;
            }
            if let Some(education) = education {
                form.education = education;
            }
            if let Some(skills) = skills {
                form.skills = skills;
            }
            if let Some(github) = github {
                form.links.github = Some(github);
            }
            if let Some(linkedin) = linkedin {
                form.links.linkedin = Some(linkedin);
            }
            editor.save().await?;
            println!("✅ Profile saved");
        }
    }
    Ok(())
}

fn print_entries<E>(entries: &[E], block: fn(&E) -> String) {
    if entries.is_empty() {
        println!("No entries yet.");
        return;
    }
    for entry in entries {
        print!("{}", block(entry));
    }
}

fn find_entry<E: SectionEntry>(entries: &[E], id: &str) -> anyhow::Result<E> {
    entries
        .iter()
        .find(|entry| entry.id().as_str() == id)
        .cloned()
        .with_context(|| format!("No {} entry with id {}", E::KIND.resource(), id))
}
