use clap::{Parser, Subcommand};
use portfolio_console::domain::portfolio::value_objects::IsoDate;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-console",
    author = "Portfolio Console Team",
    version,
    about = "A terminal client for the personal portfolio API",
    long_about = "A terminal client that fetches and edits the profile, education, work, skills, project and certificate records exposed by the portfolio REST backend"
)]
pub struct Cli {
    /// Base URL of the portfolio API (overrides PORTFOLIO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the whole portfolio page
    Show,
    /// Probe backend health and show the status indicator
    Status {
        /// Keep polling and print every status change
        #[arg(short, long)]
        watch: bool,
        /// Poll interval in seconds
        #[arg(short, long, default_value = "10")]
        interval: u64,
    },
    /// Manage education entries
    Education {
        #[command(subcommand)]
        command: EducationCommand,
    },
    /// Manage project entries
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Manage work experience entries
    Work {
        #[command(subcommand)]
        command: WorkCommand,
    },
    /// Manage certificate entries
    Certificates {
        #[command(subcommand)]
        command: CertificateCommand,
    },
    /// Manage the skill board
    Skills {
        #[command(subcommand)]
        command: SkillCommand,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum EducationCommand {
    /// List education entries
    List,
    /// Add an education entry
    Add {
        #[arg(long)]
        degree: String,
        #[arg(long)]
        institution: String,
        #[arg(long)]
        field_of_study: String,
        #[arg(long)]
        start_year: i32,
        #[arg(long)]
        end_year: Option<i32>,
    },
    /// Update an education entry
    Update {
        /// Id of the entry to update
        id: String,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        field_of_study: Option<String>,
        #[arg(long)]
        start_year: Option<i32>,
        #[arg(long)]
        end_year: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List projects, optionally filtered
    List {
        /// Filter by title substring
        #[arg(long)]
        title: Option<String>,
        /// Filter by skill
        #[arg(long)]
        skill: Option<String>,
        /// Filter by description substring
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a project
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma separated skill list (e.g. "React, Rust")
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        live: Option<String>,
    },
    /// Update a project
    Update {
        /// Id of the project to update
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Comma separated skill list, replaces the stored list
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        live: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkCommand {
    /// List work experience entries, optionally filtered
    List {
        /// Filter by company substring
        #[arg(long)]
        company: Option<String>,
        /// Filter by role substring
        #[arg(long)]
        role: Option<String>,
    },
    /// Add a work experience entry
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Start date as YYYY-MM-DD
        #[arg(long)]
        start_date: Option<IsoDate>,
        /// End date as YYYY-MM-DD (omit when ongoing)
        #[arg(long)]
        end_date: Option<IsoDate>,
    },
    /// Update a work experience entry
    Update {
        /// Id of the entry to update
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start_date: Option<IsoDate>,
        #[arg(long)]
        end_date: Option<IsoDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CertificateCommand {
    /// List certificates
    List,
    /// Add a certificate
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        issuer: String,
        /// Issue date as YYYY-MM-DD
        #[arg(long)]
        issue_date: Option<IsoDate>,
        /// Expiration date as YYYY-MM-DD (omit when it does not expire)
        #[arg(long)]
        expiration_date: Option<IsoDate>,
        #[arg(long)]
        link: Option<String>,
    },
    /// Update a certificate
    Update {
        /// Id of the certificate to update
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        issuer: Option<String>,
        #[arg(long)]
        issue_date: Option<IsoDate>,
        #[arg(long)]
        expiration_date: Option<IsoDate>,
        #[arg(long)]
        link: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// List every skill
    List,
    /// List the top skills (e.g. top 5)
    Top,
    /// Add a skill to the profile
    Add {
        /// Skill name (e.g. Docker)
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the profile
    Show,
    /// Edit the profile (creates it when missing)
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        education: Option<String>,
        /// Comma separated skill list, replaces the stored list
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        #[arg(long)]
        github: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
    },
}
