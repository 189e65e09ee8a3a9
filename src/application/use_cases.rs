pub mod curate_skills;
pub mod edit_profile;
pub mod monitor_health;
pub mod section_controller;
pub mod view_page;

pub use curate_skills::{SkillBoard, SkillBoardError};
pub use edit_profile::ProfileEditor;
pub use monitor_health::{HealthMonitor, MonitorHandle, DEFAULT_POLL_INTERVAL};
pub use section_controller::{EditorMode, SectionController};
pub use view_page::{PortfolioPage, ViewPageUseCase};
