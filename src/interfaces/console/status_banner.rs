//! Server status indicator line shown above the page.

use crate::domain::health::value_objects::ServerStatus;

/// Render the three-state indicator the same way the page header shows it.
pub fn status_banner(status: ServerStatus) -> String {
    match status {
        ServerStatus::Checking => "⏳ Checking server status...".to_string(),
        ServerStatus::Online => "🟢 Server is live".to_string(),
        ServerStatus::Offline => "🔴 Server is offline".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_covers_all_states() {
        assert_eq!(
            status_banner(ServerStatus::Checking),
            "⏳ Checking server status..."
        );
        assert_eq!(status_banner(ServerStatus::Online), "🟢 Server is live");
        assert_eq!(status_banner(ServerStatus::Offline), "🔴 Server is offline");
    }
}
