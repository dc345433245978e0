//! Terminal renderings of the navigator and the confirmation modal.

use std::io::{self, BufRead, Write};

use storepee_dashboard::navigation::{DashboardRoute, Navigator};
use tracing::{debug, info};

/// Navigator that reports where the dashboard would go.
#[derive(Debug, Clone)]
pub struct TerminalNavigator {
    origin: String,
}

impl TerminalNavigator {
    pub const fn new(origin: String) -> Self {
        Self { origin }
    }

    fn url(&self, route: &DashboardRoute) -> String {
        format!("{}{}", self.origin, route.path())
    }
}

impl Navigator for TerminalNavigator {
    fn refresh(&self) {
        debug!("Refresh");
    }

    fn push(&self, route: &DashboardRoute) {
        info!(url = %self.url(route), "Navigate");
    }

    fn assign(&self, route: &DashboardRoute) {
        info!(url = %self.url(route), "Open");
    }
}

/// Ask a y/N question on the terminal. Anything but `y`/`yes` declines.
pub fn prompt_confirm(title: &str, description: &str, subject: &str) -> io::Result<bool> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{title} {description}")?;
    write!(stdout, "Delete {subject}? [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use storepee_core::StoreId;

    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_navigator_url() {
        let store_id = StoreId::new_v4();
        let navigator = TerminalNavigator::new("http://localhost:3000".to_string());
        assert_eq!(
            navigator.url(&DashboardRoute::Settings(store_id)),
            format!("http://localhost:3000/{store_id}/settings")
        );
    }
}
