//! Navigator and notifier doubles that record what they were asked to do.

use std::sync::{Mutex, PoisonError};

use storepee_dashboard::navigation::{DashboardRoute, Navigator};
use storepee_dashboard::notify::{Notifier, Toast};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Refresh,
    Push(DashboardRoute),
    Assign(DashboardRoute),
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, event: NavEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Navigator for RecordingNavigator {
    fn refresh(&self) {
        self.record(NavEvent::Refresh);
    }

    fn push(&self, route: &DashboardRoute) {
        self.record(NavEvent::Push(*route));
    }

    fn assign(&self, route: &DashboardRoute) {
        self.record(NavEvent::Assign(*route));
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.record(Toast::success(message));
    }

    fn error(&self, message: &str) {
        self.record(Toast::error(message));
    }
}
