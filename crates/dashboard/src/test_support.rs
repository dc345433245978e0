//! Scripted collaborators for unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use storepee_core::{Billboard, BillboardId, Store, StoreId, UserId};

use crate::api::{ApiError, ApiRequest, ApiResponse, Transport};
use crate::components::Clipboard;
use crate::navigation::{DashboardRoute, Navigator};
use crate::notify::{Notifier, Toast};
use crate::services::Services;

type SendHook = Box<dyn Fn() + Send + Sync>;

/// Transport answering from a script and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
    on_send: Option<SendHook>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an HTTP response.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a failure where no response arrives.
    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Request(message.to_string())));
        self
    }

    /// Run `hook` while each request is in flight.
    pub fn on_send(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_send = Some(Box::new(hook));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        if let Some(hook) = &self.on_send {
            hook();
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Request("no scripted response".to_string())))
    }
}

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
        self.events.lock().unwrap().clone()
    }

    pub fn pushed(&self) -> Vec<DashboardRoute> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NavEvent::Push(route) => Some(route),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn refresh(&self) {
        self.events.lock().unwrap().push(NavEvent::Refresh);
    }

    fn push(&self, route: &DashboardRoute) {
        self.events.lock().unwrap().push(NavEvent::Push(*route));
    }

    fn assign(&self, route: &DashboardRoute) {
        self.events.lock().unwrap().push(NavEvent::Assign(*route));
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.lock().unwrap().push(Toast::success(message));
    }

    fn error(&self, message: &str) {
        self.toasts.lock().unwrap().push(Toast::error(message));
    }
}

/// Clipboard keeping the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard(Mutex<Option<String>>);

impl MemoryClipboard {
    pub fn text(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self.0.lock().unwrap() = Some(text.to_string());
    }
}

pub type TestServices = Services<FakeTransport, RecordingNavigator, RecordingNotifier>;

pub fn services(transport: FakeTransport) -> TestServices {
    Services::new(
        transport,
        RecordingNavigator::default(),
        RecordingNotifier::default(),
    )
}

pub fn test_store() -> Store {
    let now = Utc::now();
    Store {
        id: StoreId::new_v4(),
        name: "Main Street".to_string(),
        user_id: UserId::parse("user_1").unwrap(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_billboard(store_id: StoreId) -> Billboard {
    let now = Utc::now();
    Billboard {
        id: BillboardId::new_v4(),
        store_id,
        label: "Spring Sale".to_string(),
        image_url: "https://cdn/spring.png".to_string(),
        created_at: now,
        updated_at: now,
    }
}
