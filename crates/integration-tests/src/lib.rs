//! Integration tests for the Storepee dashboard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storepee-integration-tests
//! ```
//!
//! Every test gets its own [`TestContext`]: an in-memory backend serving the
//! dashboard REST surface on `127.0.0.1:<random port>`, a real
//! [`ApiClient`] pointed at it, and recording navigator/notifier doubles.
//!
//! # Test Categories
//!
//! - `api_client` - Transport behaviour against a live HTTP server
//! - `billboard_forms` - Billboard form, row actions and validation
//! - `store_forms` - Store modal, settings form and dependent-blocked deletes

pub mod backend;
pub mod recording;

use std::net::Ipv4Addr;

use secrecy::SecretString;
use storepee_core::{Billboard, Store, StoreId};
use storepee_dashboard::api::ApiClient;
use storepee_dashboard::services::Services;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

pub use backend::{MockBackend, RecordedRequest};
pub use recording::{NavEvent, RecordingNavigator, RecordingNotifier};

/// Session token accepted by the mock backend.
pub const TEST_SESSION_TOKEN: &str = "test-session-8f3a1c";

pub type TestServices = Services<ApiClient, RecordingNavigator, RecordingNotifier>;

/// A running mock backend plus collaborators wired to it.
pub struct TestContext {
    pub backend: MockBackend,
    pub base_url: Url,
    pub services: TestServices,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestContext {
    /// Start a backend and a client signed in with [`TEST_SESSION_TOKEN`].
    pub async fn new() -> Self {
        Self::start(Some(TEST_SESSION_TOKEN)).await
    }

    /// Start a backend and a client without a session token.
    pub async fn signed_out() -> Self {
        Self::start(None).await
    }

    async fn start(token: Option<&str>) -> Self {
        let backend = MockBackend::new(TEST_SESSION_TOKEN);

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to bind mock backend");
        let addr = listener
            .local_addr()
            .expect("Mock backend has no local address");
        let base_url =
            Url::parse(&format!("http://{addr}/")).expect("Mock backend URL is invalid");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = backend.router();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("Mock backend error");
        });

        let mut client = ApiClient::new(base_url.clone());
        if let Some(token) = token {
            client = client.with_session_token(SecretString::from(token.to_owned()));
        }

        Self {
            backend,
            base_url,
            services: Services::new(
                client,
                RecordingNavigator::default(),
                RecordingNotifier::default(),
            ),
            shutdown: Some(shutdown_tx),
        }
    }

    /// Insert a store directly into the backend.
    pub fn seed_store(&self, name: &str) -> Store {
        self.backend.insert_store(name)
    }

    /// Insert a billboard directly into the backend.
    pub fn seed_billboard(&self, store_id: StoreId, label: &str) -> Billboard {
        self.backend
            .insert_billboard(store_id, label, "https://res.cloudinary.com/demo/seed.png")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
