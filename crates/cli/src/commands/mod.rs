//! Command implementations.
//!
//! Each command builds one controller, drives it once and turns the outcome
//! into a [`CommandError`] for the exit code. User-facing messages are
//! emitted by the controllers as toasts.

pub mod billboard;
pub mod store;

use std::io;

use storepee_core::StoreId;
use storepee_dashboard::DashboardError;
use storepee_dashboard::api::ApiClient;
use storepee_dashboard::components::{ApiAlert, ConfirmModal, ModalAction};
use storepee_dashboard::config::DashboardConfig;
use storepee_dashboard::notify::TracingNotifier;
use storepee_dashboard::services::Services;
use storepee_dashboard::session::{StaticAuthProvider, require_session};
use thiserror::Error;

use crate::terminal::{TerminalNavigator, prompt_confirm};

/// Errors that end a command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// The confirmation prompt could not be read.
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] io::Error),
}

pub type CliServices = Services<ApiClient, TerminalNavigator, TracingNotifier>;

/// Check the session and build the collaborators of one command.
fn connect(config: &DashboardConfig) -> Result<CliServices, CommandError> {
    let navigator = TerminalNavigator::new(config.origin());
    let auth = StaticAuthProvider::new(config.user_id.clone());
    require_session(&auth, &navigator)?;

    let client = ApiClient::from_config(config).map_err(DashboardError::from)?;
    Ok(Services::new(client, navigator, TracingNotifier))
}

/// Ask before a destructive action unless `--yes` was given.
///
/// Returns the button the user pressed on the confirmation modal.
fn confirm(modal: ConfirmModal, subject: &str, yes: bool) -> Result<ModalAction, CommandError> {
    if yes {
        return Ok(modal.press_confirm());
    }
    if prompt_confirm(ConfirmModal::TITLE, ConfirmModal::DESCRIPTION, subject)? {
        Ok(modal.press_confirm())
    } else {
        Ok(modal.press_cancel())
    }
}

/// Print the public API URL of a store.
#[allow(clippy::print_stdout)]
pub fn api_url(config: &DashboardConfig, store_id: StoreId) {
    let alert = ApiAlert::store_api(&config.origin(), store_id);
    println!("{} ({})", alert.title, alert.variant.label());
    println!("{}", alert.description);
}
