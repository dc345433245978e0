//! Storepee Dashboard library.
//!
//! Headless client for the store catalog admin dashboard. It owns the
//! lifecycle of every entity form (create/edit mode, validation, submit,
//! confirmation-gated delete) and reports outcomes through injected
//! collaborators, so any front end can drive it:
//!
//! - [`api`] - REST surface of the backend and the `reqwest` transport
//! - [`forms`] - Entity form controllers for stores and billboards
//! - [`components`] - Confirmation modal, image field, billboard table
//! - [`navigation`] / [`notify`] - Router and toast seams
//! - [`session`] - Signed-in user and explicit store context
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod notify;
pub mod services;
pub mod session;

#[cfg(test)]
mod test_support;

pub use error::DashboardError;
