//! Storepee Core - Shared types library.
//!
//! This crate provides common types used across all Storepee components:
//! - `dashboard` - Headless admin client (form controllers, API client)
//! - `cli` - Terminal front end for the dashboard
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere, including
//! from the mock backend in the integration tests.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, catalog entities, form values and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
