//! Core types for Storepee.
//!
//! This module provides type-safe wrappers for the catalog domain.

pub mod entity;
pub mod form;
pub mod id;
pub mod validation;

pub use entity::{Billboard, Store};
pub use form::{BillboardFormValues, StoreFormValues};
pub use id::*;
pub use validation::{FieldError, Validate, ValidationErrors};
