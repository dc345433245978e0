//! Editable form values for each catalog entity.
//!
//! These are exactly the request bodies sent on create and update:
//! store `{"name"}`, billboard `{"label", "imageUrl"}`.

use serde::{Deserialize, Serialize};

use super::entity::{Billboard, Store};
use super::validation::{Validate, ValidationErrors};

/// Values of the store form (settings page and store-creation modal).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFormValues {
    pub name: String,
}

impl StoreFormValues {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&Store> for StoreFormValues {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
        }
    }
}

impl Validate for StoreFormValues {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}

/// Values of the billboard form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardFormValues {
    pub label: String,
    pub image_url: String,
}

impl BillboardFormValues {
    #[must_use]
    pub fn new(label: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image_url: image_url.into(),
        }
    }
}

impl From<&Billboard> for BillboardFormValues {
    fn from(billboard: &Billboard) -> Self {
        Self {
            label: billboard.label.clone(),
            image_url: billboard.image_url.clone(),
        }
    }
}

impl Validate for BillboardFormValues {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        // Image field is rendered above the label.
        errors.require("imageUrl", &self.image_url);
        errors.require("label", &self.label);
        errors.into_result()
    }
}
