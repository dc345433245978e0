//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog records are
//! keyed by UUIDs assigned by the backend.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an ID.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("id cannot be empty")]
    Empty,
    /// The input is not a valid UUID.
    #[error("invalid id '{0}': expected a UUID")]
    Malformed(String),
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`uuid::Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `new_v4()`, `as_uuid()`
/// - `Display` (hyphenated form, as it appears in URLs) and `FromStr`
///
/// # Example
///
/// ```rust
/// # use storepee_core::define_id;
/// define_id!(CategoryId);
/// define_id!(ProductId);
///
/// let category_id = CategoryId::new_v4();
/// let product_id: ProductId = category_id.to_string().parse().unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: CategoryId = product_id;
/// # let _ = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Wrap an existing UUID.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh random ID.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err($crate::types::id::IdError::Empty);
                }
                ::uuid::Uuid::parse_str(trimmed)
                    .map(Self)
                    .map_err(|_| $crate::types::id::IdError::Malformed(trimmed.to_owned()))
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(StoreId);
define_id!(BillboardId);

/// Identifier of a signed-in user, issued by the hosted auth provider.
///
/// Unlike catalog IDs this is not a UUID; the provider hands out opaque
/// strings such as `user_2Nf...`. The only requirement is that it is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse a `UserId`, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Empty`] if the input is empty or whitespace.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_hyphenated_uuid() {
        let uuid = uuid::Uuid::parse_str("6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b").unwrap();
        let id = StoreId::new(uuid);
        assert_eq!(id.to_string(), "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b");
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        let id: BillboardId = " 6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b ".parse().unwrap();
        assert_eq!(id.to_string(), "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b");
    }

    #[test]
    fn test_id_parse_errors() {
        assert_eq!("".parse::<StoreId>(), Err(IdError::Empty));
        assert!(matches!(
            "not-a-uuid".parse::<StoreId>(),
            Err(IdError::Malformed(s)) if s == "not-a-uuid"
        ));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = StoreId::new_v4();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: StoreId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_user_id_rejects_empty() {
        assert_eq!(UserId::parse("   "), Err(IdError::Empty));
        assert_eq!(UserId::parse("user_123").unwrap().as_str(), "user_123");
    }
}
