//! Alert showing a copyable API URL.

use serde::Serialize;
use storepee_core::StoreId;

use super::billboard_table::Clipboard;
use crate::api::ApiRoutes;
use crate::notify::Notifier;

const COPIED: &str = "API Route copied to clipboard.";

/// Audience of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertVariant {
    Public,
}

impl AlertVariant {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Public",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiAlert {
    pub title: String,
    pub description: String,
    pub variant: AlertVariant,
}

impl ApiAlert {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, variant: AlertVariant) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    /// Public API base URL of a store, as shown on the settings page.
    ///
    /// `origin` has no trailing slash, e.g. `https://admin.example.com`.
    #[must_use]
    pub fn store_api(origin: &str, store_id: StoreId) -> Self {
        Self::new(
            "NEXT_PUBLIC_API_URL",
            format!("{origin}{}", ApiRoutes::store_api(store_id)),
            AlertVariant::Public,
        )
    }

    /// Copy the URL and confirm with a toast.
    pub fn copy<C, S>(&self, clipboard: &C, notifier: &S)
    where
        C: Clipboard + ?Sized,
        S: Notifier + ?Sized,
    {
        clipboard.write_text(&self.description);
        notifier.success(COPIED);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::Toast;
    use crate::test_support::{MemoryClipboard, RecordingNotifier};

    #[test]
    fn test_store_api_url() {
        let store_id = StoreId::new_v4();
        let alert = ApiAlert::store_api("http://localhost:3000", store_id);

        assert_eq!(alert.title, "NEXT_PUBLIC_API_URL");
        assert_eq!(alert.description, format!("http://localhost:3000/api/{store_id}"));
        assert_eq!(alert.variant.label(), "Public");
    }

    #[test]
    fn test_copy_writes_url_and_toasts() {
        let alert = ApiAlert::store_api("http://localhost:3000", StoreId::new_v4());
        let clipboard = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();

        alert.copy(&clipboard, &notifier);

        assert_eq!(clipboard.text(), Some(alert.description.clone()));
        assert_eq!(notifier.toasts(), vec![Toast::success("API Route copied to clipboard.")]);
    }
}
