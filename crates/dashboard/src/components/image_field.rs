//! Image reference field backed by a hosted upload widget.
//!
//! The field stores a URL, never image bytes. Uploading is delegated to an
//! [`UploadWidget`], which reports the hosted file's `secure_url`.

use serde::Deserialize;
use tracing::debug;

/// Upload widget settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadWidgetConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

impl UploadWidgetConfig {
    /// Unsigned upload endpoint of the image host.
    #[must_use]
    pub fn upload_endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

/// Payload the widget reports after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    pub info: UploadInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadInfo {
    pub secure_url: String,
}

/// Hosted upload widget.
pub trait UploadWidget {
    /// Open the widget. `on_uploaded` runs once per completed upload.
    fn open(&mut self, on_uploaded: &mut dyn FnMut(UploadResult));
}

/// Zero-or-one image URL of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageField {
    value: String,
}

impl ImageField {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current URL; empty when no image is set.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Images to preview.
    #[must_use]
    pub fn images(&self) -> &[String] {
        if self.value.is_empty() {
            &[]
        } else {
            std::slice::from_ref(&self.value)
        }
    }

    /// Store the URL of a finished upload.
    pub fn on_uploaded(&mut self, result: UploadResult) {
        debug!(url = %result.info.secure_url, "Image uploaded");
        self.value = result.info.secure_url;
    }

    pub fn remove(&mut self) {
        self.value.clear();
    }

    /// Open the upload widget unless the form is busy.
    ///
    /// Returns whether the widget was opened.
    pub fn upload<W: UploadWidget + ?Sized>(&mut self, widget: &mut W, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        widget.open(&mut |result| self.on_uploaded(result));
        true
    }
}
