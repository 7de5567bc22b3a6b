//! File reference model

use std::fmt;

use serde::{Deserialize, Serialize};

/// File name sent for the `document` part when the picked file has none.
pub const DEFAULT_UPLOAD_NAME: &str = "document";

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Which platform mechanism produced a [`FileReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrigin {
    /// OS document chooser.
    NativePicker,
    /// Browser `<input type="file">`.
    BrowserInput,
}

impl fmt::Display for FileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativePicker => write!(f, "native picker"),
            Self::BrowserInput => write!(f, "browser input"),
        }
    }
}

/// In-memory descriptor of a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Where the bytes can be read from (`file://`, `blob:` or `http(s)://`).
    pub source_uri: String,
    /// Name shown to the user and sent as the part's file name.
    pub display_name: String,
    /// Size reported by the host, if known.
    pub size_bytes: Option<u64>,
    /// Content type reported or guessed by the host, if known.
    pub mime_type: Option<String>,
    /// Mechanism that produced this reference.
    pub origin: FileOrigin,
}

impl FileReference {
    /// Create a reference with no size or content type.
    pub fn new(
        source_uri: impl Into<String>,
        display_name: impl Into<String>,
        origin: FileOrigin,
    ) -> Self {
        Self {
            source_uri: source_uri.into(),
            display_name: display_name.into().trim().to_string(),
            size_bytes: None,
            mime_type: None,
            origin,
        }
    }

    /// Map a browser `File` that has been exposed through an object URL.
    pub fn from_browser_file(
        object_url: impl Into<String>,
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: &str,
    ) -> Self {
        Self::new(object_url, name, FileOrigin::BrowserInput)
            .with_size(Some(size_bytes))
            .with_mime_type(Some(mime_type.to_string()))
    }

    /// Map a path chosen in the OS document picker.
    ///
    /// The path must be absolute so it can be expressed as a `file://` URI.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_native_path(
        path: &std::path::Path,
        size_bytes: Option<u64>,
    ) -> crate::Result<Self> {
        let source_uri = url::Url::from_file_path(path).map_err(|()| {
            crate::Error::Picker(format!(
                "picked path is not absolute: {}",
                path.display()
            ))
        })?;
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path).first_raw().map(str::to_string);

        Ok(Self::new(source_uri.as_str(), display_name, FileOrigin::NativePicker)
            .with_size(size_bytes)
            .with_mime_type(mime_type))
    }

    #[must_use]
    pub const fn with_size(mut self, size_bytes: Option<u64>) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: Option<String>) -> Self {
        self.mime_type = crate::util::normalize_text_option(mime_type);
        self
    }

    /// File name for the multipart `document` part.
    pub fn upload_name(&self) -> &str {
        if self.display_name.is_empty() {
            DEFAULT_UPLOAD_NAME
        } else {
            &self.display_name
        }
    }

    /// Content type for the multipart `document` part.
    ///
    /// Prefers the host-reported type, then a guess from the file name.
    pub fn content_type(&self) -> String {
        if let Some(mime_type) = self
            .mime_type
            .as_deref()
            .filter(|value| !value.eq_ignore_ascii_case(FALLBACK_MIME_TYPE))
        {
            return mime_type.to_string();
        }
        mime_guess::from_path(self.upload_name())
            .first_raw()
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn browser_file_maps_to_browser_origin() {
        let reference = FileReference::from_browser_file(
            "blob:http://localhost:8080/5f1c",
            "evidence.pdf",
            2048,
            "application/pdf",
        );
        assert_eq!(reference.origin, FileOrigin::BrowserInput);
        assert!(!reference.source_uri.is_empty());
        assert_eq!(reference.size_bytes, Some(2048));
        assert_eq!(reference.mime_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn browser_file_drops_empty_mime_type() {
        let reference = FileReference::from_browser_file("blob:x", "notes", 1, "");
        assert_eq!(reference.mime_type, None);
        assert_eq!(reference.content_type(), "application/octet-stream");
    }

    #[test]
    fn native_path_maps_to_native_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evidence.pdf");
        let reference = FileReference::from_native_path(&path, Some(12)).unwrap();

        assert_eq!(reference.origin, FileOrigin::NativePicker);
        assert!(reference.source_uri.starts_with("file://"));
        assert_eq!(reference.display_name, "evidence.pdf");
        assert_eq!(reference.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(reference.size_bytes, Some(12));
    }

    #[test]
    fn native_path_rejects_relative_paths() {
        let error = FileReference::from_native_path(std::path::Path::new("rel/file.txt"), None);
        assert!(matches!(error, Err(crate::Error::Picker(_))));
    }

    #[test]
    fn upload_name_falls_back_to_default() {
        let reference = FileReference::new("blob:x", "   ", FileOrigin::BrowserInput);
        assert_eq!(reference.upload_name(), DEFAULT_UPLOAD_NAME);
    }

    #[test]
    fn content_type_guesses_from_name_when_generic() {
        let reference = FileReference::new("blob:x", "photo.png", FileOrigin::BrowserInput)
            .with_mime_type(Some("application/octet-stream".to_string()));
        assert_eq!(reference.content_type(), "image/png");
    }
}
