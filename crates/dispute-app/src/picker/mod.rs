//! Platform file pickers.
//!
//! Desktop builds use the OS document chooser; browser builds synthesize a
//! file input. [`PlatformPicker::detect`] picks the variant at startup and the
//! rest of the app only sees the [`FilePicker`] capability.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserInputPicker;
#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeDocumentPicker;

use dispute_core::{FileOrigin, FilePicker, FileReference, Result};

#[derive(Debug, Clone, Copy)]
pub enum PlatformPicker {
    #[cfg(not(target_arch = "wasm32"))]
    Native(NativeDocumentPicker),
    #[cfg(target_arch = "wasm32")]
    Browser(BrowserInputPicker),
}

impl PlatformPicker {
    /// Select the picker supported by the running host.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        let picker = {
            if web_sys::window().is_none() {
                tracing::warn!("No browser window found; file picking will fail");
            }
            Self::Browser(BrowserInputPicker)
        };
        #[cfg(not(target_arch = "wasm32"))]
        let picker = Self::Native(NativeDocumentPicker);

        tracing::info!("Using {} for attachments", picker.origin());
        picker
    }
}

impl FilePicker for PlatformPicker {
    fn origin(&self) -> FileOrigin {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Native(picker) => picker.origin(),
            #[cfg(target_arch = "wasm32")]
            Self::Browser(picker) => picker.origin(),
        }
    }

    async fn pick(&self) -> Result<Option<FileReference>> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Native(picker) => picker.pick().await,
            #[cfg(target_arch = "wasm32")]
            Self::Browser(picker) => picker.pick().await,
        }
    }
}
