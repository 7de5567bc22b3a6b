//! OS document chooser backed by `rfd`.

use dispute_core::{FileOrigin, FilePicker, FileReference, Result};
use rfd::AsyncFileDialog;

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDocumentPicker;

impl FilePicker for NativeDocumentPicker {
    fn origin(&self) -> FileOrigin {
        FileOrigin::NativePicker
    }

    async fn pick(&self) -> Result<Option<FileReference>> {
        // No filter: any file type may be attached.
        let Some(handle) = AsyncFileDialog::new()
            .set_title("Attach document")
            .pick_file()
            .await
        else {
            return Ok(None);
        };

        let path = handle.path().to_path_buf();
        let size_bytes = match tokio::fs::metadata(&path).await {
            Ok(metadata) => Some(metadata.len()),
            Err(error) => {
                tracing::warn!("Failed to read size of {}: {}", path.display(), error);
                None
            }
        };

        FileReference::from_native_path(&path, size_bytes).map(Some)
    }
}
