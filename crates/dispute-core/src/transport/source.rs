//! Reading the bytes behind a `FileReference::source_uri`.

use crate::error::SubmitError;

pub(super) async fn read_source(
    client: &reqwest::Client,
    source_uri: &str,
) -> Result<Vec<u8>, SubmitError> {
    match url::Url::parse(source_uri) {
        // Single-letter schemes are Windows drive letters, not URLs.
        Ok(url) if url.scheme().len() == 1 => read_local_path(source_uri).await,
        Ok(url) if url.scheme() == "file" => read_file_url(&url).await,
        Ok(url) if matches!(url.scheme(), "http" | "https" | "blob") => {
            fetch_url(client, url.as_str()).await
        }
        Ok(url) => Err(SubmitError::Transport(format!(
            "Unsupported document URI scheme: {}",
            url.scheme()
        ))),
        Err(_) => read_local_path(source_uri).await,
    }
}

async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, SubmitError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|error| SubmitError::Transport(format!("Failed to fetch document: {error}")))?;
    if !response.status().is_success() {
        return Err(SubmitError::Transport(format!(
            "Document fetch failed with HTTP {}",
            response.status().as_u16()
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|error| SubmitError::Transport(format!("Failed to read document bytes: {error}")))?;
    Ok(bytes.to_vec())
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_file_url(url: &url::Url) -> Result<Vec<u8>, SubmitError> {
    let path = url
        .to_file_path()
        .map_err(|()| SubmitError::Transport(format!("Invalid file URI: {url}")))?;
    read_path(&path).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_local_path(raw: &str) -> Result<Vec<u8>, SubmitError> {
    read_path(std::path::Path::new(raw)).await
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_path(path: &std::path::Path) -> Result<Vec<u8>, SubmitError> {
    tokio::fs::read(path).await.map_err(|error| {
        SubmitError::Transport(format!("Failed to read {}: {error}", path.display()))
    })
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::unused_async)]
async fn read_file_url(url: &url::Url) -> Result<Vec<u8>, SubmitError> {
    Err(SubmitError::Transport(format!(
        "Local files are not readable in the browser: {url}"
    )))
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::unused_async)]
async fn read_local_path(raw: &str) -> Result<Vec<u8>, SubmitError> {
    Err(SubmitError::Transport(format!(
        "Local files are not readable in the browser: {raw}"
    )))
}
