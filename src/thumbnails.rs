// SPDX-License-Identifier: MPL-2.0
//! Asynchronous thumbnail loading for catalog entries.
//!
//! Thumbnail URLs are opaque: remote ones are fetched over HTTPS, local ones
//! read from disk. Decoded images are converted to `iced` handles and cached
//! in memory keyed by URL, so each asset is fetched at most once per run.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::collections::HashMap;

/// Lifecycle of a single thumbnail slot.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Fetch in flight; tiles render the styled placeholder.
    Loading,
    /// Decoded and ready to draw.
    Ready(Handle),
    /// Fetch or decode failed; the placeholder stays up permanently.
    Failed,
}

/// In-memory thumbnail store, owned by the root application state.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    slots: HashMap<String, ThumbnailState>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the URLs that still need a fetch task, marking them as
    /// loading so repeated calls never spawn duplicate requests.
    pub fn claim_pending<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = Vec::new();
        for url in urls {
            if !self.slots.contains_key(url) {
                self.slots
                    .insert(url.to_string(), ThumbnailState::Loading);
                claimed.push(url.to_string());
            }
        }
        claimed
    }

    pub fn insert(&mut self, url: String, result: Result<Handle>) {
        let state = match result {
            Ok(handle) => ThumbnailState::Ready(handle),
            Err(_) => ThumbnailState::Failed,
        };
        self.slots.insert(url, state);
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ThumbnailState> {
        self.slots.get(url)
    }

    /// The handle for a ready thumbnail, if any.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(ThumbnailState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }
}

/// Fetches and decodes one thumbnail. Remote URLs go through reqwest;
/// anything else is treated as a local path.
pub async fn fetch(url: String) -> Result<Handle> {
    let bytes: Vec<u8> = if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::get(&url).await?;
        let response = response
            .error_for_status()
            .map_err(|e| Error::Http(e.to_string()))?;
        response.bytes().await?.to_vec()
    } else {
        tokio::task::spawn_blocking(move || std::fs::read(&url))
            .await
            .map_err(|e| Error::Io(e.to_string()))??
    };

    decode(&bytes)
}

/// Decodes raw image bytes into an RGBA handle.
fn decode(bytes: &[u8]) -> Result<Handle> {
    let image = image_rs::load_from_memory(bytes)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_pending_marks_urls_once() {
        let mut cache = ThumbnailCache::new();
        let urls = ["https://example.com/a.jpg", "https://example.com/b.jpg"];

        let first = cache.claim_pending(urls);
        assert_eq!(first.len(), 2);

        // Second pass over the same URLs claims nothing.
        let second = cache.claim_pending(urls);
        assert!(second.is_empty());
        assert!(matches!(
            cache.get("https://example.com/a.jpg"),
            Some(ThumbnailState::Loading)
        ));
    }

    #[test]
    fn insert_failure_keeps_placeholder_state() {
        let mut cache = ThumbnailCache::new();
        cache.claim_pending(["https://example.com/a.jpg"]);
        cache.insert(
            "https://example.com/a.jpg".to_string(),
            Err(crate::error::Error::Http("404".into())),
        );

        assert!(matches!(
            cache.get("https://example.com/a.jpg"),
            Some(ThumbnailState::Failed)
        ));
        assert!(cache.handle("https://example.com/a.jpg").is_none());
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(decode(b"definitely not an image").is_err());
    }

    fn tiny_png() -> Vec<u8> {
        // 1x1 opaque PNG generated with the image crate.
        let mut bytes = Vec::new();
        let img = image_rs::RgbaImage::from_pixel(1, 1, image_rs::Rgba([200, 16, 16, 255]));
        image_rs::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("encode");
        bytes
    }

    #[test]
    fn decode_accepts_a_png() {
        assert!(decode(&tiny_png()).is_ok());
    }

    #[tokio::test]
    async fn fetch_reads_local_paths_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("thumb.png");
        std::fs::write(&path, tiny_png()).expect("write png");

        let handle = fetch(path.to_string_lossy().into_owned()).await;
        assert!(handle.is_ok());
    }

    #[tokio::test]
    async fn fetch_reports_missing_local_files() {
        let result = fetch("/no/such/thumb.png".to_string()).await;
        assert!(result.is_err());
    }
}
