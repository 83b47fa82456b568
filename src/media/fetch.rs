// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching and decoding.
//!
//! Requests share one HTTP client and a semaphore that bounds how many are
//! in flight. Every failure (client, network, status, decode) surfaces as an
//! [`Error`] so the caller can record the URL as failed.

use crate::config::ImagesConfig;
use crate::error::{Error, Result};
use iced::widget::image;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Cloneable handle used to spawn image requests.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: Option<Client>,
    permits: Arc<Semaphore>,
}

impl ImageLoader {
    /// Builds the loader. If the HTTP client cannot be created the loader
    /// still exists and every fetch fails.
    #[must_use]
    pub fn new(config: &ImagesConfig) -> Self {
        let client = match Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
        {
            Ok(client) => Some(client),
            Err(err) => {
                log::warn!("image client unavailable, posters will show placeholders: {err}");
                None
            }
        };

        Self {
            client,
            permits: Arc::new(Semaphore::new(config.concurrency())),
        }
    }

    /// Downloads `url` and decodes it into an RGBA handle.
    pub async fn fetch(self, url: String) -> Result<image::Handle> {
        let client = self
            .client
            .ok_or_else(|| Error::Http("HTTP client unavailable".to_string()))?;

        let _permit = self
            .permits
            .acquire_owned()
            .await
            .map_err(|err| Error::Http(err.to_string()))?;

        let response = client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP status: {status}")));
        }

        let bytes = response.bytes().await?;
        decode_image(&bytes)
    }
}

/// Decodes encoded bytes (JPEG, PNG, WebP) into an Iced image handle.
pub fn decode_image(bytes: &[u8]) -> Result<image::Handle> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(image::Handle::from_rgba(width, height, rgba.into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([229, 9, 20, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png encoding should succeed");
        bytes
    }

    #[test]
    fn decode_image_accepts_png() {
        let handle = decode_image(&png_bytes(3, 2));
        assert!(handle.is_ok());
    }

    #[test]
    fn decode_image_rejects_garbage() {
        let result = decode_image(b"<html>not found</html>");
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn loader_builds_with_default_config() {
        let loader = ImageLoader::new(&ImagesConfig::default());
        assert!(loader.client.is_some());
        assert_eq!(loader.permits.available_permits(), 6);
    }
}
