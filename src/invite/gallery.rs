// SPDX-License-Identifier: MPL-2.0
//! Photo decode boundary for the photo booth.
//!
//! The controller only ever receives blobs that decoded successfully. A
//! cancelled file pick or a decode failure produces nothing observable on
//! the page; the error is logged by the caller and dropped.

use crate::error::{Error, Result};
use crate::invite::state::PhotoBlob;
use std::path::{Path, PathBuf};

/// Extensions offered by the photo picker dialog.
pub const PHOTO_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Reads and validates a user-picked image file off the UI thread.
///
/// The bytes are kept in their original encoding; decoding here only
/// proves the file is a displayable image before it enters the gallery.
pub async fn load_photo(path: PathBuf) -> Result<PhotoBlob> {
    let bytes = tokio::task::spawn_blocking(move || read_and_validate(&path))
        .await
        .map_err(|err| Error::Image(err.to_string()))??;
    Ok(PhotoBlob::new(bytes))
}

fn read_and_validate(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    image_rs::load_from_memory(&bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_test_png(dir: &Path) -> PathBuf {
        let path = dir.join("photo.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([200, 80, 60, 255]));
        img.save(&path).expect("write png");
        path
    }

    #[tokio::test]
    async fn valid_image_yields_original_bytes() {
        let dir = tempdir().expect("temp dir");
        let path = write_test_png(dir.path());
        let expected = std::fs::read(&path).expect("read png");

        let blob = load_photo(path).await.expect("photo blob");
        assert_eq!(blob.bytes(), expected.as_slice());
    }

    #[tokio::test]
    async fn non_image_bytes_are_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not an image").expect("write file");

        let result = load_photo(path).await;
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = load_photo(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
